//! Serialization of all value types.
//!
//! Types with a canonical notation are stored as their name, and read back by parsing it.
//! Log-frequency values have no exact notation, so they are stored as their logarithm.
use crate::{
    enharmonic::{
        EnharmonicInterval, EnharmonicIntervalClass, EnharmonicPitch, EnharmonicPitchClass,
    },
    generic::{GenericInterval, GenericIntervalClass, GenericPitch, GenericPitchClass},
    harmonic::{HarmonicInterval, HarmonicIntervalClass},
    logfreq::{LogFreqInterval, LogFreqIntervalClass, LogFreqPitch, LogFreqPitchClass},
    spelled::{SpelledInterval, SpelledIntervalClass, SpelledPitch, SpelledPitchClass},
};

macro_rules! serde_via_name {
    ($($t:ty),* $(,)?) => {
        $(
            impl serde::Serialize for $t {
                fn serialize<S: serde::Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                    ser.collect_str(self)
                }
            }

            impl<'de> serde::Deserialize<'de> for $t {
                fn deserialize<D: serde::de::Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Self, D::Error> {
                    let name = <String as serde::Deserialize<'de>>::deserialize(deserializer)?;
                    name.parse().map_err(serde::de::Error::custom)
                }
            }
        )*
    };
}

serde_via_name!(
    SpelledInterval,
    SpelledPitch,
    SpelledIntervalClass,
    SpelledPitchClass,
    EnharmonicInterval,
    EnharmonicPitch,
    EnharmonicIntervalClass,
    EnharmonicPitchClass,
    GenericInterval,
    GenericPitch,
    GenericIntervalClass,
    GenericPitchClass,
    HarmonicInterval,
    HarmonicIntervalClass,
);

macro_rules! serde_via_log {
    ($($t:ident),* $(,)?) => {
        $(
            impl serde::Serialize for $t {
                fn serialize<S: serde::Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                    ser.serialize_f64(self.log_freq())
                }
            }

            impl<'de> serde::Deserialize<'de> for $t {
                fn deserialize<D: serde::de::Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Self, D::Error> {
                    let log = <f64 as serde::Deserialize<'de>>::deserialize(deserializer)?;
                    if log.is_finite() {
                        Ok($t::from_log_freq(log))
                    } else {
                        Err(serde::de::Error::custom(format!(
                            "expected a finite logarithm, found {log}"
                        )))
                    }
                }
            }
        )*
    };
}

serde_via_log!(
    LogFreqInterval,
    LogFreqPitch,
    LogFreqIntervalClass,
    LogFreqPitchClass,
);

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use serde_derive::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Chord {
        root: SpelledPitch,
        intervals: Vec<SpelledInterval>,
        class: SpelledPitchClass,
        ic: SpelledIntervalClass,
    }

    #[test]
    fn test_spelled_roundtrip() {
        let chord = Chord {
            root: "Eb4".parse().unwrap(),
            intervals: vec!["M3:0".parse().unwrap(), "-P5:1".parse().unwrap()],
            class: "F##".parse().unwrap(),
            ic: "a4".parse().unwrap(),
        };
        let yaml = serde_yml::to_string(&chord).unwrap();
        assert!(yaml.contains("root: Eb4"));
        assert_eq!(serde_yml::from_str::<Chord>(&yaml).unwrap(), chord);
    }

    #[test]
    fn test_other_families_roundtrip() {
        let e: EnharmonicPitch = "C#4".parse().unwrap();
        let yaml = serde_yml::to_string(&e).unwrap();
        assert_eq!(serde_yml::from_str::<EnharmonicPitch>(&yaml).unwrap(), e);

        let ic = EnharmonicIntervalClass::new(5);
        let yaml = serde_yml::to_string(&ic).unwrap();
        assert_eq!(serde_yml::from_str::<EnharmonicIntervalClass>(&yaml).unwrap(), ic);

        let g: GenericInterval = "-3:1".parse().unwrap();
        let yaml = serde_yml::to_string(&g).unwrap();
        assert_eq!(serde_yml::from_str::<GenericInterval>(&yaml).unwrap(), g);

        let h: HarmonicInterval = "[-2, 0, 1]".parse().unwrap();
        let yaml = serde_yml::to_string(&h).unwrap();
        assert_eq!(serde_yml::from_str::<HarmonicInterval>(&yaml).unwrap(), h);

        let l = LogFreqPitch::from_freq(440.0);
        let yaml = serde_yml::to_string(&l).unwrap();
        let back: LogFreqPitch = serde_yml::from_str(&yaml).unwrap();
        assert_relative_eq!(back.freq(), 440.0, max_relative = 1e-12);
    }

    #[test]
    fn test_malformed() {
        assert!(serde_yml::from_str::<SpelledPitch>("H4").is_err());
        assert!(serde_yml::from_str::<SpelledInterval>("M3").is_err());
        assert!(serde_yml::from_str::<LogFreqInterval>(".nan").is_err());
        assert!(serde_yml::from_str::<HarmonicIntervalClass>("'[1; 2]'").is_err());
    }
}
