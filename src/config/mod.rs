//! Print options for the families whose names are not determined by their value alone.
//!
//! The options are plain data, passed explicitly to the `name_with` methods. They can be stored
//! as YAML:
//!
//! ```yaml
//! enharmonic:
//!   as-int: false
//!   accidentals: flat
//! logfreq:
//!   precision: 3
//! ```
use serde_derive::{Deserialize, Serialize};

use crate::error::PitchErr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accidentals {
    #[default]
    Sharp,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
#[serde(default)]
pub struct EnharmonicPrintOptions {
    /// Print pitches as MIDI numbers and pitch classes as numbers from 0 to 11.
    pub as_int: bool,
    pub accidentals: Accidentals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
#[serde(default)]
pub struct LogFreqPrintOptions {
    /// Number of decimals for frequencies and ratios.
    pub precision: usize,
}

impl Default for LogFreqPrintOptions {
    fn default() -> Self {
        LogFreqPrintOptions { precision: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
#[serde(default)]
pub struct PrintOptions {
    pub enharmonic: EnharmonicPrintOptions,
    pub logfreq: LogFreqPrintOptions,
}

impl PrintOptions {
    pub fn from_yaml(yaml: &str) -> Result<Self, PitchErr> {
        serde_yml::from_str(yaml).map_err(|e| PitchErr::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, PitchErr> {
        serde_yml::to_string(self).map_err(|e| PitchErr::Config(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_yaml() {
        let options = PrintOptions::from_yaml(
            "enharmonic:\n  as-int: true\n  accidentals: flat\nlogfreq:\n  precision: 3\n",
        )
        .unwrap();
        assert_eq!(
            options,
            PrintOptions {
                enharmonic: EnharmonicPrintOptions {
                    as_int: true,
                    accidentals: Accidentals::Flat,
                },
                logfreq: LogFreqPrintOptions { precision: 3 },
            }
        );
    }

    #[test]
    fn test_defaults() {
        let options = PrintOptions::from_yaml("enharmonic:\n  accidentals: flat\n").unwrap();
        assert_eq!(options.enharmonic.as_int, false);
        assert_eq!(options.logfreq, LogFreqPrintOptions::default());
        assert_eq!(options.logfreq.precision, 2);
        assert_eq!(PrintOptions::from_yaml("{}").unwrap(), PrintOptions::default());
    }

    #[test]
    fn test_unknown_fields() {
        let err = PrintOptions::from_yaml("enharmonic:\n  as_int: true\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        let err = PrintOptions::from_yaml("enharmonic:\n  accidentals: natural\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_roundtrip() {
        let options = PrintOptions {
            enharmonic: EnharmonicPrintOptions {
                as_int: false,
                accidentals: Accidentals::Flat,
            },
            logfreq: LogFreqPrintOptions { precision: 0 },
        };
        let yaml = options.to_yaml().unwrap();
        assert_eq!(PrintOptions::from_yaml(&yaml).unwrap(), options);
    }
}
