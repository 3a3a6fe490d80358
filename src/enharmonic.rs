//! Twelve-tone equal temperament: pitches as MIDI numbers, intervals as semitones.
//!
//! Enharmonically equivalent spellings (like C# and Db) coincide. Spelled values convert into
//! this family with [From].
use std::{cmp::Ordering, fmt, ops, str::FromStr};

use num_integer::Integer;

use crate::{
    config::{Accidentals, EnharmonicPrintOptions},
    error::PitchErr,
    interval::{Chromatic, Diatonic, Interval, IntervalClass, Pitch, PitchClass, PitchFamily},
    spelled::{
        Spelled, SpelledInterval, SpelledIntervalClass, SpelledPitch, SpelledPitchClass,
    },
};

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

fn pitch_class_name(pc: i64, accidentals: Accidentals) -> &'static str {
    let names = match accidentals {
        Accidentals::Sharp => &SHARP_NAMES,
        Accidentals::Flat => &FLAT_NAMES,
    };
    names[pc.mod_floor(&12) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnharmonicFamily;

impl PitchFamily for EnharmonicFamily {
    const NAME: &'static str = "enharmonic";
    type Pitch = EnharmonicPitch;
    type Interval = EnharmonicInterval;
    type PitchClass = EnharmonicPitchClass;
    type IntervalClass = EnharmonicIntervalClass;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnharmonicPitch {
    midi: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnharmonicInterval {
    semitones: i64,
}

/// Always in `0..12`, so that the derived order is the order of the classes from C upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnharmonicPitchClass {
    pc: i64,
}

/// Always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnharmonicIntervalClass {
    ic: i64,
}

impl EnharmonicPitch {
    pub fn from_midi(midi: i64) -> Self {
        EnharmonicPitch { midi }
    }

    pub fn midi(&self) -> i64 {
        self.midi
    }

    /// The octave in scientific pitch notation, where MIDI 60 is in octave 4.
    pub fn octaves(&self) -> i64 {
        Integer::div_floor(&self.midi, &12) - 1
    }

    /// The frequency in Hz, with A4 at 440Hz.
    pub fn freq(&self) -> f64 {
        440.0 * 2f64.powf((self.midi - 69) as f64 / 12.0)
    }

    pub fn name_with(&self, options: &EnharmonicPrintOptions) -> String {
        if options.as_int {
            self.midi.to_string()
        } else {
            format!(
                "{}{}",
                pitch_class_name(self.midi, options.accidentals),
                self.octaves()
            )
        }
    }
}

impl EnharmonicInterval {
    pub fn new(semitones: i64) -> Self {
        EnharmonicInterval { semitones }
    }

    pub fn semitones(&self) -> i64 {
        self.semitones
    }

    /// The number of complete octaves, rounded towards minus infinity.
    pub fn octaves(&self) -> i64 {
        Integer::div_floor(&self.semitones, &12)
    }

    pub fn ratio(&self) -> f64 {
        2f64.powf(self.semitones as f64 / 12.0)
    }
}

impl EnharmonicPitchClass {
    pub fn new(pc: i64) -> Self {
        EnharmonicPitchClass {
            pc: pc.mod_floor(&12),
        }
    }

    pub fn value(&self) -> i64 {
        self.pc
    }

    pub fn name_with(&self, options: &EnharmonicPrintOptions) -> String {
        if options.as_int {
            self.pc.to_string()
        } else {
            pitch_class_name(self.pc, options.accidentals).to_owned()
        }
    }
}

impl EnharmonicIntervalClass {
    pub fn new(ic: i64) -> Self {
        EnharmonicIntervalClass {
            ic: ic.mod_floor(&12),
        }
    }

    pub fn value(&self) -> i64 {
        self.ic
    }
}

impl Interval for EnharmonicInterval {
    type Class = EnharmonicIntervalClass;

    fn unison() -> Self {
        Self::new(0)
    }

    fn octave() -> Self {
        Self::new(12)
    }

    fn direction(&self) -> Ordering {
        self.semitones.cmp(&0)
    }

    fn to_class(&self) -> EnharmonicIntervalClass {
        EnharmonicIntervalClass::new(self.semitones)
    }
}

impl Chromatic for EnharmonicInterval {
    fn chromatic_semitone() -> Self {
        Self::new(1)
    }
}

/// Up to a whole tone.
impl Diatonic for EnharmonicInterval {
    fn is_step(&self) -> bool {
        self.semitones.abs() <= 2
    }
}

impl Interval for EnharmonicIntervalClass {
    type Class = Self;

    fn unison() -> Self {
        Self::new(0)
    }

    fn octave() -> Self {
        Self::new(0)
    }

    /// Up to and including the tritone, classes go up.
    fn direction(&self) -> Ordering {
        match self.ic {
            0 => Ordering::Equal,
            1..=6 => Ordering::Greater,
            _ => Ordering::Less,
        }
    }

    fn to_class(&self) -> Self {
        *self
    }
}

impl IntervalClass for EnharmonicIntervalClass {
    type Embedding = EnharmonicInterval;

    fn embed(&self, octaves: i64) -> EnharmonicInterval {
        EnharmonicInterval::new(self.ic + 12 * octaves)
    }
}

impl Chromatic for EnharmonicIntervalClass {
    fn chromatic_semitone() -> Self {
        Self::new(1)
    }
}

impl Diatonic for EnharmonicIntervalClass {
    fn is_step(&self) -> bool {
        matches!(self.ic, 0..=2 | 10 | 11)
    }
}

impl Pitch for EnharmonicPitch {
    type Interval = EnharmonicInterval;
    type Class = EnharmonicPitchClass;

    fn add_interval(&self, interval: EnharmonicInterval) -> Self {
        *self + interval
    }

    fn interval_from(&self, other: &Self) -> EnharmonicInterval {
        *self - *other
    }

    fn to_class(&self) -> EnharmonicPitchClass {
        EnharmonicPitchClass::new(self.midi)
    }
}

impl Pitch for EnharmonicPitchClass {
    type Interval = EnharmonicIntervalClass;
    type Class = Self;

    fn add_interval(&self, interval: EnharmonicIntervalClass) -> Self {
        *self + interval
    }

    fn interval_from(&self, other: &Self) -> EnharmonicIntervalClass {
        *self - *other
    }

    fn to_class(&self) -> Self {
        *self
    }
}

impl PitchClass for EnharmonicPitchClass {
    type Embedding = EnharmonicPitch;

    fn embed(&self, octave: i64) -> EnharmonicPitch {
        EnharmonicPitch::from_midi(12 * (octave + 1) + self.pc)
    }
}

impl ops::Add for EnharmonicInterval {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.semitones + other.semitones)
    }
}

impl ops::Sub for EnharmonicInterval {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.semitones - other.semitones)
    }
}

impl ops::Neg for EnharmonicInterval {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.semitones)
    }
}

impl ops::Mul<i64> for EnharmonicInterval {
    type Output = Self;
    fn mul(self, factor: i64) -> Self {
        Self::new(self.semitones * factor)
    }
}

impl ops::Add for EnharmonicIntervalClass {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.ic + other.ic)
    }
}

impl ops::Sub for EnharmonicIntervalClass {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.ic - other.ic)
    }
}

impl ops::Neg for EnharmonicIntervalClass {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.ic)
    }
}

impl ops::Mul<i64> for EnharmonicIntervalClass {
    type Output = Self;
    fn mul(self, factor: i64) -> Self {
        Self::new(self.ic * factor)
    }
}

impl ops::Add<EnharmonicInterval> for EnharmonicPitch {
    type Output = Self;
    fn add(self, interval: EnharmonicInterval) -> Self {
        Self::from_midi(self.midi + interval.semitones)
    }
}

impl ops::Sub<EnharmonicInterval> for EnharmonicPitch {
    type Output = Self;
    fn sub(self, interval: EnharmonicInterval) -> Self {
        Self::from_midi(self.midi - interval.semitones)
    }
}

impl ops::Sub for EnharmonicPitch {
    type Output = EnharmonicInterval;
    fn sub(self, other: Self) -> EnharmonicInterval {
        EnharmonicInterval::new(self.midi - other.midi)
    }
}

impl ops::Add<EnharmonicIntervalClass> for EnharmonicPitchClass {
    type Output = Self;
    fn add(self, interval: EnharmonicIntervalClass) -> Self {
        Self::new(self.pc + interval.ic)
    }
}

impl ops::Sub<EnharmonicIntervalClass> for EnharmonicPitchClass {
    type Output = Self;
    fn sub(self, interval: EnharmonicIntervalClass) -> Self {
        Self::new(self.pc - interval.ic)
    }
}

impl ops::Sub for EnharmonicPitchClass {
    type Output = EnharmonicIntervalClass;
    fn sub(self, other: Self) -> EnharmonicIntervalClass {
        EnharmonicIntervalClass::new(self.pc - other.pc)
    }
}

impl From<SpelledPitch> for EnharmonicPitch {
    fn from(p: SpelledPitch) -> Self {
        // C0 is MIDI 12
        Self::from_midi(7 * p.fifths() + 12 * p.internal_octaves() + 12)
    }
}

impl From<SpelledInterval> for EnharmonicInterval {
    fn from(i: SpelledInterval) -> Self {
        Self::new(7 * i.fifths() + 12 * i.internal_octaves())
    }
}

impl From<SpelledPitchClass> for EnharmonicPitchClass {
    fn from(p: SpelledPitchClass) -> Self {
        Self::new(7 * p.fifths())
    }
}

impl From<SpelledIntervalClass> for EnharmonicIntervalClass {
    fn from(i: SpelledIntervalClass) -> Self {
        Self::new(7 * i.fifths())
    }
}

impl fmt::Display for EnharmonicPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_with(&EnharmonicPrintOptions::default()))
    }
}

impl fmt::Display for EnharmonicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.semitones)
    }
}

impl fmt::Display for EnharmonicPitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_with(&EnharmonicPrintOptions::default()))
    }
}

impl fmt::Display for EnharmonicIntervalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ic)
    }
}

/// Integers are taken as they are; anything else is parsed as spelled notation and converted.
fn parse_number_or_spelled<T, S>(s: &str, from_number: fn(i64) -> T) -> Result<T, PitchErr>
where
    S: FromStr<Err = PitchErr> + Into<T>,
{
    match s.parse::<i64>() {
        Ok(n) => Ok(from_number(n)),
        Err(_) => s.parse::<S>().map(Into::into),
    }
}

impl FromStr for EnharmonicPitch {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_number_or_spelled::<_, SpelledPitch>(s, Self::from_midi)
    }
}

impl FromStr for EnharmonicInterval {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_number_or_spelled::<_, SpelledInterval>(s, Self::new)
    }
}

impl FromStr for EnharmonicPitchClass {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_number_or_spelled::<_, SpelledPitchClass>(s, Self::new)
    }
}

impl FromStr for EnharmonicIntervalClass {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_number_or_spelled::<_, SpelledIntervalClass>(s, Self::new)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn ep(s: &str) -> EnharmonicPitch {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_spelled() {
        assert_eq!(ep("C4").midi(), 60);
        assert_eq!(ep("Dbb1").midi(), 24);
        assert_eq!(ep("A4").midi(), 69);
        assert_eq!(ep("B#3"), ep("C4"));
        assert_eq!(ep("Cb4"), ep("B3"));
        assert_eq!(ep("C-1").midi(), 0);
        assert_eq!("M3:1".parse::<EnharmonicInterval>().unwrap().semitones(), 16);
        assert_eq!("-m2:0".parse::<EnharmonicInterval>().unwrap().semitones(), -1);
        assert_eq!("d1:0".parse::<EnharmonicInterval>().unwrap().semitones(), -1);
        assert_eq!("Bb".parse::<EnharmonicPitchClass>().unwrap().value(), 10);
        assert_eq!("B#".parse::<EnharmonicPitchClass>().unwrap().value(), 0);
        assert_eq!("m6".parse::<EnharmonicIntervalClass>().unwrap().value(), 8);
        assert_eq!("-M3".parse::<EnharmonicIntervalClass>().unwrap().value(), 8);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(ep("61"), ep("C#4"));
        assert_eq!("-5".parse::<EnharmonicInterval>().unwrap(), EnharmonicInterval::new(-5));
        assert_eq!("14".parse::<EnharmonicPitchClass>().unwrap().value(), 2);
        assert!("C#x".parse::<EnharmonicPitch>().is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(ep("Db4").to_string(), "C#4");
        assert_eq!(ep("C-1").to_string(), "C-1");
        assert_eq!(EnharmonicPitch::from_midi(-1).to_string(), "B-2");
        let flat = EnharmonicPrintOptions {
            as_int: false,
            accidentals: Accidentals::Flat,
        };
        assert_eq!(ep("C#4").name_with(&flat), "Db4");
        let int = EnharmonicPrintOptions {
            as_int: true,
            accidentals: Accidentals::Sharp,
        };
        assert_eq!(ep("C#4").name_with(&int), "61");
        assert_eq!(EnharmonicPitchClass::new(3).to_string(), "D#");
        assert_eq!(EnharmonicPitchClass::new(3).name_with(&flat), "Eb");
        assert_eq!(EnharmonicPitchClass::new(3).name_with(&int), "3");
        assert_eq!(EnharmonicInterval::new(-7).to_string(), "-7");
        assert_eq!(EnharmonicIntervalClass::new(-7).to_string(), "5");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(ep("C4") + EnharmonicInterval::new(4), ep("E4"));
        assert_eq!(ep("C4") - EnharmonicInterval::new(1), ep("B3"));
        assert_eq!(ep("E4") - ep("C4"), EnharmonicInterval::new(4));
        assert_eq!(EnharmonicInterval::new(7) * 2 - EnharmonicInterval::octave(), EnharmonicInterval::new(2));
        assert_eq!(
            EnharmonicIntervalClass::new(7) + EnharmonicIntervalClass::new(7),
            EnharmonicIntervalClass::new(2)
        );
        assert_eq!(-EnharmonicIntervalClass::new(4), EnharmonicIntervalClass::new(8));
        assert_eq!(
            EnharmonicPitchClass::new(0) - EnharmonicPitchClass::new(4),
            EnharmonicIntervalClass::new(8)
        );
        assert_eq!(EnharmonicPitchClass::new(11).embed(3), ep("B3"));
        assert_eq!(EnharmonicIntervalClass::new(4).embed(1), EnharmonicInterval::new(16));
        assert_eq!(ep("Eb5").to_class(), EnharmonicPitchClass::new(3));
        assert_eq!(EnharmonicInterval::new(-13).to_class(), EnharmonicIntervalClass::new(11));
    }

    #[test]
    fn test_interval_properties() {
        assert_eq!(EnharmonicInterval::new(-3).direction(), Ordering::Less);
        assert_eq!(EnharmonicInterval::new(-3).abs(), EnharmonicInterval::new(3));
        assert_eq!(EnharmonicInterval::new(-13).octaves(), -2);
        assert_eq!(EnharmonicIntervalClass::new(6).direction(), Ordering::Greater);
        assert_eq!(EnharmonicIntervalClass::new(7).direction(), Ordering::Less);
        assert_eq!(EnharmonicIntervalClass::new(7).abs(), EnharmonicIntervalClass::new(5));
        assert!(EnharmonicInterval::new(-2).is_step());
        assert!(!EnharmonicInterval::new(3).is_step());
        assert!(EnharmonicIntervalClass::new(11).is_step());
        assert!(!EnharmonicIntervalClass::new(9).is_step());
        assert_eq!(EnharmonicInterval::chromatic_semitone(), EnharmonicInterval::new(1));
    }

    #[test]
    fn test_freq() {
        assert_relative_eq!(ep("A4").freq(), 440.0);
        assert_relative_eq!(ep("A5").freq(), 880.0);
        assert_relative_eq!(ep("C4").freq(), 261.6255653005986, max_relative = 1e-12);
        assert_relative_eq!(EnharmonicInterval::new(12).ratio(), 2.0);
    }

    #[test]
    fn test_ordering() {
        assert!(ep("C4") < ep("C#4"));
        assert!(EnharmonicPitchClass::new(11) > EnharmonicPitchClass::new(0));
        assert!(EnharmonicInterval::new(-1) < EnharmonicInterval::unison());
    }
}
