//! Spelled pitches and intervals, as written in Western notation.
//!
//! All four types are stored on the line of fifths: the number of fifths determines the spelling
//! (letter and accidentals, or generic interval and quality), while the non-class types
//! additionally store a number of "internal" octaves. Together, `fifths` fifths upward plus
//! `internal_octaves` octaves give the actual size of an interval, or the distance of a pitch from
//! C0. This makes arithmetic component-wise.
//!
//! The octave that is written in notation (the `4` in `C4`, or the `1` in `M3:1`) is the
//! "independent" octave. It is related to the internal one by
//!
//! ```text
//! internal_octaves = independent_octaves - floor(4 * fifths / 7)
//! ```
//!
//! because four fifths exceed two octaves by a diatonic step, every fifth contributes 4/7 of an
//! octave to the notated height.
use std::{cmp::Ordering, ops};

use num_integer::Integer;

use crate::interval::{
    Chromatic, Diatonic, Interval, IntervalClass, Pitch, PitchClass, PitchFamily,
};

pub mod array;
mod notation;
pub mod onehot;

pub(crate) use notation::letter_fifths;

/// The number of notated octaves that `fifths` fifths span.
pub fn fifths_octaves(fifths: i64) -> i64 {
    Integer::div_floor(&(4 * fifths), &7)
}

/// Accessors shared by all spelled types.
pub trait Spelled {
    /// The position on the line of fifths, with C (or the perfect unison) at zero.
    fn fifths(&self) -> i64;

    /// The notated octave. Zero for classes.
    fn octaves(&self) -> i64;

    /// The stored octave component. Zero for classes.
    fn internal_octaves(&self) -> i64;

    /// The diatonic scale degree, counting from C or the unison, in `0..7`.
    fn degree(&self) -> i64 {
        (4 * self.fifths()).mod_floor(&7)
    }

    /// The diatonic step of the spelling. For intervals, this is negative for downward intervals
    /// (`-M3:0` is `-2`); otherwise it is the [degree][Spelled::degree].
    fn generic(&self) -> i64;

    /// The number of diatonic steps including octaves, negative for downward intervals.
    fn diatonic_steps(&self) -> i64;

    /// The number of sharps (positive) or flats (negative) of a pitch, or the number of
    /// augmentations (positive) or diminutions (negative) of an interval, counted from the perfect
    /// or major interval, so that minor intervals have alteration `-1`. For downward intervals,
    /// this is the alteration of the corresponding upward interval.
    fn alteration(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpelledFamily;

impl PitchFamily for SpelledFamily {
    const NAME: &'static str = "spelled";
    type Pitch = SpelledPitch;
    type Interval = SpelledInterval;
    type PitchClass = SpelledPitchClass;
    type IntervalClass = SpelledIntervalClass;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpelledInterval {
    fifths: i64,
    octaves: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpelledPitch {
    fifths: i64,
    octaves: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpelledIntervalClass {
    fifths: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpelledPitchClass {
    fifths: i64,
}

impl SpelledInterval {
    /// Construct from the internal representation.
    pub fn from_fifths_and_octaves(fifths: i64, internal_octaves: i64) -> Self {
        Self {
            fifths,
            octaves: internal_octaves,
        }
    }

    /// Construct from the number of fifths and the notated octave.
    pub fn from_independent(fifths: i64, octaves: i64) -> Self {
        Self {
            fifths,
            octaves: octaves - fifths_octaves(fifths),
        }
    }
}

impl SpelledPitch {
    /// Construct from the internal representation.
    pub fn from_fifths_and_octaves(fifths: i64, internal_octaves: i64) -> Self {
        Self {
            fifths,
            octaves: internal_octaves,
        }
    }

    /// Construct from the number of fifths and the notated octave.
    pub fn from_independent(fifths: i64, octave: i64) -> Self {
        Self {
            fifths,
            octaves: octave - fifths_octaves(fifths),
        }
    }

    pub fn letter(&self) -> char {
        letter(self.degree())
    }
}

impl SpelledIntervalClass {
    pub fn from_fifths(fifths: i64) -> Self {
        Self { fifths }
    }
}

impl SpelledPitchClass {
    pub fn from_fifths(fifths: i64) -> Self {
        Self { fifths }
    }

    pub fn letter(&self) -> char {
        letter(self.degree())
    }
}

fn letter(degree: i64) -> char {
    (b'A' + (degree + 2).rem_euclid(7) as u8) as char
}

/// the alteration of a pitch or interval class, before accounting for direction
fn raw_alteration(fifths: i64) -> i64 {
    Integer::div_floor(&(fifths + 1), &7)
}

impl Spelled for SpelledInterval {
    fn fifths(&self) -> i64 {
        self.fifths
    }

    fn octaves(&self) -> i64 {
        self.octaves + fifths_octaves(self.fifths)
    }

    fn internal_octaves(&self) -> i64 {
        self.octaves
    }

    fn generic(&self) -> i64 {
        match self.direction() {
            Ordering::Less => -(-*self).degree(),
            _ => self.degree(),
        }
    }

    fn diatonic_steps(&self) -> i64 {
        4 * self.fifths + 7 * self.octaves
    }

    fn alteration(&self) -> i64 {
        raw_alteration(self.abs().fifths)
    }
}

impl Spelled for SpelledPitch {
    fn fifths(&self) -> i64 {
        self.fifths
    }

    fn octaves(&self) -> i64 {
        self.octaves + fifths_octaves(self.fifths)
    }

    fn internal_octaves(&self) -> i64 {
        self.octaves
    }

    fn generic(&self) -> i64 {
        self.degree()
    }

    /// The number of diatonic steps above C0.
    fn diatonic_steps(&self) -> i64 {
        4 * self.fifths + 7 * self.octaves
    }

    fn alteration(&self) -> i64 {
        raw_alteration(self.fifths)
    }
}

impl Spelled for SpelledIntervalClass {
    fn fifths(&self) -> i64 {
        self.fifths
    }

    fn octaves(&self) -> i64 {
        0
    }

    fn internal_octaves(&self) -> i64 {
        0
    }

    fn generic(&self) -> i64 {
        self.degree()
    }

    fn diatonic_steps(&self) -> i64 {
        self.degree()
    }

    fn alteration(&self) -> i64 {
        raw_alteration(self.fifths)
    }
}

impl Spelled for SpelledPitchClass {
    fn fifths(&self) -> i64 {
        self.fifths
    }

    fn octaves(&self) -> i64 {
        0
    }

    fn internal_octaves(&self) -> i64 {
        0
    }

    fn generic(&self) -> i64 {
        self.degree()
    }

    fn diatonic_steps(&self) -> i64 {
        self.degree()
    }

    fn alteration(&self) -> i64 {
        raw_alteration(self.fifths)
    }
}

impl Interval for SpelledInterval {
    type Class = SpelledIntervalClass;

    fn unison() -> Self {
        Self::from_fifths_and_octaves(0, 0)
    }

    fn octave() -> Self {
        Self::from_fifths_and_octaves(0, 1)
    }

    /// Upward intervals have positive [diatonic steps][Spelled::diatonic_steps]. Among the
    /// intervals with zero steps, the augmented unisons are upward and the diminished ones
    /// downward.
    fn direction(&self) -> Ordering {
        self.diatonic_steps()
            .cmp(&0)
            .then(self.fifths.cmp(&0))
    }

    fn to_class(&self) -> SpelledIntervalClass {
        SpelledIntervalClass::from_fifths(self.fifths)
    }
}

impl Chromatic for SpelledInterval {
    fn chromatic_semitone() -> Self {
        Self::from_fifths_and_octaves(7, -4)
    }
}

impl Diatonic for SpelledInterval {
    fn is_step(&self) -> bool {
        self.diatonic_steps().abs() <= 1
    }
}

impl Interval for SpelledIntervalClass {
    type Class = SpelledIntervalClass;

    fn unison() -> Self {
        Self::from_fifths(0)
    }

    fn octave() -> Self {
        Self::from_fifths(0)
    }

    /// The direction of the shortest representative: seconds, thirds, and fourths go up,
    /// fifths, sixths, and sevenths go down. Unisons go up if augmented, down if diminished.
    fn direction(&self) -> Ordering {
        match self.degree() {
            0 => self.fifths.cmp(&0),
            1..=3 => Ordering::Greater,
            _ => Ordering::Less,
        }
    }

    fn to_class(&self) -> Self {
        *self
    }
}

impl IntervalClass for SpelledIntervalClass {
    type Embedding = SpelledInterval;

    fn embed(&self, octaves: i64) -> SpelledInterval {
        SpelledInterval::from_independent(self.fifths, octaves)
    }
}

impl Chromatic for SpelledIntervalClass {
    fn chromatic_semitone() -> Self {
        Self::from_fifths(7)
    }
}

impl Diatonic for SpelledIntervalClass {
    fn is_step(&self) -> bool {
        matches!(self.degree(), 0 | 1 | 6)
    }
}

impl Pitch for SpelledPitch {
    type Interval = SpelledInterval;
    type Class = SpelledPitchClass;

    fn add_interval(&self, interval: SpelledInterval) -> Self {
        *self + interval
    }

    fn interval_from(&self, other: &Self) -> SpelledInterval {
        *self - *other
    }

    fn to_class(&self) -> SpelledPitchClass {
        SpelledPitchClass::from_fifths(self.fifths)
    }
}

impl Pitch for SpelledPitchClass {
    type Interval = SpelledIntervalClass;
    type Class = SpelledPitchClass;

    fn add_interval(&self, interval: SpelledIntervalClass) -> Self {
        *self + interval
    }

    fn interval_from(&self, other: &Self) -> SpelledIntervalClass {
        *self - *other
    }

    fn to_class(&self) -> Self {
        *self
    }
}

impl PitchClass for SpelledPitchClass {
    type Embedding = SpelledPitch;

    fn embed(&self, octave: i64) -> SpelledPitch {
        SpelledPitch::from_independent(self.fifths, octave)
    }
}

/// Diatonic order: by [diatonic steps][Spelled::diatonic_steps], then by position on the line of
/// fifths (so that `P4 < a4 < d5 < P5`).
impl Ord for SpelledInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.diatonic_steps()
            .cmp(&other.diatonic_steps())
            .then(self.fifths.cmp(&other.fifths))
    }
}

impl PartialOrd for SpelledInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SpelledPitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.diatonic_steps()
            .cmp(&other.diatonic_steps())
            .then(self.fifths.cmp(&other.fifths))
    }
}

impl PartialOrd for SpelledPitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Line-of-fifths order.
impl Ord for SpelledIntervalClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fifths.cmp(&other.fifths)
    }
}

impl PartialOrd for SpelledIntervalClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Line-of-fifths order.
impl Ord for SpelledPitchClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fifths.cmp(&other.fifths)
    }
}

impl PartialOrd for SpelledPitchClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ops::Add for SpelledInterval {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_fifths_and_octaves(self.fifths + other.fifths, self.octaves + other.octaves)
    }
}

impl ops::Sub for SpelledInterval {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_fifths_and_octaves(self.fifths - other.fifths, self.octaves - other.octaves)
    }
}

impl ops::Neg for SpelledInterval {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_fifths_and_octaves(-self.fifths, -self.octaves)
    }
}

impl ops::Mul<i64> for SpelledInterval {
    type Output = Self;
    fn mul(self, factor: i64) -> Self {
        Self::from_fifths_and_octaves(self.fifths * factor, self.octaves * factor)
    }
}

impl ops::Mul<SpelledInterval> for i64 {
    type Output = SpelledInterval;
    fn mul(self, interval: SpelledInterval) -> SpelledInterval {
        interval * self
    }
}

impl ops::Add<SpelledInterval> for SpelledPitch {
    type Output = Self;
    fn add(self, interval: SpelledInterval) -> Self {
        Self::from_fifths_and_octaves(
            self.fifths + interval.fifths,
            self.octaves + interval.octaves,
        )
    }
}

impl ops::Add<SpelledPitch> for SpelledInterval {
    type Output = SpelledPitch;
    fn add(self, pitch: SpelledPitch) -> SpelledPitch {
        pitch + self
    }
}

impl ops::Sub<SpelledInterval> for SpelledPitch {
    type Output = Self;
    fn sub(self, interval: SpelledInterval) -> Self {
        Self::from_fifths_and_octaves(
            self.fifths - interval.fifths,
            self.octaves - interval.octaves,
        )
    }
}

impl ops::Sub for SpelledPitch {
    type Output = SpelledInterval;
    fn sub(self, other: Self) -> SpelledInterval {
        SpelledInterval::from_fifths_and_octaves(
            self.fifths - other.fifths,
            self.octaves - other.octaves,
        )
    }
}

impl ops::Add for SpelledIntervalClass {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_fifths(self.fifths + other.fifths)
    }
}

impl ops::Sub for SpelledIntervalClass {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_fifths(self.fifths - other.fifths)
    }
}

impl ops::Neg for SpelledIntervalClass {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_fifths(-self.fifths)
    }
}

impl ops::Mul<i64> for SpelledIntervalClass {
    type Output = Self;
    fn mul(self, factor: i64) -> Self {
        Self::from_fifths(self.fifths * factor)
    }
}

impl ops::Mul<SpelledIntervalClass> for i64 {
    type Output = SpelledIntervalClass;
    fn mul(self, interval: SpelledIntervalClass) -> SpelledIntervalClass {
        interval * self
    }
}

impl ops::Add<SpelledIntervalClass> for SpelledPitchClass {
    type Output = Self;
    fn add(self, interval: SpelledIntervalClass) -> Self {
        Self::from_fifths(self.fifths + interval.fifths)
    }
}

impl ops::Add<SpelledPitchClass> for SpelledIntervalClass {
    type Output = SpelledPitchClass;
    fn add(self, pitch: SpelledPitchClass) -> SpelledPitchClass {
        pitch + self
    }
}

impl ops::Sub<SpelledIntervalClass> for SpelledPitchClass {
    type Output = Self;
    fn sub(self, interval: SpelledIntervalClass) -> Self {
        Self::from_fifths(self.fifths - interval.fifths)
    }
}

impl ops::Sub for SpelledPitchClass {
    type Output = SpelledIntervalClass;
    fn sub(self, other: Self) -> SpelledIntervalClass {
        SpelledIntervalClass::from_fifths(self.fifths - other.fifths)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn si(s: &str) -> SpelledInterval {
        s.parse().unwrap()
    }

    fn sp(s: &str) -> SpelledPitch {
        s.parse().unwrap()
    }

    fn sic(s: &str) -> SpelledIntervalClass {
        s.parse().unwrap()
    }

    fn spc(s: &str) -> SpelledPitchClass {
        s.parse().unwrap()
    }

    #[test]
    fn test_internal_representation() {
        assert_eq!(si("M2:0"), SpelledInterval::from_fifths_and_octaves(2, -1));
        assert_eq!(si("P5:0"), SpelledInterval::from_fifths_and_octaves(1, 0));
        assert_eq!(si("P4:0"), SpelledInterval::from_fifths_and_octaves(-1, 1));
        assert_eq!(si("P1:1"), SpelledInterval::octave());
        assert_eq!(sp("C4"), SpelledPitch::from_fifths_and_octaves(0, 4));
        assert_eq!(sp("Dbb1"), SpelledPitch::from_independent(-12, 1));
        assert_eq!(sp("Dbb1").internal_octaves(), 8);
        assert_eq!(
            SpelledInterval::chromatic_semitone(),
            si("a1:0")
        );
        assert_eq!(SpelledIntervalClass::chromatic_semitone(), sic("a1"));
    }

    #[test]
    fn test_interval_accessors() {
        let cases: [(&str, i64, i64, i64, i64, i64); 8] = [
            // name, octaves, degree, generic, diatonic steps, alteration
            ("m3:1", 1, 2, 2, 9, -1),
            ("-M3:1", -2, 5, -2, -9, 0),
            ("-P4:0", -1, 4, -3, -3, 0),
            ("-M7:0", -1, 1, -6, -6, 0),
            ("a4:0", 0, 3, 3, 3, 1),
            ("-a4:0", -1, 4, -3, -3, 1),
            ("-m7:0", -1, 1, -6, -6, -1),
            ("-a1:0", 0, 0, 0, 0, 1),
        ];
        for (name, octaves, degree, generic, steps, alteration) in cases {
            let i = si(name);
            assert_eq!(i.octaves(), octaves, "octaves of {name}");
            assert_eq!(i.degree(), degree, "degree of {name}");
            assert_eq!(i.generic(), generic, "generic of {name}");
            assert_eq!(i.diatonic_steps(), steps, "diatonic steps of {name}");
            assert_eq!(i.alteration(), alteration, "alteration of {name}");
        }
    }

    #[test]
    fn test_pitch_accessors() {
        let cases: [(&str, i64, i64, i64, char); 5] = [
            // name, octaves, degree, alteration, letter
            ("C4", 4, 0, 0, 'C'),
            ("Eb3", 3, 2, -1, 'E'),
            ("F##-2", -2, 3, 2, 'F'),
            ("Bbbb0", 0, 6, -3, 'B'),
            ("Cb5", 5, 0, -1, 'C'),
        ];
        for (name, octaves, degree, alteration, letter) in cases {
            let p = sp(name);
            assert_eq!(p.octaves(), octaves, "octaves of {name}");
            assert_eq!(p.degree(), degree, "degree of {name}");
            assert_eq!(p.generic(), degree, "generic of {name}");
            assert_eq!(p.alteration(), alteration, "alteration of {name}");
            assert_eq!(p.letter(), letter, "letter of {name}");
            assert_eq!(p.to_class().letter(), letter);
        }
        assert_eq!(sp("C4").diatonic_steps(), 28);
        assert_eq!(sp("B3").diatonic_steps(), 27);
        assert_eq!(spc("G#").alteration(), 1);
        assert_eq!(spc("Fb").degree(), 3);
    }

    #[test]
    fn test_class_accessors() {
        let cases: [(&str, i64, i64); 6] = [
            // name, degree, alteration
            ("m3", 2, -1),
            ("M6", 5, 0),
            ("a5", 4, 1),
            ("d4", 3, -1),
            ("dd1", 0, -2),
            ("M7", 6, 0),
        ];
        for (name, degree, alteration) in cases {
            let i = sic(name);
            assert_eq!(i.degree(), degree, "degree of {name}");
            assert_eq!(i.generic(), degree, "generic of {name}");
            assert_eq!(i.diatonic_steps(), degree, "diatonic steps of {name}");
            assert_eq!(i.alteration(), alteration, "alteration of {name}");
            assert_eq!(i.octaves(), 0);
        }
    }

    #[test]
    fn test_direction() {
        assert_eq!(si("m3:1").direction(), Ordering::Greater);
        assert_eq!(si("-M3:1").direction(), Ordering::Less);
        assert_eq!(si("P1:0").direction(), Ordering::Equal);
        assert_eq!(si("a1:0").direction(), Ordering::Greater);
        assert_eq!(si("d1:0").direction(), Ordering::Less);
        assert_eq!(si("d2:0").direction(), Ordering::Greater);

        assert_eq!(sic("P4").direction(), Ordering::Greater);
        assert_eq!(sic("P5").direction(), Ordering::Less);
        assert_eq!(sic("P1").direction(), Ordering::Equal);
        assert_eq!(sic("d1").direction(), Ordering::Less);
        assert_eq!(sic("a1").direction(), Ordering::Greater);
        assert_eq!(sic("a4").direction(), Ordering::Greater);
        assert_eq!(sic("d5").direction(), Ordering::Less);
        assert_eq!(sic("-m3").direction(), Ordering::Less);
        assert_eq!(sic("-m3").abs(), sic("m3"));
    }

    #[test]
    fn test_is_step() {
        for (name, expected) in [
            ("P1:0", true),
            ("m2:0", true),
            ("-a2:0", true),
            ("d1:0", true),
            ("m3:0", false),
            ("M2:1", false),
            ("-M7:0", false),
        ] {
            assert_eq!(si(name).is_step(), expected, "{name}");
        }
        for (name, expected) in [
            ("P1", true),
            ("m2", true),
            ("M7", true),
            ("d3", false),
            ("P4", false),
        ] {
            assert_eq!(sic(name).is_step(), expected, "{name}");
        }
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(si("m3:0") + si("M3:0"), si("P5:0"));
        assert_eq!(si("m3:0") + si("M3:1"), si("P5:1"));
        assert_eq!(si("m3:0") - si("M3:0"), si("-a1:0"));
        assert_eq!(si("m3:0") - si("M3:1"), si("-a1:1"));
        assert_eq!(-si("m3:0"), si("-m3:0"));
        assert_eq!(si("m3:0") * 4, si("d2:1"));
        assert_eq!(-2 * si("M2:0"), si("-M3:0"));
        assert_eq!(si("M2:0") * 0, SpelledInterval::unison());

        assert_eq!(sp("C4") + si("m3:0"), sp("Eb4"));
        assert_eq!(sp("C4") - si("m3:0"), sp("A3"));
        assert_eq!(sp("E4") - sp("C4"), si("M3:0"));
        assert_eq!(sp("C4") - sp("E4"), si("-M3:0"));
        assert_eq!(sp("C4").interval_to(&sp("Eb5")), si("m3:1"));

        assert_eq!(sic("m3") + sic("M3"), sic("P5"));
        assert_eq!(sic("m3") - sic("M3"), sic("d1"));
        assert_eq!(-sic("m3"), sic("M6"));
        assert_eq!(sic("M2") * 3, sic("a4"));
        assert_eq!(spc("C") + sic("m3"), spc("Eb"));
        assert_eq!(spc("C") - sic("m3"), spc("A"));
        assert_eq!(spc("E") - spc("C"), sic("M3"));
        assert_eq!(spc("C") - spc("E"), sic("m6"));
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(spc("C#") - spc("Gb"), sic("aa4"));
        assert_eq!(spc("C#") - spc("Gb"), sic("+aa4"));

        let i = sp("Gb5") - sp("C#4");
        assert_eq!(i.to_string(), "dd5:1");
        assert_eq!(sp("C#4") + i, sp("Gb5"));

        assert_eq!(
            SpelledInterval::from_fifths_and_octaves(2, -1).to_string(),
            "M2:0"
        );
    }

    #[test]
    fn test_classes_and_embedding() {
        assert_eq!(si("M3:2").to_class(), sic("M3"));
        assert_eq!(si("-M3:0").to_class(), sic("m6"));
        assert_eq!(sp("Eb3").to_class(), spc("Eb"));
        assert_eq!(sic("M3").embed(0), si("M3:0"));
        assert_eq!(sic("m6").embed(1), si("m6:1"));
        assert_eq!(spc("Eb").embed(3), sp("Eb3"));
        assert_eq!(spc("B#").embed(-1), sp("B#-1"));
    }

    #[test]
    fn test_ordering() {
        let ascending: Vec<SpelledInterval> = ["P4:0", "a4:0", "aaaa4:0", "dddd5:0", "d5:0", "P5:0"]
            .into_iter()
            .map(si)
            .collect();
        for w in ascending.windows(2) {
            assert!(w[0] < w[1], "{} < {}", w[0], w[1]);
        }
        assert!(si("-a1:0") < si("P1:0"));
        assert!(si("d5:0") > si("a4:0"));

        assert!(sp("Cb-1") < sp("C-1"));
        assert!(sp("Gb4") > sp("F#4"));
        assert!(sp("B#3") < sp("Cb4"));
        assert!(sp("Cb4") > sp("B3"));

        let fifths: Vec<SpelledIntervalClass> =
            ["m7", "P4", "P1", "P5", "M2"].into_iter().map(sic).collect();
        let mut sorted = fifths.clone();
        sorted.sort();
        assert_eq!(sorted, fifths);
        assert!(spc("Bb") < spc("F"));
        assert!(spc("F") < spc("C"));
    }

    fn interval() -> impl Strategy<Value = SpelledInterval> {
        (-30i64..30, -10i64..10)
            .prop_map(|(f, o)| SpelledInterval::from_fifths_and_octaves(f, o))
    }

    fn pitch() -> impl Strategy<Value = SpelledPitch> {
        (-30i64..30, -10i64..20).prop_map(|(f, o)| SpelledPitch::from_fifths_and_octaves(f, o))
    }

    fn interval_class() -> impl Strategy<Value = SpelledIntervalClass> {
        (-30i64..30).prop_map(SpelledIntervalClass::from_fifths)
    }

    fn pitch_class() -> impl Strategy<Value = SpelledPitchClass> {
        (-30i64..30).prop_map(SpelledPitchClass::from_fifths)
    }

    proptest! {
        #[test]
        fn proptest_group_laws(i in interval(), j in interval(), k in interval()) {
            prop_assert_eq!(i + (j + k), (i + j) + k);
            prop_assert_eq!(i + SpelledInterval::unison(), i);
            prop_assert_eq!(i + -i, SpelledInterval::unison());
            prop_assert_eq!((i + j).to_class(), i.to_class() + j.to_class());
            prop_assert_eq!(i - j, i + -j);
        }

        #[test]
        fn proptest_class_group_laws(i in interval_class(), j in interval_class()) {
            prop_assert_eq!(i + j, j + i);
            prop_assert_eq!(i + -i, SpelledIntervalClass::unison());
            prop_assert_eq!(i.embed(0).to_class(), i);
        }

        #[test]
        fn proptest_pitch_interval_relation(p in pitch(), q in pitch()) {
            prop_assert_eq!(p + (q - p), q);
            prop_assert_eq!((p - q) + q, p);
            prop_assert_eq!((p - q).to_class(), p.to_class() - q.to_class());
            prop_assert_eq!((p - q).to_class() + q.to_class(), p.to_class());
        }

        #[test]
        fn proptest_line_of_fifths_order(
            i in interval_class(),
            j in interval_class(),
            p in pitch_class(),
            q in pitch_class(),
        ) {
            prop_assert_eq!(i.cmp(&j), i.fifths().cmp(&j.fifths()));
            prop_assert_eq!(i.cmp(&j), j.cmp(&i).reverse());
            prop_assert_eq!(i.cmp(&j) == Ordering::Equal, i == j);
            prop_assert_eq!(p.cmp(&q), p.fifths().cmp(&q.fifths()));
            prop_assert_eq!(p.cmp(&q), q.cmp(&p).reverse());
            prop_assert_eq!(p.cmp(&q) == Ordering::Equal, p == q);
        }

        #[test]
        fn proptest_independent_octaves(f in -30i64..30, o in -10i64..10) {
            let i = SpelledInterval::from_independent(f, o);
            prop_assert_eq!(i.octaves(), o);
            prop_assert_eq!(i.fifths(), f);
            prop_assert_eq!(SpelledPitch::from_independent(f, o).octaves(), o);
        }

        #[test]
        fn proptest_order_matches_direction(i in interval(), j in interval()) {
            prop_assert_eq!(i.cmp(&j), (i - j).direction());
            prop_assert_eq!(i.cmp(&j), j.cmp(&i).reverse());
            prop_assert_eq!(i.cmp(&j) == Ordering::Equal, i == j);
        }

        #[test]
        fn proptest_generic_and_steps(i in interval()) {
            let up = i.abs();
            prop_assert_ne!(up.direction(), Ordering::Less);
            prop_assert_eq!(up.diatonic_steps(), up.generic() + 7 * up.octaves());
            prop_assert_eq!(i.diatonic_steps().abs(), up.diatonic_steps());
            let generic = if i.direction() == Ordering::Less { -up.generic() } else { up.generic() };
            prop_assert_eq!(i.generic(), generic);
            prop_assert_eq!((-i).alteration(), i.alteration());
        }
    }
}
