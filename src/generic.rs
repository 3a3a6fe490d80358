//! Diatonic steps without accidentals: `C`, `C#` and `Cb` all map to the same generic pitch.
use std::{cmp::Ordering, fmt, ops, str::FromStr};

use num_integer::Integer;

use crate::{
    error::PitchErr,
    interval::{Diatonic, Interval, IntervalClass, Pitch, PitchClass, PitchFamily},
    spelled::{
        letter_fifths, Spelled, SpelledInterval, SpelledIntervalClass, SpelledPitch,
        SpelledPitchClass,
    },
    util::cursor::Cursor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenericFamily;

impl PitchFamily for GenericFamily {
    const NAME: &'static str = "generic";
    type Pitch = GenericPitch;
    type Interval = GenericInterval;
    type PitchClass = GenericPitchClass;
    type IntervalClass = GenericIntervalClass;
}

/// Diatonic steps above C0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenericPitch {
    steps: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenericInterval {
    steps: i64,
}

/// The degree, from 0 (C) to 6 (B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenericPitchClass {
    degree: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenericIntervalClass {
    degree: i64,
}

fn degree_letter(degree: i64) -> char {
    // the natural pitch class with this degree
    SpelledPitchClass::from_fifths((2 * degree + 1).mod_floor(&7) - 1).letter()
}

impl GenericPitch {
    pub fn new(steps: i64) -> Self {
        GenericPitch { steps }
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }

    pub fn degree(&self) -> i64 {
        self.steps.mod_floor(&7)
    }

    pub fn octaves(&self) -> i64 {
        Integer::div_floor(&self.steps, &7)
    }

    pub fn letter(&self) -> char {
        degree_letter(self.degree())
    }
}

impl GenericInterval {
    pub fn new(steps: i64) -> Self {
        GenericInterval { steps }
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }

    /// The octaves of the interval's size, so `-3:1` has one octave.
    pub fn octaves(&self) -> i64 {
        Integer::div_floor(&self.steps.abs(), &7)
    }

    /// The number of the interval class, from 1 (unison) to 7 (seventh), of the interval's size.
    pub fn generic(&self) -> i64 {
        self.steps.abs().mod_floor(&7) + 1
    }
}

impl GenericPitchClass {
    pub fn new(degree: i64) -> Self {
        GenericPitchClass {
            degree: degree.mod_floor(&7),
        }
    }

    pub fn degree(&self) -> i64 {
        self.degree
    }

    pub fn letter(&self) -> char {
        degree_letter(self.degree)
    }
}

impl GenericIntervalClass {
    pub fn new(degree: i64) -> Self {
        GenericIntervalClass {
            degree: degree.mod_floor(&7),
        }
    }

    pub fn degree(&self) -> i64 {
        self.degree
    }

    pub fn generic(&self) -> i64 {
        self.degree + 1
    }
}

impl Interval for GenericInterval {
    type Class = GenericIntervalClass;

    fn unison() -> Self {
        Self::new(0)
    }

    fn octave() -> Self {
        Self::new(7)
    }

    fn direction(&self) -> Ordering {
        self.steps.cmp(&0)
    }

    fn to_class(&self) -> GenericIntervalClass {
        GenericIntervalClass::new(self.steps)
    }
}

impl Diatonic for GenericInterval {
    fn is_step(&self) -> bool {
        self.steps.abs() <= 1
    }
}

impl Interval for GenericIntervalClass {
    type Class = Self;

    fn unison() -> Self {
        Self::new(0)
    }

    fn octave() -> Self {
        Self::new(0)
    }

    fn direction(&self) -> Ordering {
        match self.degree {
            0 => Ordering::Equal,
            1..=3 => Ordering::Greater,
            _ => Ordering::Less,
        }
    }

    fn to_class(&self) -> Self {
        *self
    }
}

impl IntervalClass for GenericIntervalClass {
    type Embedding = GenericInterval;

    fn embed(&self, octaves: i64) -> GenericInterval {
        GenericInterval::new(self.degree + 7 * octaves)
    }
}

impl Diatonic for GenericIntervalClass {
    fn is_step(&self) -> bool {
        matches!(self.degree, 0 | 1 | 6)
    }
}

impl Pitch for GenericPitch {
    type Interval = GenericInterval;
    type Class = GenericPitchClass;

    fn add_interval(&self, interval: GenericInterval) -> Self {
        *self + interval
    }

    fn interval_from(&self, other: &Self) -> GenericInterval {
        *self - *other
    }

    fn to_class(&self) -> GenericPitchClass {
        GenericPitchClass::new(self.steps)
    }
}

impl Pitch for GenericPitchClass {
    type Interval = GenericIntervalClass;
    type Class = Self;

    fn add_interval(&self, interval: GenericIntervalClass) -> Self {
        *self + interval
    }

    fn interval_from(&self, other: &Self) -> GenericIntervalClass {
        *self - *other
    }

    fn to_class(&self) -> Self {
        *self
    }
}

impl PitchClass for GenericPitchClass {
    type Embedding = GenericPitch;

    fn embed(&self, octave: i64) -> GenericPitch {
        GenericPitch::new(self.degree + 7 * octave)
    }
}

impl ops::Add for GenericInterval {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.steps + other.steps)
    }
}

impl ops::Sub for GenericInterval {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.steps - other.steps)
    }
}

impl ops::Neg for GenericInterval {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.steps)
    }
}

impl ops::Mul<i64> for GenericInterval {
    type Output = Self;
    fn mul(self, factor: i64) -> Self {
        Self::new(self.steps * factor)
    }
}

impl ops::Add for GenericIntervalClass {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.degree + other.degree)
    }
}

impl ops::Sub for GenericIntervalClass {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.degree - other.degree)
    }
}

impl ops::Neg for GenericIntervalClass {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.degree)
    }
}

impl ops::Mul<i64> for GenericIntervalClass {
    type Output = Self;
    fn mul(self, factor: i64) -> Self {
        Self::new(self.degree * factor)
    }
}

impl ops::Add<GenericInterval> for GenericPitch {
    type Output = Self;
    fn add(self, interval: GenericInterval) -> Self {
        Self::new(self.steps + interval.steps)
    }
}

impl ops::Sub<GenericInterval> for GenericPitch {
    type Output = Self;
    fn sub(self, interval: GenericInterval) -> Self {
        Self::new(self.steps - interval.steps)
    }
}

impl ops::Sub for GenericPitch {
    type Output = GenericInterval;
    fn sub(self, other: Self) -> GenericInterval {
        GenericInterval::new(self.steps - other.steps)
    }
}

impl ops::Add<GenericIntervalClass> for GenericPitchClass {
    type Output = Self;
    fn add(self, interval: GenericIntervalClass) -> Self {
        Self::new(self.degree + interval.degree)
    }
}

impl ops::Sub<GenericIntervalClass> for GenericPitchClass {
    type Output = Self;
    fn sub(self, interval: GenericIntervalClass) -> Self {
        Self::new(self.degree - interval.degree)
    }
}

impl ops::Sub for GenericPitchClass {
    type Output = GenericIntervalClass;
    fn sub(self, other: Self) -> GenericIntervalClass {
        GenericIntervalClass::new(self.degree - other.degree)
    }
}

impl From<SpelledPitch> for GenericPitch {
    fn from(p: SpelledPitch) -> Self {
        Self::new(p.diatonic_steps())
    }
}

impl From<SpelledInterval> for GenericInterval {
    fn from(i: SpelledInterval) -> Self {
        Self::new(i.diatonic_steps())
    }
}

impl From<SpelledPitchClass> for GenericPitchClass {
    fn from(p: SpelledPitchClass) -> Self {
        Self::new(p.degree())
    }
}

impl From<SpelledIntervalClass> for GenericIntervalClass {
    fn from(i: SpelledIntervalClass) -> Self {
        Self::new(i.degree())
    }
}

impl fmt::Display for GenericPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.octaves())
    }
}

impl fmt::Display for GenericInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}:{}", self.generic(), self.octaves())
    }
}

impl fmt::Display for GenericPitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Display for GenericIntervalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generic())
    }
}

fn parse_degree_letter(cursor: &mut Cursor) -> Result<i64, PitchErr> {
    let start = cursor.position();
    match cursor.bump().and_then(letter_fifths) {
        Some(fifths) => Ok(SpelledPitchClass::from_fifths(fifths).degree()),
        None => Err(cursor.error_at(start, "a letter from A to G")),
    }
}

/// An optional sign and a generic interval number, returned as a signed degree.
fn parse_generic_number(cursor: &mut Cursor) -> Result<(i64, i64), PitchErr> {
    let sign = if cursor.eat('-') {
        -1
    } else {
        cursor.eat('+');
        1
    };
    let start = cursor.position();
    match cursor.bump().and_then(|c| c.to_digit(10)) {
        Some(n @ 1..=7) => Ok((sign, n as i64 - 1)),
        _ => Err(cursor.error_at(start, "a generic interval from 1 to 7")),
    }
}

impl FromStr for GenericPitch {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        let mut cursor = Cursor::new(s);
        let degree = parse_degree_letter(&mut cursor)?;
        let octave = cursor.octave()?;
        cursor.finish()?;
        Ok(GenericPitchClass::new(degree).embed(octave))
    }
}

impl FromStr for GenericPitchClass {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        let mut cursor = Cursor::new(s);
        let degree = parse_degree_letter(&mut cursor)?;
        cursor.finish()?;
        Ok(Self::new(degree))
    }
}

impl FromStr for GenericInterval {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        let mut cursor = Cursor::new(s);
        let (sign, degree) = parse_generic_number(&mut cursor)?;
        cursor.expect(':', "':' and an octave number")?;
        let octaves = cursor.octave()?;
        cursor.finish()?;
        Ok(Self::new(sign * (degree + 7 * octaves)))
    }
}

impl FromStr for GenericIntervalClass {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        let mut cursor = Cursor::new(s);
        let (sign, degree) = parse_generic_number(&mut cursor)?;
        cursor.finish()?;
        Ok(Self::new(sign * degree))
    }
}
