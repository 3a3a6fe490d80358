//! Pitches as natural logarithms of frequencies, intervals as logarithms of frequency ratios.
//!
//! This family can represent any tuning. Values are `f64`s, but they are totally ordered (and
//! hashable) through the IEEE total order, with `-0.0` identified with `0.0`.
use std::{
    cmp::Ordering,
    f64::consts::LN_2,
    fmt,
    hash::{Hash, Hasher},
    ops,
    str::FromStr,
};

use crate::{
    config::LogFreqPrintOptions,
    enharmonic::{
        EnharmonicInterval, EnharmonicIntervalClass, EnharmonicPitch, EnharmonicPitchClass,
    },
    error::PitchErr,
    interval::{Interval, IntervalClass, Pitch, PitchClass, PitchFamily},
    util::cursor::Cursor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogFreqFamily;

impl PitchFamily for LogFreqFamily {
    const NAME: &'static str = "logfreq";
    type Pitch = LogFreqPitch;
    type Interval = LogFreqInterval;
    type PitchClass = LogFreqPitchClass;
    type IntervalClass = LogFreqIntervalClass;
}

#[derive(Debug, Clone, Copy)]
pub struct LogFreqPitch {
    log: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct LogFreqInterval {
    log: f64,
}

/// The logarithm is kept in `[0, ln 2)`.
#[derive(Debug, Clone, Copy)]
pub struct LogFreqPitchClass {
    log: f64,
}

/// The logarithm is kept in `[0, ln 2)`.
#[derive(Debug, Clone, Copy)]
pub struct LogFreqIntervalClass {
    log: f64,
}

fn normalize_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

fn reduce_octave(log: f64) -> f64 {
    let r = log.rem_euclid(LN_2);
    // rem_euclid may round up to the modulus for tiny negative inputs
    if r >= LN_2 {
        0.0
    } else {
        normalize_zero(r)
    }
}

macro_rules! total_order {
    ($t:ident) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $t {}

        impl PartialOrd for $t {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $t {
            fn cmp(&self, other: &Self) -> Ordering {
                normalize_zero(self.log).total_cmp(&normalize_zero(other.log))
            }
        }

        impl Hash for $t {
            fn hash<H: Hasher>(&self, state: &mut H) {
                normalize_zero(self.log).to_bits().hash(state)
            }
        }

        impl $t {
            /// The natural logarithm of the frequency (or ratio).
            pub fn log_freq(&self) -> f64 {
                self.log
            }
        }
    };
}

total_order!(LogFreqPitch);
total_order!(LogFreqInterval);
total_order!(LogFreqPitchClass);
total_order!(LogFreqIntervalClass);

impl LogFreqPitch {
    pub fn from_log_freq(log: f64) -> Self {
        LogFreqPitch { log }
    }

    /// `hz` should be positive and finite.
    pub fn from_freq(hz: f64) -> Self {
        Self::from_log_freq(hz.ln())
    }

    pub fn freq(&self) -> f64 {
        self.log.exp()
    }

    pub fn name_with(&self, options: &LogFreqPrintOptions) -> String {
        format!("{:.*}Hz", options.precision, self.freq())
    }
}

impl LogFreqInterval {
    pub fn from_log_freq(log: f64) -> Self {
        LogFreqInterval { log }
    }

    pub fn from_ratio(ratio: f64) -> Self {
        Self::from_log_freq(ratio.ln())
    }

    pub fn ratio(&self) -> f64 {
        self.log.exp()
    }

    pub fn name_with(&self, options: &LogFreqPrintOptions) -> String {
        format!("{:.*}", options.precision, self.ratio())
    }
}

impl LogFreqPitchClass {
    pub fn from_log_freq(log: f64) -> Self {
        LogFreqPitchClass {
            log: reduce_octave(log),
        }
    }

    pub fn from_freq(hz: f64) -> Self {
        Self::from_log_freq(hz.ln())
    }

    /// The frequency of the representative in `[1Hz, 2Hz)`.
    pub fn freq(&self) -> f64 {
        self.log.exp()
    }

    pub fn name_with(&self, options: &LogFreqPrintOptions) -> String {
        format!("{:.*}Hz", options.precision, self.freq())
    }
}

impl LogFreqIntervalClass {
    pub fn from_log_freq(log: f64) -> Self {
        LogFreqIntervalClass {
            log: reduce_octave(log),
        }
    }

    pub fn from_ratio(ratio: f64) -> Self {
        Self::from_log_freq(ratio.ln())
    }

    /// The ratio of the representative in `[1, 2)`.
    pub fn ratio(&self) -> f64 {
        self.log.exp()
    }

    pub fn name_with(&self, options: &LogFreqPrintOptions) -> String {
        format!("{:.*}", options.precision, self.ratio())
    }
}

impl Interval for LogFreqInterval {
    type Class = LogFreqIntervalClass;

    fn unison() -> Self {
        Self::from_log_freq(0.0)
    }

    fn octave() -> Self {
        Self::from_log_freq(LN_2)
    }

    fn direction(&self) -> Ordering {
        normalize_zero(self.log).total_cmp(&0.0)
    }

    fn to_class(&self) -> LogFreqIntervalClass {
        LogFreqIntervalClass::from_log_freq(self.log)
    }
}

impl Interval for LogFreqIntervalClass {
    type Class = Self;

    fn unison() -> Self {
        Self::from_log_freq(0.0)
    }

    fn octave() -> Self {
        Self::from_log_freq(0.0)
    }

    /// Classes up to half an octave go up.
    fn direction(&self) -> Ordering {
        if self.log == 0.0 {
            Ordering::Equal
        } else if self.log <= LN_2 / 2.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    fn to_class(&self) -> Self {
        *self
    }
}

impl IntervalClass for LogFreqIntervalClass {
    type Embedding = LogFreqInterval;

    fn embed(&self, octaves: i64) -> LogFreqInterval {
        LogFreqInterval::from_log_freq(self.log + octaves as f64 * LN_2)
    }
}

impl Pitch for LogFreqPitch {
    type Interval = LogFreqInterval;
    type Class = LogFreqPitchClass;

    fn add_interval(&self, interval: LogFreqInterval) -> Self {
        *self + interval
    }

    fn interval_from(&self, other: &Self) -> LogFreqInterval {
        *self - *other
    }

    fn to_class(&self) -> LogFreqPitchClass {
        LogFreqPitchClass::from_log_freq(self.log)
    }
}

impl Pitch for LogFreqPitchClass {
    type Interval = LogFreqIntervalClass;
    type Class = Self;

    fn add_interval(&self, interval: LogFreqIntervalClass) -> Self {
        *self + interval
    }

    fn interval_from(&self, other: &Self) -> LogFreqIntervalClass {
        *self - *other
    }

    fn to_class(&self) -> Self {
        *self
    }
}

impl PitchClass for LogFreqPitchClass {
    type Embedding = LogFreqPitch;

    /// The pitch `2^octave` times the representative in `[1Hz, 2Hz)`.
    fn embed(&self, octave: i64) -> LogFreqPitch {
        LogFreqPitch::from_log_freq(self.log + octave as f64 * LN_2)
    }
}

impl ops::Add for LogFreqInterval {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_log_freq(self.log + other.log)
    }
}

impl ops::Sub for LogFreqInterval {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_log_freq(self.log - other.log)
    }
}

impl ops::Neg for LogFreqInterval {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_log_freq(-self.log)
    }
}

impl ops::Mul<i64> for LogFreqInterval {
    type Output = Self;
    fn mul(self, factor: i64) -> Self {
        Self::from_log_freq(self.log * factor as f64)
    }
}

impl ops::Add for LogFreqIntervalClass {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_log_freq(self.log + other.log)
    }
}

impl ops::Sub for LogFreqIntervalClass {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_log_freq(self.log - other.log)
    }
}

impl ops::Neg for LogFreqIntervalClass {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_log_freq(-self.log)
    }
}

impl ops::Mul<i64> for LogFreqIntervalClass {
    type Output = Self;
    fn mul(self, factor: i64) -> Self {
        Self::from_log_freq(self.log * factor as f64)
    }
}

impl ops::Add<LogFreqInterval> for LogFreqPitch {
    type Output = Self;
    fn add(self, interval: LogFreqInterval) -> Self {
        Self::from_log_freq(self.log + interval.log)
    }
}

impl ops::Sub<LogFreqInterval> for LogFreqPitch {
    type Output = Self;
    fn sub(self, interval: LogFreqInterval) -> Self {
        Self::from_log_freq(self.log - interval.log)
    }
}

impl ops::Sub for LogFreqPitch {
    type Output = LogFreqInterval;
    fn sub(self, other: Self) -> LogFreqInterval {
        LogFreqInterval::from_log_freq(self.log - other.log)
    }
}

impl ops::Add<LogFreqIntervalClass> for LogFreqPitchClass {
    type Output = Self;
    fn add(self, interval: LogFreqIntervalClass) -> Self {
        Self::from_log_freq(self.log + interval.log)
    }
}

impl ops::Sub<LogFreqIntervalClass> for LogFreqPitchClass {
    type Output = Self;
    fn sub(self, interval: LogFreqIntervalClass) -> Self {
        Self::from_log_freq(self.log - interval.log)
    }
}

impl ops::Sub for LogFreqPitchClass {
    type Output = LogFreqIntervalClass;
    fn sub(self, other: Self) -> LogFreqIntervalClass {
        LogFreqIntervalClass::from_log_freq(self.log - other.log)
    }
}

impl From<EnharmonicPitch> for LogFreqPitch {
    fn from(p: EnharmonicPitch) -> Self {
        Self::from_freq(p.freq())
    }
}

impl From<EnharmonicInterval> for LogFreqInterval {
    fn from(i: EnharmonicInterval) -> Self {
        Self::from_log_freq(i.semitones() as f64 / 12.0 * LN_2)
    }
}

impl From<EnharmonicPitchClass> for LogFreqPitchClass {
    fn from(p: EnharmonicPitchClass) -> Self {
        LogFreqPitch::from(EnharmonicPitch::from_midi(p.value())).to_class()
    }
}

impl From<EnharmonicIntervalClass> for LogFreqIntervalClass {
    fn from(i: EnharmonicIntervalClass) -> Self {
        Self::from_log_freq(i.value() as f64 / 12.0 * LN_2)
    }
}

impl fmt::Display for LogFreqPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_with(&LogFreqPrintOptions::default()))
    }
}

impl fmt::Display for LogFreqInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_with(&LogFreqPrintOptions::default()))
    }
}

impl fmt::Display for LogFreqPitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_with(&LogFreqPrintOptions::default()))
    }
}

impl fmt::Display for LogFreqIntervalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_with(&LogFreqPrintOptions::default()))
    }
}

/// A positive decimal number, optionally followed by "Hz".
fn parse_positive(s: &str, hz: bool) -> Result<f64, PitchErr> {
    let mut cursor = Cursor::new(s);
    let x = cursor.decimal()?;
    if x <= 0.0 {
        return Err(cursor.error_at(0, "a positive number"));
    }
    if hz {
        cursor.expect('H', "the unit 'Hz'")?;
        cursor.expect('z', "the unit 'Hz'")?;
    }
    cursor.finish()?;
    Ok(x)
}

impl FromStr for LogFreqPitch {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_positive(s, true).map(Self::from_freq)
    }
}

impl FromStr for LogFreqInterval {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_positive(s, false).map(Self::from_ratio)
    }
}

impl FromStr for LogFreqPitchClass {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_positive(s, true).map(Self::from_freq)
    }
}

impl FromStr for LogFreqIntervalClass {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_positive(s, false).map(Self::from_ratio)
    }
}
