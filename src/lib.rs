//! Typed pitches and intervals.
//!
//! The central family is [spelled]: pitches and intervals as they are notated in Western music,
//! where `C#` and `Db` are different things. Other families forget part of that information:
//! [enharmonic] (12-tone equal temperament), [generic] (steps without accidentals), and
//! [logfreq] (frequencies and ratios). All of them implement the traits in [interval], and
//! [converters] translates between them. [harmonic] describes just intervals by their prime
//! factorization.
pub mod config;
pub mod converters;
mod custom_serde;
pub mod enharmonic;
pub mod error;
pub mod generic;
pub mod harmonic;
pub mod interval;
pub mod logfreq;
pub mod spelled;
mod util;

pub use error::{ErrorKind, PitchErr};
pub use interval::{
    AnyPitch, Category, Chromatic, Diatonic, Interval, IntervalClass, Pitch, PitchClass,
    PitchFamily, Value,
};
