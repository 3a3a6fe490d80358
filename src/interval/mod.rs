//! The interface shared by all pitch representations, and algorithms that work with any of them.

pub mod r#trait;
pub use r#trait::*;

pub mod value;
pub use value::*;

/// Transpose every pitch by the same interval.
pub fn transpose<P: Pitch>(pitches: &[P], by: P::Interval) -> Vec<P> {
    pitches.iter().map(|p| p.add_interval(by)).collect()
}

/// The intervals between consecutive pitches. The result has one element less than the input,
/// or none if the input is empty.
pub fn melodic_intervals<P: Pitch>(pitches: &[P]) -> Vec<P::Interval> {
    pitches
        .windows(2)
        .map(|w| w[1].interval_from(&w[0]))
        .collect()
}
