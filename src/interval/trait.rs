use std::{cmp::Ordering, fmt, hash::Hash, ops};

/// Directed intervals and interval classes.
///
/// Implementors form an abelian group under `+` with [Interval::unison] as the neutral element,
/// and are totally ordered. For interval classes, [Interval::octave] is the same as
/// [Interval::unison].
pub trait Interval:
    Copy
    + fmt::Debug
    + fmt::Display
    + Eq
    + Ord
    + Hash
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Neg<Output = Self>
    + ops::Mul<i64, Output = Self>
{
    /// The octave-equivalent version of this type.
    type Class: IntervalClass;

    fn unison() -> Self;

    fn octave() -> Self;

    /// [Ordering::Greater] for upward intervals, [Ordering::Less] for downward ones, and
    /// [Ordering::Equal] for the unison.
    fn direction(&self) -> Ordering;

    fn abs(&self) -> Self {
        match self.direction() {
            Ordering::Less => -*self,
            _ => *self,
        }
    }

    fn to_class(&self) -> Self::Class;
}

pub trait IntervalClass: Interval<Class = Self> {
    /// The interval type this class can be placed into.
    type Embedding: Interval<Class = Self>;

    /// The representative of this class that lies in the given octave.
    fn embed(&self, octaves: i64) -> Self::Embedding;
}

/// Interval types that have a notion of a chromatic semitone, like the step from C to C#.
pub trait Chromatic: Interval {
    fn chromatic_semitone() -> Self;
}

/// Interval types that can tell steps from leaps.
pub trait Diatonic: Interval {
    fn is_step(&self) -> bool;
}

/// Pitches and pitch classes. Pitches form an affine space over their intervals.
///
/// The operators `p + i`, `p - i`, and `p - q` are implemented on all concrete types; this trait
/// exposes them under names, so that generic code doesn't need to spell out the operator bounds.
pub trait Pitch: Copy + fmt::Debug + fmt::Display + Eq + Ord + Hash {
    type Interval: Interval;
    type Class: PitchClass;

    fn add_interval(&self, interval: Self::Interval) -> Self;

    fn sub_interval(&self, interval: Self::Interval) -> Self {
        self.add_interval(-interval)
    }

    /// The interval from `other` to `self`, i.e. `self - other`.
    fn interval_from(&self, other: &Self) -> Self::Interval;

    /// The interval from `self` to `other`, i.e. `other - self`.
    fn interval_to(&self, other: &Self) -> Self::Interval {
        other.interval_from(self)
    }

    fn to_class(&self) -> Self::Class;
}

pub trait PitchClass: Pitch<Class = Self> {
    type Embedding: Pitch<Class = Self>;

    /// The pitch of this class in the given octave.
    fn embed(&self, octave: i64) -> Self::Embedding;
}

/// A family ties together the four related types of one pitch representation. Families are
/// marker types without values.
pub trait PitchFamily: 'static + Copy + fmt::Debug + Eq + Hash {
    const NAME: &'static str;

    type Pitch: Pitch<Interval = Self::Interval, Class = Self::PitchClass>;
    type Interval: Interval<Class = Self::IntervalClass>;
    type PitchClass: PitchClass<Interval = Self::IntervalClass, Embedding = Self::Pitch>;
    type IntervalClass: IntervalClass<Embedding = Self::Interval>;
}
