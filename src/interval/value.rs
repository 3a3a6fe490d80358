use std::fmt;

use crate::{
    enharmonic::EnharmonicFamily,
    error::PitchErr,
    generic::GenericFamily,
    interval::{Interval, Pitch, PitchFamily},
    logfreq::LogFreqFamily,
    spelled::SpelledFamily,
};

/// Which of the four types of a family a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Pitch,
    Interval,
    PitchClass,
    IntervalClass,
}

impl Category {
    pub fn is_class(&self) -> bool {
        matches!(self, Category::PitchClass | Category::IntervalClass)
    }

    pub fn is_pitch(&self) -> bool {
        matches!(self, Category::Pitch | Category::PitchClass)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Pitch => write!(f, "pitch"),
            Category::Interval => write!(f, "interval"),
            Category::PitchClass => write!(f, "pitch class"),
            Category::IntervalClass => write!(f, "interval class"),
        }
    }
}

fn mismatch(op: &'static str, left: Category, right: Category) -> PitchErr {
    if left.is_class() != right.is_class() {
        PitchErr::ClassMismatch(op, left, right)
    } else {
        PitchErr::UnsupportedOperation(op, left, right)
    }
}

/// A value of any of the four categories of one family, for code that only learns at runtime
/// what it is dealing with (for example, after parsing user input).
///
/// Unlike the operators on the concrete types, the arithmetic here is checked: combining a pitch
/// with a pitch class is a [PitchErr::ClassMismatch], and operations that are meaningless for the
/// categories involved (like adding two pitches) are a [PitchErr::UnsupportedOperation].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value<F: PitchFamily> {
    Pitch(F::Pitch),
    Interval(F::Interval),
    PitchClass(F::PitchClass),
    IntervalClass(F::IntervalClass),
}

impl<F: PitchFamily> Value<F> {
    pub fn category(&self) -> Category {
        match self {
            Value::Pitch(_) => Category::Pitch,
            Value::Interval(_) => Category::Interval,
            Value::PitchClass(_) => Category::PitchClass,
            Value::IntervalClass(_) => Category::IntervalClass,
        }
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, PitchErr> {
        match (*self, *other) {
            (Value::Pitch(p), Value::Interval(i)) => Ok(Value::Pitch(p.add_interval(i))),
            (Value::Interval(a), Value::Interval(b)) => Ok(Value::Interval(a + b)),
            (Value::PitchClass(p), Value::IntervalClass(i)) => {
                Ok(Value::PitchClass(p.add_interval(i)))
            }
            (Value::IntervalClass(a), Value::IntervalClass(b)) => Ok(Value::IntervalClass(a + b)),
            _ => Err(mismatch("add", self.category(), other.category())),
        }
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, PitchErr> {
        match (*self, *other) {
            (Value::Pitch(p), Value::Pitch(q)) => Ok(Value::Interval(p.interval_from(&q))),
            (Value::Pitch(p), Value::Interval(i)) => Ok(Value::Pitch(p.sub_interval(i))),
            (Value::Interval(a), Value::Interval(b)) => Ok(Value::Interval(a - b)),
            (Value::PitchClass(p), Value::PitchClass(q)) => {
                Ok(Value::IntervalClass(p.interval_from(&q)))
            }
            (Value::PitchClass(p), Value::IntervalClass(i)) => {
                Ok(Value::PitchClass(p.sub_interval(i)))
            }
            (Value::IntervalClass(a), Value::IntervalClass(b)) => Ok(Value::IntervalClass(a - b)),
            _ => Err(mismatch("sub", self.category(), other.category())),
        }
    }

    pub fn try_neg(&self) -> Result<Self, PitchErr> {
        match *self {
            Value::Interval(i) => Ok(Value::Interval(-i)),
            Value::IntervalClass(i) => Ok(Value::IntervalClass(-i)),
            _ => Err(PitchErr::UnsupportedOperation(
                "neg",
                self.category(),
                self.category(),
            )),
        }
    }

    pub fn try_mul(&self, factor: i64) -> Result<Self, PitchErr> {
        match *self {
            Value::Interval(i) => Ok(Value::Interval(i * factor)),
            Value::IntervalClass(i) => Ok(Value::IntervalClass(i * factor)),
            _ => Err(PitchErr::UnsupportedOperation(
                "mul",
                self.category(),
                self.category(),
            )),
        }
    }

    /// The octave-equivalent version of this value. Classes are returned unchanged.
    pub fn to_class(&self) -> Self {
        match *self {
            Value::Pitch(p) => Value::PitchClass(p.to_class()),
            Value::Interval(i) => Value::IntervalClass(i.to_class()),
            other => other,
        }
    }
}

impl<F: PitchFamily> fmt::Display for Value<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Pitch(x) => fmt::Display::fmt(x, f),
            Value::Interval(x) => fmt::Display::fmt(x, f),
            Value::PitchClass(x) => fmt::Display::fmt(x, f),
            Value::IntervalClass(x) => fmt::Display::fmt(x, f),
        }
    }
}

/// A [Value] of any of the families provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyPitch {
    Spelled(Value<SpelledFamily>),
    Enharmonic(Value<EnharmonicFamily>),
    LogFreq(Value<LogFreqFamily>),
    Generic(Value<GenericFamily>),
}

impl AnyPitch {
    pub fn family(&self) -> &'static str {
        match self {
            AnyPitch::Spelled(_) => SpelledFamily::NAME,
            AnyPitch::Enharmonic(_) => EnharmonicFamily::NAME,
            AnyPitch::LogFreq(_) => LogFreqFamily::NAME,
            AnyPitch::Generic(_) => GenericFamily::NAME,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            AnyPitch::Spelled(x) => x.category(),
            AnyPitch::Enharmonic(x) => x.category(),
            AnyPitch::LogFreq(x) => x.category(),
            AnyPitch::Generic(x) => x.category(),
        }
    }

    fn binary(
        &self,
        other: &Self,
        op: &'static str,
        spelled: fn(&Value<SpelledFamily>, &Value<SpelledFamily>) -> Result<Value<SpelledFamily>, PitchErr>,
        enharmonic: fn(
            &Value<EnharmonicFamily>,
            &Value<EnharmonicFamily>,
        ) -> Result<Value<EnharmonicFamily>, PitchErr>,
        logfreq: fn(&Value<LogFreqFamily>, &Value<LogFreqFamily>) -> Result<Value<LogFreqFamily>, PitchErr>,
        generic: fn(&Value<GenericFamily>, &Value<GenericFamily>) -> Result<Value<GenericFamily>, PitchErr>,
    ) -> Result<Self, PitchErr> {
        match (self, other) {
            (AnyPitch::Spelled(a), AnyPitch::Spelled(b)) => spelled(a, b).map(AnyPitch::Spelled),
            (AnyPitch::Enharmonic(a), AnyPitch::Enharmonic(b)) => {
                enharmonic(a, b).map(AnyPitch::Enharmonic)
            }
            (AnyPitch::LogFreq(a), AnyPitch::LogFreq(b)) => logfreq(a, b).map(AnyPitch::LogFreq),
            (AnyPitch::Generic(a), AnyPitch::Generic(b)) => generic(a, b).map(AnyPitch::Generic),
            _ => Err(PitchErr::TypeMismatch(op, self.family(), other.family())),
        }
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, PitchErr> {
        self.binary(
            other,
            "add",
            Value::try_add,
            Value::try_add,
            Value::try_add,
            Value::try_add,
        )
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, PitchErr> {
        self.binary(
            other,
            "sub",
            Value::try_sub,
            Value::try_sub,
            Value::try_sub,
            Value::try_sub,
        )
    }

    pub fn try_neg(&self) -> Result<Self, PitchErr> {
        match self {
            AnyPitch::Spelled(x) => x.try_neg().map(AnyPitch::Spelled),
            AnyPitch::Enharmonic(x) => x.try_neg().map(AnyPitch::Enharmonic),
            AnyPitch::LogFreq(x) => x.try_neg().map(AnyPitch::LogFreq),
            AnyPitch::Generic(x) => x.try_neg().map(AnyPitch::Generic),
        }
    }

    pub fn try_mul(&self, factor: i64) -> Result<Self, PitchErr> {
        match self {
            AnyPitch::Spelled(x) => x.try_mul(factor).map(AnyPitch::Spelled),
            AnyPitch::Enharmonic(x) => x.try_mul(factor).map(AnyPitch::Enharmonic),
            AnyPitch::LogFreq(x) => x.try_mul(factor).map(AnyPitch::LogFreq),
            AnyPitch::Generic(x) => x.try_mul(factor).map(AnyPitch::Generic),
        }
    }
}

impl fmt::Display for AnyPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyPitch::Spelled(x) => fmt::Display::fmt(x, f),
            AnyPitch::Enharmonic(x) => fmt::Display::fmt(x, f),
            AnyPitch::LogFreq(x) => fmt::Display::fmt(x, f),
            AnyPitch::Generic(x) => fmt::Display::fmt(x, f),
        }
    }
}

macro_rules! any_pitch_from {
    ($variant:ident, $family:ty, $($category:ident: $t:ty),*) => {
        $(
            impl From<$t> for AnyPitch {
                fn from(x: $t) -> Self {
                    AnyPitch::$variant(Value::<$family>::$category(x))
                }
            }
        )*
    };
}

any_pitch_from!(
    Spelled,
    SpelledFamily,
    Pitch: crate::spelled::SpelledPitch,
    Interval: crate::spelled::SpelledInterval,
    PitchClass: crate::spelled::SpelledPitchClass,
    IntervalClass: crate::spelled::SpelledIntervalClass
);
any_pitch_from!(
    Enharmonic,
    EnharmonicFamily,
    Pitch: crate::enharmonic::EnharmonicPitch,
    Interval: crate::enharmonic::EnharmonicInterval,
    PitchClass: crate::enharmonic::EnharmonicPitchClass,
    IntervalClass: crate::enharmonic::EnharmonicIntervalClass
);
any_pitch_from!(
    LogFreq,
    LogFreqFamily,
    Pitch: crate::logfreq::LogFreqPitch,
    Interval: crate::logfreq::LogFreqInterval,
    PitchClass: crate::logfreq::LogFreqPitchClass,
    IntervalClass: crate::logfreq::LogFreqIntervalClass
);
any_pitch_from!(
    Generic,
    GenericFamily,
    Pitch: crate::generic::GenericPitch,
    Interval: crate::generic::GenericInterval,
    PitchClass: crate::generic::GenericPitchClass,
    IntervalClass: crate::generic::GenericIntervalClass
);
