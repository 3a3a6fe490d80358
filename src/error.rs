use thiserror::Error;

use crate::{converters::ConverterKind, interval::Category};

/// The coarse classification of a [PitchErr], for callers that want to recover from a whole
/// class of failures (for example, falling back to another notation after [ErrorKind::MalformedInput]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedInput,
    TypeMismatch,
    ClassMismatch,
    UnsupportedOperation,
    NoConversionPath,
    IndexOutOfRange,
    InvalidRegistration,
    ShapeMismatch,
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchErr {
    /// The byte `position` in `input` is where parsing failed. `found` is the rest of the input
    /// from there on.
    #[error("could not parse '{input}': expected {expected} at position {position}, found '{found}'")]
    MalformedInput {
        input: String,
        position: usize,
        found: String,
        expected: &'static str,
    },
    /// operation, left family, right family
    #[error("{0}: cannot combine values of the {1} and {2} families")]
    TypeMismatch(&'static str, &'static str, &'static str),
    #[error("{0}: cannot combine a {1} with a {2}")]
    ClassMismatch(&'static str, Category, Category),
    #[error("{0} is not defined for a {1} and a {2}")]
    UnsupportedOperation(&'static str, Category, Category),
    #[error("no conversion path from {0} to {1}")]
    NoConversionPath(&'static str, &'static str),
    /// context, offending value, inclusive lower and upper bounds
    #[error("{0}: {1} is out of range {2}..={3}")]
    IndexOutOfRange(&'static str, i64, i64, i64),
    #[error("{0}: expected exactly one set entry, found {1}")]
    NotOneHot(&'static str, usize),
    #[error("{0}: shapes {1:?} and {2:?} do not match")]
    ShapeMismatch(&'static str, Vec<usize>, Vec<usize>),
    #[error("cannot register a converter from {0} to itself")]
    SelfConversion(&'static str),
    #[error("an {kind} converter from {from} to {to} already exists")]
    ConverterExists {
        from: &'static str,
        to: &'static str,
        kind: ConverterKind,
    },
    #[error("invalid print options: {0}")]
    Config(String),
}

impl PitchErr {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PitchErr::MalformedInput { .. } => ErrorKind::MalformedInput,
            PitchErr::TypeMismatch(..) => ErrorKind::TypeMismatch,
            PitchErr::ClassMismatch(..) => ErrorKind::ClassMismatch,
            PitchErr::UnsupportedOperation(..) => ErrorKind::UnsupportedOperation,
            PitchErr::NoConversionPath(..) => ErrorKind::NoConversionPath,
            PitchErr::IndexOutOfRange(..) | PitchErr::NotOneHot(..) => ErrorKind::IndexOutOfRange,
            PitchErr::ShapeMismatch(..) => ErrorKind::ShapeMismatch,
            PitchErr::SelfConversion(..) | PitchErr::ConverterExists { .. } => {
                ErrorKind::InvalidRegistration
            }
            PitchErr::Config(..) => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(
            PitchErr::NotOneHot("from_onehot", 0).kind(),
            ErrorKind::IndexOutOfRange
        );
        assert_eq!(
            PitchErr::SelfConversion("SpelledPitch").kind(),
            ErrorKind::InvalidRegistration
        );
        assert_eq!(
            PitchErr::ClassMismatch("add", Category::Pitch, Category::IntervalClass).kind(),
            ErrorKind::ClassMismatch
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PitchErr::IndexOutOfRange("onehot", -3, -2, 2).to_string(),
            "onehot: -3 is out of range -2..=2"
        );
        assert_eq!(
            PitchErr::UnsupportedOperation("add", Category::Pitch, Category::Pitch).to_string(),
            "add is not defined for a pitch and a pitch"
        );
    }
}
