//! One-hot encodings of spelled values.
//!
//! Classes are encoded as vectors indexed by fifths, the other types as matrices indexed by
//! fifths (rows) and notated octaves (columns). All ranges are inclusive `(lower, upper)` pairs.
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use num_traits::{One, Zero};

use super::{Spelled, SpelledInterval, SpelledIntervalClass, SpelledPitch, SpelledPitchClass};
use crate::error::PitchErr;

pub(super) fn index(context: &'static str, value: i64, (lower, upper): (i64, i64)) -> Result<usize, PitchErr> {
    if value < lower || value > upper {
        return Err(PitchErr::IndexOutOfRange(context, value, lower, upper));
    }
    Ok((value - lower) as usize)
}

pub(super) fn span((lower, upper): (i64, i64)) -> usize {
    (upper - lower + 1).max(0) as usize
}

fn encode_vector<T: Zero + One + Clone>(
    fifths: i64,
    fifth_range: (i64, i64),
) -> Result<Array1<T>, PitchErr> {
    let i = index("fifths", fifths, fifth_range)?;
    let mut res = Array1::zeros(span(fifth_range));
    res[i] = T::one();
    Ok(res)
}

fn encode_matrix<T: Zero + One + Clone>(
    fifths: i64,
    octaves: i64,
    fifth_range: (i64, i64),
    octave_range: (i64, i64),
) -> Result<Array2<T>, PitchErr> {
    let i = index("fifths", fifths, fifth_range)?;
    let j = index("octaves", octaves, octave_range)?;
    let mut res = Array2::zeros((span(fifth_range), span(octave_range)));
    res[[i, j]] = T::one();
    Ok(res)
}

/// The single nonzero position of a one-hot array.
fn locate<I, T: Zero>(entries: impl Iterator<Item = (I, T)>) -> Result<I, PitchErr> {
    let mut found = None;
    let mut count = 0;
    for (ix, x) in entries {
        if !x.is_zero() {
            count += 1;
            found = Some(ix);
        }
    }
    match (count, found) {
        (1, Some(ix)) => Ok(ix),
        _ => Err(PitchErr::NotOneHot("from_onehot", count)),
    }
}

pub(super) fn decode_vector<T: Zero + Clone>(onehot: ArrayView1<T>, fifth_low: i64) -> Result<i64, PitchErr> {
    let i = locate(onehot.indexed_iter().map(|(i, x)| (i, x.clone())))?;
    Ok(fifth_low + i as i64)
}

pub(super) fn decode_matrix<T: Zero + Clone>(
    onehot: ArrayView2<T>,
    fifth_low: i64,
    octave_low: i64,
) -> Result<(i64, i64), PitchErr> {
    let (i, j) = locate(onehot.indexed_iter().map(|(ix, x)| (ix, x.clone())))?;
    Ok((fifth_low + i as i64, octave_low + j as i64))
}

impl SpelledInterval {
    pub fn onehot<T: Zero + One + Clone>(
        &self,
        fifth_range: (i64, i64),
        octave_range: (i64, i64),
    ) -> Result<Array2<T>, PitchErr> {
        encode_matrix(self.fifths(), self.octaves(), fifth_range, octave_range)
    }

    pub fn from_onehot<T: Zero + Clone>(
        onehot: ArrayView2<T>,
        fifth_low: i64,
        octave_low: i64,
    ) -> Result<Self, PitchErr> {
        let (fifths, octaves) = decode_matrix(onehot, fifth_low, octave_low)?;
        Ok(Self::from_independent(fifths, octaves))
    }
}

impl SpelledPitch {
    pub fn onehot<T: Zero + One + Clone>(
        &self,
        fifth_range: (i64, i64),
        octave_range: (i64, i64),
    ) -> Result<Array2<T>, PitchErr> {
        encode_matrix(self.fifths(), self.octaves(), fifth_range, octave_range)
    }

    pub fn from_onehot<T: Zero + Clone>(
        onehot: ArrayView2<T>,
        fifth_low: i64,
        octave_low: i64,
    ) -> Result<Self, PitchErr> {
        let (fifths, octave) = decode_matrix(onehot, fifth_low, octave_low)?;
        Ok(Self::from_independent(fifths, octave))
    }
}

impl SpelledIntervalClass {
    pub fn onehot<T: Zero + One + Clone>(&self, fifth_range: (i64, i64)) -> Result<Array1<T>, PitchErr> {
        encode_vector(self.fifths(), fifth_range)
    }

    pub fn from_onehot<T: Zero + Clone>(onehot: ArrayView1<T>, fifth_low: i64) -> Result<Self, PitchErr> {
        decode_vector(onehot, fifth_low).map(Self::from_fifths)
    }
}

impl SpelledPitchClass {
    pub fn onehot<T: Zero + One + Clone>(&self, fifth_range: (i64, i64)) -> Result<Array1<T>, PitchErr> {
        encode_vector(self.fifths(), fifth_range)
    }

    pub fn from_onehot<T: Zero + Clone>(onehot: ArrayView1<T>, fifth_low: i64) -> Result<Self, PitchErr> {
        decode_vector(onehot, fifth_low).map(Self::from_fifths)
    }
}
