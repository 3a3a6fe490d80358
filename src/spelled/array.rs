//! Arrays of spelled values.
//!
//! A [SpelledArray] is an [ndarray::Array] of one of the four spelled types, with the accessors
//! and operations of the scalar types lifted to work element-wise. Binary operators take their
//! operands by reference and panic if the shapes differ, like [ndarray::Zip].
use std::{cmp::Ordering, fmt, ops, str::FromStr};

use ndarray::{
    Array, ArrayD, ArrayView, ArrayView1, ArrayView2, ArrayViewD, Axis, Dimension, IxDyn,
    NdIndex, RemoveAxis, ShapeBuilder, Zip,
};
use num_traits::{One, Zero};

use super::{
    onehot::{decode_matrix, decode_vector, index, span},
    Spelled, SpelledInterval, SpelledIntervalClass, SpelledPitch, SpelledPitchClass,
};
use crate::{
    error::PitchErr,
    interval::{Chromatic, Diatonic, Interval, Pitch},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpelledArray<T, D: Dimension> {
    elements: Array<T, D>,
}

pub type SpelledIntervalArray<D> = SpelledArray<SpelledInterval, D>;
pub type SpelledPitchArray<D> = SpelledArray<SpelledPitch, D>;
pub type SpelledIntervalClassArray<D> = SpelledArray<SpelledIntervalClass, D>;
pub type SpelledPitchClassArray<D> = SpelledArray<SpelledPitchClass, D>;

fn check_shapes<D: Dimension>(
    context: &'static str,
    a: &Array<i64, D>,
    b: &Array<i64, D>,
) -> Result<(), PitchErr> {
    if a.shape() == b.shape() {
        Ok(())
    } else {
        Err(PitchErr::ShapeMismatch(
            context,
            a.shape().to_vec(),
            b.shape().to_vec(),
        ))
    }
}

impl<T: Copy, D: Dimension> SpelledArray<T, D> {
    pub fn from_elements(elements: Array<T, D>) -> Self {
        SpelledArray { elements }
    }

    pub fn elements(&self) -> ArrayView<'_, T, D> {
        self.elements.view()
    }

    pub fn into_elements(self) -> Array<T, D> {
        self.elements
    }

    /// Parse every string of the input. Fails with the first error, in logical order.
    pub fn from_strings<S: AsRef<str>>(strings: &Array<S, D>) -> Result<Self, PitchErr>
    where
        T: FromStr<Err = PitchErr>,
    {
        let parsed = strings
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<T>, PitchErr>>()?;
        let elements = Array::from_shape_vec(strings.raw_dim(), parsed).map_err(|_| {
            PitchErr::ShapeMismatch("from_strings", strings.shape().to_vec(), vec![])
        })?;
        Ok(SpelledArray { elements })
    }

    /// An array of the given shape with all elements equal to `value`.
    pub fn from_elem<Sh: ShapeBuilder<Dim = D>>(shape: Sh, value: T) -> Self {
        SpelledArray {
            elements: Array::from_elem(shape, value),
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.elements.shape()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get<I: NdIndex<D>>(&self, index: I) -> Option<T> {
        self.elements.get(index).copied()
    }

    pub fn get_mut<I: NdIndex<D>>(&mut self, index: I) -> Option<&mut T> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.elements.iter().copied()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.iter().any(|x| x == value)
    }

    /// The sub-array of the given positions along `axis`.
    pub fn select(&self, axis: Axis, indices: &[usize]) -> Self
    where
        D: RemoveAxis,
    {
        SpelledArray {
            elements: self.elements.select(axis, indices),
        }
    }

    /// Apply a scalar function to every element.
    pub fn map<U, F: FnMut(T) -> U>(&self, f: F) -> Array<U, D> {
        self.elements.mapv(f)
    }

    fn zip_with<U: Copy, V, F: FnMut(T, U) -> V>(&self, other: &SpelledArray<U, D>, mut f: F) -> SpelledArray<V, D> {
        SpelledArray {
            elements: Zip::from(&self.elements)
                .and(&other.elements)
                .map_collect(|&a, &b| f(a, b)),
        }
    }

    /// Element-wise comparison.
    pub fn compare(&self, other: &Self) -> Array<Ordering, D>
    where
        T: Ord,
    {
        Zip::from(&self.elements)
            .and(&other.elements)
            .map_collect(|a, b| a.cmp(b))
    }

    /// Compare every element with the same value.
    pub fn compare_with(&self, value: &T) -> Array<Ordering, D>
    where
        T: Ord,
    {
        self.elements.map(|x| x.cmp(value))
    }

    pub fn names(&self) -> Array<String, D>
    where
        T: fmt::Display,
    {
        self.elements.map(|x| x.to_string())
    }
}

impl<T: Spelled + Copy, D: Dimension> SpelledArray<T, D> {
    pub fn fifths(&self) -> Array<i64, D> {
        self.map(|x| x.fifths())
    }

    pub fn octaves(&self) -> Array<i64, D> {
        self.map(|x| x.octaves())
    }

    pub fn internal_octaves(&self) -> Array<i64, D> {
        self.map(|x| x.internal_octaves())
    }

    pub fn degree(&self) -> Array<i64, D> {
        self.map(|x| x.degree())
    }

    pub fn generic(&self) -> Array<i64, D> {
        self.map(|x| x.generic())
    }

    pub fn diatonic_steps(&self) -> Array<i64, D> {
        self.map(|x| x.diatonic_steps())
    }

    pub fn alteration(&self) -> Array<i64, D> {
        self.map(|x| x.alteration())
    }
}

impl<T: Interval, D: Dimension> SpelledArray<T, D> {
    pub fn unison<Sh: ShapeBuilder<Dim = D>>(shape: Sh) -> Self {
        Self::from_elem(shape, T::unison())
    }

    pub fn octave<Sh: ShapeBuilder<Dim = D>>(shape: Sh) -> Self {
        Self::from_elem(shape, T::octave())
    }

    pub fn direction(&self) -> Array<Ordering, D> {
        self.map(|x| x.direction())
    }

    pub fn abs(&self) -> Self {
        SpelledArray {
            elements: self.map(|x| x.abs()),
        }
    }
}

impl<T: Chromatic, D: Dimension> SpelledArray<T, D> {
    pub fn chromatic_semitone<Sh: ShapeBuilder<Dim = D>>(shape: Sh) -> Self {
        Self::from_elem(shape, T::chromatic_semitone())
    }
}

impl<T: Diatonic, D: Dimension> SpelledArray<T, D> {
    pub fn is_step(&self) -> Array<bool, D> {
        self.map(|x| x.is_step())
    }
}

impl<D: Dimension> SpelledIntervalArray<D> {
    pub fn from_fifths_and_octaves(
        fifths: &Array<i64, D>,
        internal_octaves: &Array<i64, D>,
    ) -> Result<Self, PitchErr> {
        check_shapes("from_fifths_and_octaves", fifths, internal_octaves)?;
        Ok(SpelledArray {
            elements: Zip::from(fifths)
                .and(internal_octaves)
                .map_collect(|&f, &o| SpelledInterval::from_fifths_and_octaves(f, o)),
        })
    }

    pub fn from_independent(fifths: &Array<i64, D>, octaves: &Array<i64, D>) -> Result<Self, PitchErr> {
        check_shapes("from_independent", fifths, octaves)?;
        Ok(SpelledArray {
            elements: Zip::from(fifths)
                .and(octaves)
                .map_collect(|&f, &o| SpelledInterval::from_independent(f, o)),
        })
    }

    pub fn to_class(&self) -> SpelledIntervalClassArray<D> {
        SpelledArray {
            elements: self.map(|x| x.to_class()),
        }
    }
}

impl<D: Dimension> SpelledPitchArray<D> {
    pub fn from_fifths_and_octaves(
        fifths: &Array<i64, D>,
        internal_octaves: &Array<i64, D>,
    ) -> Result<Self, PitchErr> {
        check_shapes("from_fifths_and_octaves", fifths, internal_octaves)?;
        Ok(SpelledArray {
            elements: Zip::from(fifths)
                .and(internal_octaves)
                .map_collect(|&f, &o| SpelledPitch::from_fifths_and_octaves(f, o)),
        })
    }

    pub fn from_independent(fifths: &Array<i64, D>, octaves: &Array<i64, D>) -> Result<Self, PitchErr> {
        check_shapes("from_independent", fifths, octaves)?;
        Ok(SpelledArray {
            elements: Zip::from(fifths)
                .and(octaves)
                .map_collect(|&f, &o| SpelledPitch::from_independent(f, o)),
        })
    }

    pub fn to_class(&self) -> SpelledPitchClassArray<D> {
        SpelledArray {
            elements: self.map(|x| x.to_class()),
        }
    }

    /// `self - other`, element-wise.
    pub fn interval_from(&self, other: &Self) -> SpelledIntervalArray<D> {
        self.zip_with(other, |a, b| a.interval_from(&b))
    }

    pub fn letters(&self) -> Array<char, D> {
        self.map(|x| x.letter())
    }
}

impl<D: Dimension> SpelledIntervalClassArray<D> {
    pub fn from_fifths(fifths: &Array<i64, D>) -> Self {
        SpelledArray {
            elements: fifths.mapv(SpelledIntervalClass::from_fifths),
        }
    }

    pub fn embed(&self, octaves: &Array<i64, D>) -> Result<SpelledIntervalArray<D>, PitchErr> {
        let fifths = self.fifths();
        check_shapes("embed", &fifths, octaves)?;
        SpelledIntervalArray::from_independent(&fifths, octaves)
    }
}

impl<D: Dimension> SpelledPitchClassArray<D> {
    pub fn from_fifths(fifths: &Array<i64, D>) -> Self {
        SpelledArray {
            elements: fifths.mapv(SpelledPitchClass::from_fifths),
        }
    }

    pub fn embed(&self, octaves: &Array<i64, D>) -> Result<SpelledPitchArray<D>, PitchErr> {
        SpelledPitchArray::from_independent(&self.fifths(), octaves)
    }

    /// `self - other`, element-wise.
    pub fn interval_from(&self, other: &Self) -> SpelledIntervalClassArray<D> {
        self.zip_with(other, |a, b| a.interval_from(&b))
    }

    pub fn letters(&self) -> Array<char, D> {
        self.map(|x| x.letter())
    }
}

impl<T: Spelled + Copy, D: Dimension> SpelledArray<T, D> {
    /// Appends one axis for fifths, and one for octaves if `octave_range` is given.
    fn encode<E: Zero + One + Clone>(
        &self,
        fifth_range: (i64, i64),
        octave_range: Option<(i64, i64)>,
    ) -> Result<ArrayD<E>, PitchErr> {
        let mut shape = self.shape().to_vec();
        shape.push(span(fifth_range));
        if let Some(r) = octave_range {
            shape.push(span(r));
        }
        let mut res = ArrayD::zeros(IxDyn(&shape));
        for (ix, x) in self.elements.view().into_dyn().indexed_iter() {
            let mut full = ix.slice().to_vec();
            full.push(index("fifths", x.fifths(), fifth_range)?);
            if let Some(r) = octave_range {
                full.push(index("octaves", x.octaves(), r)?);
            }
            res[&full[..]] = E::one();
        }
        Ok(res)
    }
}

/// Splits off the trailing `inner` axes and decodes each of the sub-arrays.
fn decode<T, E, F>(onehot: ArrayViewD<E>, inner: usize, mut f: F) -> Result<SpelledArray<T, IxDyn>, PitchErr>
where
    E: Clone,
    F: FnMut(ArrayViewD<E>) -> Result<T, PitchErr>,
{
    let shape = onehot.shape().to_vec();
    if shape.len() < inner {
        return Err(PitchErr::ShapeMismatch("from_onehot", shape, vec![0; inner]));
    }
    let (outer, _) = shape.split_at(shape.len() - inner);
    let count: usize = outer.iter().product();
    let mut flat_shape = vec![count];
    flat_shape.extend_from_slice(&shape[shape.len() - inner..]);
    let flat = onehot
        .to_shape(IxDyn(&flat_shape))
        .map_err(|_| PitchErr::ShapeMismatch("from_onehot", shape.clone(), flat_shape.clone()))?;
    let elements = flat
        .outer_iter()
        .map(&mut f)
        .collect::<Result<Vec<T>, PitchErr>>()?;
    let elements = Array::from_shape_vec(IxDyn(outer), elements)
        .map_err(|_| PitchErr::ShapeMismatch("from_onehot", shape.clone(), outer.to_vec()))?;
    Ok(SpelledArray { elements })
}

fn as_vector<E>(x: ArrayViewD<E>) -> Result<ArrayView1<E>, PitchErr> {
    let shape = x.shape().to_vec();
    x.into_dimensionality()
        .map_err(|_| PitchErr::ShapeMismatch("from_onehot", shape, vec![0]))
}

fn as_matrix<E>(x: ArrayViewD<E>) -> Result<ArrayView2<E>, PitchErr> {
    let shape = x.shape().to_vec();
    x.into_dimensionality()
        .map_err(|_| PitchErr::ShapeMismatch("from_onehot", shape, vec![0, 0]))
}

impl<D: Dimension> SpelledIntervalArray<D> {
    /// One-hot encoding with two trailing axes, for fifths and notated octaves.
    pub fn onehot<E: Zero + One + Clone>(
        &self,
        fifth_range: (i64, i64),
        octave_range: (i64, i64),
    ) -> Result<ArrayD<E>, PitchErr> {
        self.encode(fifth_range, Some(octave_range))
    }
}

impl<D: Dimension> SpelledPitchArray<D> {
    /// One-hot encoding with two trailing axes, for fifths and notated octaves.
    pub fn onehot<E: Zero + One + Clone>(
        &self,
        fifth_range: (i64, i64),
        octave_range: (i64, i64),
    ) -> Result<ArrayD<E>, PitchErr> {
        self.encode(fifth_range, Some(octave_range))
    }
}

impl<D: Dimension> SpelledIntervalClassArray<D> {
    /// One-hot encoding with a trailing axis for fifths.
    pub fn onehot<E: Zero + One + Clone>(&self, fifth_range: (i64, i64)) -> Result<ArrayD<E>, PitchErr> {
        self.encode(fifth_range, None)
    }
}

impl<D: Dimension> SpelledPitchClassArray<D> {
    /// One-hot encoding with a trailing axis for fifths.
    pub fn onehot<E: Zero + One + Clone>(&self, fifth_range: (i64, i64)) -> Result<ArrayD<E>, PitchErr> {
        self.encode(fifth_range, None)
    }
}

impl SpelledIntervalArray<IxDyn> {
    pub fn from_onehot<E: Zero + Clone>(
        onehot: ArrayViewD<E>,
        fifth_low: i64,
        octave_low: i64,
    ) -> Result<Self, PitchErr> {
        decode(onehot, 2, |m| {
            let (f, o) = decode_matrix(as_matrix(m)?, fifth_low, octave_low)?;
            Ok(SpelledInterval::from_independent(f, o))
        })
    }
}

impl SpelledPitchArray<IxDyn> {
    pub fn from_onehot<E: Zero + Clone>(
        onehot: ArrayViewD<E>,
        fifth_low: i64,
        octave_low: i64,
    ) -> Result<Self, PitchErr> {
        decode(onehot, 2, |m| {
            let (f, o) = decode_matrix(as_matrix(m)?, fifth_low, octave_low)?;
            Ok(SpelledPitch::from_independent(f, o))
        })
    }
}

impl SpelledIntervalClassArray<IxDyn> {
    pub fn from_onehot<E: Zero + Clone>(onehot: ArrayViewD<E>, fifth_low: i64) -> Result<Self, PitchErr> {
        decode(onehot, 1, |v| {
            decode_vector(as_vector(v)?, fifth_low).map(SpelledIntervalClass::from_fifths)
        })
    }
}

impl SpelledPitchClassArray<IxDyn> {
    pub fn from_onehot<E: Zero + Clone>(onehot: ArrayViewD<E>, fifth_low: i64) -> Result<Self, PitchErr> {
        decode(onehot, 1, |v| {
            decode_vector(as_vector(v)?, fifth_low).map(SpelledPitchClass::from_fifths)
        })
    }
}

impl<'a, T, U, D> ops::Add<&'a SpelledArray<U, D>> for &'a SpelledArray<T, D>
where
    T: Copy + ops::Add<U>,
    U: Copy,
    D: Dimension,
{
    type Output = SpelledArray<T::Output, D>;
    fn add(self, other: &'a SpelledArray<U, D>) -> Self::Output {
        self.zip_with(other, |a, b| a + b)
    }
}

impl<'a, T, U, D> ops::Sub<&'a SpelledArray<U, D>> for &'a SpelledArray<T, D>
where
    T: Copy + ops::Sub<U>,
    U: Copy,
    D: Dimension,
{
    type Output = SpelledArray<T::Output, D>;
    fn sub(self, other: &'a SpelledArray<U, D>) -> Self::Output {
        self.zip_with(other, |a, b| a - b)
    }
}

impl<T, D> ops::Neg for &SpelledArray<T, D>
where
    T: Copy + ops::Neg<Output = T>,
    D: Dimension,
{
    type Output = SpelledArray<T, D>;
    fn neg(self) -> SpelledArray<T, D> {
        SpelledArray {
            elements: self.map(|x| -x),
        }
    }
}

impl<T, D> ops::Mul<i64> for &SpelledArray<T, D>
where
    T: Copy + ops::Mul<i64, Output = T>,
    D: Dimension,
{
    type Output = SpelledArray<T, D>;
    fn mul(self, factor: i64) -> SpelledArray<T, D> {
        SpelledArray {
            elements: self.map(|x| x * factor),
        }
    }
}

impl<'a, T, D> ops::Mul<&'a Array<i64, D>> for &'a SpelledArray<T, D>
where
    T: Copy + ops::Mul<i64, Output = T>,
    D: Dimension,
{
    type Output = SpelledArray<T, D>;
    fn mul(self, factors: &'a Array<i64, D>) -> SpelledArray<T, D> {
        SpelledArray {
            elements: Zip::from(&self.elements)
                .and(factors)
                .map_collect(|&x, &n| x * n),
        }
    }
}

impl<T: fmt::Display + Copy, D: Dimension> fmt::Display for SpelledArray<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;
    use ndarray::{arr1, arr2, Ix1, Ix2};
    use pretty_assertions::assert_eq;

    fn intervals(names: &[&str]) -> SpelledIntervalArray<Ix1> {
        SpelledArray::from_strings(&arr1(names)).unwrap()
    }

    fn pitches(names: &[&str]) -> SpelledPitchArray<Ix1> {
        SpelledArray::from_strings(&arr1(names)).unwrap()
    }

    #[test]
    fn test_from_strings() {
        let a: SpelledIntervalArray<Ix2> =
            SpelledArray::from_strings(&arr2(&[["M3:0", "-m2:1"], ["P1:0", "a4:2"]])).unwrap();
        assert_eq!(a.shape(), &[2, 2]);
        assert_eq!(a.get([1, 1]), Some("a4:2".parse().unwrap()));
        assert_eq!(a.get([2, 0]), None);
        assert_eq!(
            a.names(),
            arr2(&[["M3:0", "-m2:1"], ["P1:0", "a4:2"]]).mapv(String::from)
        );
        assert_eq!(a.to_string(), "[[M3:0, -m2:1],\n [P1:0, a4:2]]");

        let err = SpelledIntervalArray::<Ix1>::from_strings(&arr1(&["M3:0", "M3"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_construction() {
        let a = SpelledIntervalArray::from_independent(&arr1(&[2, -3]), &arr1(&[0, 1])).unwrap();
        assert_eq!(a, intervals(&["M2:0", "m3:1"]));
        let b = SpelledIntervalArray::from_fifths_and_octaves(&arr1(&[2, -3]), &arr1(&[-1, 3]))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(b.internal_octaves(), arr1(&[-1, 3]));
        assert_eq!(
            SpelledIntervalArray::from_independent(&arr1(&[0, 0]), &arr1(&[0])),
            Err(PitchErr::ShapeMismatch("from_independent", vec![2], vec![1]))
        );

        let p = SpelledPitchArray::from_independent(&arr1(&[0, -3]), &arr1(&[4, 2])).unwrap();
        assert_eq!(p, pitches(&["C4", "Eb2"]));
        assert_eq!(
            SpelledPitchClassArray::from_fifths(&arr1(&[1, 7])).names(),
            arr1(&["G", "C#"]).mapv(String::from)
        );

        assert_eq!(
            SpelledIntervalArray::<Ix2>::unison((2, 3)).fifths(),
            Array::<i64, _>::zeros((2, 3))
        );
        assert_eq!(
            SpelledIntervalArray::octave(2),
            intervals(&["P1:1", "P1:1"])
        );
        assert_eq!(
            SpelledIntervalArray::chromatic_semitone(1),
            intervals(&["a1:0"])
        );
        assert_eq!(
            SpelledIntervalClassArray::chromatic_semitone(1).names(),
            arr1(&["a1"]).mapv(String::from)
        );
    }

    #[test]
    fn test_accessors() {
        let a = intervals(&["m3:1", "-M3:1", "-P4:0", "a4:0", "-a1:0"]);
        assert_eq!(a.fifths(), arr1(&[-3, -4, 1, 6, -7]));
        assert_eq!(a.octaves(), arr1(&[1, -2, -1, 0, 0]));
        assert_eq!(a.degree(), arr1(&[2, 5, 4, 3, 0]));
        assert_eq!(a.generic(), arr1(&[2, -2, -3, 3, 0]));
        assert_eq!(a.diatonic_steps(), arr1(&[9, -9, -3, 3, 0]));
        assert_eq!(a.alteration(), arr1(&[-1, 0, 0, 1, 1]));
        assert_eq!(
            a.direction(),
            arr1(&[
                Ordering::Greater,
                Ordering::Less,
                Ordering::Less,
                Ordering::Greater,
                Ordering::Less
            ])
        );
        assert_eq!(a.abs(), intervals(&["m3:1", "M3:1", "P4:0", "a4:0", "a1:0"]));
        assert_eq!(a.is_step(), arr1(&[false, false, false, false, true]));
        assert_eq!(
            a.to_class().names(),
            arr1(&["m3", "m6", "P5", "a4", "d1"]).mapv(String::from)
        );

        let p = pitches(&["C4", "Eb3", "F##-2"]);
        assert_eq!(p.letters(), arr1(&['C', 'E', 'F']));
        assert_eq!(p.alteration(), arr1(&[0, -1, 2]));
        assert_eq!(p.to_class().letters(), arr1(&['C', 'E', 'F']));
    }

    #[test]
    fn test_arithmetic() {
        let a = intervals(&["m3:0", "M2:1"]);
        let b = intervals(&["M3:0", "-M2:0"]);
        assert_eq!(&a + &b, intervals(&["P5:0", "P1:1"]));
        assert_eq!(&a - &b, intervals(&["-a1:0", "M3:1"]));
        assert_eq!(-&a, intervals(&["-m3:0", "-M2:1"]));
        assert_eq!(&a * 2, intervals(&["d5:0", "M3:2"]));
        assert_eq!(&a * &arr1(&[0, -1]), intervals(&["P1:0", "-M2:1"]));

        let p = pitches(&["C4", "E4"]);
        assert_eq!(&p + &a, pitches(&["Eb4", "F#5"]));
        assert_eq!(&p - &a, pitches(&["A3", "D3"]));
        let q = pitches(&["E4", "C4"]);
        assert_eq!(&q - &p, intervals(&["M3:0", "-M3:0"]));
        assert_eq!(q.interval_from(&p), &q - &p);
        assert_eq!(
            p.to_class().interval_from(&q.to_class()).names(),
            arr1(&["m6", "M3"]).mapv(String::from)
        );
    }

    #[test]
    fn test_classes() {
        let ic = SpelledIntervalClassArray::from_strings(&arr1(&["M3", "-M3", "P1"])).unwrap();
        assert_eq!(
            ic.names(),
            arr1(&["M3", "m6", "P1"]).mapv(String::from)
        );
        assert_eq!(
            ic.embed(&arr1(&[0, 1, 2])).unwrap(),
            intervals(&["M3:0", "m6:1", "P1:2"])
        );
        assert_eq!(ic.is_step(), arr1(&[false, false, true]));

        let pc = SpelledPitchClassArray::from_strings(&arr1(&["Eb", "F#"])).unwrap();
        assert_eq!(pc.embed(&arr1(&[3, 5])).unwrap(), pitches(&["Eb3", "F#5"]));
    }

    #[test]
    fn test_comparison() {
        let a = intervals(&["P4:0", "d5:0", "M3:1"]);
        let b = intervals(&["a4:0", "a4:0", "M3:1"]);
        assert_eq!(
            a.compare(&b),
            arr1(&[Ordering::Less, Ordering::Greater, Ordering::Equal])
        );
        assert_eq!(
            a.compare_with(&"d5:0".parse().unwrap()),
            arr1(&[Ordering::Less, Ordering::Equal, Ordering::Greater])
        );
        assert!(a.contains(&"M3:1".parse().unwrap()));
        assert!(!a.contains(&"M3:0".parse().unwrap()));
    }

    #[test]
    fn test_indexing() {
        let mut a: SpelledPitchArray<Ix2> =
            SpelledArray::from_strings(&arr2(&[["C4", "D4"], ["E4", "F4"], ["G4", "A4"]])).unwrap();
        if let Some(x) = a.get_mut([0, 1]) {
            *x = "Db4".parse().unwrap();
        }
        assert_eq!(a.get([0, 1]), Some("Db4".parse().unwrap()));
        let rows = a.select(Axis(0), &[2, 0]);
        assert_eq!(
            rows.names(),
            arr2(&[["G4", "A4"], ["C4", "Db4"]]).mapv(String::from)
        );
        assert_eq!(a.len(), 6);
        assert_eq!(a.iter().count(), 6);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_onehot() {
        let a: SpelledIntervalArray<Ix1> = intervals(&["M2:1", "-m3:0"]);
        let m = a.onehot::<u8>((0, 3), (-1, 1)).unwrap();
        assert_eq!(m.shape(), &[2, 4, 3]);
        assert_eq!(m[[0, 2, 2]], 1);
        assert_eq!(m[[1, 3, 0]], 1);
        assert_eq!(m.sum(), 2);
        let back = SpelledIntervalArray::from_onehot(m.view(), 0, -1).unwrap();
        assert_eq!(back.into_elements().into_dimensionality::<Ix1>().unwrap(), a.into_elements());

        let pcs = SpelledPitchClassArray::from_strings(&arr2(&[["G", "C"], ["F", "D"]])).unwrap();
        let m = pcs.onehot::<u8>((-1, 2)).unwrap();
        assert_eq!(m.shape(), &[2, 2, 4]);
        let back = SpelledPitchClassArray::from_onehot(m.view(), -1).unwrap();
        assert_eq!(back.names().into_raw_vec(), vec!["G", "C", "F", "D"]);

        assert_eq!(
            pcs.onehot::<u8>((0, 2)),
            Err(PitchErr::IndexOutOfRange("fifths", -1, 0, 2))
        );
        let bad = ArrayD::<u8>::zeros(IxDyn(&[2, 3]));
        assert_eq!(
            SpelledPitchClassArray::from_onehot(bad.view(), 0).unwrap_err(),
            PitchErr::NotOneHot("from_onehot", 0)
        );
    }
}
