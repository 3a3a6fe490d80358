//! Just intervals as vectors of prime exponents.
//!
//! A [HarmonicInterval] `[a, b, c, ...]` is the frequency ratio `2^a * 3^b * 5^c * ...`. Its
//! class forgets the exponent of 2, so a [HarmonicIntervalClass] `[b, c, ...]` starts at the
//! prime 3. Trailing zero exponents are insignificant and never stored: `[1, 0]` is `[1]`, and
//! the unison is `[]`.
//!
//! Exponent vectors aren't [Copy], so these types don't implement the
//! [Interval][crate::interval::Interval] contract; they offer the same operations as inherent
//! methods and operators on values and references.
use std::{cmp::Ordering, f64::consts::LN_2, fmt, ops, str::FromStr};

use ndarray::{s, Array1, ArrayView1};

use crate::{
    error::PitchErr,
    interval::Interval,
    logfreq::{LogFreqInterval, LogFreqIntervalClass},
    spelled::{Spelled, SpelledInterval, SpelledIntervalClass},
    util::cursor::Cursor,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HarmonicInterval {
    exponents: Array1<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HarmonicIntervalClass {
    exponents: Array1<i64>,
}

/// The first `n` primes.
fn primes(n: usize) -> Vec<u64> {
    let mut res: Vec<u64> = Vec::with_capacity(n);
    let mut candidate = 2;
    while res.len() < n {
        if res
            .iter()
            .take_while(|p| *p * *p <= candidate)
            .all(|p| candidate % p != 0)
        {
            res.push(candidate);
        }
        candidate += 1;
    }
    res
}

/// `skip` is the number of leading primes that have no exponent.
fn log_ratio(exponents: &Array1<i64>, skip: usize) -> f64 {
    let primes = primes(exponents.len() + skip);
    exponents
        .iter()
        .zip(&primes[skip..])
        .map(|(&e, &p)| e as f64 * (p as f64).ln())
        .sum()
}

fn trimmed(exponents: Array1<i64>) -> Array1<i64> {
    let len = exponents
        .iter()
        .rposition(|&e| e != 0)
        .map_or(0, |k| k + 1);
    exponents.slice_move(s![..len])
}

fn zip_padded(a: &Array1<i64>, b: &Array1<i64>, f: impl Fn(i64, i64) -> i64) -> Array1<i64> {
    let at = |v: &Array1<i64>, k: usize| v.get(k).copied().unwrap_or(0);
    Array1::from_shape_fn(a.len().max(b.len()), |k| f(at(a, k), at(b, k)))
}

impl HarmonicInterval {
    /// The exponents of 2, 3, 5, 7, ... in this order.
    pub fn new<I: IntoIterator<Item = i64>>(exponents: I) -> Self {
        Self::from_array(exponents.into_iter().collect())
    }

    pub fn from_array(exponents: Array1<i64>) -> Self {
        Self {
            exponents: trimmed(exponents),
        }
    }

    pub fn exponents(&self) -> ArrayView1<'_, i64> {
        self.exponents.view()
    }

    pub fn unison() -> Self {
        Self::new([])
    }

    pub fn octave() -> Self {
        Self::new([1])
    }

    pub fn ratio(&self) -> f64 {
        self.log_ratio().exp()
    }

    pub fn log_ratio(&self) -> f64 {
        log_ratio(&self.exponents, 0)
    }

    pub fn direction(&self) -> Ordering {
        LogFreqInterval::from(self).direction()
    }

    pub fn abs(&self) -> Self {
        match self.direction() {
            Ordering::Less => -self,
            _ => self.clone(),
        }
    }

    /// Drops the exponent of 2.
    pub fn to_class(&self) -> HarmonicIntervalClass {
        HarmonicIntervalClass::new(self.exponents.iter().skip(1).copied())
    }
}

impl HarmonicIntervalClass {
    /// The exponents of 3, 5, 7, ... in this order.
    pub fn new<I: IntoIterator<Item = i64>>(exponents: I) -> Self {
        Self::from_array(exponents.into_iter().collect())
    }

    pub fn from_array(exponents: Array1<i64>) -> Self {
        Self {
            exponents: trimmed(exponents),
        }
    }

    pub fn exponents(&self) -> ArrayView1<'_, i64> {
        self.exponents.view()
    }

    pub fn unison() -> Self {
        Self::new([])
    }

    /// The ratio of the representative within the first octave, in `[1, 2)`.
    pub fn ratio(&self) -> f64 {
        LogFreqIntervalClass::from(self).ratio()
    }

    /// Classes up to half an octave go up.
    pub fn direction(&self) -> Ordering {
        LogFreqIntervalClass::from(self).direction()
    }

    /// The interval of this class whose ratio lies in `[2^octaves, 2^(octaves + 1))`.
    pub fn embed(&self, octaves: i64) -> HarmonicInterval {
        let span = (log_ratio(&self.exponents, 1) / LN_2).floor() as i64;
        HarmonicInterval::new(
            std::iter::once(octaves - span).chain(self.exponents.iter().copied()),
        )
    }
}

/// Ordered by size. Distinct exponent vectors never have the same ratio, but rounding can make
/// their logarithms coincide, so the exponents break ties.
impl Ord for HarmonicInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        LogFreqInterval::from(self)
            .cmp(&LogFreqInterval::from(other))
            .then_with(|| self.exponents.iter().cmp(other.exponents.iter()))
    }
}

impl PartialOrd for HarmonicInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by the size of the representative within the first octave.
impl Ord for HarmonicIntervalClass {
    fn cmp(&self, other: &Self) -> Ordering {
        LogFreqIntervalClass::from(self)
            .cmp(&LogFreqIntervalClass::from(other))
            .then_with(|| self.exponents.iter().cmp(other.exponents.iter()))
    }
}

impl PartialOrd for HarmonicIntervalClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! harmonic_ops {
    ($t:ident) => {
        impl ops::Add<&$t> for &$t {
            type Output = $t;
            fn add(self, other: &$t) -> $t {
                $t::from_array(zip_padded(&self.exponents, &other.exponents, |a, b| a + b))
            }
        }

        impl ops::Add for $t {
            type Output = $t;
            fn add(self, other: $t) -> $t {
                &self + &other
            }
        }

        impl ops::Sub<&$t> for &$t {
            type Output = $t;
            fn sub(self, other: &$t) -> $t {
                $t::from_array(zip_padded(&self.exponents, &other.exponents, |a, b| a - b))
            }
        }

        impl ops::Sub for $t {
            type Output = $t;
            fn sub(self, other: $t) -> $t {
                &self - &other
            }
        }

        impl ops::Neg for &$t {
            type Output = $t;
            fn neg(self) -> $t {
                $t::from_array(self.exponents.mapv(|e| -e))
            }
        }

        impl ops::Neg for $t {
            type Output = $t;
            fn neg(self) -> $t {
                -&self
            }
        }

        impl ops::Mul<i64> for &$t {
            type Output = $t;
            fn mul(self, factor: i64) -> $t {
                $t::from_array(self.exponents.mapv(|e| e * factor))
            }
        }

        impl ops::Mul<i64> for $t {
            type Output = $t;
            fn mul(self, factor: i64) -> $t {
                &self * factor
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (k, e) in self.exponents.iter().enumerate() {
                    if k > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{e}")?;
                }
                write!(f, "]")
            }
        }

        /// A bracketed, comma separated list of integers like `[1, -2, 3]`. Whitespace is
        /// ignored between tokens.
        impl FromStr for $t {
            type Err = PitchErr;
            fn from_str(s: &str) -> Result<Self, PitchErr> {
                parse_exponents(s).map($t::new)
            }
        }
    };
}

harmonic_ops!(HarmonicInterval);
harmonic_ops!(HarmonicIntervalClass);

fn skip_whitespace(cursor: &mut Cursor) {
    while cursor.peek().is_some_and(char::is_whitespace) {
        cursor.bump();
    }
}

fn parse_exponents(s: &str) -> Result<Vec<i64>, PitchErr> {
    let mut cursor = Cursor::new(s);
    let mut exponents = vec![];
    skip_whitespace(&mut cursor);
    cursor.expect('[', "'[' and a list of exponents")?;
    skip_whitespace(&mut cursor);
    if !cursor.eat(']') {
        loop {
            skip_whitespace(&mut cursor);
            exponents.push(cursor.integer()?);
            skip_whitespace(&mut cursor);
            if cursor.eat(',') {
                continue;
            }
            cursor.expect(']', "',' or ']'")?;
            break;
        }
    }
    skip_whitespace(&mut cursor);
    cursor.finish()?;
    Ok(exponents)
}

/// Pythagorean tuning: every fifth is `3/2`.
impl From<SpelledInterval> for HarmonicInterval {
    fn from(i: SpelledInterval) -> Self {
        Self::new([i.internal_octaves() - i.fifths(), i.fifths()])
    }
}

impl From<SpelledIntervalClass> for HarmonicIntervalClass {
    fn from(ic: SpelledIntervalClass) -> Self {
        Self::new([ic.fifths()])
    }
}

impl From<&HarmonicInterval> for LogFreqInterval {
    fn from(i: &HarmonicInterval) -> Self {
        LogFreqInterval::from_log_freq(i.log_ratio())
    }
}

impl From<&HarmonicIntervalClass> for LogFreqIntervalClass {
    fn from(ic: &HarmonicIntervalClass) -> Self {
        LogFreqIntervalClass::from_log_freq(log_ratio(&ic.exponents, 1))
    }
}
