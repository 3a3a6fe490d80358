use std::{cmp::Ordering, fmt, str::FromStr};

use num_integer::Integer;

use super::{
    Spelled, SpelledInterval, SpelledIntervalClass, SpelledPitch, SpelledPitchClass,
};
use crate::{error::PitchErr, interval::Interval, util::cursor::Cursor};

/// The natural pitch classes, ordered on the line of fifths from F (-1) to B (5).
const PITCH_LETTERS: [char; 7] = ['F', 'C', 'G', 'D', 'A', 'E', 'B'];

/// The position of a natural pitch class on the line of fifths.
pub(crate) fn letter_fifths(letter: char) -> Option<i64> {
    PITCH_LETTERS
        .iter()
        .position(|&l| l == letter)
        .map(|i| i as i64 - 1)
}

fn write_pitch_class<W: fmt::Write>(f: &mut W, fifths: i64) -> fmt::Result {
    write!(f, "{}", PITCH_LETTERS[(fifths + 1).mod_floor(&7) as usize])?;
    let accidentals = Integer::div_floor(&(fifths + 1), &7);
    let sign = if accidentals > 0 { '#' } else { 'b' };
    for _ in 0..accidentals.abs() {
        write!(f, "{}", sign)?;
    }
    Ok(())
}

fn write_interval_class<W: fmt::Write>(f: &mut W, fifths: i64) -> fmt::Result {
    match fifths {
        -5..=-2 => write!(f, "m")?,
        -1..=1 => write!(f, "P")?,
        2..=5 => write!(f, "M")?,
        6.. => {
            for _ in 0..Integer::div_floor(&(fifths + 1), &7) {
                write!(f, "a")?;
            }
        }
        _ => {
            for _ in 0..Integer::div_floor(&(1 - fifths), &7) {
                write!(f, "d")?;
            }
        }
    }
    write!(f, "{}", (4 * fifths).mod_floor(&7) + 1)
}

impl fmt::Display for SpelledPitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pitch_class(f, self.fifths)
    }
}

impl fmt::Display for SpelledPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pitch_class(f, self.fifths)?;
        write!(f, "{}", self.octaves())
    }
}

impl fmt::Display for SpelledIntervalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interval_class(f, self.fifths)
    }
}

/// Downward intervals are written as the negation of the upward interval, so the octave count
/// is never negative.
impl fmt::Display for SpelledInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let up = match self.direction() {
            Ordering::Less => {
                write!(f, "-")?;
                -*self
            }
            _ => *self,
        };
        write_interval_class(f, up.fifths)?;
        write!(f, ":{}", up.octaves())
    }
}

/// `letter accidental*`, where all accidentals are of the same kind. Returns the position on the
/// line of fifths.
pub(crate) fn parse_pitch_class(cursor: &mut Cursor) -> Result<i64, PitchErr> {
    let start = cursor.position();
    let natural = cursor
        .bump()
        .and_then(letter_fifths)
        .ok_or_else(|| cursor.error_at(start, "a note letter from A to G"))?;
    let mut accidentals: i64 = 0;
    loop {
        let step = match cursor.peek() {
            Some('#' | '♯') => 1,
            Some('b' | '♭') => -1,
            _ => break,
        };
        if accidentals * step < 0 {
            return Err(cursor.error("accidentals of one kind only (sharps or flats)"));
        }
        cursor.bump();
        accidentals += step;
    }
    Ok(natural + 7 * accidentals)
}

enum Quality {
    Perfect,
    Major,
    Minor,
    Augmented(i64),
    Diminished(i64),
}

/// `sign? quality generic`. Returns the sign and the position of the upward interval class on the
/// line of fifths.
fn parse_interval_class(cursor: &mut Cursor) -> Result<(i64, i64), PitchErr> {
    let sign = if cursor.eat('-') {
        -1
    } else {
        cursor.eat('+');
        1
    };

    let quality_start = cursor.position();
    let quality = match cursor.peek() {
        Some('P') => {
            cursor.bump();
            Quality::Perfect
        }
        Some('M') => {
            cursor.bump();
            Quality::Major
        }
        Some('m') => {
            cursor.bump();
            Quality::Minor
        }
        Some('a') => Quality::Augmented(cursor.eat_run('a')),
        Some('d') => Quality::Diminished(cursor.eat_run('d')),
        _ => return Err(cursor.error("an interval quality (d, m, P, M, or a)")),
    };

    let generic_start = cursor.position();
    let generic = match cursor.bump().and_then(|c| c.to_digit(10)) {
        Some(g @ 1..=7) => g as i64,
        _ => {
            return Err(cursor.error_at(generic_start, "a generic interval from 1 to 7"));
        }
    };

    // the perfect or major interval of this size
    let base = (2 * generic - 1).mod_floor(&7) - 1;
    let perfect = matches!(generic, 1 | 4 | 5);
    let fifths = match (quality, perfect) {
        (Quality::Perfect, true) | (Quality::Major, false) => base,
        (Quality::Minor, false) => base - 7,
        (Quality::Augmented(n), _) => base + 7 * n,
        (Quality::Diminished(n), true) => base - 7 * n,
        (Quality::Diminished(n), false) => base - 7 * (n + 1),
        (_, true) => {
            return Err(cursor.error_at(
                quality_start,
                "P, a, or d for unisons, fourths, and fifths",
            ))
        }
        (_, false) => {
            return Err(cursor.error_at(
                quality_start,
                "M, m, a, or d for seconds, thirds, sixths, and sevenths",
            ))
        }
    };

    Ok((sign, fifths))
}

impl FromStr for SpelledPitchClass {
    type Err = PitchErr;

    fn from_str(s: &str) -> Result<Self, PitchErr> {
        let mut cursor = Cursor::new(s);
        let fifths = parse_pitch_class(&mut cursor)?;
        cursor.finish()?;
        Ok(Self::from_fifths(fifths))
    }
}

impl FromStr for SpelledPitch {
    type Err = PitchErr;

    fn from_str(s: &str) -> Result<Self, PitchErr> {
        let mut cursor = Cursor::new(s);
        let fifths = parse_pitch_class(&mut cursor)?;
        let octave = cursor.octave()?;
        cursor.finish()?;
        Ok(Self::from_independent(fifths, octave))
    }
}

/// A leading `-` is accepted and yields the complementary class (`-M3` is `m6`).
impl FromStr for SpelledIntervalClass {
    type Err = PitchErr;

    fn from_str(s: &str) -> Result<Self, PitchErr> {
        let mut cursor = Cursor::new(s);
        let (sign, fifths) = parse_interval_class(&mut cursor)?;
        cursor.finish()?;
        Ok(Self::from_fifths(sign * fifths))
    }
}

impl FromStr for SpelledInterval {
    type Err = PitchErr;

    fn from_str(s: &str) -> Result<Self, PitchErr> {
        let mut cursor = Cursor::new(s);
        let (sign, fifths) = parse_interval_class(&mut cursor)?;
        cursor.expect(':', "':' and an octave number")?;
        let octaves = cursor.octave()?;
        cursor.finish()?;
        let up = Self::from_independent(fifths, octaves);
        Ok(if sign < 0 { -up } else { up })
    }
}
