use crate::error::PitchErr;

/// A position in a string that is being parsed, with helpers that produce
/// [PitchErr::MalformedInput] errors pointing at the right place.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is next.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume a run of `c`, returning its length.
    pub fn eat_run(&mut self, c: char) -> i64 {
        let mut n = 0;
        while self.eat(c) {
            n += 1;
        }
        n
    }

    pub fn expect(&mut self, c: char, expected: &'static str) -> Result<(), PitchErr> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    /// An optionally negative decimal integer.
    pub fn integer(&mut self) -> Result<i64, PitchErr> {
        let start = self.pos;
        self.eat('-');
        if self.digits() == 0 {
            return Err(self.error("an integer"));
        }
        self.input[start..self.pos]
            .parse()
            .map_err(|_| self.error_at(start, "an integer that fits into 64 bits"))
    }

    /// An octave number. Octaves are limited to 32 bits so that arithmetic on the parsed value
    /// can't overflow.
    pub fn octave(&mut self) -> Result<i64, PitchErr> {
        let start = self.pos;
        let n = self.integer()?;
        i32::try_from(n)
            .map(i64::from)
            .map_err(|_| self.error_at(start, "an octave number that fits into 32 bits"))
    }

    /// An unsigned decimal number with an optional fractional part, like `440`, `1.5`, or `.5`.
    pub fn decimal(&mut self) -> Result<f64, PitchErr> {
        let start = self.pos;
        let mut n = self.digits();
        if self.eat('.') {
            n += self.digits();
        }
        if n == 0 {
            self.pos = start;
            return Err(self.error("a decimal number"));
        }
        self.input[start..self.pos]
            .parse()
            .map_err(|_| self.error_at(start, "a decimal number"))
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume everything up to the end of the input.
    pub fn rest(&mut self) -> &'a str {
        let rest = &self.input[self.pos..];
        self.pos = self.input.len();
        rest
    }

    pub fn finish(&self) -> Result<(), PitchErr> {
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(self.error("end of input"))
        }
    }

    pub fn error(&self, expected: &'static str) -> PitchErr {
        self.error_at(self.pos, expected)
    }

    pub fn error_at(&self, position: usize, expected: &'static str) -> PitchErr {
        PitchErr::MalformedInput {
            input: self.input.to_owned(),
            position,
            found: self.input[position..].to_owned(),
            expected,
        }
    }
}
