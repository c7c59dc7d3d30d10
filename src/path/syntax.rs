use crate::errors::{Error, Result};
use crate::geometry::{pt, Point};

const COMMANDS: &str = "MmLlHhVvZzCcSsQqTtAa";

/// Character-level tokenizer for SVG path data.
pub struct PathSyntax {
    data: Vec<char>,
    index: usize,
}

impl PathSyntax {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    pub fn at_command(&self) -> Result<bool> {
        let c = self.current().ok_or_else(|| self.err("ran out of data"))?;
        Ok(COMMANDS.contains(c))
    }

    fn err(&self, reason: &str) -> Error {
        Error::MalformedInput(format!("path data: {reason} at offset {}", self.index))
    }

    fn check_not_end(&self) -> Result<()> {
        if self.at_end() {
            Err(self.err("ran out of data"))
        } else {
            Ok(())
        }
    }

    pub fn skip_whitespace(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's is_ascii_whitespace()
        // also includes 0xC, but is close enough and convenient.
        while matches!(self.current(), Some(c) if c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if self.current() == Some(',') {
            self.advance();
            self.skip_whitespace();
        }
    }

    pub fn read_flag(&mut self) -> Result<bool> {
        self.check_not_end()?;
        // per the grammar for `a`/`A`, could have '00' etc for
        // the two adjacent flags...
        let res = match self.current() {
            Some('0') => false,
            Some('1') => true,
            Some(other) => return Err(self.err(&format!("invalid flag '{other}'"))),
            None => return Err(self.err("ran out of data")),
        };
        self.advance();
        self.skip_wsp_comma();
        Ok(res)
    }

    pub fn read_number(&mut self) -> Result<f32> {
        self.check_not_end()?;
        let mut mult = 1.;
        match self.current() {
            Some('-') => {
                mult = -1.;
                self.advance();
            }
            Some('+') => {
                self.advance();
            }
            _ => {}
        };
        Ok(mult * self.read_non_negative()?)
    }

    pub fn read_non_negative(&mut self) -> Result<f32> {
        self.check_not_end()?;
        let mut s = String::new();
        let mut dot_valid = true;
        let mut exp_valid = true;
        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => {
                    s.push(ch);
                    self.advance();
                }
                '.' if dot_valid => {
                    s.push(ch);
                    self.advance();
                    dot_valid = false;
                }
                'e' | 'E' if exp_valid && s.ends_with(|c: char| c.is_ascii_digit()) => {
                    s.push(ch);
                    self.advance();
                    // include sign character if present
                    if let Some(sign @ ('-' | '+')) = self.current() {
                        s.push(sign);
                        self.advance();
                    }
                    exp_valid = false;
                    dot_valid = false;
                }
                _ => break,
            }
        }
        if s.is_empty() {
            return Err(self.err("expected a number"));
        }
        let value = s
            .parse()
            .map_err(|_| self.err(&format!("invalid number '{s}'")))?;
        self.skip_wsp_comma();
        Ok(value)
    }

    pub fn read_coord(&mut self) -> Result<Point> {
        let x = self.read_number()?;
        self.skip_wsp_comma();
        let y = self.read_number()?;
        self.skip_wsp_comma();
        Ok(pt(x, y))
    }

    pub fn read_command(&mut self) -> Result<char> {
        if self.at_command()? {
            let command = self.current().ok_or_else(|| self.err("ran out of data"))?;
            self.advance();
            self.skip_whitespace();
            Ok(command)
        } else {
            let found = self.current().map(|c| c.to_string()).unwrap_or_default();
            Err(self.err(&format!("invalid path command '{found}'")))
        }
    }
}
