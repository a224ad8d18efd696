//! Line-oriented console input with re-prompting.
//!
//! Every reader returns `Ok(None)` once stdin reaches EOF so the menu can
//! exit cleanly.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use thiserror::Error;

/// Why an answer was rejected. The message is shown before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("enter a value between {min} and {max}")]
    OutOfRange { min: u32, max: u32 },

    #[error("enter a value of at least {min}")]
    BelowMinimum { min: u32 },

    #[error("answer y or n")]
    NotYesNo,
}

pub fn parse_integer(raw: &str, range: &RangeInclusive<u32>) -> Result<u32, InputError> {
    let value: u32 = raw
        .parse()
        .map_err(|_| InputError::NotANumber(raw.to_string()))?;

    if range.contains(&value) {
        return Ok(value);
    }

    let (min, max) = (*range.start(), *range.end());
    if max == u32::MAX {
        Err(InputError::BelowMinimum { min })
    } else {
        Err(InputError::OutOfRange { min, max })
    }
}

pub fn parse_yes_no(raw: &str) -> Result<bool, InputError> {
    match raw.to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(InputError::NotYesNo),
    }
}

/// Prompts on `writer` and reads answers from `reader`.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Reads one trimmed line after showing `prompt`.
    pub fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Reads an integer within `range`, re-prompting until one is given.
    pub fn integer(
        &mut self,
        prompt: &str,
        range: RangeInclusive<u32>,
    ) -> io::Result<Option<u32>> {
        self.read_until_valid(prompt, |raw| parse_integer(raw, &range))
    }

    /// Reads a y/n answer, re-prompting until one is given.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        self.read_until_valid(prompt, parse_yes_no)
    }

    fn read_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(raw) = self.line(prompt)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.writer, "  Invalid input: {err}.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn integer_parsing_reports_the_reason() {
        assert_eq!(parse_integer("42", &(0..=80)), Ok(42));
        assert_eq!(
            parse_integer("-3", &(0..=80)),
            Err(InputError::NotANumber("-3".to_string()))
        );
        assert_eq!(
            parse_integer("81", &(0..=80)),
            Err(InputError::OutOfRange { min: 0, max: 80 })
        );
        assert_eq!(
            parse_integer("4", &(10..=u32::MAX)),
            Err(InputError::BelowMinimum { min: 10 })
        );
    }

    #[test]
    fn yes_no_is_case_insensitive() {
        assert_eq!(parse_yes_no("Y"), Ok(true));
        assert_eq!(parse_yes_no("no"), Ok(false));
        assert_eq!(parse_yes_no("maybe"), Err(InputError::NotYesNo));
    }

    #[test]
    fn integer_reprompts_until_valid() {
        let mut console = console("abc\n99\n  12 \n");
        assert_eq!(console.integer("pity? ", 0..=80).unwrap(), Some(12));

        let output = String::from_utf8(console.writer().clone()).unwrap();
        assert_eq!(output.matches("pity? ").count(), 3);
        assert!(output.contains("'abc' is not a whole number"));
        assert!(output.contains("between 0 and 80"));
    }

    #[test]
    fn eof_yields_none() {
        let mut console = console("x\n");
        assert_eq!(console.confirm("ok? ").unwrap(), None);
        assert_eq!(console.line("again? ").unwrap(), None);
    }
}
