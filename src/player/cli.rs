#![cfg(feature = "std")]

use std::fmt;
use std::io::{BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use super::{Player, PlayerError};
use crate::common::Coordinate;

/// Why a line typed by the player is not a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetParseError {
    /// Not exactly two tokens; carries the count seen.
    WrongArity(usize),
    /// A token that is not a non-negative integer.
    NotANumber(String),
}

impl fmt::Display for TargetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetParseError::WrongArity(n) => {
                write!(f, "Enter 2 coordinates (got {})", n)
            }
            TargetParseError::NotANumber(token) => {
                write!(f, "Enter numbers ('{}' is not one)", token)
            }
        }
    }
}

impl std::error::Error for TargetParseError {}

/// Parse `"row col"` in 1-based numbering into a zero-based coordinate.
///
/// Only the shape is checked. `0 3` parses to `(-1, 2)` and is left for the
/// grid to reject as out of bounds.
pub fn parse_target(line: &str) -> Result<Coordinate, TargetParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[row, col] = tokens.as_slice() else {
        return Err(TargetParseError::WrongArity(tokens.len()));
    };
    let number = |token: &str| -> Result<i32, TargetParseError> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TargetParseError::NotANumber(token.to_string()));
        }
        token
            .parse::<i32>()
            .map_err(|_| TargetParseError::NotANumber(token.to_string()))
    };
    Ok(Coordinate::new(number(row)? - 1, number(col)? - 1))
}

/// A player typing targets on a line-oriented input.
///
/// Generic over the streams so the game can run on stdin/stdout and tests on
/// in-memory buffers.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Player reading from the process's stdin.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the output stream, e.g. to inspect prompts in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, PlayerError> {
        let io_err = |e: std::io::Error| PlayerError::Input(e.to_string());
        write!(self.output, "Your move: ").map_err(io_err)?;
        self.output.flush().map_err(io_err)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_err)?;
        if read == 0 {
            return Err(PlayerError::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, _size: usize) -> Result<Coordinate, PlayerError> {
        loop {
            let line = self.read_line()?;
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => {
                    writeln!(self.output, " {} ", e).map_err(|e| PlayerError::Input(e.to_string()))?;
                }
            }
        }
    }
}
