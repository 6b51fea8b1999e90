//! Judge wire protocol.
//!
//! ```text
//! bootstrap:  W H            building size
//!             N              turn budget
//!             X0 Y0          starting window
//! each turn:  <- DIR         U UR R DR D DL L UL | FOUND
//!             -> X Y         next window, newline terminated
//! ```
//!
//! Bootstrap integers are whitespace separated; line breaks carry no meaning.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use knight_types::{Bounds, Coordinate, Feedback, InvalidArgument, TurnBudget, start_position};

use crate::error::{DataIntegrityError, GameError};

/// Whitespace-delimited token stream over a line reader.
#[derive(Debug)]
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn read_int(&mut self, field: &'static str) -> Result<i64, GameError> {
        let token = self
            .next_token()?
            .ok_or(InvalidArgument::Missing { field })?;
        token
            .parse()
            .map_err(|_| InvalidArgument::NotAnInteger { field, token }.into())
    }

    /// Next feedback token; `None` when the judge closed the stream.
    pub fn read_feedback(&mut self) -> Result<Option<Feedback>, GameError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        let feedback = token.parse().map_err(DataIntegrityError::from)?;
        Ok(Some(feedback))
    }
}

/// Validated session header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bootstrap {
    pub bounds: Bounds,
    pub turns: TurnBudget,
    pub start: Coordinate,
}

impl Bootstrap {
    pub fn read<R: BufRead>(reader: &mut TokenReader<R>) -> Result<Self, GameError> {
        let width = reader.read_int("building width")?;
        let height = reader.read_int("building height")?;
        let bounds = Bounds::new(width, height)?;

        let turns = TurnBudget::new(reader.read_int("turns")?)?;

        let x = reader.read_int("start x")?;
        let y = reader.read_int("start y")?;
        let start = start_position(&bounds, x, y)?;

        Ok(Self {
            bounds,
            turns,
            start,
        })
    }
}

/// Emit one probe and flush so the judge can answer.
pub fn write_probe<W: Write>(out: &mut W, probe: Coordinate) -> io::Result<()> {
    writeln!(out, "{probe}")?;
    out.flush()
}
