//! The interactive flow behind `sortr sort run`.
//!
//! Prompts for an array size, reads that many whitespace-separated integers
//! (tokens may span lines), prints the array as entered, sorts it with
//! [`ExchangeSorter`] and prints it again. Malformed tokens fail fast with
//! [`Error::InvalidInput`] instead of reading on.
//!
//! The whole flow is generic over [`BufRead`] and [`Write`] so it can run
//! against captured buffers in tests exactly as it runs against the terminal.

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::io::{self, BufRead, Write};

use crate::sorters::{ExchangeSorter, Sorter};

/// Alias for `Result<T, session::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while reading the array from the terminal.
#[derive(Debug)]
pub enum Error {
    /// Raised when an IO error occurred.
    IoErr(io::Error),

    /// Raised when a token could not be parsed as the expected integer, or
    /// when input ended before the promised number of elements arrived.
    InvalidInput(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoErr(e) => write!(f, "IO error: {e}"),
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::IoErr(e) => Some(e),
            Error::InvalidInput(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoErr(e)
    }
}

// Hands out whitespace-separated tokens one at a time, pulling in further
// lines whenever the current one is exhausted.
struct Tokens<R> {
    reader: R,
    // Tokens of the current line, reversed so `pop` yields them in order.
    pending: Vec<String>,
}

impl<R> Tokens<R>
where
    R: BufRead,
{
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn next(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(Error::InvalidInput("unexpected end of input".to_owned()));
            }
            self.pending
                .extend(line.split_whitespace().rev().map(str::to_owned));
        }
    }

    fn next_size(&mut self) -> Result<usize> {
        let token = self.next()?;
        token.parse().map_err(|_| {
            Error::InvalidInput(format!("expected a non-negative array size, got `{token}`"))
        })
    }

    fn next_element(&mut self) -> Result<i64> {
        let token = self.next()?;
        token.parse().map_err(|_| {
            Error::InvalidInput(format!("expected an integer element, got `{token}`"))
        })
    }
}

// Each element is followed by a single space, so an empty array renders as
// the bare label.
fn render(label: &str, values: &[i64]) -> String {
    let mut line = String::from(label);
    for value in values {
        line.push_str(&value.to_string());
        line.push(' ');
    }
    line
}

/// Runs one prompt-read-sort-print session over the given input and output.
pub fn run<R, W>(input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut tokens = Tokens::new(input);

    write!(output, "Enter size of array: ")?;
    output.flush()?;
    let size = tokens.next_size()?;

    write!(output, "Enter elements of array: ")?;
    output.flush()?;
    let mut array = Vec::with_capacity(size);
    for _ in 0..size {
        array.push(tokens.next_element()?);
    }

    write!(output, "{}", render("Unsorted array: ", &array))?;

    ExchangeSorter.sort(&mut array);

    writeln!(output, "\n{}", render("Sorted array: ", &array))?;

    Ok(())
}
