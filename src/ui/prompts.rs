//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Prompts take their reader and writer as parameters so the same code
//! serves a terminal, a pipe, or a test buffer. A prompt blocks on exactly
//! one line read; end of input is an empty answer, not an error.
//!
//! Answers are raw bytes. Decoding is left to the caller, so input in a
//! non-UTF-8 terminal encoding is never rejected here.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompt for one line of text input.
///
/// Writes `message` followed by a newline, flushes, then reads a single line.
/// One trailing line terminator (`\n` or `\r\n`) is removed; all other
/// bytes, including leading and trailing spaces, are returned as typed.
///
/// # Example
///
/// ```
/// use commitflow::ui::prompts::input;
///
/// let mut out = Vec::new();
/// let answer = input("Name?", &mut "  Ada \r\nrest".as_bytes(), &mut out).unwrap();
/// assert_eq!(answer, b"  Ada ");
/// assert_eq!(out, b"Name?\n");
/// ```
pub fn input<R, W>(message: &str, reader: &mut R, writer: &mut W) -> Result<Vec<u8>, PromptError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    writeln!(writer, "{}", message)?;
    writer.flush()?;

    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;

    Ok(strip_line_terminator(line))
}

fn strip_line_terminator(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    line
}
