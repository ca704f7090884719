//! # Input Console
//!
//! The explicit reader/writer pair the menu loop runs over. No process-wide
//! scanner state: the `Console` value is created in `run()`, scoped to the
//! session, and handed into the loop.
//!
//! Generic over `BufRead`/`Write` so tests drive the whole shell with an
//! in-memory script and capture its output.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::warn;

use crate::error::{CliError, CliResult};

/// Reader/writer pair for the interactive session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes a prompt label and reads one trimmed line.
    ///
    /// ## Errors
    /// [`CliError::Eof`] when the input stream is exhausted.
    pub fn prompt(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompts until the input parses as `T`.
    ///
    /// A line that fails to parse is reported as a malformed input and the
    /// prompt restarts cleanly - nothing is committed for the failed
    /// attempt. `expected` names what the prompt wanted, for the report.
    pub fn prompt_parsed<T: FromStr>(&mut self, label: &str, expected: &'static str) -> CliResult<T> {
        loop {
            let line = self.prompt(label)?;
            match line.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    let err = CliError::MalformedInput {
                        expected,
                        input: line,
                    };
                    warn!(error = %err, "rejected input");
                    self.say(&format!("Error: {err}"))?;
                }
            }
        }
    }

    /// Consumes the console and returns the output sink. Lets tests inspect
    /// everything the session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> CliResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::Eof);
        }
        Ok(line.trim().to_string())
    }
}
