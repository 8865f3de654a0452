//! Line-oriented console over arbitrary input and output streams.

use crate::error::GameError;
use std::io::{BufRead, StdinLock, StdoutLock, Write};
use tracing::{instrument, trace};

/// Prompt/answer console.
///
/// Every prompt blocks until one full line is available. The game never
/// touches stdin or stdout directly, so tests drive it with a `Cursor` and
/// a `Vec<u8>`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, StdoutLock<'static>> {
    /// Creates a console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<(), GameError> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Writes `text` without a newline, then reads one line of input.
    ///
    /// The returned line has its terminator stripped. End of input is
    /// [`GameError::InputClosed`].
    #[instrument(skip_all)]
    pub fn prompt(&mut self, text: impl AsRef<str>) -> Result<String, GameError> {
        write!(self.output, "{}", text.as_ref())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        let line = line.trim_end_matches(['\n', '\r']).to_string();
        trace!(line = %line, "Read line");
        Ok(line)
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
