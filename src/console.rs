//! Line-oriented interactive console.
//!
//! Generic over its reader and writer so a whole session can be scripted in
//! tests with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{AnalyzerError, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` as-is and flushes.
    pub fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn say_line(&mut self, text: &str) -> Result<()> {
        self.say(text)?;
        self.say("\n")
    }

    /// Prints `message` and reads one line of input, trimmed.
    ///
    /// # Returns
    ///
    /// * `Result<String>` - The answer, or `AnalyzerError::InputClosed` once
    ///   input reaches end of file
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        self.say(message)?;

        // Zero bytes read means end of input
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(AnalyzerError::InputClosed);
        }
        Ok(answer.trim().to_string())
    }

    /// Asks until the answer is a positive integer.
    ///
    /// `retry` replaces `message` after the first invalid answer.
    pub fn prompt_positive(&mut self, message: &str, retry: &str) -> Result<usize> {
        let mut answer = self.prompt(message)?;
        loop {
            match answer.parse::<usize>() {
                Ok(count) if count > 0 => return Ok(count),
                _ => answer = self.prompt(retry)?,
            }
        }
    }

    /// Consumes the console, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_trims_answer() {
        let mut console = console("  data.txt \n");
        assert_eq!(console.prompt("File: ").unwrap(), "data.txt");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "File: ");
    }

    #[test]
    fn prompt_reports_closed_input() {
        let mut console = console("");
        assert!(matches!(console.prompt("File: "), Err(AnalyzerError::InputClosed)));
    }

    #[test]
    fn positive_count_retries() {
        let mut console = console("zero\n0\n-3\n2\n");
        let count = console.prompt_positive("How many? ", "Again: ").unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(console.into_output()).unwrap(),
            "How many? Again: Again: Again: "
        );
    }
}
