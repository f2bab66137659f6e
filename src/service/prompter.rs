//! Interactive prompting over pure validation functions.

use std::io::{BufRead, Write};

use crate::domain::DispatchError;

/// Boundary re-prompt loop.
///
/// The core parsers reject bad input with error values; this is the one
/// place that turns rejection into "ask again". Generic over the streams
/// so tests can drive it with in-memory buffers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` until `parse` accepts the answer.
    ///
    /// Recoverable rejections (bad format, unknown key) print the error
    /// and re-prompt. EOF aborts: an indefinite loop is only honest
    /// while the input stream is still open.
    pub fn ask<T, F>(&mut self, question: &str, mut parse: F) -> Result<T, DispatchError>
    where
        F: FnMut(&str) -> Result<T, DispatchError>,
    {
        loop {
            write!(self.output, "{question} ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(DispatchError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "input closed while prompting",
                )));
            }

            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    writeln!(self.output, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::input::parse_amount;
    use std::io::Cursor;

    #[test]
    fn test_ask_accepts_first_valid_answer() {
        let input = Cursor::new(b"42.5\n".to_vec());
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);

        let amount = prompter.ask("Enter transaction amount:", parse_amount).unwrap();
        assert_eq!(amount.value(), 42.5);

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript, "Enter transaction amount: ");
    }

    #[test]
    fn test_ask_reprompts_until_valid() {
        let input = Cursor::new(b"abc\n\n12\n".to_vec());
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);

        let amount = prompter.ask("Enter transaction amount:", parse_amount).unwrap();
        assert_eq!(amount.value(), 12.0);

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Enter transaction amount:").count(), 3);
        assert!(transcript.contains("invalid input"));
    }

    #[test]
    fn test_ask_fails_on_eof() {
        let input = Cursor::new(b"nonsense\n".to_vec());
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);

        let result = prompter.ask("Enter transaction amount:", parse_amount);
        assert!(matches!(result, Err(DispatchError::Io(_))));
    }
}
