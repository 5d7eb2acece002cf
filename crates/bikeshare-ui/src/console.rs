//! Line-oriented console I/O.
//!
//! [`Console`] is generic over its input and output so the interactive
//! flows can be driven from in-memory buffers in tests.

use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};
use std::str::FromStr;

use bikeshare_core::{BikeshareError, Result};
use tracing::debug;

/// Returns `true` when `answer` is `yes`, ignoring case and surrounding
/// whitespace. Anything else counts as "no".
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// A prompt/answer channel.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// End of input is reported as [`BikeshareError::InputClosed`].
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        // Undecodable bytes become U+FFFD so the answer fails validation.
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Ask a yes/no question; see [`is_affirmative`].
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(is_affirmative(&answer))
    }

    /// Re-ask `prompt` until the answer parses as `T`, printing `retry`
    /// after each rejected answer.
    pub fn ask_until_valid<T: FromStr>(&mut self, prompt: &str, retry: &str) -> Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!("rejected answer {:?}", answer);
                    self.say(retry)?;
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::catalog::City;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(mut c: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.output().clone()).unwrap()
    }

    // ── is_affirmative ───────────────────────────────────────────────────────

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("  YES \n"));
        assert!(is_affirmative("Yes"));
        assert!(!is_affirmative("y"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
    }

    // ── ask ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_ask_strips_line_ending_and_echoes_prompt() {
        let mut c = console("chicago\r\n");
        assert_eq!(c.ask("City? ").unwrap(), "chicago");
        assert_eq!(output(c), "City? ");
    }

    #[test]
    fn test_ask_invalid_utf8_is_lossy() {
        let mut c = Console::new(Cursor::new(vec![0xff, b'o', b'k', b'\n']), Vec::new());
        assert_eq!(c.ask("? ").unwrap(), "\u{fffd}ok");
    }

    #[test]
    fn test_ask_eof_is_input_closed() {
        let mut c = console("");
        assert!(matches!(c.ask("? "), Err(BikeshareError::InputClosed)));
    }

    // ── ask_until_valid ──────────────────────────────────────────────────────

    #[test]
    fn test_ask_until_valid_retries() {
        let mut c = console("boston\n\n  Washington  \n");
        let city: City = c.ask_until_valid("City? ", "Sorry").unwrap();
        assert_eq!(city, City::Washington);

        let out = output(c);
        assert_eq!(out.matches("City? ").count(), 3);
        assert_eq!(out.matches("Sorry\n").count(), 2);
    }

    #[test]
    fn test_ask_until_valid_eof_stops_retrying() {
        let mut c = console("boston\n");
        let result: Result<City> = c.ask_until_valid("City? ", "Sorry");
        assert!(matches!(result, Err(BikeshareError::InputClosed)));
    }

    // ── confirm ──────────────────────────────────────────────────────────────

    #[test]
    fn test_confirm() {
        let mut c = console("yes\nnope\n");
        assert!(c.confirm("More? ").unwrap());
        assert!(!c.confirm("More? ").unwrap());
    }
}
