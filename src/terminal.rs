use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented player I/O: prompts go to `output`, answers come from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

pub type StdConsole = Console<StdinLock<'static>, Stdout>;

/// Bind the console to the process's stdin and stdout.
pub fn init() -> StdConsole {
    Console::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Returns `None` once input is exhausted. Bytes that are not UTF-8 are
    /// replaced rather than rejected.
    pub fn prompt(&mut self, prompt: impl Display) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_prompt_reads_lines_then_eof() {
        let mut console = Console::new(Cursor::new("1\r\n q \n"), Vec::new());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("1"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some(" q "));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "> > > \n");
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut console = Console::new(Cursor::new(vec![0xff, 0xfe, b'\n', b'2', b'\n']), Vec::new());

        let line = console.prompt("> ").unwrap().unwrap();
        assert_eq!(line, "\u{fffd}\u{fffd}");
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("2"));
    }
}
