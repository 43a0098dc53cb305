use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Lines printed when the terminal refuses to clear
const CLEAR_FALLBACK_LINES: usize = 50;

/// Line-oriented terminal I/O.
///
/// Generic over the reader and writer so menus can be driven by scripted
/// input in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self { input, output, clear_screen }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line without its line terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Writes `text` without a newline and reads the answer.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.read_line()
    }

    /// Waits for Enter. Returns false when input is exhausted.
    pub fn pause(&mut self, text: &str) -> io::Result<bool> {
        Ok(self.prompt(text)?.is_some())
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Clears the screen before a redraw. Best effort: falls back to blank
    /// line padding when the terminal commands fail.
    pub fn clear(&mut self) -> io::Result<()> {
        if !self.clear_screen {
            return Ok(());
        }

        if execute!(self.output, Clear(ClearType::All), MoveTo(0, 0)).is_err() {
            tracing::debug!("terminal clear failed, padding instead");
            write!(self.output, "{}", "\n".repeat(CLEAR_FALLBACK_LINES))?;
        }
        Ok(())
    }
}
