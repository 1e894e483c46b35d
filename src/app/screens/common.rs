//! Common utilities for screen handlers.

use std::io::{BufRead, Write};

use crate::error::{NoticeError, Result};

/// Maximum number of lines in multiline input (to prevent memory exhaustion).
pub const MAX_MULTILINE_LINES: usize = 1000;

/// Line that ends multiline input.
pub const MULTILINE_TERMINATOR: &str = ".";

/// Line-oriented terminal shared by the screen handlers.
///
/// Generic over its input and output so the board can be driven by stdin
/// and stdout or by in-memory buffers.
#[derive(Debug)]
pub struct ScreenContext<R, W> {
    input: R,
    output: W,
    mask_passwords: bool,
}

impl<R: BufRead, W: Write> ScreenContext<R, W> {
    /// Create a new screen context. Passwords are echoed.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            mask_passwords: false,
        }
    }

    /// Read passwords from the controlling terminal without echo.
    pub fn with_masked_passwords(mut self, mask: bool) -> Self {
        self.mask_passwords = mask;
        self
    }

    /// Consume the context and return its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Send data without a trailing newline.
    pub fn send(&mut self, data: &str) -> Result<()> {
        self.output.write_all(data.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Send a line.
    pub fn send_line(&mut self, data: &str) -> Result<()> {
        self.send(&format!("{data}\n"))
    }

    /// Read one line without its line ending.
    ///
    /// Returns [`NoticeError::InputClosed`] at end of input. Bytes that are
    /// not valid UTF-8 are replaced with U+FFFD.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(NoticeError::InputClosed);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Show `label: ` and read the answer.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        self.send(&format!("{label}: "))?;
        self.read_line()
    }

    /// Show `label: ` and read a password.
    pub fn prompt_password(&mut self, label: &str) -> Result<String> {
        if !self.mask_passwords {
            return self.prompt(label);
        }
        self.send(&format!("{label}: "))?;
        match rpassword::read_password() {
            Ok(password) => Ok(password),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                Err(NoticeError::InputClosed)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read lines until a line holding only `.`.
    ///
    /// End of input also ends the text, unless nothing was read yet.
    pub fn read_multiline(&mut self) -> Result<String> {
        let mut lines = Vec::new();
        loop {
            let line = match self.read_line() {
                Ok(line) => line,
                Err(NoticeError::InputClosed) if !lines.is_empty() => break,
                Err(e) => return Err(e),
            };
            if line == MULTILINE_TERMINATOR {
                break;
            }
            lines.push(line);
            if lines.len() >= MAX_MULTILINE_LINES {
                self.send_line(&format!(
                    "(Input limit of {MAX_MULTILINE_LINES} lines reached)"
                ))?;
                break;
            }
        }
        Ok(lines.join("\n"))
    }

    /// Ask a yes/no question. Blank input means yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.prompt(&format!("{question} [Y/n]"))?;
            match answer.trim().to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.send_line("Please answer y or n.")?,
            }
        }
    }
}
