//! Console: flushes frames to a terminal and reads answers back.
//!
//! Generic over `BufRead + Write` so tests can drive a whole session from
//! in-memory buffers. End of input is reported as `Ok(None)`, not an error.
//! Lines that are not valid UTF-8 are decoded lossily, never rejected.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    tty::IsTty,
    QueueableCommand,
};

use crate::frame::{Frame, Line, LineStyle, Rgb};

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
    buf: Vec<u8>,
}

/// Console bound to the process stdin/stdout.
pub type StdConsole = Console<io::StdinLock<'static>, io::Stdout>;

impl StdConsole {
    pub fn stdio(color: bool) -> Self {
        Console::new(io::stdin().lock(), io::stdout(), color)
    }
}

/// Check if stdout is attached to a terminal.
pub fn stdout_is_tty() -> bool {
    io::stdout().is_tty()
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
            buf: Vec::with_capacity(1024),
        }
    }

    /// Write a frame and flush, so prompts are visible before blocking on input.
    pub fn show(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, self.color, &mut self.buf)?;
        self.output.write_all(&self.buf)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line. Returns `None` once input is closed.
    ///
    /// Invalid UTF-8 becomes U+FFFD, so a garbled guess reads as "not a number".
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        let n = self
            .input
            .read_until(b'\n', &mut raw)
            .context("console: read from input failed")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Show a frame (normally ending in a prompt) and read the answer.
    pub fn ask(&mut self, frame: &Frame) -> Result<Option<String>> {
        self.show(frame)?;
        self.read_line()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Encode a frame into `out`.
///
/// This builds a sequence of crossterm commands without writing to the terminal.
pub fn encode_frame_into(frame: &Frame, color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in frame.lines() {
        encode_line_into(line, color, out)?;
        out.queue(Print("\n"))?;
    }
    if let Some(prompt) = frame.prompt() {
        encode_line_into(prompt, color, out)?;
    }
    Ok(())
}

fn encode_line_into(line: &Line, color: bool, out: &mut Vec<u8>) -> Result<()> {
    if !color || line.style == LineStyle::PLAIN || line.text.is_empty() {
        out.queue(Print(&line.text))?;
        return Ok(());
    }

    if let Some(fg) = line.style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if line.style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    out.queue(Print(&line.text))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
