//! Frame and style types for terminal text output.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-line styling. `fg: None` keeps the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
}

impl LineStyle {
    pub const PLAIN: LineStyle = LineStyle {
        fg: None,
        bold: false,
    };

    pub const fn fg(rgb: Rgb) -> Self {
        Self {
            fg: Some(rgb),
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            fg: self.fg,
            bold: true,
        }
    }
}

/// One styled line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

/// A block of output lines, optionally ending in a prompt that stays on the
/// cursor line (no trailing newline).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Line>,
    prompt: Option<Line>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, style: LineStyle, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line {
            text: text.into(),
            style,
        });
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(LineStyle::PLAIN, "")
    }

    pub fn set_prompt(&mut self, style: LineStyle, text: impl Into<String>) -> &mut Self {
        self.prompt = Some(Line {
            text: text.into(),
            style,
        });
        self
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn prompt(&self) -> Option<&Line> {
        self.prompt.as_ref()
    }

    /// Unstyled text exactly as a colorless terminal would show it.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        if let Some(prompt) = &self.prompt {
            out.push_str(&prompt.text);
        }
        out
    }
}
