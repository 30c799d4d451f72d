//! Terminal capability used by the renderer.
//!
//! The renderer never builds escape sequences itself. It calls the emitters
//! of a [`Terminal`], which lets tests capture output in memory and keeps the
//! escape code table in one place.
//!
//! # Public API
//! - [`Terminal`]: Emitter trait
//! - [`AnsiTerminal`]: ANSI implementation over any `Write`
//! - [`ColorSupport`]: Color count detection from `TERM` and `COLORTERM`

use crate::core::style::Color;
use std::io::{self, Write};

pub trait Terminal {
    /// Number of colors the terminal can display
    fn color_count(&self) -> u16;
    fn fg(&mut self, color: Color) -> io::Result<()>;
    fn bg(&mut self, color: Color) -> io::Result<()>;
    fn bold(&mut self) -> io::Result<()>;
    fn dim(&mut self) -> io::Result<()>;
    fn underlined(&mut self) -> io::Result<()>;
    fn blink(&mut self) -> io::Result<()>;
    fn reset(&mut self) -> io::Result<()>;
    /// Literal bytes, written verbatim
    fn text(&mut self, text: &[u8]) -> io::Result<()>;
}

/// Emits ANSI SGR sequences
#[derive(Debug)]
pub struct AnsiTerminal<W: Write> {
    out: W,
    color_count: u16,
}

impl<W: Write> AnsiTerminal<W> {
    pub fn new(out: W, color_count: u16) -> Self {
        Self { out, color_count }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Basic colors use the short `3N`/`4N` form on terminals without 256 colors
    fn color(&mut self, base: u8, extended: u8, color: Color) -> io::Result<()> {
        if self.color_count < 256 && color < 8 {
            write!(self.out, "\x1b[{}m", base + color)
        } else {
            write!(self.out, "\x1b[{extended};5;{color}m")
        }
    }
}

impl<W: Write> Terminal for AnsiTerminal<W> {
    fn color_count(&self) -> u16 {
        self.color_count
    }

    fn fg(&mut self, color: Color) -> io::Result<()> {
        self.color(30, 38, color)
    }

    fn bg(&mut self, color: Color) -> io::Result<()> {
        self.color(40, 48, color)
    }

    fn bold(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x1b[1m")
    }

    fn dim(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x1b[2m")
    }

    fn underlined(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x1b[4m")
    }

    fn blink(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x1b[5m")
    }

    fn reset(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x1b[0m")
    }

    fn text(&mut self, text: &[u8]) -> io::Result<()> {
        self.out.write_all(text)
    }
}

/// Color support derived from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSupport {
    pub color_count: u16,
}

impl ColorSupport {
    pub fn from_env() -> Self {
        let colorterm = std::env::var("COLORTERM").ok();
        let term = std::env::var("TERM").ok();
        Self::from_env_values(colorterm.as_deref(), term.as_deref())
    }

    pub fn from_env_values(colorterm: Option<&str>, term: Option<&str>) -> Self {
        let truecolor = colorterm
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "truecolor" | "24bit"))
            .unwrap_or(false);
        let extended_term = term
            .map(|value| value.contains("256color") || value.contains("direct"))
            .unwrap_or(false);

        let color_count = if truecolor || extended_term { 256 } else { 8 };
        Self { color_count }
    }
}
