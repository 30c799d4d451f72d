//! Recursive-descent parser for style and palette expressions.
//!
//! # Grammar
//! ```text
//! palette  := style (';' style)*
//! style    := property (',' property)*
//! property := ['!'] name ['=' color]
//! name     := fg | bg | bold | dim | underlined | blink
//! color    := black | red | green | yellow | blue | magenta | cyan | white | 0..=255
//! ```
//!
//! `fg` and `bg` take a color unless reverted with `!`. Boolean properties never
//! take a value. The first error aborts the parse and nothing is returned.
//!
//! # Examples
//! ```
//! use rainbowpath::core::style_parser::{parse_palette, parse_style};
//! use rainbowpath::core::style::AttrState;
//!
//! let style = parse_style("fg=160, bold").unwrap();
//! assert_eq!(style.fg, AttrState::Set(160));
//! assert!(style.bold.enabled());
//!
//! let palette = parse_palette("fg=red;fg=3;fg=green").unwrap();
//! assert_eq!(palette.len(), 3);
//! ```

use crate::core::{
    cursor::{is_name_char, Cursor},
    error::{RainbowPathError, Result},
    style::{AttrState, Color, Palette, Style},
};

const SYMBOLIC_COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Style and palette parser, optionally bounded by a terminal color count
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleParser {
    color_count: Option<u16>,
}

impl StyleParser {
    /// Parser accepting every color in `0..=255`
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser rejecting colors the terminal cannot display
    pub fn with_color_count(color_count: u16) -> Self {
        Self {
            color_count: Some(color_count),
        }
    }

    /// Highest color number accepted
    pub fn max_color(&self) -> u16 {
        match self.color_count {
            Some(count) => count.saturating_sub(1).min(u16::from(Color::MAX)),
            None => u16::from(Color::MAX),
        }
    }

    pub fn parse_style(&self, input: &str) -> Result<Style> {
        let mut cursor = Cursor::new(input);
        let style = self.style(&mut cursor)?;
        expect_end(&mut cursor)?;
        Ok(style)
    }

    pub fn parse_palette(&self, input: &str) -> Result<Palette> {
        let mut cursor = Cursor::new(input);
        let mut palette = Palette::new(self.style(&mut cursor)?);
        while cursor.eat(b';') {
            palette.push(self.style(&mut cursor)?);
        }
        expect_end(&mut cursor)?;
        Ok(palette)
    }

    fn style(&self, cursor: &mut Cursor<'_>) -> Result<Style> {
        let mut style = Style::default();
        self.property(cursor, &mut style)?;
        while cursor.eat(b',') {
            self.property(cursor, &mut style)?;
        }
        Ok(style)
    }

    fn property(&self, cursor: &mut Cursor<'_>, style: &mut Style) -> Result<()> {
        cursor.skip_whitespace();
        let revert = cursor.eat(b'!');
        let name = cursor
            .token(is_name_char)
            .ok_or_else(|| RainbowPathError::expected_property(cursor.position()))?;

        let toggle = if revert {
            AttrState::Reverted
        } else {
            AttrState::Set(true)
        };

        match name {
            "fg" => style.fg = self.color_attr(cursor, name, revert)?,
            "bg" => style.bg = self.color_attr(cursor, name, revert)?,
            "bold" => style.bold = toggle,
            "dim" => style.dim = toggle,
            "underlined" => style.underlined = toggle,
            "blink" => style.blink = toggle,
            other => return Err(RainbowPathError::unknown_property(other)),
        }
        Ok(())
    }

    fn color_attr(
        &self,
        cursor: &mut Cursor<'_>,
        property: &str,
        revert: bool,
    ) -> Result<AttrState<Color>> {
        if revert {
            return Ok(AttrState::Reverted);
        }
        if !cursor.eat(b'=') {
            return Err(RainbowPathError::missing_color(property));
        }
        let token = cursor
            .token(is_name_char)
            .ok_or_else(|| RainbowPathError::missing_color(property))?;
        self.color(token).map(AttrState::Set)
    }

    fn color(&self, token: &str) -> Result<Color> {
        let value = match SYMBOLIC_COLORS.iter().position(|name| *name == token) {
            Some(index) => index as u64,
            None if token.bytes().all(|b| b.is_ascii_digit()) => match token.parse::<u64>() {
                Ok(value) => value,
                Err(_) => {
                    return Err(RainbowPathError::color_out_of_range(token, self.max_color()))
                }
            },
            None => return Err(RainbowPathError::invalid_color(token)),
        };

        if value > u64::from(self.max_color()) {
            return Err(RainbowPathError::color_out_of_range(token, self.max_color()));
        }
        Ok(value as Color)
    }
}

fn expect_end(cursor: &mut Cursor<'_>) -> Result<()> {
    cursor.skip_whitespace();
    if cursor.at_end() {
        Ok(())
    } else {
        Err(RainbowPathError::expected_end_of_input(cursor.position()))
    }
}

/// Parse a single style accepting every color in `0..=255`
pub fn parse_style(input: &str) -> Result<Style> {
    StyleParser::new().parse_style(input)
}

/// Parse a `;` separated palette accepting every color in `0..=255`
pub fn parse_palette(input: &str) -> Result<Palette> {
    StyleParser::new().parse_palette(input)
}
