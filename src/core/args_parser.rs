//! Command line value parsing for repeated `INDEX STYLE` override pairs.
//!
//! clap collects every `-o INDEX STYLE` occurrence into one flat list of
//! values. [`ArgsParser`] splits that list back into pairs, validates the raw
//! indices and parses the styles.
//!
//! # Public API
//! - [`ArgsParser`]: Static helpers turning flag values into [`Override`]s

use crate::core::{
    error::{RainbowPathError, Result},
    overrides::Override,
    style_parser::StyleParser,
};

/// Centralized parsing of override flag values
pub struct ArgsParser;

impl ArgsParser {
    /// Parse a signed override index such as `2` or `-1`
    pub fn parse_index(input: &str) -> Result<i64> {
        input
            .trim()
            .parse::<i64>()
            .map_err(|_| RainbowPathError::invalid_override_index(input))
    }

    /// Parse flattened `INDEX STYLE` pairs into overrides, keeping their order
    ///
    /// # Examples
    /// ```
    /// use rainbowpath::core::args_parser::ArgsParser;
    /// use rainbowpath::core::style_parser::StyleParser;
    ///
    /// let values = vec!["-1".to_string(), "bold".to_string()];
    /// let overrides = ArgsParser::parse_overrides(&values, StyleParser::new())?;
    /// assert_eq!(overrides[0].raw_index, -1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_overrides(values: &[String], parser: StyleParser) -> Result<Vec<Override>> {
        values
            .chunks(2)
            .map(|pair| match pair {
                [index, style] => Ok(Override::new(
                    Self::parse_index(index)?,
                    parser.parse_style(style)?,
                )),
                // a dangling index without its style
                _ => Err(RainbowPathError::invalid_override_index(
                    pair.first().map(String::as_str).unwrap_or_default(),
                )),
            })
            .collect()
    }
}
