//! Run configuration and the semantic pass over config file options.
//!
//! A [`Config`] starts from built-in defaults, then the options of the config
//! file are applied in file order, and finally the command line values are
//! layered on top. Scalar options replace earlier values while indexed
//! `override[N]` options append.

use crate::core::{
    config_parser::{parse_config, ConfigOption, OptionValue},
    error::{RainbowPathError, Result},
    indexer::IndexerKind,
    overrides::{normalize_overrides, Override},
    style::{default_path_palette, default_separator_palette, Palette},
    style_parser::StyleParser,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: Option<PathBuf>,
    pub separator: String,
    pub path_palette: Option<Palette>,
    pub separator_palette: Option<Palette>,
    pub path_overrides: Vec<Override>,
    pub separator_overrides: Vec<Override>,
    pub new_line: bool,
    pub bash_escape: bool,
    pub compact: bool,
    pub strip_leading: bool,
    pub path_indexer: IndexerKind,
    pub separator_indexer: IndexerKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            separator: "/".to_string(),
            path_palette: None,
            separator_palette: None,
            path_overrides: Vec::new(),
            separator_overrides: Vec::new(),
            new_line: true,
            bash_escape: false,
            compact: false,
            strip_leading: false,
            path_indexer: IndexerKind::Sequential,
            separator_indexer: IndexerKind::Sequential,
        }
    }
}

impl Config {
    /// Read and apply the config file at `path`
    pub fn load_file(&mut self, path: &Path, parser: StyleParser) -> Result<()> {
        log::debug!("Loading config file {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| RainbowPathError::config_read_failed(path, e))?;
        self.load_str(&content, parser)
    }

    /// Parse and apply config file content
    pub fn load_str(&mut self, content: &str, parser: StyleParser) -> Result<()> {
        let options = parse_config(content)?;
        self.apply_options(&options, parser)
    }

    /// Apply parsed options in order
    pub fn apply_options(&mut self, options: &[ConfigOption], parser: StyleParser) -> Result<()> {
        for option in options {
            self.apply_option(option, parser)
                .map_err(|e| match e {
                    RainbowPathError::UnknownOption { .. }
                    | RainbowPathError::WrongValueKind { .. }
                    | RainbowPathError::UnexpectedIndex { .. }
                    | RainbowPathError::MissingIndex { .. } => e,
                    other => RainbowPathError::invalid_option(&option.name, other),
                })?;
            log::debug!("Applied option '{}' from line {}", option.name, option.line);
        }
        Ok(())
    }

    fn apply_option(&mut self, option: &ConfigOption, parser: StyleParser) -> Result<()> {
        match option.name.as_str() {
            "palette" => self.path_palette = Some(parser.parse_palette(scalar_string(option)?)?),
            "separator-palette" => {
                self.separator_palette = Some(parser.parse_palette(scalar_string(option)?)?)
            }
            "separator" => self.separator = scalar_string(option)?.to_string(),
            "method" => self.path_indexer = scalar_string(option)?.parse()?,
            "separator-method" => self.separator_indexer = scalar_string(option)?.parse()?,
            "override" => self.path_overrides.push(indexed_style(option, parser)?),
            "separator-override" => self.separator_overrides.push(indexed_style(option, parser)?),
            "strip-leading" => self.strip_leading = scalar_bool(option)?,
            "compact" => self.compact = scalar_bool(option)?,
            "newline" => self.new_line = scalar_bool(option)?,
            "bash" => self.bash_escape = scalar_bool(option)?,
            other => return Err(RainbowPathError::unknown_option(other)),
        }
        Ok(())
    }

    /// Palette for path segments, built-in when none was configured
    pub fn effective_path_palette(&self, color_count: u16) -> Palette {
        self.path_palette
            .clone()
            .unwrap_or_else(|| default_path_palette(color_count))
    }

    /// Palette for separators, built-in when none was configured
    pub fn effective_separator_palette(&self, color_count: u16) -> Palette {
        self.separator_palette
            .clone()
            .unwrap_or_else(|| default_separator_palette(color_count))
    }

    /// Resolve override indices of both axes against the element counts
    pub fn normalize_overrides(&mut self, segments: usize, separators: usize) -> Result<()> {
        normalize_overrides(&mut self.path_overrides, segments)?;
        normalize_overrides(&mut self.separator_overrides, separators)
    }
}

fn string_value(option: &ConfigOption) -> Result<&str> {
    match &option.value {
        OptionValue::String(value) => Ok(value),
        OptionValue::Bool(_) => Err(RainbowPathError::wrong_value_kind(&option.name, "a string")),
    }
}

fn scalar_string(option: &ConfigOption) -> Result<&str> {
    if option.index.is_some() {
        return Err(RainbowPathError::unexpected_index(&option.name));
    }
    string_value(option)
}

fn scalar_bool(option: &ConfigOption) -> Result<bool> {
    if option.index.is_some() {
        return Err(RainbowPathError::unexpected_index(&option.name));
    }
    match option.value {
        OptionValue::Bool(value) => Ok(value),
        OptionValue::String(_) => Err(RainbowPathError::wrong_value_kind(&option.name, "a boolean")),
    }
}

fn indexed_style(option: &ConfigOption, parser: StyleParser) -> Result<Override> {
    let index = option
        .index
        .ok_or_else(|| RainbowPathError::missing_index(&option.name))?;
    let style = parser.parse_style(string_value(option)?)?;
    Ok(Override::new(index, style))
}
