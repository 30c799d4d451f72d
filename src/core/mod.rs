//! Core functionality for the rainbowpath tool.
//!
//! This module provides the style model, the expression and config parsers,
//! the indexing strategies, override handling and the rendering pipeline.

pub mod args_parser;
pub mod config;
pub mod config_parser;
pub mod cursor;
pub mod dirs;
pub mod error;
pub mod indexer;
pub mod output;
pub mod overrides;
pub mod path_renderer;
pub mod style;
pub mod style_parser;
pub mod terminal;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{ErrorKind, RainbowPathError, Result};

// === Style model ===
// Tri-state attributes, styles and palettes with layered merging
pub use style::{default_path_palette, default_separator_palette, AttrState, Color, Palette, Style};

// === Parsers ===
// Style/palette expressions and the config file language
pub use config_parser::{parse_config, ConfigOption, OptionValue};
pub use style_parser::{parse_palette, parse_style, StyleParser};

// === Selection ===
// Indexing strategies and per-position overrides
pub use indexer::{seeded_rng, IndexerKind};
pub use overrides::{normalize_overrides, resolve_index, Axis, Override};

// === Configuration ===
pub use config::Config;

// === Argument parsing ===
// Override pairs collected from the command line
pub use args_parser::ArgsParser;

// === Rendering ===
// Path segmentation, the terminal capability and the render pipeline
pub use path_renderer::{path_components, render_line, PathRenderer};
pub use terminal::{AnsiTerminal, ColorSupport, Terminal};

// === Output formatting ===
pub use output::{format_error, print_error};
