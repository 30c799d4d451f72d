//! Rainbowpath - color path components and separators for shell prompts.
//!
//! This library provides the core functionality for rainbowpath: the style and
//! palette model, the style expression and config file parsers, the palette
//! indexing strategies, per-position overrides and the rendering pipeline.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Style, palette and tri-state attribute types
//! - Style/palette expression and config file parsing
//! - Indexing strategies and override normalization
//! - The terminal capability and the path renderer
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Selection
    normalize_overrides,
    parse_config,
    // Parsing
    parse_palette,
    parse_style,
    path_components,
    render_line,
    resolve_index,
    seeded_rng,

    AnsiTerminal,
    ArgsParser,
    AttrState,
    Axis,
    Color,
    ColorSupport,
    // Configuration
    Config,
    ConfigOption,
    ErrorKind,
    IndexerKind,
    OptionValue,
    Override,
    // Style model
    Palette,
    PathRenderer,
    // Error handling
    RainbowPathError,
    Result,
    Style,
    StyleParser,
    // Rendering
    Terminal,
};
