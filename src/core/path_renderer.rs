//! Path rendering pipeline.
//!
//! The path is scanned byte by byte and split on `/`. Every non-empty segment
//! is styled from the path axis, every separator occurrence from the separator
//! axis, and the separator is printed as the configured output string.
//!
//! # Public API
//! - [`path_components`]: Segment and separator counts of a path
//! - [`PathRenderer`]: Walks a path and drives a [`Terminal`]
//! - [`render_line`]: Full pipeline from a finished [`Config`] to one output line

use crate::core::{
    config::Config,
    error::Result,
    overrides::Axis,
    style::Style,
    terminal::Terminal,
};
use rand::RngCore;
use std::io;

/// Byte the input path is split on
pub const PATH_SEPARATOR: u8 = b'/';

const BASH_BEGIN: &[u8] = b"\\[";
const BASH_END: &[u8] = b"\\]";

/// Count non-empty segments and separator occurrences
pub fn path_components(path: &[u8]) -> (usize, usize) {
    let separators = path.iter().filter(|&&byte| byte == PATH_SEPARATOR).count();
    let segments = path
        .split(|&byte| byte == PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .count();
    (segments, separators)
}

pub struct PathRenderer<'a, T: Terminal, R: RngCore> {
    terminal: &'a mut T,
    rng: &'a mut R,
    separator: &'a str,
    bash_escape: bool,
}

impl<'a, T: Terminal, R: RngCore> PathRenderer<'a, T, R> {
    pub fn new(terminal: &'a mut T, rng: &'a mut R, separator: &'a str, bash_escape: bool) -> Self {
        Self {
            terminal,
            rng,
            separator,
            bash_escape,
        }
    }

    /// Render `path` with overrides already normalized on both axes
    pub fn render(&mut self, path: &[u8], path_axis: &Axis<'_>, separator_axis: &Axis<'_>) -> io::Result<()> {
        let mut segment_index = 0;
        let mut separator_index = 0;
        let mut rest = path;

        while let Some(at) = rest.iter().position(|&byte| byte == PATH_SEPARATOR) {
            let (segment, tail) = rest.split_at(at);
            if !segment.is_empty() {
                let style = path_axis.style_at(segment_index, segment, self.rng);
                self.styled(&style, segment)?;
                segment_index += 1;
            }

            // hashed on the input separator, not the output string
            let (input_separator, after) = tail.split_at(1);
            let style = separator_axis.style_at(separator_index, input_separator, self.rng);
            let separator = self.separator.as_bytes();
            self.styled(&style, separator)?;
            separator_index += 1;
            rest = after;
        }

        if !rest.is_empty() {
            let style = path_axis.style_at(segment_index, rest, self.rng);
            self.styled(&style, rest)?;
        }
        Ok(())
    }

    fn styled(&mut self, style: &Style, text: &[u8]) -> io::Result<()> {
        self.begin_style(style)?;
        self.terminal.text(text)?;
        self.end_style()
    }

    fn begin_style(&mut self, style: &Style) -> io::Result<()> {
        if self.bash_escape {
            self.terminal.text(BASH_BEGIN)?;
        }
        if style.bold.enabled() {
            self.terminal.bold()?;
        }
        if style.dim.enabled() {
            self.terminal.dim()?;
        }
        if style.underlined.enabled() {
            self.terminal.underlined()?;
        }
        if style.blink.enabled() {
            self.terminal.blink()?;
        }
        if let Some(color) = style.bg.value() {
            self.terminal.bg(color)?;
        }
        if let Some(color) = style.fg.value() {
            self.terminal.fg(color)?;
        }
        if self.bash_escape {
            self.terminal.text(BASH_END)?;
        }
        Ok(())
    }

    fn end_style(&mut self) -> io::Result<()> {
        if self.bash_escape {
            self.terminal.text(BASH_BEGIN)?;
        }
        self.terminal.reset()?;
        if self.bash_escape {
            self.terminal.text(BASH_END)?;
        }
        Ok(())
    }
}

/// Normalize overrides against `path` and render it as one line.
///
/// `path` must already be compacted and stripped as configured. Nothing is
/// emitted when an override index is out of range.
pub fn render_line<T: Terminal, R: RngCore>(
    config: &mut Config,
    path: &[u8],
    terminal: &mut T,
    rng: &mut R,
) -> Result<()> {
    let (segments, separators) = path_components(path);
    log::debug!(
        "Path '{}' has {segments} segments and {separators} separators",
        String::from_utf8_lossy(path)
    );
    config.normalize_overrides(segments, separators)?;

    let color_count = terminal.color_count();
    let path_palette = config.effective_path_palette(color_count);
    let separator_palette = config.effective_separator_palette(color_count);
    let path_axis = Axis::new(&path_palette, &config.path_overrides, config.path_indexer);
    let separator_axis = Axis::new(
        &separator_palette,
        &config.separator_overrides,
        config.separator_indexer,
    );

    PathRenderer::new(terminal, rng, &config.separator, config.bash_escape).render(
        path,
        &path_axis,
        &separator_axis,
    )?;
    if config.new_line {
        terminal.text(b"\n")?;
    }
    Ok(())
}
