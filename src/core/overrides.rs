//! Per-position style overrides and style selection.
//!
//! Overrides are collected from the config file and the command line with a
//! raw, possibly negative index. Once the path has been segmented and the
//! element counts are known, [`normalize_overrides`] resolves each raw index
//! Python style (`-1` is the last element). [`Axis::style_at`] then combines
//! the palette style chosen by the indexer with every override targeting the
//! position.

use crate::core::{
    error::{RainbowPathError, Result},
    indexer::IndexerKind,
    style::{Palette, Style},
};
use rand::RngCore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub raw_index: i64,
    resolved_index: Option<usize>,
    pub style: Style,
}

impl Override {
    pub fn new(raw_index: i64, style: Style) -> Self {
        Self {
            raw_index,
            resolved_index: None,
            style,
        }
    }

    /// Position on the axis, available after normalization
    pub fn resolved_index(&self) -> Option<usize> {
        self.resolved_index
    }
}

/// Resolve a raw override index against the number of elements on its axis
pub fn resolve_index(raw_index: i64, count: usize) -> Result<usize> {
    let signed_count = i64::try_from(count).unwrap_or(i64::MAX);
    let resolved = if raw_index < 0 {
        if raw_index < -signed_count {
            None
        } else {
            Some(signed_count + raw_index)
        }
    } else if raw_index < signed_count {
        Some(raw_index)
    } else {
        None
    };

    resolved
        .and_then(|index| usize::try_from(index).ok())
        .ok_or_else(|| RainbowPathError::override_index_out_of_range(raw_index, count))
}

/// Resolve every override of an axis, failing on the first invalid index
pub fn normalize_overrides(overrides: &mut [Override], count: usize) -> Result<()> {
    for item in overrides.iter_mut() {
        let index = resolve_index(item.raw_index, count)?;
        log::debug!("Override {} resolved to {index} of {count}", item.raw_index);
        item.resolved_index = Some(index);
    }
    Ok(())
}

/// Everything needed to style the elements of one axis
#[derive(Debug, Clone, Copy)]
pub struct Axis<'a> {
    pub palette: &'a Palette,
    pub overrides: &'a [Override],
    pub indexer: IndexerKind,
}

impl<'a> Axis<'a> {
    pub fn new(palette: &'a Palette, overrides: &'a [Override], indexer: IndexerKind) -> Self {
        Self {
            palette,
            overrides,
            indexer,
        }
    }

    /// Style for the element at `position` whose raw text is `bytes`.
    ///
    /// Overrides targeting the same position are merged in list order, so a
    /// later override wins on the attributes both mention.
    pub fn style_at<R: RngCore>(&self, position: usize, bytes: &[u8], rng: &mut R) -> Style {
        let slot = self.indexer.select(self.palette.len(), position, bytes, rng);
        let base = *self.palette.get(slot);
        self.overrides
            .iter()
            .filter(|item| item.resolved_index == Some(position))
            .fold(base, |style, item| style.merge(&item.style))
    }
}
