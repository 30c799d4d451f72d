//! Style and palette data model with layered merge semantics.
//!
//! Every attribute of a [`Style`] is tri-state: it is either not mentioned
//! ([`AttrState::Unset`]), given a value ([`AttrState::Set`]) or explicitly
//! cleared by a higher layer ([`AttrState::Reverted`]). Merging walks the
//! attributes one by one, which lets overrides add to a palette style instead
//! of replacing it wholesale.
//!
//! # Public API
//! - [`AttrState`]: Three-state attribute value
//! - [`Style`]: Colors and text attributes for one styled region
//! - [`Palette`]: Non-empty ordered list of styles
//! - [`default_path_palette`], [`default_separator_palette`]: Built-in palettes

use std::fmt;

/// Terminal color number
pub type Color = u8;

/// State of a single style attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrState<T> {
    Unset,
    Set(T),
    Reverted,
}

impl<T> Default for AttrState<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: Copy> AttrState<T> {
    /// Layer `upper` on top of `self`
    pub fn merge(self, upper: Self) -> Self {
        match upper {
            Self::Unset => self,
            Self::Set(value) => Self::Set(value),
            Self::Reverted => Self::Unset,
        }
    }

    /// Value when set
    pub fn value(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl AttrState<bool> {
    /// Whether the attribute should be emitted
    pub fn enabled(self) -> bool {
        self == Self::Set(true)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: AttrState<Color>,
    pub bg: AttrState<Color>,
    pub bold: AttrState<bool>,
    pub dim: AttrState<bool>,
    pub underlined: AttrState<bool>,
    pub blink: AttrState<bool>,
}

impl Style {
    /// Style with only a foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: AttrState::Set(color),
            ..Self::default()
        }
    }

    /// Merge `upper` onto `self`, attribute by attribute
    pub fn merge(&self, upper: &Style) -> Style {
        Style {
            fg: self.fg.merge(upper.fg),
            bg: self.bg.merge(upper.bg),
            bold: self.bold.merge(upper.bold),
            dim: self.dim.merge(upper.dim),
            underlined: self.underlined.merge(upper.underlined),
            blink: self.blink.merge(upper.blink),
        }
    }

    /// True when no attribute is mentioned
    pub fn is_empty(&self) -> bool {
        self.fg.is_unset()
            && self.bg.is_unset()
            && self.bold.is_unset()
            && self.dim.is_unset()
            && self.underlined.is_unset()
            && self.blink.is_unset()
    }
}

/// Formats the style in the property-list syntax accepted by the style parser
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut properties: Vec<String> = Vec::new();
        for (name, state) in [("fg", self.fg), ("bg", self.bg)] {
            match state {
                AttrState::Unset => {}
                AttrState::Set(color) => properties.push(format!("{name}={color}")),
                AttrState::Reverted => properties.push(format!("!{name}")),
            }
        }
        for (name, state) in [
            ("bold", self.bold),
            ("dim", self.dim),
            ("underlined", self.underlined),
            ("blink", self.blink),
        ] {
            match state {
                AttrState::Unset | AttrState::Set(false) => {}
                AttrState::Set(true) => properties.push(name.to_string()),
                AttrState::Reverted => properties.push(format!("!{name}")),
            }
        }
        f.write_str(&properties.join(","))
    }
}

/// Ordered, non-empty list of styles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: Vec<Style>,
}

impl Palette {
    pub fn new(first: Style) -> Self {
        Self {
            styles: vec![first],
        }
    }

    /// Build a palette from a list of styles, `None` when the list is empty
    pub fn from_styles(styles: Vec<Style>) -> Option<Self> {
        if styles.is_empty() {
            None
        } else {
            Some(Self { styles })
        }
    }

    pub fn push(&mut self, style: Style) {
        self.styles.push(style);
    }

    /// Style at `index`.
    ///
    /// # Panics
    /// Panics when `index >= self.len()`; indexers always reduce modulo the size.
    pub fn get(&self, index: usize) -> &Style {
        &self.styles[index]
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn palette_of_colors(colors: &[Color]) -> Palette {
    Palette {
        styles: colors.iter().copied().map(Style::fg).collect(),
    }
}

/// Built-in palette for path segments
pub fn default_path_palette(color_count: u16) -> Palette {
    if color_count >= 256 {
        palette_of_colors(&[160, 208, 220, 82, 39, 63])
    } else {
        palette_of_colors(&[1, 3, 2, 6, 4, 5])
    }
}

/// Built-in palette for separators
pub fn default_separator_palette(color_count: u16) -> Palette {
    if color_count >= 256 {
        Palette::new(Style {
            bold: AttrState::Set(true),
            ..Style::fg(239)
        })
    } else {
        Palette::new(Style {
            dim: AttrState::Set(true),
            ..Style::fg(7)
        })
    }
}
