//! Type definitions for number mask construction
//!
//! This module defines the value types the builder works with: locale grouping
//! topology, sign placement, and per-section color tags.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MaskError;
use crate::parser::parse_color_name;

/// Digit-grouping widths for a locale
///
/// `primary` is the width of the group adjoining the decimal point, `secondary`
/// the width of every group further left. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawTopology")]
pub struct GroupingTopology {
    primary: u8,
    secondary: u8,
}

impl GroupingTopology {
    /// Western 3-3-3 grouping, e.g. 1,234,567
    pub const WESTERN: Self = Self {
        primary: 3,
        secondary: 3,
    };

    /// South-Asian lakh/crore grouping, e.g. 12,34,567
    pub const SOUTH_ASIAN: Self = Self {
        primary: 3,
        secondary: 2,
    };

    /// Create a topology, rejecting zero-width groups
    pub const fn new(primary: u8, secondary: u8) -> Option<Self> {
        if primary == 0 || secondary == 0 {
            None
        } else {
            Some(Self { primary, secondary })
        }
    }

    /// Create a topology where every group has the same width
    pub const fn uniform(size: u8) -> Option<Self> {
        Self::new(size, size)
    }

    pub const fn primary(&self) -> u8 {
        self.primary
    }

    pub const fn secondary(&self) -> u8 {
        self.secondary
    }

    /// Whether groups left of the primary one use a different width
    pub const fn is_multi_tier(&self) -> bool {
        self.primary != self.secondary
    }
}

impl Default for GroupingTopology {
    fn default() -> Self {
        Self::WESTERN
    }
}

/// Topology as written in locale data, where `secondary` may be omitted
#[derive(Deserialize)]
struct RawTopology {
    primary: u8,
    secondary: Option<u8>,
}

impl TryFrom<RawTopology> for GroupingTopology {
    type Error = String;

    fn try_from(raw: RawTopology) -> Result<Self, Self::Error> {
        let secondary = raw.secondary.unwrap_or(raw.primary);
        GroupingTopology::new(raw.primary, secondary).ok_or_else(|| {
            format!(
                "group sizes must be positive (primary = {}, secondary = {})",
                raw.primary, secondary
            )
        })
    }
}

/// Where the sign glyph sits relative to the magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignPosition {
    /// Sign before the magnitude, e.g. -1.00
    #[default]
    Leading,
    /// Sign after the magnitude, e.g. 1.00-
    Trailing,
}

/// How a sign glyph attaches to a section's magnitude
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SignPolicy {
    /// Glyph placement
    pub position: SignPosition,
    /// Literal text between the glyph and the magnitude
    pub separator: String,
}

impl SignPolicy {
    pub fn new(position: SignPosition, separator: impl Into<String>) -> Self {
        Self {
            position,
            separator: separator.into(),
        }
    }

    /// Attach `glyph` to `magnitude` according to this policy
    pub fn apply(&self, glyph: char, magnitude: &str) -> String {
        let mut out = String::with_capacity(magnitude.len() + self.separator.len() + 1);
        match self.position {
            SignPosition::Leading => {
                out.push(glyph);
                out.push_str(&self.separator);
                out.push_str(magnitude);
            }
            SignPosition::Trailing => {
                out.push_str(magnitude);
                out.push_str(&self.separator);
                out.push(glyph);
            }
        }
        out
    }
}

/// A color a mask section can be tagged with, like [Red] or [Color12]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
    Orange,
    /// Indexed palette entry
    Indexed(PaletteIndex),
}

impl ColorName {
    /// Create an indexed palette color, `None` outside 1 through 56
    pub const fn indexed(index: u8) -> Option<Self> {
        match PaletteIndex::new(index) {
            Some(index) => Some(ColorName::Indexed(index)),
            None => None,
        }
    }
}

/// Position in the indexed color palette, always within 1 through 56
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaletteIndex(u8);

impl PaletteIndex {
    /// Highest index of the indexed palette
    pub const MAX: u8 = 56;

    pub const fn new(index: u8) -> Option<Self> {
        if index >= 1 && index <= Self::MAX {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorName::Black => "Black",
            ColorName::Blue => "Blue",
            ColorName::Cyan => "Cyan",
            ColorName::Green => "Green",
            ColorName::Magenta => "Magenta",
            ColorName::Red => "Red",
            ColorName::White => "White",
            ColorName::Yellow => "Yellow",
            ColorName::Orange => "Orange",
            ColorName::Indexed(index) => return write!(f, "Color{}", index.get()),
        };
        f.write_str(name)
    }
}

impl FromStr for ColorName {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color_name(s).ok_or_else(|| MaskError::InvalidColorName(s.to_string()))
    }
}

/// Per-section color tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet {
    pub positive: Option<ColorName>,
    pub negative: Option<ColorName>,
    pub zero: Option<ColorName>,
}

impl ColorSet {
    pub fn new(
        positive: Option<ColorName>,
        negative: Option<ColorName>,
        zero: Option<ColorName>,
    ) -> Self {
        Self {
            positive,
            negative,
            zero,
        }
    }

    /// Validate three optional names, failing on the first unknown one
    pub fn parse(
        positive: Option<&str>,
        negative: Option<&str>,
        zero: Option<&str>,
    ) -> crate::error::Result<Self> {
        let parse = |name: Option<&str>| name.map(str::parse::<ColorName>).transpose();
        Ok(Self {
            positive: parse(positive)?,
            negative: parse(negative)?,
            zero: parse(zero)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_none() && self.negative.is_none() && self.zero.is_none()
    }
}
