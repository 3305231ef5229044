//! Locale-aware number mask builder
//!
//! [`NumberMaskBuilder`] collects formatting intent (decimal places, grouping,
//! sign placement, section colors) and synthesizes a spreadsheet number format
//! mask such as `#,##0.00;[Red]-#,##0.00` on demand.
//!
//! The builder stores only configuration. The number of sections in the output
//! is derived from that configuration every time [`NumberMaskBuilder::format`]
//! runs, so setters may be called in any order and the builder may be reused.
//!
//! # Examples
//! ```
//! use number_mask::{NumberMaskBuilder, NON_BREAKING_SPACE};
//!
//! let mut builder = NumberMaskBuilder::new("gu_IN");
//! assert_eq!(builder.format(), "#,##,##0.00");
//!
//! builder.set_decimals(0).trailing_sign(true, NON_BREAKING_SPACE);
//! assert_eq!(builder.format(), "#,##,##0;#,##,##0\u{a0}-");
//! ```

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::locale::{GroupingResolver, LocaleTable};
use crate::types::{ColorName, ColorSet, GroupingTopology, SignPolicy, SignPosition};

/// Separator for a visible, non-wrapping gap between sign and magnitude
pub const NON_BREAKING_SPACE: &str = "\u{a0}";

/// Locale used by [`NumberMaskBuilder::default`]
pub const DEFAULT_LOCALE: &str = "en_US";

/// Decimal places used when none are configured
pub const DEFAULT_DECIMALS: usize = 2;

/// Builds number format masks from a small set of options
#[derive(Debug, Clone)]
pub struct NumberMaskBuilder<R = LocaleTable> {
    locale: String,
    decimals: usize,
    use_grouping: bool,
    /// Shared sign placement, `None` until explicitly configured
    sign_policy: Option<SignPolicy>,
    display_positive_sign: bool,
    colors: ColorSet,
    resolver: R,
}

impl NumberMaskBuilder<LocaleTable> {
    /// Create a builder for `locale` using the built-in locale table
    pub fn new(locale: impl Into<String>) -> Self {
        Self::with_resolver(locale, LocaleTable)
    }

    /// Create a builder with explicit decimal places and grouping
    pub fn with_settings(locale: impl Into<String>, decimals: usize, use_grouping: bool) -> Self {
        let mut builder = Self::new(locale);
        builder.decimals = decimals;
        builder.use_grouping = use_grouping;
        builder
    }
}

impl Default for NumberMaskBuilder<LocaleTable> {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl<R: GroupingResolver> NumberMaskBuilder<R> {
    /// Create a builder that looks up grouping through `resolver`
    pub fn with_resolver(locale: impl Into<String>, resolver: R) -> Self {
        Self {
            locale: locale.into(),
            decimals: DEFAULT_DECIMALS,
            use_grouping: true,
            sign_policy: None,
            display_positive_sign: false,
            colors: ColorSet::default(),
            resolver,
        }
    }

    /// Set the number of decimal places; 0 drops the decimal point entirely
    pub fn set_decimals(&mut self, decimals: usize) -> &mut Self {
        self.decimals = decimals;
        self
    }

    /// Toggle digit grouping. When disabled the locale is not consulted.
    pub fn use_thousands_separator(&mut self, enabled: bool) -> &mut Self {
        self.use_grouping = enabled;
        self
    }

    /// Set the sign placement shared by the positive and negative sections
    ///
    /// Calling this at all forces a negative section into the mask, even when
    /// the placement matches the default (leading, no separator).
    pub fn trailing_sign(&mut self, trailing: bool, separator: impl Into<String>) -> &mut Self {
        let position = if trailing {
            SignPosition::Trailing
        } else {
            SignPosition::Leading
        };
        self.sign_policy = Some(SignPolicy::new(position, separator));
        self
    }

    /// Show an explicit `+` on positive values. Forces all three sections.
    pub fn display_positive_sign(&mut self, enabled: bool) -> &mut Self {
        self.display_positive_sign = enabled;
        self
    }

    /// Set per-section colors by name
    ///
    /// All three names are validated before anything is stored; on error the
    /// previous colors are kept.
    pub fn set_colors(
        &mut self,
        positive: Option<&str>,
        negative: Option<&str>,
        zero: Option<&str>,
    ) -> Result<&mut Self> {
        let colors = ColorSet::parse(positive, negative, zero).inspect_err(|e| {
            debug!("Rejected section colors: {}", e);
        })?;
        self.colors = colors;
        Ok(self)
    }

    /// Set per-section colors from already validated names
    pub fn set_color_set(&mut self, colors: ColorSet) -> &mut Self {
        self.colors = colors;
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn uses_grouping(&self) -> bool {
        self.use_grouping
    }

    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// The explicitly configured sign placement, if any
    pub fn sign_policy(&self) -> Option<&SignPolicy> {
        self.sign_policy.as_ref()
    }

    pub fn shows_positive_sign(&self) -> bool {
        self.display_positive_sign
    }

    /// Number of sections the mask will contain (1 to 3)
    pub fn section_count(&self) -> usize {
        if self.display_positive_sign || self.colors.zero.is_some() {
            3
        } else if self.sign_policy.is_some() || self.colors.negative.is_some() {
            2
        } else {
            1
        }
    }

    /// Synthesize the mask for the current configuration
    pub fn format(&self) -> String {
        let decimals = decimal_suffix(self.decimals);
        let magnitude = format!("{}{}", self.integer_mask(), decimals);
        let section_count = self.section_count();

        let mut sections = Vec::with_capacity(section_count);
        sections.push(self.positive_section(&magnitude));
        if section_count >= 2 {
            sections.push(self.negative_section(&magnitude));
        }
        if section_count == 3 {
            // Zero never carries a sign or grouping
            sections.push(format!("{}0{}", color_prefix(self.colors.zero), decimals));
        }

        sections.join(";")
    }

    fn integer_mask(&self) -> String {
        if self.use_grouping {
            grouped_integer_mask(self.resolver.resolve(&self.locale))
        } else {
            "0".to_string()
        }
    }

    fn positive_section(&self, magnitude: &str) -> String {
        let body = if self.display_positive_sign {
            self.sign_policy
                .clone()
                .unwrap_or_default()
                .apply('+', magnitude)
        } else {
            magnitude.to_string()
        };
        color_prefix(self.colors.positive) + &body
    }

    fn negative_section(&self, magnitude: &str) -> String {
        let body = self
            .sign_policy
            .clone()
            .unwrap_or_default()
            .apply('-', magnitude);
        color_prefix(self.colors.negative) + &body
    }
}

impl<R: GroupingResolver> fmt::Display for NumberMaskBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Build the integer part of a grouped mask, e.g. `#,##0` or `#,##,##0`
///
/// A leading `#,` marks that grouping repeats leftwards. A multi-tier topology
/// adds one secondary group, then the primary group ends in a literal `0`.
pub(crate) fn grouped_integer_mask(topology: GroupingTopology) -> String {
    let primary = usize::from(topology.primary());
    let secondary = usize::from(topology.secondary());

    let mut mask = String::with_capacity(primary + secondary + 3);
    mask.push_str("#,");
    if topology.is_multi_tier() {
        mask.push_str(&"#".repeat(secondary));
        mask.push(',');
    }
    mask.push_str(&"#".repeat(primary - 1));
    mask.push('0');
    mask
}

/// Build the fractional part of a mask, e.g. `.00`, or nothing for 0 places
pub(crate) fn decimal_suffix(decimals: usize) -> String {
    if decimals == 0 {
        String::new()
    } else {
        format!(".{}", "0".repeat(decimals))
    }
}

fn color_prefix(color: Option<ColorName>) -> String {
    color.map(|c| format!("[{c}]")).unwrap_or_default()
}
