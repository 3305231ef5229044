//! Declarative builder configuration
//!
//! [`MaskOptions`] describes a mask as data, typically read from a TOML
//! document:
//!
//! ```toml
//! locale = "gu_IN"
//! decimals = 3
//! display_positive_sign = true
//!
//! [sign]
//! trailing = true
//! separator = " "
//!
//! [colors]
//! negative = "Red"
//! ```
//!
//! Every field is optional and defaults to what a fresh builder would use.

use serde::Deserialize;

use crate::builder::{DEFAULT_DECIMALS, DEFAULT_LOCALE, NumberMaskBuilder};
use crate::error::{MaskError, Result};
use crate::locale::{GroupingResolver, LocaleTable};

/// Options for a [`NumberMaskBuilder`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MaskOptions {
    pub locale: String,
    /// Decimal places; negative values are treated as 0
    pub decimals: i64,
    pub thousands_separator: bool,
    pub display_positive_sign: bool,
    /// Explicit sign placement; its presence alone adds a negative section
    pub sign: Option<SignOptions>,
    pub colors: ColorOptions,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            decimals: DEFAULT_DECIMALS as i64,
            thousands_separator: true,
            display_positive_sign: false,
            sign: None,
            colors: ColorOptions::default(),
        }
    }
}

/// Sign placement as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SignOptions {
    pub trailing: bool,
    pub separator: String,
}

/// Section color names as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ColorOptions {
    pub positive: Option<String>,
    pub negative: Option<String>,
    pub zero: Option<String>,
}

impl MaskOptions {
    /// Parse options from a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| MaskError::InvalidOptions(e.to_string()))
    }

    /// Decimal places with negative values coerced to 0
    pub fn effective_decimals(&self) -> usize {
        usize::try_from(self.decimals).unwrap_or(0)
    }

    /// Build a configured builder over the built-in locale table
    pub fn build(&self) -> Result<NumberMaskBuilder<LocaleTable>> {
        self.build_with_resolver(LocaleTable)
    }

    /// Build a configured builder that resolves grouping through `resolver`
    pub fn build_with_resolver<R: GroupingResolver>(
        &self,
        resolver: R,
    ) -> Result<NumberMaskBuilder<R>> {
        let mut builder = NumberMaskBuilder::with_resolver(self.locale.clone(), resolver);
        builder
            .set_decimals(self.effective_decimals())
            .use_thousands_separator(self.thousands_separator)
            .display_positive_sign(self.display_positive_sign);

        if let Some(sign) = &self.sign {
            builder.trailing_sign(sign.trailing, sign.separator.clone());
        }

        builder.set_colors(
            self.colors.positive.as_deref(),
            self.colors.negative.as_deref(),
            self.colors.zero.as_deref(),
        )?;

        Ok(builder)
    }
}
