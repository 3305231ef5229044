//! Locale support for mask construction
//!
//! This module resolves locale identifiers to the digit-grouping topology
//! used when a mask includes thousands separators. Lookups never fail: an
//! unknown or malformed locale degrades to the default topology.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::parser::parse_locale_id;
use crate::types::GroupingTopology;

/// Error type for locale data loading
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// Source of digit-grouping topology for a locale
pub trait GroupingResolver {
    /// Resolve `locale` to its grouping topology, falling back to a default
    fn resolve(&self, locale: &str) -> GroupingTopology;
}

/// A fixed topology used for every locale
impl GroupingResolver for GroupingTopology {
    fn resolve(&self, _locale: &str) -> GroupingTopology {
        *self
    }
}

/// The built-in locale grouping table
///
/// A zero-sized handle over data embedded in the crate and loaded on first use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleTable;

impl GroupingResolver for LocaleTable {
    fn resolve(&self, locale: &str) -> GroupingTopology {
        LocaleManager::get().resolve(locale)
    }
}

/// Layout of the embedded grouping data
#[derive(Deserialize)]
struct GroupingData {
    #[serde(default)]
    default: GroupingTopology,
    #[serde(default)]
    locales: HashMap<String, GroupingTopology>,
}

/// Holds the grouping topology for each known locale
struct LocaleManager {
    default: GroupingTopology,
    locales: HashMap<String, GroupingTopology>,
}

// Global singleton for locale grouping data
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the embedded grouping data
    fn new() -> Self {
        match Self::load_embedded_data() {
            Ok(manager) => manager,
            Err(e) => {
                // Every lookup degrades to the default topology
                warn!("Failed to load embedded locale data: {}", e);
                Self {
                    default: GroupingTopology::default(),
                    locales: HashMap::new(),
                }
            }
        }
    }

    fn load_embedded_data() -> Result<Self> {
        Self::from_toml(include_str!("locale/grouping.toml"))
    }

    /// Parse grouping data from a TOML document
    fn from_toml(toml_str: &str) -> Result<Self> {
        let data: GroupingData =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        Ok(Self {
            default: data.default,
            locales: data.locales,
        })
    }

    /// Get the global locale manager instance
    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    fn resolve(&self, locale: &str) -> GroupingTopology {
        let id = match parse_locale_id(locale) {
            Ok(id) => id,
            Err(msg) => {
                debug!("{}; using default grouping", msg);
                return self.default;
            }
        };

        for key in id.candidates() {
            if let Some(topology) = self.locales.get(&key) {
                return *topology;
            }
        }

        debug!("No grouping data for locale {}; using default grouping", id);
        self.default
    }
}

/// Resolve a locale through the built-in table
pub fn resolve_grouping(locale: &str) -> GroupingTopology {
    LocaleTable.resolve(locale)
}

/// List all locale keys present in the built-in table
pub fn list_available_locales() -> Vec<String> {
    LocaleManager::get().locales.keys().cloned().collect()
}
