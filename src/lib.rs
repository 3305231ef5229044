pub mod builder;
pub mod error;
pub mod locale;
pub mod options;
pub mod parser;
pub mod types;

// 导出主要 API
pub use builder::{NON_BREAKING_SPACE, NumberMaskBuilder};
pub use error::MaskError;
pub use locale::{GroupingResolver, LocaleTable, list_available_locales, resolve_grouping};
pub use options::MaskOptions;
pub use types::*;

#[cfg(test)]
mod tests;
