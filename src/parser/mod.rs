//! Parsers for builder inputs
//!
//! Color names and locale identifiers arrive as free-form strings. These winnow
//! parsers validate and normalise them before the builder stores them.

mod color;
mod locale_id;

pub use color::parse_color_name;
pub use locale_id::{LocaleId, parse_locale_id};
