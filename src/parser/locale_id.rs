use std::fmt;

use winnow::combinator::{alt, eof, opt, preceded};
use winnow::error::ErrMode;
use winnow::token::{one_of, rest, take_till, take_while};
use winnow::{ModalResult, Parser};

/// A locale identifier broken into its parts
///
/// Parts are normalised: lowercase language, titlecase script, uppercase region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId {
    pub language: String,
    pub script: Option<String>,
    pub region: Option<String>,
}

impl LocaleId {
    /// Table keys to try for this locale, most specific first
    pub fn candidates(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(4);
        if let (Some(script), Some(region)) = (&self.script, &self.region) {
            keys.push(format!("{}_{}_{}", self.language, script, region));
        }
        if let Some(region) = &self.region {
            keys.push(format!("{}_{}", self.language, region));
        }
        if let Some(script) = &self.script {
            keys.push(format!("{}_{}", self.language, script));
        }
        keys.push(self.language.clone());
        keys
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "_{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "_{region}")?;
        }
        Ok(())
    }
}

fn parse_subtag_separator(input: &mut &str) -> ModalResult<char> {
    one_of(['_', '-'])
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_language(input: &mut &str) -> ModalResult<String> {
    take_while(2..=3, |c: char| c.is_ascii_alphabetic())
        .map(|s: &str| s.to_ascii_lowercase())
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_script(input: &mut &str) -> ModalResult<String> {
    preceded(
        parse_subtag_separator,
        take_while(4, |c: char| c.is_ascii_alphabetic()),
    )
    .map(|s: &str| {
        let mut chars = s.chars();
        chars
            .next()
            .map(|first| {
                first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
            })
            .unwrap_or_default()
    })
    .parse_next(input)
}

pub fn parse_region(input: &mut &str) -> ModalResult<String> {
    preceded(
        parse_subtag_separator,
        alt((
            take_while(2, |c: char| c.is_ascii_alphabetic()),
            take_while(3, |c: char| c.is_ascii_digit()),
        )),
    )
    .map(|s: &str| s.to_ascii_uppercase())
    .parse_next(input)
}

/// Parse a POSIX-style encoding suffix such as `.UTF-8`
fn parse_encoding<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded('.', take_till(1.., '@'))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a POSIX-style modifier suffix such as `@euro`
fn parse_modifier<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded('@', rest)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a locale identifier like `en_US`, `gu-IN`, `sr_Latn_RS` or `de_DE.UTF-8@euro`
///
/// # Returns
/// * `Result<LocaleId, String>` - The normalised identifier, or an error message
pub fn parse_locale_id(input_str: &str) -> Result<LocaleId, String> {
    let mut input = input_str.trim();

    (
        parse_language,
        opt(parse_script),
        opt(parse_region),
        opt(parse_encoding),
        opt(parse_modifier),
        eof,
    )
        .map(|(language, script, region, _, _, _)| LocaleId {
            language,
            script,
            region,
        })
        .parse_next(&mut input)
        .map_err(|e| format!("Invalid locale identifier '{input_str}': {e:?}"))
}
