use winnow::ascii::{Caseless, dec_uint};
use winnow::combinator::{alt, eof, preceded, terminated};
use winnow::error::ErrMode;
use winnow::token::literal;
use winnow::{ModalResult, Parser};

use crate::types::ColorName;

/// Parse one of the named colors, case-insensitively
pub fn parse_named_color(input: &mut &str) -> ModalResult<ColorName> {
    alt((
        literal(Caseless("Black")).value(ColorName::Black),
        literal(Caseless("Blue")).value(ColorName::Blue),
        literal(Caseless("Cyan")).value(ColorName::Cyan),
        literal(Caseless("Green")).value(ColorName::Green),
        literal(Caseless("Magenta")).value(ColorName::Magenta),
        literal(Caseless("Red")).value(ColorName::Red),
        literal(Caseless("White")).value(ColorName::White),
        literal(Caseless("Yellow")).value(ColorName::Yellow),
        literal(Caseless("Orange")).value(ColorName::Orange),
    ))
    .parse_next(input)
    .map_err(ErrMode::Backtrack)
}

/// Parse an indexed palette color, Color1 through Color56
pub fn parse_indexed_color(input: &mut &str) -> ModalResult<ColorName> {
    preceded(literal(Caseless("Color")), dec_uint::<_, u8, _>)
        .verify_map(ColorName::indexed)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a complete color name, without brackets
///
/// Returns `None` unless the whole input is a recognized color.
pub fn parse_color_name(name: &str) -> Option<ColorName> {
    let mut input = name;
    terminated(alt((parse_indexed_color, parse_named_color)), eof)
        .parse_next(&mut input)
        .ok()
}
