use crate::builder::*;
use crate::parser::*;
use crate::types::*;

#[test]
fn test_named_colors() {
    assert_eq!(parse_color_name("Red"), Some(ColorName::Red));
    assert_eq!(parse_color_name("green"), Some(ColorName::Green));
    assert_eq!(parse_color_name("MAGENTA"), Some(ColorName::Magenta));
    assert_eq!(parse_color_name("Orange"), Some(ColorName::Orange));
}

#[test]
fn test_indexed_colors() {
    assert_eq!(parse_color_name("Color1"), ColorName::indexed(1));
    assert_eq!(parse_color_name("color56"), ColorName::indexed(56));
    assert_eq!(parse_color_name("Color0"), None);
    assert_eq!(parse_color_name("Color57"), None);
    assert_eq!(parse_color_name("Color300"), None);
    assert_eq!(parse_color_name("Color"), None);
}

#[test]
fn test_indexed_color_range() {
    assert!(ColorName::indexed(0).is_none());
    assert!(ColorName::indexed(57).is_none());
    assert!(ColorName::indexed(200).is_none());
    assert_eq!(PaletteIndex::new(56).map(PaletteIndex::get), Some(56));
    assert!(PaletteIndex::new(0).is_none());
}

#[test]
fn test_invalid_colors() {
    assert_eq!(parse_color_name("NotAColor"), None);
    assert_eq!(parse_color_name("Redish"), None);
    assert_eq!(parse_color_name("[Red]"), None);
    assert_eq!(parse_color_name(""), None);
}

#[test]
fn test_color_display_is_canonical() {
    assert_eq!("rEd".parse::<ColorName>().unwrap().to_string(), "Red");
    assert_eq!(ColorName::indexed(12).unwrap().to_string(), "Color12");
}

#[test]
fn test_locale_id_parts() {
    let id = parse_locale_id("gu_IN").unwrap();
    assert_eq!(id.language, "gu");
    assert_eq!(id.script, None);
    assert_eq!(id.region.as_deref(), Some("IN"));

    let id = parse_locale_id("SR-latn-rs").unwrap();
    assert_eq!(id.to_string(), "sr_Latn_RS");

    let id = parse_locale_id("es_419").unwrap();
    assert_eq!(id.region.as_deref(), Some("419"));

    let id = parse_locale_id("de_DE.UTF-8@euro").unwrap();
    assert_eq!(id.to_string(), "de_DE");

    let id = parse_locale_id("hi").unwrap();
    assert_eq!(id.to_string(), "hi");
}

#[test]
fn test_locale_id_rejects_garbage() {
    assert!(parse_locale_id("").is_err());
    assert!(parse_locale_id("C").is_err());
    assert!(parse_locale_id("english").is_err());
    assert!(parse_locale_id("en_USA_x").is_err());
}

#[test]
fn test_locale_id_candidates() {
    let id = parse_locale_id("zh_Hant_TW").unwrap();
    assert_eq!(
        id.candidates(),
        vec!["zh_Hant_TW", "zh_TW", "zh_Hant", "zh"]
    );
    assert_eq!(parse_locale_id("en").unwrap().candidates(), vec!["en"]);
}

#[test]
fn test_grouped_integer_mask() {
    assert_eq!(grouped_integer_mask(GroupingTopology::WESTERN), "#,##0");
    assert_eq!(grouped_integer_mask(GroupingTopology::SOUTH_ASIAN), "#,##,##0");
    assert_eq!(grouped_integer_mask(GroupingTopology::uniform(1).unwrap()), "#,0");
    assert_eq!(grouped_integer_mask(GroupingTopology::uniform(4).unwrap()), "#,###0");
    assert_eq!(
        grouped_integer_mask(GroupingTopology::new(4, 2).unwrap()),
        "#,##,###0"
    );
}

#[test]
fn test_decimal_suffix() {
    assert_eq!(decimal_suffix(0), "");
    assert_eq!(decimal_suffix(1), ".0");
    assert_eq!(decimal_suffix(4), ".0000");
}

#[test]
fn test_topology_rejects_zero_width() {
    assert!(GroupingTopology::new(0, 3).is_none());
    assert!(GroupingTopology::new(3, 0).is_none());
    assert!(GroupingTopology::uniform(0).is_none());
    assert!(!GroupingTopology::WESTERN.is_multi_tier());
    assert!(GroupingTopology::SOUTH_ASIAN.is_multi_tier());
}

#[test]
fn test_sign_policy_apply() {
    let leading = SignPolicy::default();
    assert_eq!(leading.apply('-', "0.00"), "-0.00");

    let trailing = SignPolicy::new(SignPosition::Trailing, " ");
    assert_eq!(trailing.apply('+', "0.00"), "0.00 +");
}

#[test]
fn test_section_count_derivation() {
    let mut builder = NumberMaskBuilder::with_resolver("en_US", GroupingTopology::WESTERN);
    assert_eq!(builder.section_count(), 1);

    builder.set_color_set(ColorSet::new(Some(ColorName::Blue), None, None));
    assert_eq!(builder.section_count(), 1);

    builder.set_color_set(ColorSet::new(None, Some(ColorName::Red), None));
    assert_eq!(builder.section_count(), 2);

    builder.set_color_set(ColorSet::new(None, None, Some(ColorName::Black)));
    assert_eq!(builder.section_count(), 3);

    builder.set_color_set(ColorSet::default());
    assert_eq!(builder.section_count(), 1);

    builder.trailing_sign(false, "");
    assert_eq!(builder.section_count(), 2);

    builder.display_positive_sign(true);
    assert_eq!(builder.section_count(), 3);
}

#[test]
fn test_color_set_parse_is_atomic() {
    let err = ColorSet::parse(Some("Red"), Some("Bogus"), None).unwrap_err();
    assert_eq!(err, crate::MaskError::InvalidColorName("Bogus".to_string()));
}
