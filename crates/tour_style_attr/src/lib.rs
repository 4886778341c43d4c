//! Inline `style="..."` attribute handling: parsing, single-property updates
//! and CSS number formatting for the values written back.
//! Syntax: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

use std::collections::HashMap;

use log::warn;

/// A single CSS declaration parsed from a style attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase.
    pub property: String,
    /// Raw value trimmed of surrounding ASCII whitespace. May contain spaces.
    pub value: String,
}

impl Declaration {
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: property.to_ascii_lowercase(),
            value: value.to_owned(),
        }
    }
}

/// Parse the value of a `style` attribute into a list of declarations.
///
/// Splits on `;`, then on the first `:` of each item. Items with no colon, an
/// empty property or an empty value are skipped. No tokenizer: a `;` inside a
/// quoted string or `url(...)` splits the declaration.
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    let mut out: Vec<Declaration> = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim_matches(is_ascii_whitespace);
        if item.is_empty() {
            continue;
        }
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            continue;
        };
        let property_text = raw_prop.trim_matches(is_ascii_whitespace);
        let value_text = raw_value.trim_matches(is_ascii_whitespace);
        if property_text.is_empty() || value_text.is_empty() {
            continue;
        }
        out.push(Declaration::new(property_text, value_text));
    }
    out
}

/// Parse and keep only the last occurrence of each property, in the position
/// of that last occurrence.
pub fn normalize_style_attribute(input: &str) -> Vec<Declaration> {
    let declarations = parse_style_attribute(input);
    let mut last_index_for_property: HashMap<String, usize> =
        HashMap::with_capacity(declarations.len());
    for (index, decl_item) in declarations.iter().enumerate() {
        last_index_for_property.insert(decl_item.property.clone(), index);
    }
    declarations
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, decl_item)| match last_index_for_property.get(&decl_item.property) {
                Some(&last_index) if last_index == index => Some(decl_item),
                _ => None,
            },
        )
        .collect()
}

/// Value of `property` in a style attribute; the last declaration wins.
pub fn property_value(input: &str, property: &str) -> Option<String> {
    let wanted = property.to_ascii_lowercase();
    parse_style_attribute(input)
        .into_iter()
        .rev()
        .find(|decl_item| decl_item.property == wanted)
        .map(|decl_item| decl_item.value)
}

/// Serialize declarations as `prop: value; prop: value`.
pub fn serialize_declarations(declarations: &[Declaration]) -> String {
    let mut out = String::new();
    for decl_item in declarations {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&decl_item.property);
        out.push_str(": ");
        out.push_str(&decl_item.value);
        out.push(';');
    }
    out
}

/// Return `input` with `property` set to `value`.
///
/// Other declarations are preserved in order. An existing declaration is
/// replaced in place, so applying the same update twice gives the same string.
pub fn set_property(input: &str, property: &str, value: &str) -> String {
    let updated = Declaration::new(property, value);
    let mut declarations = normalize_style_attribute(input);
    match declarations
        .iter_mut()
        .find(|decl_item| decl_item.property == updated.property)
    {
        Some(existing) => existing.value = updated.value,
        None => declarations.push(updated),
    }
    serialize_declarations(&declarations)
}

/// Parse a pixel length such as `24px` or a bare number such as `24`.
pub fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim_matches(is_ascii_whitespace);
    let number = trimmed
        .strip_suffix("px")
        .or_else(|| trimmed.strip_suffix("PX"))
        .unwrap_or(trimmed)
        .trim_end_matches(is_ascii_whitespace);
    number.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// Format a number for a CSS value: shortest round-trip decimal, `0` for
/// negative zero, and `0` for non-finite input.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        warn!("refusing to write non-finite CSS number {value}; using 0");
        return "0".to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// `<number>%`
pub fn percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

/// `<number>px`
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_invalid_items() {
        let parsed = parse_style_attribute(" Left : 25% ;;color:;nocolon; margin-left:-12px");
        assert_eq!(
            parsed,
            vec![
                Declaration::new("left", "25%"),
                Declaration::new("margin-left", "-12px"),
            ]
        );
    }

    #[test]
    fn normalize_keeps_last_occurrence() {
        let normalized = normalize_style_attribute("width: 1%; color: red; width: 2%");
        assert_eq!(
            normalized,
            vec![Declaration::new("color", "red"), Declaration::new("width", "2%")]
        );
    }

    #[test]
    fn normalize_collapses_many_repeats_in_order() {
        let mut input = String::new();
        for step in 0..200 {
            input.push_str(&format!("right: {step}%; margin-right: -{step}px; "));
        }
        input.push_str("color: red");
        assert_eq!(
            normalize_style_attribute(&input),
            vec![
                Declaration::new("right", "199%"),
                Declaration::new("margin-right", "-199px"),
                Declaration::new("color", "red"),
            ]
        );
    }

    #[test]
    fn set_property_replaces_in_place_and_is_idempotent() {
        let once = set_property("color: red; right: 10%", "right", "50%");
        assert_eq!(once, "color: red; right: 50%;");
        assert_eq!(set_property(&once, "right", "50%"), once);
        assert_eq!(set_property("", "width", "75%"), "width: 75%;");
    }

    #[test]
    fn property_value_is_case_insensitive_on_the_name() {
        assert_eq!(property_value("WIDTH: 24px", "width").as_deref(), Some("24px"));
        assert_eq!(property_value("height: 2px", "width"), None);
    }

    #[test]
    fn parses_pixel_lengths() {
        assert_eq!(parse_px("24px"), Some(24.0));
        assert_eq!(parse_px(" 12.5 "), Some(12.5));
        assert_eq!(parse_px("2em"), None);
        assert_eq!(parse_px("NaN"), None);
    }

    #[test]
    fn formats_numbers_like_the_dom_does() {
        assert_eq!(percent(50.0), "50%");
        assert_eq!(percent(100.0 / 3.0), "33.333333333333336%");
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(-12.5), "-12.5px");
        assert_eq!(format_number(f64::NAN), "0");
    }
}
