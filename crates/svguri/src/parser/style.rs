// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Attribute names and values normalization.

use std::borrow::Cow;
use std::str::FromStr;

use super::Fill;

/// Converts a hyphenated XML attribute name into a camel-cased property name.
///
/// Only a hyphen followed by a lowercase ASCII letter is folded,
/// so `font-size` becomes `fontSize`, while `x-1` stays as is.
pub fn camel_case(name: &str) -> Cow<str> {
    if !name.contains('-') {
        return Cow::Borrowed(name);
    }

    let mut s = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied() {
                if next.is_ascii_lowercase() {
                    s.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }

        s.push(c);
    }

    Cow::Owned(s)
}

/// Removes the `px` unit from a number.
///
/// `12px` becomes `12`. Other units and non-numeric values are returned unchanged.
pub fn strip_px(value: &str) -> &str {
    match value.strip_suffix("px") {
        Some(number) if svgtypes::Number::from_str(number).is_ok() => number,
        _ => value,
    }
}

/// Normalizes a single attribute.
pub fn normalize_attribute<'a>(name: &'a str, value: &'a str) -> (Cow<'a, str>, &'a str) {
    (camel_case(name), strip_px(value))
}

/// Replaces a fill value according to the override.
#[inline]
pub(crate) fn resolve_fill<'a>(value: &'a str, fill: Option<&'a Fill>) -> &'a str {
    match fill {
        Some(fill) => fill.apply(value),
        None => value,
    }
}

/// Splits a `style` attribute into normalized properties.
///
/// Returns `None` for any other attribute.
///
/// Declarations are returned in the declaration order,
/// so a later declaration of the same property wins once collected.
pub fn transform_style(
    name: &str,
    value: &str,
    fill: Option<&Fill>,
) -> Option<Vec<(String, String)>> {
    if name != "style" {
        return None;
    }

    let mut list = Vec::new();
    for declaration in simplecss::DeclarationTokenizer::from(value) {
        if declaration.name.is_empty() {
            continue;
        }

        let value = strip_px(declaration.value.trim());
        let value = if declaration.name == "fill" {
            resolve_fill(value, fill)
        } else {
            value
        };

        list.push((camel_case(declaration.name).into_owned(), value.to_string()));
    }

    Some(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FillReplacement;

    macro_rules! test_camel {
        ($name:ident, $text:expr, $result:expr) => {
            #[test]
            fn $name() {
                assert_eq!(camel_case($text), $result);
            }
        };
    }

    test_camel!(camel_1, "fill", "fill");
    test_camel!(camel_2, "font-size", "fontSize");
    test_camel!(camel_3, "stroke-dash-offset", "strokeDashOffset");
    test_camel!(camel_4, "stroke-linecap", "strokeLinecap");
    test_camel!(camel_5, "x-1", "x-1");
    test_camel!(camel_6, "trailing-", "trailing-");
    test_camel!(camel_7, "xlink:href", "xlink:href");

    macro_rules! test_px {
        ($name:ident, $text:expr, $result:expr) => {
            #[test]
            fn $name() {
                assert_eq!(strip_px($text), $result);
            }
        };
    }

    test_px!(px_1, "12px", "12");
    test_px!(px_2, "12", "12");
    test_px!(px_3, "1.5px", "1.5");
    test_px!(px_4, "12em", "12em");
    test_px!(px_5, "12%", "12%");
    test_px!(px_6, "px", "px");
    test_px!(px_7, "M 0 0 L 10px", "M 0 0 L 10px");

    #[test]
    fn normalize() {
        assert_eq!(
            normalize_attribute("stroke-width", "2px"),
            (Cow::Borrowed("strokeWidth"), "2")
        );
    }

    #[test]
    fn not_a_style() {
        assert_eq!(transform_style("fill", "fill:red", None), None);
    }

    #[test]
    fn style_declarations() {
        let list = transform_style("style", "font-size: 12px; stroke:black;", None).unwrap();
        assert_eq!(
            list,
            vec![
                ("fontSize".to_string(), "12".to_string()),
                ("stroke".to_string(), "black".to_string()),
            ]
        );
    }

    #[test]
    fn style_fill_color_override() {
        let fill = Fill::Color("red".to_string());
        let list = transform_style("style", "fill:blue", Some(&fill)).unwrap();
        assert_eq!(list, vec![("fill".to_string(), "red".to_string())]);
    }

    #[test]
    fn style_fill_list_override() {
        let fill = Fill::Replace(vec![FillReplacement::new("blue", "green")]);
        let list = transform_style("style", "fill:blue;stroke:blue", Some(&fill)).unwrap();
        assert_eq!(
            list,
            vec![
                ("fill".to_string(), "green".to_string()),
                ("stroke".to_string(), "blue".to_string()),
            ]
        );

        let list = transform_style("style", "fill:orange", Some(&fill)).unwrap();
        assert_eq!(list, vec![("fill".to_string(), "orange".to_string())]);
    }
}
