// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

/// Parses a plain number.
///
/// Units are not allowed, so `10mm` and `50%` are rejected.
pub(crate) fn parse_number(text: &str) -> Option<f32> {
    svgtypes::Number::from_str(text).ok().map(|n| n.0 as f32)
}

/// Parses a number, ignoring its unit.
///
/// `8`, `8px` and `8em` are all `8`.
pub(crate) fn parse_length_number(text: &str) -> Option<f32> {
    svgtypes::Length::from_str(text)
        .ok()
        .map(|l| l.number as f32)
        .filter(|n| n.is_finite())
}

#[inline]
fn scale_ratio(size: f32, org_size: f32) -> f32 {
    let s = size / org_size;
    if s.is_finite() && s > 0.0 {
        s
    } else {
        1.0
    }
}

/// Calculates a uniform scale that fits the original size into the requested one.
///
/// Each side ratio that is not a finite positive number is treated as `1`.
/// The smaller ratio is returned, so the aspect is preserved and nothing is cropped.
pub fn svg_scale(width: f32, height: f32, org_width: f32, org_height: f32) -> f32 {
    scale_ratio(width, org_width).min(scale_ratio(height, org_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smaller_ratio_wins() {
        assert_eq!(svg_scale(100.0, 50.0, 50.0, 50.0), 1.0);
        assert_eq!(svg_scale(200.0, 300.0, 100.0, 100.0), 2.0);
        assert_eq!(svg_scale(25.0, 50.0, 50.0, 50.0), 0.5);
    }

    #[test]
    fn invalid_ratios() {
        assert_eq!(svg_scale(0.0, 50.0, 50.0, 50.0), 1.0);
        assert_eq!(svg_scale(100.0, 100.0, 0.0, 50.0), 1.0);
        assert_eq!(svg_scale(100.0, 100.0, f32::NAN, f32::NAN), 1.0);
        assert_eq!(svg_scale(100.0, 200.0, f32::NAN, 100.0), 1.0);
        assert_eq!(svg_scale(100.0, 50.0, f32::NAN, 100.0), 0.5);
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number("12mm"), None);
        assert_eq!(parse_number("50%"), None);
        assert_eq!(parse_length_number("8"), Some(8.0));
        assert_eq!(parse_length_number("8px"), Some(8.0));
        assert_eq!(parse_length_number("1.5em"), Some(1.5));
        assert_eq!(parse_length_number("auto"), None);
    }
}
