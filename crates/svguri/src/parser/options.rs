// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tiny_skia_path::Size;

/// A single color replacement.
#[derive(Clone, PartialEq, Debug)]
pub struct FillReplacement {
    /// A fill color to match. Compared as a plain string.
    pub color: String,
    /// A fill color to use instead.
    pub fill: String,
}

impl FillReplacement {
    /// Creates a new replacement.
    pub fn new(color: impl Into<String>, fill: impl Into<String>) -> Self {
        FillReplacement {
            color: color.into(),
            fill: fill.into(),
        }
    }
}

/// A fill override.
#[derive(Clone, PartialEq, Debug)]
pub enum Fill {
    /// Replaces every declared fill with this color.
    ///
    /// An empty string means no override.
    Color(String),
    /// Replaces only the fills that match one of the replacements.
    ///
    /// The first matching entry wins.
    Replace(Vec<FillReplacement>),
}

impl Fill {
    /// Returns a fill value that should be used instead of `value`.
    ///
    /// An empty color disables the override.
    pub fn apply<'a>(&'a self, value: &'a str) -> &'a str {
        match self {
            Fill::Color(ref color) if color.is_empty() => value,
            Fill::Color(ref color) => color,
            Fill::Replace(ref list) => list
                .iter()
                .find(|item| item.color == value)
                .map(|item| item.fill.as_str())
                .unwrap_or(value),
        }
    }
}

/// Processing options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Overrides element fills.
    ///
    /// Default: `None`
    pub fill: Option<Fill>,

    /// Sets `fill` on every element, even on ones that don't declare a fill.
    ///
    /// Has an effect only with `Fill::Color`, because `Fill::Replace`
    /// needs an original color to match against.
    ///
    /// Default: false
    pub fill_all: bool,

    /// A requested render width.
    ///
    /// When not set or zero, `default_size` width is used.
    ///
    /// Default: `None`
    pub width: Option<f32>,

    /// A requested render height.
    ///
    /// When not set or zero, `default_size` height is used.
    ///
    /// Default: `None`
    pub height: Option<f32>,

    /// A size of the container the drawing is placed in.
    ///
    /// Used when `width` and/or `height` are not set.
    ///
    /// Default: `(100, 100)`
    pub default_size: Size,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            fill: None,
            fill_all: false,
            width: None,
            height: None,
            default_size: Size::from_wh(100.0, 100.0).unwrap(),
        }
    }
}

impl Options {
    /// Returns a render size.
    ///
    /// Each side falls back to `default_size` independently.
    pub fn render_size(&self) -> (f32, f32) {
        let pick = |v: Option<f32>, fallback: f32| match v {
            Some(n) if n.is_finite() && n > 0.0 => n,
            _ => fallback,
        };

        (
            pick(self.width, self.default_size.width()),
            pick(self.height, self.default_size.height()),
        )
    }

    /// Returns a fill color that must be set on every element.
    pub(crate) fn fill_all_color(&self) -> Option<&str> {
        if !self.fill_all {
            return None;
        }

        match self.fill {
            Some(Fill::Color(ref color)) if !color.is_empty() => Some(color),
            _ => None,
        }
    }
}
