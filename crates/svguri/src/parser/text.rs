// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::svgtree::SvgNode;
use super::units;

/// Moves a text baseline up by the nearest declared font size.
///
/// Looks for a `font-size` attribute on the node itself and then on its ancestors.
/// Only the attribute is checked, `style` declarations are not.
/// When no font size is declared, `y` is returned as is.
pub fn fix_y_position(y: f32, node: SvgNode) -> f32 {
    let (owner, value) = match node
        .ancestors()
        .find_map(|n| n.attribute("font-size").map(|v| (n, v)))
    {
        Some(v) => v,
        None => return y,
    };

    match units::parse_length_number(value) {
        Some(font_size) => y - font_size,
        None => {
            log::warn!(
                "Failed to parse font-size value: '{}' on '{}'.",
                value,
                owner.tag_name().unwrap_or_default()
            );
            y
        }
    }
}
