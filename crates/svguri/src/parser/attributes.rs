// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::style;
use super::svgtree::{AId, EId, SvgNode};
use super::Options;
use crate::Attributes;

/// Properties allowed on every element, except `defs`.
pub const COMMON_ATTRIBUTES: &[AId] = &[
    AId::Fill,
    AId::FillOpacity,
    AId::Stroke,
    AId::StrokeWidth,
    AId::StrokeOpacity,
    AId::Opacity,
    AId::StrokeLinecap,
    AId::StrokeLinejoin,
    AId::StrokeDasharray,
    AId::StrokeDashoffset,
    AId::X,
    AId::Y,
    AId::Rotate,
    AId::Scale,
    AId::Origin,
    AId::OriginX,
    AId::OriginY,
];

const SVG_ATTRIBUTES: &[AId] = &[AId::ViewBox, AId::Width, AId::Height];
const G_ATTRIBUTES: &[AId] = &[AId::Id];
const CIRCLE_ATTRIBUTES: &[AId] = &[AId::Cx, AId::Cy, AId::R];
const PATH_ATTRIBUTES: &[AId] = &[AId::D];
const RECT_ATTRIBUTES: &[AId] = &[AId::Width, AId::Height];
const LINE_ATTRIBUTES: &[AId] = &[AId::X1, AId::Y1, AId::X2, AId::Y2];
const LINEAR_GRADIENT_ATTRIBUTES: &[AId] = &[
    AId::X1,
    AId::Y1,
    AId::X2,
    AId::Y2,
    AId::Id,
    AId::GradientUnits,
];
const RADIAL_GRADIENT_ATTRIBUTES: &[AId] = &[AId::Cx, AId::Cy, AId::R, AId::Id, AId::GradientUnits];
const STOP_ATTRIBUTES: &[AId] = &[AId::Offset];
const ELLIPSE_ATTRIBUTES: &[AId] = &[AId::Cx, AId::Cy, AId::Rx, AId::Ry];
const TEXT_ATTRIBUTES: &[AId] = &[AId::FontFamily, AId::FontSize, AId::FontWeight, AId::TextAnchor];
const POLY_ATTRIBUTES: &[AId] = &[AId::Points];

/// Returns element-specific properties.
///
/// `COMMON_ATTRIBUTES` are not included.
pub fn allowed_attributes(eid: EId) -> &'static [AId] {
    match eid {
        EId::Svg => SVG_ATTRIBUTES,
        EId::G => G_ATTRIBUTES,
        EId::Circle => CIRCLE_ATTRIBUTES,
        EId::Path => PATH_ATTRIBUTES,
        EId::Rect => RECT_ATTRIBUTES,
        EId::Defs => &[],
        EId::Line => LINE_ATTRIBUTES,
        EId::LinearGradient => LINEAR_GRADIENT_ATTRIBUTES,
        EId::RadialGradient => RADIAL_GRADIENT_ATTRIBUTES,
        EId::Stop => STOP_ATTRIBUTES,
        EId::Ellipse => ELLIPSE_ATTRIBUTES,
        EId::Polygon | EId::Polyline => POLY_ATTRIBUTES,
        EId::Text | EId::Tspan => TEXT_ATTRIBUTES,
    }
}

/// Checks that a property can be set on an element.
pub fn is_allowed(eid: EId, aid: AId) -> bool {
    // `defs` is a plain container.
    if eid == EId::Defs {
        return false;
    }

    allowed_attributes(eid).contains(&aid) || COMMON_ATTRIBUTES.contains(&aid)
}

/// Collects element properties.
///
/// Attributes are camel-cased, stripped from the `px` unit and filtered
/// by the element's allow-list. Properties from the `style` attribute
/// are merged on top, so they win over attributes with the same name.
pub(crate) fn collect(node: SvgNode, eid: EId, opt: &Options) -> Attributes {
    let mut attrs = Attributes::new();
    if eid == EId::Defs {
        return attrs;
    }

    let allowed = |name: &str| AId::from_str(name).filter(|aid| is_allowed(eid, *aid));

    let mut style_attrs = Attributes::new();
    if let Some(color) = opt.fill_all_color() {
        style_attrs.insert(AId::Fill, color.to_string());
    }

    for attr in node.attributes() {
        let declarations = match style::transform_style(&attr.name, &attr.value, opt.fill.as_ref()) {
            Some(v) => v,
            None => continue,
        };

        for (name, value) in declarations {
            if let Some(aid) = allowed(name.as_str()) {
                style_attrs.insert(aid, value);
            }
        }
    }

    for attr in node.attributes() {
        let (name, value) = style::normalize_attribute(&attr.name, &attr.value);
        let aid = match allowed(&*name) {
            Some(v) => v,
            None => continue,
        };

        let value = if aid == AId::Fill {
            style::resolve_fill(value, opt.fill.as_ref())
        } else {
            value
        };

        attrs.insert(aid, value.to_string());
    }

    attrs.extend(style_attrs);
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svgtree::Document;
    use crate::{Fill, FillReplacement};

    fn collect_root(text: &str, opt: &Options) -> Attributes {
        let doc = Document::parse_str(text).unwrap();
        let node = doc.root_element().unwrap().first_element_child().unwrap();
        let eid = node.element_kind().unwrap();
        collect(node, eid, opt)
    }

    #[test]
    fn every_kind_has_a_table() {
        for eid in EId::ALL {
            if *eid == EId::Defs {
                assert!(allowed_attributes(*eid).is_empty());
                assert!(!is_allowed(*eid, AId::Fill));
            } else {
                assert!(is_allowed(*eid, AId::Fill));
                assert!(is_allowed(*eid, AId::Y));
            }
        }
    }

    #[test]
    fn text_allow_list() {
        assert!(is_allowed(EId::Text, AId::FontSize));
        assert!(is_allowed(EId::Tspan, AId::TextAnchor));
        assert!(!is_allowed(EId::Text, AId::D));
        assert!(!is_allowed(EId::Rect, AId::Rx));
    }

    #[test]
    fn drops_unknown_attributes() {
        let attrs = collect_root(
            "<svg><rect width='10px' rx='3' class='a' stroke-width='2' data-x='1'/></svg>",
            &Options::default(),
        );

        let keys: Vec<_> = attrs.keys().copied().collect();
        assert_eq!(keys, vec![AId::StrokeWidth, AId::Width]);
        assert_eq!(attrs[&AId::Width], "10");
        assert_eq!(attrs[&AId::StrokeWidth], "2");
    }

    #[test]
    fn style_wins() {
        let attrs = collect_root(
            "<svg><path d='M 0 0' stroke='red' style='stroke: blue; font-size: 3px'/></svg>",
            &Options::default(),
        );

        assert_eq!(attrs[&AId::Stroke], "blue");
        assert!(!attrs.contains_key(&AId::FontSize));
    }

    #[test]
    fn fill_color() {
        let opt = Options {
            fill: Some(Fill::Color("red".to_string())),
            ..Options::default()
        };

        let attrs = collect_root("<svg><circle r='5' fill='blue'/></svg>", &opt);
        assert_eq!(attrs[&AId::Fill], "red");

        // Without `fill_all` only declared fills are replaced.
        let attrs = collect_root("<svg><circle r='5'/></svg>", &opt);
        assert!(!attrs.contains_key(&AId::Fill));
    }

    #[test]
    fn fill_all() {
        let opt = Options {
            fill: Some(Fill::Color("red".to_string())),
            fill_all: true,
            ..Options::default()
        };

        let attrs = collect_root("<svg><circle r='5'/></svg>", &opt);
        assert_eq!(attrs[&AId::Fill], "red");
    }

    #[test]
    fn fill_list() {
        let opt = Options {
            fill: Some(Fill::Replace(vec![FillReplacement::new("blue", "green")])),
            ..Options::default()
        };

        let attrs = collect_root("<svg><circle fill='blue'/></svg>", &opt);
        assert_eq!(attrs[&AId::Fill], "green");

        let attrs = collect_root("<svg><circle fill='orange'/></svg>", &opt);
        assert_eq!(attrs[&AId::Fill], "orange");
    }

    #[test]
    fn defs_has_no_attributes() {
        let opt = Options {
            fill: Some(Fill::Color("red".to_string())),
            fill_all: true,
            ..Options::default()
        };

        let attrs = collect_root("<svg><defs x='1' fill='blue'/></svg>", &opt);
        assert!(attrs.is_empty());
    }
}
