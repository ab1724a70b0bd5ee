// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tiny_skia_path::Size;

use super::svgtree::{self, AId, EId, SvgNode};
use super::{attributes, text, units, Options};
use crate::{Child, Element, Node, Svg, Tree};

pub(crate) struct State<'a> {
    opt: &'a Options,
    /// A requested render size.
    width: f32,
    height: f32,
    /// The next render key. Starts from zero for each tree.
    next_key: u32,
}

impl State<'_> {
    fn alloc_key(&mut self) -> u32 {
        let key = self.next_key;
        self.next_key += 1;
        key
    }
}

/// Converts an input `Document` into a `Tree`.
pub(crate) fn convert_doc(svg_doc: &svgtree::Document, opt: &Options) -> Tree {
    let (width, height) = opt.render_size();
    let size = Size::from_wh(width, height).unwrap_or(opt.default_size);

    let mut state = State {
        opt,
        width,
        height,
        next_key: 0,
    };

    let root = svg_doc
        .root_element()
        .and_then(|node| convert_node(node, &mut state));

    Tree { size, root }
}

/// Converts an element and its subtree.
///
/// Children are converted first.
fn convert_node(node: SvgNode, state: &mut State) -> Option<Node> {
    let eid = match node.element_kind() {
        Some(v) => v,
        None => {
            log::debug!(
                "Element '{}' is not supported. Skipped.",
                node.tag_name().unwrap_or_default()
            );
            return None;
        }
    };

    let mut children = Vec::new();
    for child in node.children() {
        if child.is_text() {
            // Raw text is preserved only directly inside `text`.
            if eid == EId::Text {
                children.push(Child::Text(child.text().to_string()));
            }
        } else if let Some(child) = convert_node(child, state) {
            children.push(Child::Node(child));
        }
    }

    trim_children(&mut children);

    Some(convert_element(node, eid, children, state))
}

/// Removes whitespace-only text children left by the markup formatting.
fn trim_children(children: &mut Vec<Child>) {
    children.retain(|child| match child {
        Child::Text(ref text) => !text.trim().is_empty(),
        Child::Node(_) => true,
    });
}

fn convert_element(node: SvgNode, eid: EId, children: Vec<Child>, state: &mut State) -> Node {
    let key = state.alloc_key();
    let mut attributes = attributes::collect(node, eid, state.opt);

    if matches!(eid, EId::Text | EId::Tspan) {
        fix_baseline(node, &mut attributes);
    }

    let scale = if eid == EId::Svg {
        let org_width = intrinsic_size(&attributes, AId::Width);
        let org_height = intrinsic_size(&attributes, AId::Height);
        units::svg_scale(state.width, state.height, org_width, org_height)
    } else {
        1.0
    };

    let element = Element {
        key,
        attributes,
        children,
    };

    match eid {
        EId::Svg => Node::Svg(Svg { element, scale }),
        EId::G => Node::Group(element),
        EId::Path => Node::Path(element),
        EId::Circle => Node::Circle(element),
        EId::Rect => Node::Rect(element),
        EId::Line => Node::Line(element),
        EId::Defs => Node::Defs(element),
        EId::LinearGradient => Node::LinearGradient(element),
        EId::RadialGradient => Node::RadialGradient(element),
        EId::Stop => Node::Stop(element),
        EId::Ellipse => Node::Ellipse(element),
        EId::Polygon => Node::Polygon(element),
        EId::Polyline => Node::Polyline(element),
        EId::Text => Node::Text(element),
        EId::Tspan => Node::TSpan(element),
    }
}

/// Returns an intrinsic size or NaN, so the scale will fall back to `1`.
fn intrinsic_size(attributes: &crate::Attributes, aid: AId) -> f32 {
    attributes
        .get(&aid)
        .and_then(|v| units::parse_number(v))
        .unwrap_or(f32::NAN)
}

fn fix_baseline(node: SvgNode, attributes: &mut crate::Attributes) {
    let value = match attributes.get_mut(&AId::Y) {
        Some(v) if !v.is_empty() => v,
        _ => return,
    };

    let y = match units::parse_length_number(value) {
        Some(v) => v,
        None => {
            log::warn!("Failed to parse {} value: '{}'.", AId::Y, value);
            return;
        }
    };

    *value = text::fix_y_position(y, node).to_string();
}
