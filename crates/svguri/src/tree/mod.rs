// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

pub use tiny_skia_path::{Size, Transform};

use crate::parser::svgtree::{AId, EId};

/// Collected drawing primitive properties.
pub type Attributes = BTreeMap<AId, String>;

/// A render tree.
///
/// Rebuilt from scratch on each conversion.
#[derive(Clone, Debug)]
pub struct Tree {
    pub(crate) size: Size,
    pub(crate) root: Option<Node>,
}

impl Tree {
    /// Returns the size of the container the drawing is placed into.
    ///
    /// The drawing itself is centered inside it.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the root node.
    ///
    /// `None` when the document root is not an accepted element.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }
}

/// A node child.
#[derive(Clone, PartialEq, Debug)]
pub enum Child {
    /// A drawing primitive.
    Node(Node),
    /// A text content. Present only inside `Text` nodes.
    Text(String),
}

impl Child {
    /// Returns a node, unless this is a text.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(ref node) => Some(node),
            Child::Text(_) => None,
        }
    }

    /// Returns a text, unless this is a node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Node(_) => None,
            Child::Text(ref text) => Some(text),
        }
    }
}

/// A generic drawing primitive.
#[derive(Clone, PartialEq, Debug)]
pub struct Element {
    pub(crate) key: u32,
    pub(crate) attributes: Attributes,
    pub(crate) children: Vec<Child>,
}

impl Element {
    /// Returns a render key.
    ///
    /// Keys are assigned in the conversion order and are unique only inside a single tree.
    pub fn key(&self) -> u32 {
        self.key
    }

    /// Returns collected properties.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns a property value.
    pub fn attribute(&self, aid: AId) -> Option<&str> {
        self.attributes.get(&aid).map(String::as_str)
    }

    /// Returns children.
    pub fn children(&self) -> &[Child] {
        &self.children
    }
}

/// The root drawing primitive.
#[derive(Clone, PartialEq, Debug)]
pub struct Svg {
    pub(crate) element: Element,
    pub(crate) scale: f32,
}

impl Svg {
    /// Returns a uniform scale that fits the drawing into the requested size.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns a presentation transform.
    ///
    /// Applied to this node only. Children stay in the original units.
    pub fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }
}

/// A drawing primitive.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    Svg(Svg),
    Group(Element),
    Path(Element),
    Circle(Element),
    Rect(Element),
    Line(Element),
    Defs(Element),
    LinearGradient(Element),
    RadialGradient(Element),
    Stop(Element),
    Ellipse(Element),
    Polygon(Element),
    Polyline(Element),
    Text(Element),
    TSpan(Element),
}

impl Node {
    /// Returns the element this node was created from.
    pub fn kind(&self) -> EId {
        match self {
            Node::Svg(_) => EId::Svg,
            Node::Group(_) => EId::G,
            Node::Path(_) => EId::Path,
            Node::Circle(_) => EId::Circle,
            Node::Rect(_) => EId::Rect,
            Node::Line(_) => EId::Line,
            Node::Defs(_) => EId::Defs,
            Node::LinearGradient(_) => EId::LinearGradient,
            Node::RadialGradient(_) => EId::RadialGradient,
            Node::Stop(_) => EId::Stop,
            Node::Ellipse(_) => EId::Ellipse,
            Node::Polygon(_) => EId::Polygon,
            Node::Polyline(_) => EId::Polyline,
            Node::Text(_) => EId::Text,
            Node::TSpan(_) => EId::Tspan,
        }
    }

    /// Returns the underlying element.
    pub fn element(&self) -> &Element {
        match self {
            Node::Svg(ref svg) => &svg.element,
            Node::Group(ref e)
            | Node::Path(ref e)
            | Node::Circle(ref e)
            | Node::Rect(ref e)
            | Node::Line(ref e)
            | Node::Defs(ref e)
            | Node::LinearGradient(ref e)
            | Node::RadialGradient(ref e)
            | Node::Stop(ref e)
            | Node::Ellipse(ref e)
            | Node::Polygon(ref e)
            | Node::Polyline(ref e)
            | Node::Text(ref e)
            | Node::TSpan(ref e) => e,
        }
    }

    /// Returns a render key.
    #[inline]
    pub fn key(&self) -> u32 {
        self.element().key
    }

    /// Returns collected properties.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.element().attributes
    }

    /// Returns a property value.
    #[inline]
    pub fn attribute(&self, aid: AId) -> Option<&str> {
        self.element().attribute(aid)
    }

    /// Returns children.
    #[inline]
    pub fn children(&self) -> &[Child] {
        &self.element().children
    }

    /// Returns an iterator over this node and its descendant nodes.
    ///
    /// Text children are skipped.
    pub fn descendants(&self) -> Descendants {
        Descendants { stack: vec![self] }
    }
}

/// A descendants iterator.
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().filter_map(Child::as_node));
        Some(node)
    }
}
