// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::Display;

use xmlwriter::XmlWriter;

use crate::parser::AId;
use crate::*;

impl Tree {
    /// Writes `svguri::Tree` as a tree of drawing primitives.
    ///
    /// Returns an empty string when the tree has no root.
    pub fn to_string(&self, opt: &WriteOptions) -> String {
        convert(self, opt)
    }
}

/// XML writing options.
#[derive(Clone, Debug)]
pub struct WriteOptions {
    /// Use single quote marks instead of double quote.
    ///
    /// # Examples
    ///
    /// Before:
    ///
    /// ```text
    /// <Rect fill="red"/>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <Rect fill='red'/>
    /// ```
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Set XML nodes indention.
    ///
    /// # Examples
    ///
    /// `Indent::None`
    /// Before:
    ///
    /// ```text
    /// <Svg>
    ///     <Rect fill="red"/>
    /// </Svg>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <Svg><Rect fill="red"/></Svg>
    /// ```
    ///
    /// Default: 4 spaces
    pub indent: xmlwriter::Indent,

    /// Set XML attributes indention.
    ///
    /// Default: `None`
    pub attributes_indent: xmlwriter::Indent,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            use_single_quote: false,
            indent: xmlwriter::Indent::Spaces(4),
            attributes_indent: xmlwriter::Indent::None,
        }
    }
}

pub(crate) fn convert(tree: &Tree, opt: &WriteOptions) -> String {
    let root = match tree.root {
        Some(ref root) => root,
        None => return String::new(),
    };

    let mut xml = XmlWriter::new(xmlwriter::Options {
        use_single_quote: opt.use_single_quote,
        indent: opt.indent,
        attributes_indent: opt.attributes_indent,
    });

    write_node(root, &mut xml);

    xml.end_document()
}

fn write_node(node: &Node, xml: &mut XmlWriter) {
    xml.start_element(primitive_name(node));
    xml.write_attribute("key", &node.key());

    for (aid, value) in node.attributes() {
        xml.write_prop(*aid, value);
    }

    if let Node::Svg(ref svg) = node {
        xml.write_attribute("scale", &svg.scale());
    }

    for child in node.children() {
        match child {
            Child::Node(ref node) => write_node(node, xml),
            Child::Text(ref text) => xml.write_text(text),
        }
    }

    xml.end_element();
}

fn primitive_name(node: &Node) -> &'static str {
    match node {
        Node::Svg(_) => "Svg",
        Node::Group(_) => "G",
        Node::Path(_) => "Path",
        Node::Circle(_) => "Circle",
        Node::Rect(_) => "Rect",
        Node::Line(_) => "Line",
        Node::Defs(_) => "Defs",
        Node::LinearGradient(_) => "LinearGradient",
        Node::RadialGradient(_) => "RadialGradient",
        Node::Stop(_) => "Stop",
        Node::Ellipse(_) => "Ellipse",
        Node::Polygon(_) => "Polygon",
        Node::Polyline(_) => "Polyline",
        Node::Text(_) => "Text",
        Node::TSpan(_) => "TSpan",
    }
}

trait XmlWriterExt {
    fn write_prop<V: Display + ?Sized>(&mut self, id: AId, value: &V);
}

impl XmlWriterExt for XmlWriter {
    #[inline(never)]
    fn write_prop<V: Display + ?Sized>(&mut self, id: AId, value: &V) {
        self.write_attribute(id.to_str(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(svg: &str, opt: &Options) -> String {
        let tree = Tree::from_str(svg, opt).unwrap();
        let xml_opt = WriteOptions {
            use_single_quote: true,
            indent: xmlwriter::Indent::None,
            attributes_indent: xmlwriter::Indent::None,
        };
        tree.to_string(&xml_opt)
    }

    #[test]
    fn primitives() {
        let opt = Options {
            width: Some(100.0),
            height: Some(50.0),
            ..Options::default()
        };

        let text = dump(
            "<svg width='50' height='50'><g><rect width='10' height='20'/></g></svg>",
            &opt,
        );

        assert_eq!(
            text,
            "<Svg key='2' height='50' width='50' scale='1'>\
             <G key='1'><Rect key='0' height='20' width='10'/></G></Svg>"
        );
    }

    #[test]
    fn text_content() {
        let text = dump(
            "<svg><text x='1' font-size='8' y='20'>Hello</text></svg>",
            &Options::default(),
        );

        assert_eq!(
            text,
            "<Svg key='1' scale='1'>\
             <Text key='0' fontSize='8' x='1' y='12'>Hello</Text></Svg>"
        );
    }

    #[test]
    fn no_root() {
        let tree = Tree {
            size: Size::from_wh(100.0, 100.0).unwrap(),
            root: None,
        };

        assert_eq!(tree.to_string(&WriteOptions::default()), "");
    }
}
