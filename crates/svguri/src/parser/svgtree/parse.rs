// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::{Attribute, Document, NodeData, NodeId, NodeKind, ShortRange};
use crate::Error;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const XML_NAMESPACE_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// The maximum elements nesting depth.
const MAX_DEPTH: u32 = 1024;

impl<'input> Document<'input> {
    /// Parses a [`Document`] from a string.
    pub fn parse_str(text: &'input str) -> Result<Document<'input>, Error> {
        let xml_opt = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };

        let xml = roxmltree::Document::parse_with_options(text, xml_opt)?;
        parse(&xml)
    }

    /// Parses a [`Document`] from a [`roxmltree::Document`].
    pub fn parse_tree(xml: &roxmltree::Document<'input>) -> Result<Document<'input>, Error> {
        parse(xml)
    }

    fn append(&mut self, parent_id: NodeId, kind: NodeKind) -> NodeId {
        let new_child_id = NodeId::from(self.nodes.len());
        self.nodes.push(NodeData {
            parent: Some(parent_id),
            next_sibling: None,
            children: None,
            kind,
        });

        let last_child_id = self.nodes[parent_id.get_usize()].children.map(|(_, id)| id);

        if let Some(id) = last_child_id {
            self.nodes[id.get_usize()].next_sibling = Some(new_child_id);
        }

        self.nodes[parent_id.get_usize()].children = Some(
            if let Some((first_child_id, _)) = self.nodes[parent_id.get_usize()].children {
                (first_child_id, new_child_id)
            } else {
                (new_child_id, new_child_id)
            },
        );

        new_child_id
    }
}

fn parse<'input>(xml: &roxmltree::Document<'input>) -> Result<Document<'input>, Error> {
    let mut doc = Document {
        nodes: Vec::new(),
        attrs: Vec::new(),
    };

    // Add a root node.
    doc.nodes.push(NodeData {
        parent: None,
        next_sibling: None,
        children: None,
        kind: NodeKind::Root,
    });

    let root_id = doc.root().id;
    parse_xml_node_children(xml.root(), root_id, 0, &mut doc)?;

    Ok(doc)
}

fn parse_xml_node_children<'input>(
    parent: roxmltree::Node<'_, 'input>,
    parent_id: NodeId,
    depth: u32,
    doc: &mut Document<'input>,
) -> Result<(), Error> {
    for node in parent.children() {
        parse_xml_node(node, parent_id, depth, doc)?;
    }

    Ok(())
}

fn parse_xml_node<'input>(
    node: roxmltree::Node<'_, 'input>,
    parent_id: NodeId,
    depth: u32,
    doc: &mut Document<'input>,
) -> Result<(), Error> {
    if depth > MAX_DEPTH {
        return Err(Error::ElementsLimitReached);
    }

    if node.is_text() {
        // Whitespace-only text is kept here, the converter decides what to do with it.
        if let Some(text) = node.text() {
            if !text.is_empty() {
                doc.append(parent_id, NodeKind::Text(text.to_string()));
            }
        }

        return Ok(());
    }

    if !node.is_element() {
        // Comments and processing instructions.
        return Ok(());
    }

    let node_id = parse_element(node, parent_id, doc);
    parse_xml_node_children(node, node_id, depth + 1, doc)
}

fn parse_element<'input>(
    xml_node: roxmltree::Node<'_, 'input>,
    parent_id: NodeId,
    doc: &mut Document<'input>,
) -> NodeId {
    let attrs_start_idx = doc.attrs.len();

    for attr in xml_node.attributes() {
        let name = match attr.namespace() {
            None | Some(SVG_NS) => attr.name().to_string(),
            Some(XLINK_NS) => format!("xlink:{}", attr.name()),
            Some(XML_NAMESPACE_NS) => format!("xml:{}", attr.name()),
            // Editor-specific attributes, like `inkscape:label`.
            _ => continue,
        };

        doc.attrs.push(Attribute {
            name,
            value: attr.value_storage().clone(),
        });
    }

    let tag_name = parse_tag_name(xml_node);
    doc.append(
        parent_id,
        NodeKind::Element {
            tag_name,
            attributes: ShortRange::new(attrs_start_idx as u32, doc.attrs.len() as u32),
        },
    )
}

/// Returns a tag name the way a DOM would report it.
///
/// Elements from a foreign namespace keep their prefix,
/// so `<sodipodi:namedview>` will never match an SVG element name.
fn parse_tag_name(node: roxmltree::Node) -> String {
    let tag = node.tag_name();
    match tag.namespace() {
        None | Some(SVG_NS) => tag.name().to_string(),
        Some(ns) => {
            let prefix = node.lookup_prefix(ns).unwrap_or(ns);
            format!("{}:{}", prefix, tag.name())
        }
    }
}
