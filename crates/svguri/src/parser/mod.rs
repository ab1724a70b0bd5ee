// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod attributes;
mod converter;
mod options;
pub mod style;
pub mod svgtree;
mod text;
mod units;

pub use attributes::{allowed_attributes, is_allowed, COMMON_ATTRIBUTES};
pub use options::{Fill, FillReplacement, Options};
pub use svgtree::{AId, EId};
pub use text::fix_y_position;
pub use units::svg_scale;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Compressed SVG must use the GZip algorithm.
    MalformedGZip,

    /// We do not allow SVG with elements nested deeper than 1024 levels.
    ElementsLimitReached,

    /// The markup doesn't contain an `svg` element.
    NoSvgElement,

    /// Failed to parse an SVG data.
    ParsingFailed(roxmltree::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::MalformedGZip => {
                write!(f, "provided data has a malformed GZip content")
            }
            Error::ElementsLimitReached => {
                write!(f, "the maximum elements nesting depth has been reached")
            }
            Error::NoSvgElement => {
                write!(f, "provided data has no 'svg' element")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
        }
    }
}

impl std::error::Error for Error {}

impl crate::Tree {
    /// Parses `Tree` from an SVG data.
    ///
    /// Can contain an SVG string or a gzip compressed data.
    pub fn from_data(data: &[u8], opt: &Options) -> Result<Self, Error> {
        if data.starts_with(&[0x1f, 0x8b]) {
            let data = decompress_svgz(data)?;
            let text = std::str::from_utf8(&data).map_err(|_| Error::NotAnUtf8Str)?;
            Self::from_str(text, opt)
        } else {
            let text = std::str::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?;
            Self::from_str(text, opt)
        }
    }

    /// Parses `Tree` from an SVG string.
    ///
    /// Anything before the `svg` element, like an XML declaration or a DOCTYPE,
    /// is ignored.
    pub fn from_str(text: &str, opt: &Options) -> Result<Self, Error> {
        let text = svg_fragment(text).ok_or(Error::NoSvgElement)?;

        let xml_opt = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };

        let doc =
            roxmltree::Document::parse_with_options(text, xml_opt).map_err(Error::ParsingFailed)?;

        Self::from_xmltree(&doc, opt)
    }

    /// Parses `Tree` from `roxmltree::Document`.
    pub fn from_xmltree(doc: &roxmltree::Document, opt: &Options) -> Result<Self, Error> {
        let doc = svgtree::Document::parse_tree(doc)?;
        Ok(converter::convert_doc(&doc, opt))
    }
}

/// Returns the `svg` element markup.
///
/// Everything before the first `svg` start tag and after the last `svg` end tag is dropped.
/// Tags inside comments are ignored.
/// When there is no end tag, the rest of the text is returned.
pub fn svg_fragment(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut start = None;
    let mut end = None;
    let mut pos = 0;
    while pos < bytes.len() {
        let rest = &bytes[pos..];
        if rest.starts_with(b"<!--") {
            match text[pos + 4..].find("-->") {
                Some(idx) => {
                    pos += 4 + idx + 3;
                    continue;
                }
                None => break,
            }
        }

        if start.is_none() {
            if is_svg_start(rest) {
                start = Some(pos);
            }
        } else if rest.starts_with(b"</svg>") {
            end = Some(pos + b"</svg>".len());
        }

        pos += 1;
    }

    let start = start?;
    Some(&text[start..end.unwrap_or(text.len())])
}

fn is_svg_start(bytes: &[u8]) -> bool {
    match bytes.strip_prefix(b"<svg") {
        Some(rest) => match rest.first() {
            Some(c) => c.is_ascii_whitespace() || *c == b'>' || *c == b'/',
            None => false,
        },
        None => false,
    }
}

/// Decompresses an SVGZ file.
pub fn decompress_svgz(data: &[u8]) -> Result<Vec<u8>, Error> {
    use std::io::Read;

    let mut decoder = flate2::read::GzDecoder::new(data);
    let mut decoded = Vec::with_capacity(data.len() * 2);
    decoder
        .read_to_end(&mut decoded)
        .map_err(|_| Error::MalformedGZip)?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_drops_prolog() {
        let text = "<?xml version='1.0'?>\n<!-- x -->\n<svg width='1'><g/></svg>\n";
        assert_eq!(svg_fragment(text), Some("<svg width='1'><g/></svg>"));
    }

    #[test]
    fn fragment_skips_similar_tags() {
        let text = "<svgx/><svg/>";
        assert_eq!(svg_fragment(text), Some("<svg/>"));
    }

    #[test]
    fn fragment_nested() {
        let text = "<svg><svg></svg></svg>trailing";
        assert_eq!(svg_fragment(text), Some("<svg><svg></svg></svg>"));
    }

    #[test]
    fn fragment_skips_comments() {
        let text = "<!-- <svg> icon --><svg width='1'/><!-- </svg> -->";
        assert_eq!(svg_fragment(text), Some("<svg width='1'/><!-- </svg> -->"));

        let text = "<!-- <svg></svg> --><svg><g/></svg><!-- </svg> -->";
        assert_eq!(svg_fragment(text), Some("<svg><g/></svg>"));
    }

    #[test]
    fn fragment_missing() {
        assert_eq!(svg_fragment("<html/>"), None);
    }
}
