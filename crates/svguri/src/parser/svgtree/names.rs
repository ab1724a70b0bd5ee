// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

/// An accepted element.
///
/// Elements outside this list are never converted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[allow(missing_docs)]
pub enum EId {
    Circle,
    Defs,
    Ellipse,
    G,
    Line,
    LinearGradient,
    Path,
    Polygon,
    Polyline,
    RadialGradient,
    Rect,
    Stop,
    Svg,
    Text,
    Tspan,
}

impl EId {
    /// All accepted elements.
    pub const ALL: &'static [EId] = &[
        EId::Svg,
        EId::G,
        EId::Circle,
        EId::Path,
        EId::Rect,
        EId::Defs,
        EId::Line,
        EId::LinearGradient,
        EId::RadialGradient,
        EId::Stop,
        EId::Ellipse,
        EId::Polygon,
        EId::Polyline,
        EId::Text,
        EId::Tspan,
    ];

    /// Parses an XML tag name.
    ///
    /// Matching is case-sensitive, like in SVG.
    pub fn from_str(text: &str) -> Option<EId> {
        Some(match text {
            "circle" => EId::Circle,
            "defs" => EId::Defs,
            "ellipse" => EId::Ellipse,
            "g" => EId::G,
            "line" => EId::Line,
            "linearGradient" => EId::LinearGradient,
            "path" => EId::Path,
            "polygon" => EId::Polygon,
            "polyline" => EId::Polyline,
            "radialGradient" => EId::RadialGradient,
            "rect" => EId::Rect,
            "stop" => EId::Stop,
            "svg" => EId::Svg,
            "text" => EId::Text,
            "tspan" => EId::Tspan,
            _ => return None,
        })
    }

    /// Returns the XML tag name.
    pub fn to_str(&self) -> &'static str {
        match self {
            EId::Circle => "circle",
            EId::Defs => "defs",
            EId::Ellipse => "ellipse",
            EId::G => "g",
            EId::Line => "line",
            EId::LinearGradient => "linearGradient",
            EId::Path => "path",
            EId::Polygon => "polygon",
            EId::Polyline => "polyline",
            EId::RadialGradient => "radialGradient",
            EId::Rect => "rect",
            EId::Stop => "stop",
            EId::Svg => "svg",
            EId::Text => "text",
            EId::Tspan => "tspan",
        }
    }
}

impl fmt::Display for EId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// A drawing primitive property name.
///
/// Names are already camel-cased, so `font-size` is `AId::FontSize` / `fontSize`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[allow(missing_docs)]
pub enum AId {
    Cx,
    Cy,
    D,
    Fill,
    FillOpacity,
    FontFamily,
    FontSize,
    FontWeight,
    GradientUnits,
    Height,
    Id,
    Offset,
    Opacity,
    Origin,
    OriginX,
    OriginY,
    Points,
    R,
    Rotate,
    Rx,
    Ry,
    Scale,
    Stroke,
    StrokeDasharray,
    StrokeDashoffset,
    StrokeLinecap,
    StrokeLinejoin,
    StrokeOpacity,
    StrokeWidth,
    TextAnchor,
    ViewBox,
    Width,
    X,
    X1,
    X2,
    Y,
    Y1,
    Y2,
}

impl AId {
    /// Parses a camel-cased property name.
    pub fn from_str(text: &str) -> Option<AId> {
        Some(match text {
            "cx" => AId::Cx,
            "cy" => AId::Cy,
            "d" => AId::D,
            "fill" => AId::Fill,
            "fillOpacity" => AId::FillOpacity,
            "fontFamily" => AId::FontFamily,
            "fontSize" => AId::FontSize,
            "fontWeight" => AId::FontWeight,
            "gradientUnits" => AId::GradientUnits,
            "height" => AId::Height,
            "id" => AId::Id,
            "offset" => AId::Offset,
            "opacity" => AId::Opacity,
            "origin" => AId::Origin,
            "originX" => AId::OriginX,
            "originY" => AId::OriginY,
            "points" => AId::Points,
            "r" => AId::R,
            "rotate" => AId::Rotate,
            "rx" => AId::Rx,
            "ry" => AId::Ry,
            "scale" => AId::Scale,
            "stroke" => AId::Stroke,
            "strokeDasharray" => AId::StrokeDasharray,
            "strokeDashoffset" => AId::StrokeDashoffset,
            "strokeLinecap" => AId::StrokeLinecap,
            "strokeLinejoin" => AId::StrokeLinejoin,
            "strokeOpacity" => AId::StrokeOpacity,
            "strokeWidth" => AId::StrokeWidth,
            "textAnchor" => AId::TextAnchor,
            "viewBox" => AId::ViewBox,
            "width" => AId::Width,
            "x" => AId::X,
            "x1" => AId::X1,
            "x2" => AId::X2,
            "y" => AId::Y,
            "y1" => AId::Y1,
            "y2" => AId::Y2,
            _ => return None,
        })
    }

    /// Returns the camel-cased property name.
    pub fn to_str(&self) -> &'static str {
        match self {
            AId::Cx => "cx",
            AId::Cy => "cy",
            AId::D => "d",
            AId::Fill => "fill",
            AId::FillOpacity => "fillOpacity",
            AId::FontFamily => "fontFamily",
            AId::FontSize => "fontSize",
            AId::FontWeight => "fontWeight",
            AId::GradientUnits => "gradientUnits",
            AId::Height => "height",
            AId::Id => "id",
            AId::Offset => "offset",
            AId::Opacity => "opacity",
            AId::Origin => "origin",
            AId::OriginX => "originX",
            AId::OriginY => "originY",
            AId::Points => "points",
            AId::R => "r",
            AId::Rotate => "rotate",
            AId::Rx => "rx",
            AId::Ry => "ry",
            AId::Scale => "scale",
            AId::Stroke => "stroke",
            AId::StrokeDasharray => "strokeDasharray",
            AId::StrokeDashoffset => "strokeDashoffset",
            AId::StrokeLinecap => "strokeLinecap",
            AId::StrokeLinejoin => "strokeLinejoin",
            AId::StrokeOpacity => "strokeOpacity",
            AId::StrokeWidth => "strokeWidth",
            AId::TextAnchor => "textAnchor",
            AId::ViewBox => "viewBox",
            AId::Width => "width",
            AId::X => "x",
            AId::X1 => "x1",
            AId::X2 => "x2",
            AId::Y => "y",
            AId::Y1 => "y1",
            AId::Y2 => "y2",
        }
    }
}

impl fmt::Display for AId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
