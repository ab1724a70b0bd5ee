// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svguri` converts [SVG] markup into a tree of native vector drawing primitives.

The produced tree is meant to be mounted directly into a host UI tree,
like the one `react-native-svg` provides.
Only a small subset of SVG is understood and everything else is silently dropped.

## Features

- Only a fixed set of elements is accepted: `svg`, `g`, `path`, `circle`, `rect`,
  `line`, `defs`, `linearGradient`, `radialGradient`, `stop`, `ellipse`,
  `polygon`, `polyline`, `text` and `tspan`.
  Any other element is removed together with its subtree
- Each element keeps only the attributes it understands
- Attribute names are converted into camel case and `px` suffixes are removed
- `style` declarations are resolved and override attributes
- Fill colors can be replaced globally or per color
- The root element is scaled to fit the requested size
- Text baselines are moved up by the nearest declared font size
- SVGZ is supported

## Limitations

- No CSS cascade. Only the `style` attribute is handled
- No references resolving, no `use`, no units conversion
- No network access. Remote sources are fetched by the caller, see [`Loader`]

[SVG]: https://en.wikipedia.org/wiki/Scalable_Vector_Graphics
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod loader;
mod parser;
mod tree;
mod writer;

pub use parser::*;
pub use tree::*;

pub use loader::{Loader, OnLoadFn, Ticket};
pub use writer::WriteOptions;

pub use roxmltree;
pub use tiny_skia_path;
pub use xmlwriter;
