//! SVG serialisation of a [`VectorDocument`].
//!
//! Output is byte-for-byte deterministic: integer attributes only, a fixed
//! attribute order, one element per line and a trailing newline.

use std::fmt;
use std::path::Path;

use rulegrid_core::GridError;

use crate::vector::{Rect, VectorDocument};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FILL: &str = "#000";

impl VectorDocument {
    /// Renders the document as SVG markup.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(96 + self.rects.len() * 64);
        // Writing into a String cannot fail.
        let _ = write_svg_to(&mut out, self);
        out
    }
}

impl fmt::Display for VectorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_svg_to(f, self)
    }
}

fn write_svg_to(out: &mut impl fmt::Write, doc: &VectorDocument) -> fmt::Result {
    let (w, h) = (doc.width, doc.height);
    writeln!(
        out,
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="{SVG_NS}">"#
    )?;
    for rect in &doc.rects {
        write_rect(out, rect)?;
    }
    writeln!(out, "</svg>")
}

fn write_rect(out: &mut impl fmt::Write, rect: &Rect) -> fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        rect.x, rect.y, rect.width, rect.height
    )?;
    if let Some(r) = rect.radius {
        write!(out, r#" rx="{r}" ry="{r}""#)?;
    }
    writeln!(out, r#" fill="{FILL}"/>"#)
}

/// Writes the document's SVG markup to `path`.
///
/// Returns `GridError::Io` on write failure.
pub fn write_svg(doc: &VectorDocument, path: &Path) -> Result<(), GridError> {
    std::fs::write(path, doc.to_svg()).map_err(|e| GridError::Io(e.to_string()))
}
