//! String renderers for bordered polygons.
//!
//! Both renderers emit the outer ring forward and the inner ring in reverse,
//! so consumers filling with either the even-odd or non-zero rule see a
//! hollow ring rather than two stacked polygons.

mod clip_polygon;
mod outline_path;

use std::fmt;

pub use clip_polygon::clip_polygon;
pub use outline_path::outline_path;

use crate::error::Result;
use crate::geometry::Vertex;
use crate::operations::offset::BorderOffset2D;

/// Offsets `vertices` by `width` and renders the border as SVG path data.
///
/// # Errors
///
/// Returns an error if the offset operation rejects the input.
pub fn border_path(vertices: Vec<Vertex>, width: f64) -> Result<String> {
    let bordered = BorderOffset2D::new(vertices, width).execute()?;
    Ok(outline_path(&bordered))
}

/// Offsets `vertices` by `width` and renders the border as a CSS
/// `polygon()` clip-path value.
///
/// # Errors
///
/// Returns an error if the offset operation rejects the input.
pub fn border_clip_polygon(vertices: Vec<Vertex>, width: f64) -> Result<String> {
    let bordered = BorderOffset2D::new(vertices, width).execute()?;
    Ok(clip_polygon(&bordered))
}

/// Shortest round-trip decimal form of a coordinate, without a `-0`.
struct Num(f64);

impl fmt::Display for Num {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{HAnchor, VAnchor};

    #[test]
    fn num_formatting() {
        assert_eq!(Num(10.0).to_string(), "10");
        assert_eq!(Num(-0.0).to_string(), "0");
        assert_eq!(Num(2.5).to_string(), "2.5");
        assert_eq!(Num(-3.25).to_string(), "-3.25");
    }

    #[test]
    fn border_path_of_two_vertices_is_empty() {
        let vertices = vec![
            Vertex::new(0.0, 0.0, HAnchor::Left, VAnchor::Top),
            Vertex::new(1.0, 1.0, HAnchor::Right, VAnchor::Bottom),
        ];
        assert_eq!(border_path(vertices.clone(), 1.0).unwrap(), "");
        assert_eq!(border_clip_polygon(vertices, 1.0).unwrap(), "");
    }

    #[test]
    fn border_helpers_propagate_errors() {
        let vertices = vec![
            Vertex::new(0.0, 0.0, HAnchor::Left, VAnchor::Top),
            Vertex::new(0.0, 0.0, HAnchor::Left, VAnchor::Top),
            Vertex::new(1.0, 1.0, HAnchor::Right, VAnchor::Bottom),
        ];
        assert!(border_path(vertices.clone(), 1.0).is_err());
        assert!(border_clip_polygon(vertices, f64::NAN).is_err());
    }
}
