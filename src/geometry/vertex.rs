use crate::math::Point2;

/// Horizontal edge of the bounding box a vertex is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HAnchor {
    Left,
    Right,
    Proportional,
}

/// Vertical edge of the bounding box a vertex is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VAnchor {
    Top,
    Bottom,
    Proportional,
}

/// A polygon vertex with its anchoring hints.
///
/// The anchors only matter to the clip-polygon renderer, which emits
/// near-edge anchored coordinates as absolute pixels and everything else
/// relative to `100%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub coord: Point2,
    pub h: HAnchor,
    pub v: VAnchor,
}

impl Vertex {
    /// Creates a vertex at `(x, y)` with the given anchors.
    #[must_use]
    pub fn new(x: f64, y: f64, h: HAnchor, v: VAnchor) -> Self {
        Self {
            coord: Point2::new(x, y),
            h,
            v,
        }
    }

    /// Attaches a computed inner coordinate to this vertex.
    #[must_use]
    pub fn with_inner(self, inner: Point2) -> BorderedVertex {
        BorderedVertex {
            coord: self.coord,
            inner,
            h: self.h,
            v: self.v,
        }
    }
}

/// A vertex together with its offset counterpart on the inner ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderedVertex {
    pub coord: Point2,
    pub inner: Point2,
    pub h: HAnchor,
    pub v: VAnchor,
}

impl BorderedVertex {
    /// Returns the original vertex without its inner coordinate.
    #[must_use]
    pub fn outer(&self) -> Vertex {
        Vertex {
            coord: self.coord,
            h: self.h,
            v: self.v,
        }
    }
}
