use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{BorderedVertex, Vertex};
use crate::math::line_2d::{intersect_offset_lines, OffsetLine};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Computes the inner ring of a constant-width mitered border around a
/// closed polygon.
///
/// # Algorithm
///
/// 1. **Phase A**: Displace every edge (including last → first) by `width`
///    perpendicular to its direction, giving one offset line per edge.
/// 2. **Phase B**: For each vertex, intersect the offset line of its incoming
///    edge with that of its outgoing edge. The intersection is the vertex's
///    inner coordinate (mitered corner).
///
/// # Sign Convention
///
/// Offsets are taken along the edge direction rotated by +90°. With the
/// y axis pointing down (screen space) a clockwise polygon is offset inward
/// by a positive width; a counter-clockwise one outward. Negative widths flip
/// the direction.
#[derive(Debug)]
pub struct BorderOffset2D {
    vertices: Vec<Vertex>,
    width: f64,
    tolerance: f64,
}

impl BorderOffset2D {
    /// Creates a new border offset operation.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, width: f64) -> Self {
        Self {
            vertices,
            width,
            tolerance: TOLERANCE,
        }
    }

    /// Overrides the tolerance used for vertical, parallel and zero-length
    /// edge detection.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the offset, returning one bordered vertex per input vertex in
    /// input order.
    ///
    /// Fewer than 3 vertices do not describe a polygon; an empty list is
    /// returned for them.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if the width or a coordinate is NaN or infinite
    /// - `GeometryError::ZeroLengthEdge` if two consecutive vertices coincide
    pub fn execute(&self) -> Result<Vec<BorderedVertex>> {
        let n = self.vertices.len();
        if n < 3 {
            debug!(vertex_count = n, "too few vertices for a border, skipping");
            return Ok(Vec::new());
        }
        self.validate()?;
        debug!(vertex_count = n, width = self.width, "computing border offset");

        // Phase A: offset line `i` belongs to the edge from vertex `i` to `i + 1`.
        let lines: Vec<OffsetLine> = (0..n)
            .map(|i| {
                let next = (i + 1) % n;
                offset_edge(self.vertices[i].coord, self.vertices[next].coord, self.width)
            })
            .collect();

        // Phase B: vertex `i` joins edge `i - 1` (incoming) and edge `i` (outgoing).
        let bordered = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| {
                let incoming = &lines[(i + n - 1) % n];
                let outgoing = &lines[i];
                let (inner, parallel) =
                    intersect_offset_lines(incoming, outgoing, self.tolerance);
                if parallel {
                    debug!(
                        index = i,
                        x = inner.x,
                        y = inner.y,
                        "parallel offset lines, reusing displaced vertex"
                    );
                }
                vertex.with_inner(inner)
            })
            .collect();

        Ok(bordered)
    }

    fn validate(&self) -> Result<()> {
        if !self.width.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "border width",
                value: self.width,
            }
            .into());
        }

        let n = self.vertices.len();
        for (i, vertex) in self.vertices.iter().enumerate() {
            let p = vertex.coord;
            for value in [p.x, p.y] {
                if !value.is_finite() {
                    return Err(GeometryError::NonFinite {
                        what: "vertex coordinate",
                        value,
                    }
                    .into());
                }
            }
            let next = self.vertices[(i + 1) % n].coord;
            if (next - p).norm() < self.tolerance {
                return Err(GeometryError::ZeroLengthEdge {
                    index: i,
                    x: p.x,
                    y: p.y,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Offsets the edge `start → end` by `width`.
///
/// The end point moves along the edge angle plus 90°, the start point along
/// the reversed edge angle minus 90°; both land on the same side.
fn offset_edge(start: Point2, end: Point2, width: f64) -> OffsetLine {
    let d = end - start;
    let angle = d.y.atan2(d.x);
    let end_angle = angle + FRAC_PI_2;
    let start_angle = angle - PI - FRAC_PI_2;
    OffsetLine::new(
        start + Vector2::new(start_angle.cos(), start_angle.sin()) * width,
        end + Vector2::new(end_angle.cos(), end_angle.sin()) * width,
    )
}
