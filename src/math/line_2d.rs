use super::{Point2, Vector2};

/// A line through two points, used as an intermediate when mitering offset edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetLine {
    pub start: Point2,
    pub end: Point2,
}

/// Slope-intercept form `y = k * x + b` of a line, together with its `Δx`.
///
/// `k` and `b` are meaningless when `dx` is zero (vertical line).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeIntercept {
    pub k: f64,
    pub b: f64,
    pub dx: f64,
}

impl OffsetLine {
    /// Creates a line through `start` and `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the slope-intercept form, with the intercept taken through `end`.
    #[must_use]
    pub fn slope_intercept(&self) -> SlopeIntercept {
        let d = self.direction();
        let k = d.y / d.x;
        SlopeIntercept {
            k,
            b: self.end.y - k * self.end.x,
            dx: d.x,
        }
    }

    /// Returns `true` if the line is vertical within `tolerance`.
    #[must_use]
    pub fn is_vertical(&self, tolerance: f64) -> bool {
        self.direction().x.abs() < tolerance
    }
}

/// Intersects the incoming line `a` with the outgoing line `b`.
///
/// Vertical lines are handled explicitly since their slope is undefined.
/// When the lines are parallel within `tolerance` there is no unique
/// intersection and the end point of `a` is returned instead; for two
/// offset edges meeting at a straight angle that is the shared displaced
/// vertex.
///
/// Returns the point and whether the parallel fallback was taken.
#[must_use]
pub fn intersect_offset_lines(a: &OffsetLine, b: &OffsetLine, tolerance: f64) -> (Point2, bool) {
    let da = a.direction();
    let db = b.direction();
    let cross = da.perp(&db);
    if cross.abs() <= tolerance * da.norm() * db.norm() {
        return (a.end, true);
    }

    let point = if a.is_vertical(tolerance) {
        let lb = b.slope_intercept();
        let x = a.start.x;
        Point2::new(x, lb.k * x + lb.b)
    } else if b.is_vertical(tolerance) {
        let la = a.slope_intercept();
        let x = b.start.x;
        Point2::new(x, la.k * x + la.b)
    } else {
        let la = a.slope_intercept();
        let lb = b.slope_intercept();
        let x = (lb.b - la.b) / (la.k - lb.k);
        Point2::new(x, la.k * x + la.b)
    };
    (point, false)
}
