use super::Point2;

/// Returns the component-wise maximum of a set of points.
///
/// Returns `None` for an empty input.
#[must_use]
pub fn max_corner<I>(points: I) -> Option<Point2>
where
    I: IntoIterator<Item = Point2>,
{
    points
        .into_iter()
        .reduce(|acc, p| Point2::new(acc.x.max(p.x), acc.y.max(p.y)))
}
