use super::Num;
use crate::geometry::{BorderedVertex, HAnchor, VAnchor};
use crate::math::bounds_2d::max_corner;
use crate::math::Point2;

/// Renders a bordered polygon as a CSS `polygon()` clip-path value.
///
/// Point order matches [`outline_path`](super::outline_path): outer ring
/// forward, outer start, inner start, inner ring backwards, inner start and
/// finally the outer start again.
///
/// Coordinates anchored to the left/top edge are absolute pixels. Everything
/// else is measured from the far edge of the outer bounding box, as `100%`
/// when it sits exactly on it or `calc(100% - Npx)` otherwise. An empty
/// input yields an empty string.
#[must_use]
pub fn clip_polygon(vertices: &[BorderedVertex]) -> String {
    let Some(((first, rest), max)) = vertices
        .split_first()
        .zip(max_corner(vertices.iter().map(|v| v.coord)))
    else {
        return String::new();
    };

    let css = |p: Point2, v: &BorderedVertex| point_css(p, v.h, v.v, max);

    let outer_start = css(first.coord, first);
    let inner_start = css(first.inner, first);
    let mut points = Vec::with_capacity(vertices.len() * 2 + 3);
    points.push(outer_start.clone());
    points.extend(rest.iter().map(|v| css(v.coord, v)));
    points.push(outer_start.clone());
    points.push(inner_start.clone());
    points.extend(rest.iter().rev().map(|v| css(v.inner, v)));
    points.push(inner_start);
    points.push(outer_start);

    format!("polygon({})", points.join(", "))
}

fn point_css(p: Point2, h: HAnchor, v: VAnchor, max: Point2) -> String {
    let x = axis_css(p.x, max.x, h == HAnchor::Left);
    let y = axis_css(p.y, max.y, v == VAnchor::Top);
    format!("{x} {y}")
}

#[allow(clippy::float_cmp)]
fn axis_css(value: f64, max: f64, near_edge: bool) -> String {
    if near_edge {
        format!("{}px", Num(value))
    } else if value == max {
        "100%".to_owned()
    } else {
        format!("calc(100% - {}px)", Num(max - value))
    }
}
