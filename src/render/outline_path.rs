use super::Num;
use crate::geometry::BorderedVertex;

/// Renders a bordered polygon as a single closed SVG path of `M`/`L` commands.
///
/// The path walks the outer ring forward, returns to its start, jumps to the
/// first inner vertex and walks the inner ring backwards before closing on
/// the outer start again. An empty input yields an empty string.
#[must_use]
pub fn outline_path(vertices: &[BorderedVertex]) -> String {
    let Some((first, rest)) = vertices.split_first() else {
        return String::new();
    };

    let outer_start = format!("{} {}", Num(first.coord.x), Num(first.coord.y));
    let outer = rest
        .iter()
        .map(|p| format!("L{},{}", Num(p.coord.x), Num(p.coord.y)))
        .collect::<Vec<_>>()
        .join(" ");
    let inner_start = format!("{} {}", Num(first.inner.x), Num(first.inner.y));
    let inner = rest
        .iter()
        .rev()
        .map(|p| format!("L{} {}", Num(p.inner.x), Num(p.inner.y)))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "M{outer_start} {outer} L{outer_start} L{inner_start} {inner} L{inner_start} L{outer_start}"
    )
}
