use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::geometry::{HAnchor, VAnchor, Vertex};
use crate::math::bounds_2d::max_corner;
use crate::math::Point2;

/// A command letter followed by its numeric arguments.
#[allow(clippy::expect_used)]
static COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][0-9.,+\-\s]+").expect("command pattern is valid"));

/// Vertices recovered from path data, with their bounding-box maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPath {
    pub vertices: Vec<Vertex>,
    /// Maximum x and y over all vertices.
    pub dims: Point2,
}

impl ParsedPath {
    /// Returns the midpoint between the origin and [`dims`](Self::dims).
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.dims.x / 2.0, self.dims.y / 2.0)
    }
}

/// Parses absolute `M`, `L`, `H` and `V` commands into an open vertex list.
///
/// Other command letters are skipped. A trailing point equal to the first is
/// dropped, so explicitly closed paths yield the same vertices as open ones.
/// Each vertex is anchored by comparing it with the bounding-box center:
/// left/top when strictly less, right/bottom otherwise.
///
/// Returns `Ok(None)` when the input holds no points.
///
/// # Errors
///
/// - `ParseError::InvalidNumber` if an argument is not a finite number
/// - `ParseError::MissingArgument` if a command has too few arguments
/// - `ParseError::NoCurrentPoint` if `H` or `V` appears before any point
pub fn parse_path(input: &str) -> Result<Option<ParsedPath>> {
    let mut points: Vec<Point2> = Vec::new();
    let mut tokens = 0usize;

    for m in COMMAND_RE.find_iter(input) {
        tokens += 1;
        let token = m.as_str();
        let mut chars = token.chars();
        let Some(command) = chars.next() else {
            continue;
        };
        trace!(%command, args = chars.as_str().trim(), "path token");

        match command {
            'M' | 'L' => {
                let [x, y] = arguments::<2>(command, chars.as_str())?;
                points.push(Point2::new(x, y));
            }
            'H' => {
                let [x] = arguments::<1>(command, chars.as_str())?;
                let last = points.last().ok_or(ParseError::NoCurrentPoint { command })?;
                points.push(Point2::new(x, last.y));
            }
            'V' => {
                let [y] = arguments::<1>(command, chars.as_str())?;
                let last = points.last().ok_or(ParseError::NoCurrentPoint { command })?;
                points.push(Point2::new(last.x, y));
            }
            _ => {}
        }
    }

    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    let Some(dims) = max_corner(points.iter().copied()) else {
        debug!(tokens, "path data holds no points");
        return Ok(None);
    };

    let parsed = classify(points, dims);
    debug!(
        tokens,
        vertex_count = parsed.vertices.len(),
        max_x = dims.x,
        max_y = dims.y,
        "parsed path data"
    );
    Ok(Some(parsed))
}

fn classify(points: Vec<Point2>, dims: Point2) -> ParsedPath {
    let mut parsed = ParsedPath {
        vertices: Vec::with_capacity(points.len()),
        dims,
    };
    let center = parsed.center();
    parsed.vertices.extend(points.into_iter().map(|p| Vertex {
        coord: p,
        h: if p.x < center.x {
            HAnchor::Left
        } else {
            HAnchor::Right
        },
        v: if p.y < center.y {
            VAnchor::Top
        } else {
            VAnchor::Bottom
        },
    }));
    parsed
}

/// Reads the first `N` numbers from a command's argument text.
///
/// Arguments are separated by commas and/or whitespace; surplus arguments
/// are ignored.
fn arguments<const N: usize>(command: char, text: &str) -> Result<[f64; N]> {
    let mut values = [0.0; N];
    let mut found = 0;
    for piece in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .take(N)
    {
        let invalid = || ParseError::InvalidNumber {
            command,
            text: piece.to_owned(),
        };
        let value: f64 = piece.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid().into());
        }
        values[found] = value;
        found += 1;
    }
    if found < N {
        return Err(ParseError::MissingArgument {
            command,
            expected: N,
            found,
        }
        .into());
    }
    Ok(values)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BorderError;

    fn coords(parsed: &ParsedPath) -> Vec<(f64, f64)> {
        parsed.vertices.iter().map(|v| (v.coord.x, v.coord.y)).collect()
    }

    fn parse_error(input: &str) -> ParseError {
        match parse_path(input).unwrap_err() {
            BorderError::Parse(err) => err,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn square_quadrants() {
        let parsed = parse_path("M0,0 L10,0 L10,10 L0,10").unwrap().unwrap();

        assert_eq!(parsed.vertices.len(), 4);
        assert_eq!(parsed.dims, Point2::new(10.0, 10.0));
        assert_eq!(parsed.center(), Point2::new(5.0, 5.0));

        let anchors: Vec<(HAnchor, VAnchor)> =
            parsed.vertices.iter().map(|v| (v.h, v.v)).collect();
        assert_eq!(
            anchors,
            vec![
                (HAnchor::Left, VAnchor::Top),
                (HAnchor::Right, VAnchor::Top),
                (HAnchor::Right, VAnchor::Bottom),
                (HAnchor::Left, VAnchor::Bottom),
            ]
        );
    }

    #[test]
    fn horizontal_and_vertical_shorthand() {
        let parsed = parse_path("M0,0 H10 V10").unwrap().unwrap();
        assert_eq!(coords(&parsed), vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    }

    #[test]
    fn explicit_closing_point_is_dropped() {
        let parsed = parse_path("M0,0 L10,0 L10,10 L0,0").unwrap().unwrap();
        assert_eq!(coords(&parsed), vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    }

    #[test]
    fn whitespace_separated_and_fractional_arguments() {
        let parsed = parse_path("M 1.5 2 L 8.25, 2\nL8.25 6.5").unwrap().unwrap();
        assert_eq!(coords(&parsed), vec![(1.5, 2.0), (8.25, 2.0), (8.25, 6.5)]);
        assert_eq!(parsed.dims, Point2::new(8.25, 6.5));
    }

    #[test]
    fn negative_coordinates() {
        let parsed = parse_path("M-2,-2 L12,-2 L12,12 L-2,12").unwrap().unwrap();
        assert_eq!(coords(&parsed)[0], (-2.0, -2.0));
        assert_eq!(parsed.dims, Point2::new(12.0, 12.0));
    }

    #[test]
    fn center_point_is_right_bottom() {
        let parsed = parse_path("M0,0 L10,0 L5,5 L0,10").unwrap().unwrap();
        let center = &parsed.vertices[2];
        assert_eq!(center.h, HAnchor::Right);
        assert_eq!(center.v, VAnchor::Bottom);
    }

    #[test]
    fn never_emits_proportional() {
        let parsed = parse_path("M0,0 L3,1 L7,9 L2,8 L9,4").unwrap().unwrap();
        assert!(parsed
            .vertices
            .iter()
            .all(|v| v.h != HAnchor::Proportional && v.v != VAnchor::Proportional));
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let parsed = parse_path("M0,0 C1,1 2,2 3,3 L10,0 l5,5 L10,10 Z").unwrap().unwrap();
        assert_eq!(coords(&parsed), vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    }

    #[test]
    fn surplus_arguments_are_ignored() {
        let parsed = parse_path("M0,0,99 L10,0 H10,3 V4").unwrap().unwrap();
        assert_eq!(coords(&parsed), vec![(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 4.0)]);
    }

    #[test]
    fn no_tokens_is_none() {
        assert!(parse_path("").unwrap().is_none());
        assert!(parse_path("hello").unwrap().is_none());
        assert!(parse_path("Z").unwrap().is_none());
    }

    #[test]
    fn only_ignored_commands_is_none() {
        assert!(parse_path("C1,1 2,2 3,3").unwrap().is_none());
    }

    #[test]
    fn single_point() {
        let parsed = parse_path("M3,4").unwrap().unwrap();
        assert_eq!(coords(&parsed), vec![(3.0, 4.0)]);
        assert_eq!(parsed.dims, Point2::new(3.0, 4.0));
    }

    #[test]
    fn invalid_number_error() {
        assert_eq!(
            parse_error("M0,0 L1.2.3,4"),
            ParseError::InvalidNumber {
                command: 'L',
                text: "1.2.3".to_owned()
            }
        );
    }

    #[test]
    fn overflowing_number_error() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(
            parse_error(&format!("M0,0 L{huge},0 L10,10")),
            ParseError::InvalidNumber {
                command: 'L',
                text: huge
            }
        );
    }

    #[test]
    fn missing_argument_error() {
        assert_eq!(
            parse_error("M0,0 L5"),
            ParseError::MissingArgument {
                command: 'L',
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn horizontal_without_current_point_error() {
        assert_eq!(
            parse_error("H10 V10"),
            ParseError::NoCurrentPoint { command: 'H' }
        );
    }

    #[test]
    fn vertical_without_current_point_error() {
        assert_eq!(parse_error("V10"), ParseError::NoCurrentPoint { command: 'V' });
    }
}
