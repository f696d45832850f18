pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod parse;
pub mod render;

pub use error::{BorderError, Result};
pub use geometry::{BorderedVertex, HAnchor, VAnchor, Vertex};
pub use operations::offset::BorderOffset2D;
pub use parse::{parse_path, ParsedPath};
pub use render::{border_clip_polygon, border_path, clip_polygon, outline_path};
