pub mod vertex;

pub use vertex::{BorderedVertex, HAnchor, VAnchor, Vertex};
