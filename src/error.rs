use thiserror::Error;

/// Top-level error type for border generation and path parsing.
#[derive(Debug, Error)]
pub enum BorderError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors related to the polygon handed to the offset engine.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{what} is not finite: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("edge {index} starting at ({x}, {y}) has zero length")]
    ZeroLengthEdge { index: usize, x: f64, y: f64 },
}

/// Errors raised while reading path data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid number {text:?} in `{command}` command")]
    InvalidNumber { command: char, text: String },

    #[error("`{command}` command expects {expected} argument(s), found {found}")]
    MissingArgument {
        command: char,
        expected: usize,
        found: usize,
    },

    #[error("`{command}` command has no current point to continue from")]
    NoCurrentPoint { command: char },
}

/// Convenience type alias for results using [`BorderError`].
pub type Result<T> = std::result::Result<T, BorderError>;
