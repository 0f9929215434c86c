use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error("world dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("unknown algorithm '{0}', expected 'simple' or 'fractal'")]
    UnknownAlgorithm(String),

    #[error("roughness must be a positive finite number, got {0}")]
    InvalidRoughness(f64),

    #[error("{field} grid is {found:?}, expected {expected:?}")]
    ShapeMismatch {
        field: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
}
