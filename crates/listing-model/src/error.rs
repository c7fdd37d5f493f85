use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown column role: {0}")]
    UnknownRole(String),
    #[error("invalid plausibility bounds: floor {floor} must be below ceiling {ceiling}")]
    InvalidBounds { floor: i64, ceiling: i64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
