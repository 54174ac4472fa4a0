use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: f64, max: f64 },
    #[error("invalid field size {width}x{height} (each side must be 1..={max})")]
    InvalidSize { width: usize, height: usize, max: usize },
    #[error("noise takes 1 to 4 coordinates, got {0}")]
    InvalidDimensions(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
