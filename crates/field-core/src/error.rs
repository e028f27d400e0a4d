use thiserror::Error;

/// Failures while building the point cloud. The per-frame path has no error states.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("invalid grid: {0}")]
    InvalidGrid(&'static str),
    #[error("raster is {width}x{height} but holds {len} alpha values")]
    RasterSize { width: u32, height: u32, len: usize },
    #[error("target text is empty")]
    EmptyText,
    #[error("text rasterization failed: {0}")]
    Rasterize(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
