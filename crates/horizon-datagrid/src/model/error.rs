//! Error types for the catalog data model.

use std::fmt;

/// The error type for catalog import/export operations.
#[derive(Debug)]
pub enum ModelError {
    /// CSV parsing or serialization failed.
    Csv(csv::Error),
    /// Image decoding or encoding failed.
    Image(image::ImageError),
    /// Imported data did not have the expected shape.
    InvalidData(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "CSV error: {err}"),
            Self::Image(err) => write!(f, "Image error: {err}"),
            Self::InvalidData(msg) => write!(f, "Invalid data: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<csv::Error> for ModelError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<image::ImageError> for ModelError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err)
    }
}

/// A specialized Result type for catalog model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;
