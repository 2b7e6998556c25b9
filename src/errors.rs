use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TileError {
    #[error("invalid bounding box: min ({min_latitude}, {min_longitude}) exceeds max ({max_latitude}, {max_longitude})")]
    InvalidBoundingBox {
        min_latitude: f64,
        min_longitude: f64,
        max_latitude: f64,
        max_longitude: f64,
    },

    #[error("coordinate ({latitude}, {longitude}) has no finite tile index at zoom {zoom}")]
    NonFiniteIndex {
        latitude: f64,
        longitude: f64,
        zoom: u8,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}

impl From<ParseFloatError> for TileError {
    fn from(err: ParseFloatError) -> Self {
        TileError::InvalidArgument(format!("expected a number ({})", err))
    }
}

impl From<ParseIntError> for TileError {
    fn from(err: ParseIntError) -> Self {
        TileError::InvalidArgument(format!("expected a zoom level ({})", err))
    }
}
