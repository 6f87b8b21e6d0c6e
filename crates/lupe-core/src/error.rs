use thiserror::Error;

use crate::element::ElementId;

#[derive(Error, Debug)]
pub enum LupeError {
    #[error("missing required attribute: {name}")]
    MissingAttribute { name: &'static str },

    #[error("invalid {name} value: {value:?}")]
    InvalidDimension { name: &'static str, value: String },

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("unknown element: {0:?}")]
    UnknownElement(ElementId),

    #[error("element already registered: {0:?}")]
    DuplicateElement(ElementId),

    #[error("degenerate thumbnail rect for {id:?}: {width}x{height}")]
    DegenerateThumbnail {
        id: ElementId,
        width: f64,
        height: f64,
    },
}

pub type Result<T> = std::result::Result<T, LupeError>;
