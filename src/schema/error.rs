//! Schema related errors that occur when building, reading, or decoding
//! schema descriptors.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("field index {index} out of range for schema with {len} fields")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid function argument: {0}")]
    InvalidArgument(String),

    #[error("no field named `{0}` in schema")]
    FieldNotFound(String),

    #[error("could not (de)serialize schema: {0}")]
    Serialization(String),
}
