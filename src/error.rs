//! Custom errors and related types, functions, impls, and macros for the
//! schema descriptor crate.

use crate::schema::error::SchemaError;
use thiserror::Error;

/// A convenience `Result` type that may contain a `DBError`. Used by every
/// publicly-exposed function that can fail.
pub type DBResult<T> = Result<T, DBError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DBError {
    /// Error building, reading, or decoding a schema descriptor
    #[error("schema error: {0}")]
    SchemaError(#[from] SchemaError),
}
