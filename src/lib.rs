#[macro_use]
mod gen_helpers;

pub mod datatypes;
pub mod schema;

mod error;
pub use error::DBError;
pub use error::DBResult;
