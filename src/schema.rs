//! Schema descriptors: the ordered (type, optional name) field lists that
//! describe the shape of every tuple in the engine.

pub mod descriptor;
pub mod encoding;
pub mod error;
pub mod field;

pub use descriptor::SchemaDescriptor;
pub use error::SchemaError;
pub use field::FieldDescriptor;
