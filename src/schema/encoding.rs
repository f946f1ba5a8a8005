//! Persisting schema descriptors as bytes, e.g. in a table's catalog entry.
//!
//! Unlike equality, encoding keeps field names: decoding yields exactly the
//! fields that were encoded, in order.

use bincode::config;
use tracing::trace;

use crate::schema::descriptor::SchemaDescriptor;
use crate::schema::field::FieldDescriptor;
use crate::DBResult;

/// Upper bound, in bytes, on what a single encoded schema may claim while
/// decoding. Length prefixes past this fail instead of being allocated.
pub const MAX_ENCODED_SCHEMA_LEN: usize = 1 << 20;

fn encoding_config() -> impl config::Config {
    config::standard().with_limit::<MAX_ENCODED_SCHEMA_LEN>()
}

impl SchemaDescriptor {
    /// Encodes the ordered field list with bincode's standard configuration,
    /// bounded by `MAX_ENCODED_SCHEMA_LEN`.
    pub fn to_bytes(&self) -> DBResult<Vec<u8>> {
        match bincode::encode_to_vec(self.fields(), encoding_config()) {
            Ok(bytes) => Ok(bytes),
            Err(e) => schema_err!(Serialization, "failed to encode schema: {}", e),
        }
    }

    /// Decodes a descriptor written by `to_bytes`. The whole of `bytes` must be
    /// consumed.
    pub fn from_bytes(bytes: &[u8]) -> DBResult<Self> {
        let (fields, read): (Vec<FieldDescriptor>, usize) =
            match bincode::decode_from_slice(bytes, encoding_config()) {
                Ok(decoded) => decoded,
                Err(e) => return schema_err!(Serialization, "failed to decode schema: {}", e),
            };

        if read != bytes.len() {
            return schema_err!(
                Serialization,
                "{} trailing bytes after encoded schema.",
                bytes.len() - read
            );
        }

        trace!(fields = fields.len(), "decoded schema descriptor");
        Ok(SchemaDescriptor::from_decoded(fields))
    }
}
