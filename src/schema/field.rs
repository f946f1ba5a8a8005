use std::fmt;

use bincode::{Decode, Encode};

use crate::datatypes::Type;

/// A single field of a schema: its type and, optionally, its name. A field
/// without a name is anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Encode, Decode)]
pub struct FieldDescriptor {
    field_type: Type,
    name: Option<String>,
}

impl FieldDescriptor {
    pub fn new(field_type: Type, name: Option<String>) -> Self {
        FieldDescriptor { field_type, name }
    }

    pub fn anonymous(field_type: Type) -> Self {
        FieldDescriptor::new(field_type, None)
    }

    pub fn named(field_type: Type, name: impl Into<String>) -> Self {
        FieldDescriptor::new(field_type, Some(name.into()))
    }

    pub fn field_type(&self) -> Type {
        self.field_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Renders as `type(name)`, or just `type` when the field is anonymous.
impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}({})", self.field_type, name),
            None => write!(f, "{}", self.field_type),
        }
    }
}
