use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::datatypes::Type;
use crate::schema::error::SchemaError;
use crate::schema::field::FieldDescriptor;
use crate::{DBError, DBResult};

/// A `SchemaDescriptor` describes the shape of a tuple: an ordered list of
/// fields, each with a `Type` and an optional name.
///
/// The field list is never modified after construction. Cloning a descriptor
/// only copies a handle to the shared field list, so a single schema can be
/// handed to any number of plan nodes and tuples across threads.
///
/// Two descriptors are equal when they have the same number of fields and the
/// `i`-th types match for every `i`. Field names are not part of equality or
/// hashing.
#[derive(Debug, Clone)]
pub struct SchemaDescriptor {
    fields: Arc<[FieldDescriptor]>,
}

impl SchemaDescriptor {
    /// Creates a descriptor with one anonymous field per entry of `types`.
    /// `types` must contain at least one entry.
    pub fn from_types(types: &[Type]) -> DBResult<Self> {
        if types.is_empty() {
            return schema_err!(InvalidSchema, "a schema needs at least one field type.");
        }

        let fields: Vec<FieldDescriptor> =
            types.iter().copied().map(FieldDescriptor::anonymous).collect();

        trace!(fields = fields.len(), "built anonymous schema descriptor");
        Ok(SchemaDescriptor {
            fields: fields.into(),
        })
    }

    /// Creates a descriptor whose `i`-th field has type `types[i]` and name
    /// `names[i]`. Names may be `None`. Both slices must be non-empty and of
    /// equal length.
    pub fn from_types_and_names(types: &[Type], names: &[Option<&str>]) -> DBResult<Self> {
        if types.is_empty() {
            return schema_err!(InvalidSchema, "a schema needs at least one field type.");
        }

        if types.len() != names.len() {
            return schema_err!(
                InvalidSchema,
                "got {} field types but {} field names.",
                types.len(),
                names.len()
            );
        }

        let fields: Vec<FieldDescriptor> = types
            .iter()
            .zip(names)
            .map(|(ty, name)| FieldDescriptor::new(*ty, name.map(str::to_string)))
            .collect();

        trace!(fields = fields.len(), "built named schema descriptor");
        Ok(SchemaDescriptor {
            fields: fields.into(),
        })
    }

    /// Creates a descriptor from already-built fields. `fields` must not be
    /// empty.
    pub fn from_fields(fields: Vec<FieldDescriptor>) -> DBResult<Self> {
        if fields.is_empty() {
            return schema_err!(InvalidSchema, "a schema needs at least one field.");
        }

        Ok(SchemaDescriptor {
            fields: fields.into(),
        })
    }

    /// The zero-field descriptor. Only useful as the identity of `concat`.
    pub fn empty() -> Self {
        SchemaDescriptor {
            fields: Arc::from(Vec::new()),
        }
    }

    pub(crate) fn from_decoded(fields: Vec<FieldDescriptor>) -> Self {
        SchemaDescriptor {
            fields: fields.into(),
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    /// Returns the field at position `i`, or `IndexOutOfRange` if there is none.
    pub fn field(&self, i: usize) -> DBResult<&FieldDescriptor> {
        self.fields.get(i).ok_or_else(|| {
            DBError::from(SchemaError::IndexOutOfRange {
                index: i,
                len: self.fields.len(),
            })
        })
    }

    /// The (possibly absent) name of the `i`-th field.
    pub fn field_name(&self, i: usize) -> DBResult<Option<&str>> {
        Ok(self.field(i)?.name())
    }

    pub fn field_type(&self, i: usize) -> DBResult<Type> {
        Ok(self.field(i)?.field_type())
    }

    /// Finds the index of the first field named exactly `name`. Anonymous
    /// fields never match. Passing `None` is an `InvalidArgument` error;
    /// a miss is `FieldNotFound`.
    pub fn index_of_field<'a>(&self, name: impl Into<Option<&'a str>>) -> DBResult<usize> {
        let name: Option<&str> = name.into();
        let Some(name) = name else {
            return schema_err!(InvalidArgument, "field name to look up must not be absent.");
        };

        self.fields
            .iter()
            .position(|field| field.name() == Some(name))
            .ok_or_else(|| DBError::from(SchemaError::FieldNotFound(name.to_string())))
    }

    /// The size in bytes of any tuple conforming to this schema: the sum of
    /// the fixed widths of all field types.
    pub fn byte_size(&self) -> usize {
        self.fields
            .iter()
            .map(|field| field.field_type().byte_len())
            .sum()
    }

    /// Builds a new descriptor holding `left`'s fields followed by `right`'s.
    /// Neither input is modified. A missing or empty `right` yields `left`.
    pub fn concat(left: &SchemaDescriptor, right: Option<&SchemaDescriptor>) -> SchemaDescriptor {
        let right = match right {
            Some(right) if !right.is_empty() => right,
            _ => return left.clone(),
        };

        if left.is_empty() {
            return right.clone();
        }

        let fields: Vec<FieldDescriptor> =
            left.iter().chain(right.iter()).cloned().collect();

        debug!(
            left = left.field_count(),
            right = right.field_count(),
            "concatenated schema descriptors"
        );
        SchemaDescriptor {
            fields: fields.into(),
        }
    }

    /// A human-readable rendering, e.g. `INT(id), VARCHAR[32](name), BOOL`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for SchemaDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.field_count() == other.field_count()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.field_type() == b.field_type())
    }
}

impl Eq for SchemaDescriptor {}

impl Hash for SchemaDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `eq`, so names are left out
        self.fields.len().hash(state);
        for field in self.iter() {
            field.field_type().hash(state);
        }
    }
}

impl fmt::Display for SchemaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SchemaDescriptor {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
