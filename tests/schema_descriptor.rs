use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use tracing_subscriber::EnvFilter;
use tupledesc::datatypes::Type;
use tupledesc::schema::{FieldDescriptor, SchemaDescriptor, SchemaError};
use tupledesc::{DBError, DBResult};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn hash_of(schema: &SchemaDescriptor) -> u64 {
    let mut hasher = DefaultHasher::new();
    schema.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn anonymous_schema_has_one_unnamed_field_per_type() -> DBResult<()> {
    init_tracing();

    let types = [Type::Int, Type::Varchar(12), Type::Double, Type::Bool];
    let schema = SchemaDescriptor::from_types(&types)?;

    assert_eq!(schema.field_count(), types.len());
    for (i, ty) in types.iter().enumerate() {
        assert_eq!(schema.field_type(i)?, *ty);
        assert_eq!(schema.field_name(i)?, None);
    }

    Ok(())
}

#[test]
fn named_schema_keeps_types_and_names_by_position() -> DBResult<()> {
    init_tracing();

    let types = [Type::BigInt, Type::Char(2), Type::Float];
    let names = [Some("id"), None, Some("score")];
    let schema = SchemaDescriptor::from_types_and_names(&types, &names)?;

    for i in 0..schema.field_count() {
        assert_eq!(schema.field_type(i)?, types[i]);
        assert_eq!(schema.field_name(i)?, names[i]);
    }

    Ok(())
}

#[test]
fn join_schema_is_left_fields_then_right_fields() -> DBResult<()> {
    init_tracing();

    let users = SchemaDescriptor::from_types_and_names(
        &[Type::Int, Type::Varchar(32)],
        &[Some("id"), Some("name")],
    )?;
    let orders = SchemaDescriptor::from_types_and_names(
        &[Type::Int, Type::Int, Type::Decimal(2)],
        &[Some("id"), Some("user_id"), Some("total")],
    )?;

    let joined = SchemaDescriptor::concat(&users, Some(&orders));
    assert_eq!(
        joined.field_count(),
        users.field_count() + orders.field_count()
    );

    let expected: Vec<&FieldDescriptor> = users.iter().chain(orders.iter()).collect();
    let actual: Vec<&FieldDescriptor> = joined.iter().collect();
    assert_eq!(actual, expected);

    // Duplicate names resolve to the left side
    assert_eq!(joined.index_of_field("id")?, 0);
    assert_eq!(joined.index_of_field("user_id")?, 3);
    assert_eq!(joined.byte_size(), users.byte_size() + orders.byte_size());

    // The inputs are still usable as they were
    assert_eq!(users.describe(), "INT(id), VARCHAR[32](name)");
    assert_eq!(orders.field_count(), 3);

    Ok(())
}

#[test]
fn schemas_differing_only_in_names_share_a_map_slot() -> DBResult<()> {
    let s1 = SchemaDescriptor::from_types_and_names(
        &[Type::Int, Type::Int],
        &[Some("a"), Some("b")],
    )?;
    let s2 = SchemaDescriptor::from_types_and_names(
        &[Type::Int, Type::Int],
        &[Some("x"), Some("y")],
    )?;
    assert_eq!(s1, s2);
    assert_eq!(hash_of(&s1), hash_of(&s2));

    let mut plans: HashMap<SchemaDescriptor, &str> = HashMap::new();
    plans.insert(s1, "first");
    plans.insert(s2, "second");
    assert_eq!(plans.len(), 1);

    let other = SchemaDescriptor::from_types(&[Type::Int, Type::Varchar(1)])?;
    plans.insert(other, "third");
    assert_eq!(plans.len(), 2);

    Ok(())
}

#[test]
fn byte_size_is_sum_of_widths_not_field_count() -> DBResult<()> {
    let schema = SchemaDescriptor::from_types(&[Type::Int, Type::Int])?;
    assert_eq!(schema.byte_size(), 8);
    assert_ne!(schema.byte_size(), schema.field_count());

    Ok(())
}

#[test]
fn errors_carry_their_kind() {
    assert!(matches!(
        SchemaDescriptor::from_types(&[]),
        Err(DBError::SchemaError(SchemaError::InvalidSchema(_)))
    ));

    let schema = match SchemaDescriptor::from_types_and_names(
        &[Type::Int, Type::Varchar(4)],
        &[Some("a"), Some("a")],
    ) {
        Ok(schema) => schema,
        Err(e) => panic!("unexpected error: {}", e),
    };

    assert!(matches!(
        schema.field_type(5),
        Err(DBError::SchemaError(SchemaError::IndexOutOfRange { index: 5, len: 2 }))
    ));
    assert!(matches!(
        schema.index_of_field("missing"),
        Err(DBError::SchemaError(SchemaError::FieldNotFound(name))) if name == "missing"
    ));
    assert!(matches!(
        schema.index_of_field(None),
        Err(DBError::SchemaError(SchemaError::InvalidArgument(_)))
    ));
}

#[test]
fn error_messages_are_readable() {
    let err = DBError::from(SchemaError::IndexOutOfRange { index: 3, len: 1 });
    assert_eq!(
        err.to_string(),
        "schema error: field index 3 out of range for schema with 1 fields"
    );

    let err = DBError::from(SchemaError::FieldNotFound("age".to_string()));
    assert_eq!(err.to_string(), "schema error: no field named `age` in schema");
}

#[test]
fn persisted_schema_decodes_to_equal_schema() -> DBResult<()> {
    init_tracing();

    let schema = SchemaDescriptor::from_types_and_names(
        &[Type::UnsignedInt, Type::Char(8)],
        &[Some("flags"), Some("code")],
    )?;
    let bytes = schema.to_bytes()?;
    let decoded = SchemaDescriptor::from_bytes(&bytes)?;

    assert_eq!(decoded, schema);
    assert_eq!(decoded.describe(), schema.describe());

    Ok(())
}
