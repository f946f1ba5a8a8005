/// General helper functions and macros for internal use;
/// these should not be exposed externally.

/// A macro which takes a `SchemaError` variant and a message and wraps it as
/// a `DBError`. So writing `schema_err!(InvalidSchema, input_string)` is the
/// same as:
/// ```ignore
/// Err(
///     DBError::from(
///         SchemaError::InvalidSchema(input_string.to_string())
///     )
/// )
/// ```
///
/// This can also accept a format string; ex: `schema_err!(FieldNotFound, "{}", name)`
#[doc(hidden)]
#[macro_export]
macro_rules! schema_err {
    // simple strings
    ($variant:ident, $msg:expr) => {
        Err($crate::DBError::from(
            $crate::schema::error::SchemaError::$variant($msg.to_string()),
        ))
    };

    // support format strings
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        Err($crate::DBError::from(
            $crate::schema::error::SchemaError::$variant(format!($fmt, $($arg)*)),
        ))
    };
}
