//! Column types understood by the storage engine. Every type has a fixed
//! on-disk width so that tuples built from a schema are fixed-size.

use std::fmt;

use bincode::{Decode, Encode};

/// Number of bytes used to store the length of a `Varchar` value.
pub const VARCHAR_LEN_PREFIX: usize = 2;

/// `Decimal` values are stored as an `i64` mantissa; the scale lives in the type.
pub const DECIMAL_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
pub enum Type {
    Char(u16),
    Varchar(u16),
    Tiny,
    Short,
    Int,
    BigInt,
    UnsignedTiny,
    UnsignedShort,
    UnsignedInt,
    UnsignedBigInt,
    Float,
    Double,
    Decimal(u8),
    Bool,
}

impl Type {
    /// The number of bytes a value of this type occupies inside a tuple.
    /// `Varchar(n)` reserves the full `n` bytes plus its length prefix.
    pub fn byte_len(&self) -> usize {
        match self {
            Type::Char(n) => *n as usize,
            Type::Varchar(n) => *n as usize + VARCHAR_LEN_PREFIX,
            Type::Tiny | Type::UnsignedTiny => 1,
            Type::Short | Type::UnsignedShort => 2,
            Type::Int | Type::UnsignedInt => 4,
            Type::BigInt | Type::UnsignedBigInt => 8,
            Type::Float => 4,
            Type::Double => 8,
            Type::Decimal(_) => DECIMAL_WIDTH,
            Type::Bool => 1,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Char(n) => write!(f, "CHAR[{}]", n),
            Type::Varchar(n) => write!(f, "VARCHAR[{}]", n),
            Type::Tiny => write!(f, "TINYINT"),
            Type::Short => write!(f, "SMALLINT"),
            Type::Int => write!(f, "INT"),
            Type::BigInt => write!(f, "BIGINT"),
            Type::UnsignedTiny => write!(f, "TINYINT UNSIGNED"),
            Type::UnsignedShort => write!(f, "SMALLINT UNSIGNED"),
            Type::UnsignedInt => write!(f, "INT UNSIGNED"),
            Type::UnsignedBigInt => write!(f, "BIGINT UNSIGNED"),
            Type::Float => write!(f, "FLOAT"),
            Type::Double => write!(f, "DOUBLE"),
            Type::Decimal(scale) => write!(f, "DECIMAL[{}]", scale),
            Type::Bool => write!(f, "BOOL"),
        }
    }
}
