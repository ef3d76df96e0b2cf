//! Primitive scalar kinds and the fixed layout size table.
//!
//! The size table is pure data: a byte width per scalar kind plus three
//! layout constants (object header, array header, counter slot). All widths
//! are modeling choices, not measured allocations, and never change at
//! runtime.

use std::fmt;

use strum::EnumIter;

/// Byte cost of a generic object header.
///
/// Every composite value, string and boxed reference starts from this cost.
pub const OBJECT_BYTES: u64 = 8;

/// Byte cost of a generic array header: an object header (8) plus a 4-byte
/// length slot.
pub const ARRAY_BYTES: u64 = 12;

/// Byte cost of one internal 32-bit bookkeeping slot (length counters,
/// modification counts, cached hashes and similar).
pub const COUNTER_BYTES: u64 = 4;

/// The eight primitive scalar kinds the layout model distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PrimitiveKind {
    /// 1-byte truth value
    Boolean,
    /// 8-bit signed integer
    I1,
    /// 16-bit signed integer
    I2,
    /// 16-bit character code unit
    Char,
    /// 32-bit signed integer
    I4,
    /// 32-bit floating point
    R4,
    /// 64-bit floating point
    R8,
    /// 64-bit signed integer
    I8,
}

impl PrimitiveKind {
    /// Modeled width of this kind in bytes.
    #[must_use]
    pub fn width(&self) -> u64 {
        match self {
            PrimitiveKind::Boolean | PrimitiveKind::I1 => 1,
            PrimitiveKind::I2 | PrimitiveKind::Char => 2,
            PrimitiveKind::I4 | PrimitiveKind::R4 => 4,
            PrimitiveKind::R8 | PrimitiveKind::I8 => 8,
        }
    }

    /// Canonical source-level spelling of the declared type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::I1 => "byte",
            PrimitiveKind::I2 => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::I4 => "int",
            PrimitiveKind::R4 => "float",
            PrimitiveKind::R8 => "double",
            PrimitiveKind::I8 => "long",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Modeled character width of string storage.
///
/// Replaces runtime version probing with an explicit configuration value:
/// [`StringEncoding::Legacy`] models two-byte code units, while
/// [`StringEncoding::Compact`] models one-byte compact string storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringEncoding {
    /// Two bytes per character
    Legacy,
    /// One byte per character
    #[default]
    Compact,
}

impl StringEncoding {
    /// Modeled bytes per character.
    #[must_use]
    pub fn char_width(&self) -> u64 {
        match self {
            StringEncoding::Legacy => 2,
            StringEncoding::Compact => 1,
        }
    }
}
