//! Field flag bitmask of the native protocol.

use sqlmeta_core::{FieldFlags, FlagDecoder};

/// Field flag bits of the MySQL client protocol.
pub mod field_flag {
    pub const NOT_NULL: u32 = 1;
    pub const PRI_KEY: u32 = 2;
    pub const UNIQUE_KEY: u32 = 4;
    pub const MULTIPLE_KEY: u32 = 8;
    pub const BLOB: u32 = 16;
    pub const UNSIGNED: u32 = 32;
    pub const ZEROFILL: u32 = 64;
    pub const BINARY: u32 = 128;
    pub const ENUM: u32 = 256;
    pub const AUTO_INCREMENT: u32 = 512;
    pub const TIMESTAMP: u32 = 1024;
    pub const SET: u32 = 2048;
    pub const NO_DEFAULT_VALUE: u32 = 4096;
    pub const ON_UPDATE_NOW: u32 = 8192;
    pub const PART_KEY: u32 = 16384;
    pub const NUM: u32 = 32768;
    /// Result fields reuse the `NUM` bit to mark aggregates.
    pub const GROUP: u32 = NUM;
}

/// Decodes the flag bitmask. Every predicate is known.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitmaskFlags;

impl BitmaskFlags {
    /// Creates a decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

const fn has(flags: u32, bit: u32) -> Option<bool> {
    Some(flags & bit != 0)
}

impl FlagDecoder for BitmaskFlags {
    type Raw = u32;

    fn decode(&self, raw: &u32) -> FieldFlags {
        let flags = *raw;
        FieldFlags {
            not_null: has(flags, field_flag::NOT_NULL),
            primary_key: has(flags, field_flag::PRI_KEY),
            auto_increment: has(flags, field_flag::AUTO_INCREMENT),
            unsigned: has(flags, field_flag::UNSIGNED),
            is_enum: has(flags, field_flag::ENUM),
            is_set: has(flags, field_flag::SET),
            group: has(flags, field_flag::GROUP),
        }
    }
}
