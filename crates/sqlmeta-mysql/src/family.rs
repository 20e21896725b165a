//! The native protocol driver family.

use sqlmeta_core::{Capabilities, Capability, DriverFamily, FieldFlags, FlagDecoder, TypeMapEntry};

use crate::flags::BitmaskFlags;
use crate::type_map;

/// Native MySQL client protocol: numeric type codes and a flag bitmask.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeProtocol;

impl DriverFamily for NativeProtocol {
    const NAME: &'static str = "mysql";
    type NativeType = u8;
    type Flags = u32;

    fn type_entry(native: &u8) -> Option<TypeMapEntry> {
        type_map::lookup(*native)
    }

    fn decode_flags(flags: &u32) -> FieldFlags {
        BitmaskFlags::new().decode(flags)
    }

    fn capabilities() -> Capabilities {
        [
            Capability::DetectGroupFunction,
            Capability::DetectPrimaryKey,
            Capability::DetectNumericUnsigned,
            Capability::DetectAutoincrement,
        ]
        .into_iter()
        .collect()
    }
}
