//! The generic layer driver family.

use sqlmeta_core::{Capabilities, Capability, DriverFamily, FieldFlags, FlagDecoder, TypeMapEntry};

use crate::flags::TokenFlags;
use crate::type_map;

/// Generic abstraction layer bound to MySQL: type names and flag tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericProtocol;

impl DriverFamily for GenericProtocol {
    const NAME: &'static str = "mysql-generic";
    type NativeType = String;
    type Flags = Vec<String>;

    fn type_entry(native: &String) -> Option<TypeMapEntry> {
        type_map::lookup(native)
    }

    fn decode_flags(flags: &Vec<String>) -> FieldFlags {
        TokenFlags::new().decode(flags)
    }

    fn capabilities() -> Capabilities {
        [Capability::DetectPrimaryKey].into_iter().collect()
    }
}
