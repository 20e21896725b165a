//! Column descriptions as generic layers report them.

use sqlmeta_core::RawFieldDescriptor;

/// Field descriptor of the generic layer.
pub type GenericField = RawFieldDescriptor<String, Vec<String>>;

/// Per-column result description of a generic abstraction layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column name or alias.
    pub name: String,
    /// Table name as written in the query (the alias when one is used).
    pub table: String,
    /// Native type name, e.g. `VAR_STRING`.
    pub native_type: String,
    /// Display length.
    pub len: u64,
    /// Number of decimals.
    pub precision: u32,
    /// Flag tokens, e.g. `not_null`.
    pub flags: Vec<String>,
}

impl From<ColumnMeta> for GenericField {
    /// The layer reports a single table name, used as both the table alias
    /// and the originating table.
    fn from(meta: ColumnMeta) -> Self {
        Self::new(meta.name, meta.native_type)
            .table(meta.table.clone(), meta.table)
            .length(meta.len, meta.precision)
            .flags(meta.flags)
    }
}
