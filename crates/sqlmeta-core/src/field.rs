//! Raw field descriptors as reported by drivers.

/// Description of one result field before resolution.
///
/// String attributes are empty when the driver reports nothing, the way
/// client libraries hand them out. `N` is the driver's native type
/// representation and `F` its flag representation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFieldDescriptor<N, F> {
    /// Displayed name (alias).
    pub name: String,
    /// Underlying column name.
    pub original_name: String,
    /// Table alias used in the query.
    pub table: String,
    /// Underlying table name.
    pub original_table: String,
    /// Schema (database) name.
    pub schema: String,
    /// Catalog name.
    pub catalog: String,
    /// Native type code or label.
    pub native_type: N,
    /// Display length in bytes.
    pub length: u64,
    /// Number of decimals.
    pub decimals: u32,
    /// Raw flags.
    pub flags: F,
    /// Default value.
    pub default_value: Option<String>,
}

impl<N, F: Default> RawFieldDescriptor<N, F> {
    /// Creates a descriptor for a field with the given name and native type.
    #[must_use]
    pub fn new(name: impl Into<String>, native_type: N) -> Self {
        Self {
            name: name.into(),
            original_name: String::new(),
            table: String::new(),
            original_table: String::new(),
            schema: String::new(),
            catalog: String::new(),
            native_type,
            length: 0,
            decimals: 0,
            flags: F::default(),
            default_value: None,
        }
    }

    /// Sets the underlying column name.
    #[must_use]
    pub fn original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = original_name.into();
        self
    }

    /// Sets the table alias and underlying table name.
    #[must_use]
    pub fn table(mut self, table: impl Into<String>, original_table: impl Into<String>) -> Self {
        self.table = table.into();
        self.original_table = original_table.into();
        self
    }

    /// Sets the schema name.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Sets the catalog name.
    #[must_use]
    pub fn catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = catalog.into();
        self
    }

    /// Sets the display length and decimals.
    #[must_use]
    pub fn length(mut self, length: u64, decimals: u32) -> Self {
        self.length = length;
        self.decimals = decimals;
        self
    }

    /// Sets the raw flags.
    #[must_use]
    pub fn flags(mut self, flags: F) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default_value = Some(default.into());
        self
    }
}
