//! Builds canonical column definitions from raw field descriptors.

use crate::column::{CanonicalDataType, ColumnDefinition};
use crate::connection::{DriverFamily, FamilyField};
use crate::error::{MetadataError, Result};

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Resolves one field at the given 1-based ordinal position.
///
/// # Errors
///
/// Returns [`MetadataError::UnsupportedType`] if the native type has no
/// mapping in the family's table.
pub fn resolve_column<F: DriverFamily>(
    field: &FamilyField<F>,
    ordinal: usize,
) -> Result<ColumnDefinition> {
    let name = if field.original_name.is_empty() {
        &field.name
    } else {
        &field.original_name
    };

    let entry = F::type_entry(&field.native_type).ok_or_else(|| MetadataError::UnsupportedType {
        column: name.clone(),
        native_type: field.native_type.to_string(),
        driver: F::NAME,
    })?;

    let flags = F::decode_flags(&field.flags);
    let table_name = non_empty(&field.original_table);
    let has_table = table_name.is_some();

    let native = if flags.is_set() {
        Some("SET")
    } else if flags.is_enum() {
        Some("ENUM")
    } else {
        entry.native
    };

    let group = if !has_table && field.table.is_empty() {
        flags.group
    } else {
        None
    };

    let mut column = ColumnDefinition::new(
        entry.data_type,
        name.clone(),
        table_name,
        non_empty(&field.schema),
    )
    .with_alias(field.name.clone())
    .with_table_alias(non_empty(&field.table))
    .with_catalog(non_empty(&field.catalog))
    .with_ordinal_position(ordinal)
    .with_native_data_type(native.map(str::to_string))
    .with_nullable(!flags.is_not_null() && has_table)
    .with_primary(flags.is_primary_key())
    .with_group(group)
    .with_column_default(field.default_value.clone());

    if entry.data_type.is_numeric() {
        column = column.with_numeric_unsigned(flags.unsigned);
    }

    match entry.data_type {
        CanonicalDataType::Integer => {
            column = column.with_auto_increment(flags.auto_increment);
        }
        CanonicalDataType::Decimal => {
            let decimals = u64::from(field.decimals);
            let scale = field.length.saturating_add(1).saturating_sub(decimals);
            column = column.with_numeric_precision_scale(decimals, scale);
        }
        CanonicalDataType::String => {
            column = column.with_character_maximum_length(field.length);
        }
        CanonicalDataType::Blob => {
            column = column.with_character_octet_length(field.length);
        }
        _ => {}
    }

    Ok(column)
}

/// Resolves every field, numbering them 1..N in order.
///
/// # Errors
///
/// Fails on the first field whose native type has no mapping.
pub fn resolve_columns<F: DriverFamily>(
    fields: &[FamilyField<F>],
) -> Result<Vec<ColumnDefinition>> {
    fields
        .iter()
        .enumerate()
        .map(|(idx, field)| resolve_column::<F>(field, idx + 1))
        .collect()
}
