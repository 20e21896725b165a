//! Duplicate alias detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::column::ColumnDefinition;
use crate::error::{MetadataError, Result};
use crate::metadata::ColumnsMetadata;

/// Which definition survives when two fields share an alias and agree on
/// type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateAliasPolicy {
    /// Keep the first definition seen.
    #[default]
    KeepFirst,
    /// Keep the primary key definition when exactly one of the two is
    /// primary, otherwise the first seen.
    PreferPrimary,
}

/// Collects resolved columns into [`ColumnsMetadata`].
///
/// A surviving definition always stays at the position its alias first
/// appeared in.
///
/// # Errors
///
/// Returns [`MetadataError::AmbiguousColumn`] when two fields share an alias
/// but differ in canonical or native type.
pub fn reconcile(
    columns: Vec<ColumnDefinition>,
    policy: DuplicateAliasPolicy,
) -> Result<ColumnsMetadata> {
    let mut metadata = ColumnsMetadata::new();

    for column in columns {
        let Some(previous) = metadata.get(&column.alias) else {
            metadata.insert(column.alias.clone(), column);
            continue;
        };

        if previous.data_type() != column.data_type()
            || previous.native_data_type != column.native_data_type
        {
            return Err(MetadataError::AmbiguousColumn(column.alias));
        }

        let replace = policy == DuplicateAliasPolicy::PreferPrimary
            && column.primary
            && !previous.primary;

        debug!(
            alias = %column.alias,
            first = previous.ordinal_position,
            duplicate = column.ordinal_position,
            replace,
            "Duplicate alias with matching definitions"
        );

        if replace {
            metadata.insert(column.alias.clone(), column);
        }
    }

    Ok(metadata)
}
