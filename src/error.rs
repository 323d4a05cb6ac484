//! Error types.

use thiserror::Error;

/// Errors raised while building an [`EncodingPanel`](crate::panel::EncodingPanel).
///
/// Construction fails instead of producing a panel whose controls cannot
/// show the encoding they edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// The data source yielded no column names.
    #[error("data source has no columns")]
    NoColumns,
    /// No encoding was supplied to the builder.
    #[error("no encoding was supplied to the panel")]
    MissingEncoding,
    /// The encoding names a column the data source does not offer.
    #[error("encoding field `{field}` names unknown column `{column}`")]
    UnknownColumn {
        /// Encoding field holding the column.
        field: &'static str,
        /// The column name that is not offered.
        column: String,
    },
    /// A column is named like the unset option label, so the two could not
    /// be told apart in a dropdown.
    #[error("column `{column}` collides with the unset option label")]
    ColumnShadowsUnsetLabel {
        /// The colliding column name.
        column: String,
    },
}

/// Error returned when parsing an unknown aggregation name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown aggregation `{name}`")]
pub struct ParseAggregationError {
    /// The rejected input.
    pub name: String,
}
