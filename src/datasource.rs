//! Column names offered by the panel.

use crate::error::PanelError;

/// Read-only, non-empty, ordered set of column names.
///
/// Duplicate names collapse onto their first occurrence so each column is
/// offered once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    columns: Vec<String>,
}

impl DataSource {
    /// Build a data source from column names.
    ///
    /// Returns [`PanelError::NoColumns`] when the iterator is empty.
    pub fn new<I, S>(columns: I) -> Result<Self, PanelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if !unique.contains(&column) {
                unique.push(column);
            }
        }
        if unique.is_empty() {
            return Err(PanelError::NoColumns);
        }
        Ok(Self { columns: unique })
    }

    /// Access the column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the source has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Check whether a column is offered.
    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|existing| existing == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_is_rejected() {
        let err = DataSource::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, PanelError::NoColumns);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let source = DataSource::new(["b", "a", "b", "c"]).unwrap();
        assert_eq!(source.columns(), ["b", "a", "c"]);
        assert_eq!(source.len(), 3);
        assert!(source.contains("c"));
        assert!(!source.contains("d"));
        assert!(!source.is_empty());
    }
}
