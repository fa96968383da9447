// SPDX-License-Identifier: MPL-2.0
//! Rows shown by the widgets page table.

use serde::{Deserialize, Serialize};

/// One table row. Any field may be absent on input and reads back as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRecord {
    pub name: String,
    pub category: String,
    pub status: String,
}

impl TableRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            status: status.into(),
        }
    }
}

/// Column of the records table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Category,
    Status,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Name, Column::Category, Column::Status];

    /// i18n key of the column header.
    #[must_use]
    pub fn header_key(self) -> &'static str {
        match self {
            Column::Name => "table-column-name",
            Column::Category => "table-column-category",
            Column::Status => "table-column-status",
        }
    }
}

/// Ordered table rows.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    rows: Vec<TableRecord>,
}

impl RecordTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every row with `records`, in order.
    pub fn set_records(&mut self, records: &[TableRecord]) {
        self.rows = records.to_vec();
    }

    #[must_use]
    pub fn records(&self) -> Vec<TableRecord> {
        self.rows.clone()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Text of a cell; `""` when the row does not exist.
    #[must_use]
    pub fn cell(&self, row: usize, column: Column) -> &str {
        self.rows.get(row).map_or("", |record| match column {
            Column::Name => record.name.as_str(),
            Column::Category => record.category.as_str(),
            Column::Status => record.status.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Vec<TableRecord> {
        vec![
            TableRecord::new("Navigation Drawer", "Layouts", "Stable"),
            TableRecord::new("Charts", "Visualization", "Beta"),
        ]
    }

    #[test]
    fn records_round_trip_in_order() {
        let mut table = RecordTable::new();
        table.set_records(&demo());
        assert_eq!(table.records(), demo());
    }

    #[test]
    fn set_records_replaces_previous_rows() {
        let mut table = RecordTable::new();
        table.set_records(&demo());
        table.set_records(&[TableRecord::new("Dialogs", "Components", "Stable")]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, Column::Name), "Dialogs");
    }

    #[test]
    fn partial_record_cells_read_as_empty() {
        let record: TableRecord = toml::from_str("category = \"Layouts\"").expect("valid record");
        let mut table = RecordTable::new();
        table.set_records(&[record]);

        assert_eq!(table.records(), vec![TableRecord::new("", "Layouts", "")]);
        assert_eq!(table.cell(0, Column::Name), "");
        assert_eq!(table.cell(5, Column::Status), "");
    }

    #[test]
    fn absent_fields_deserialize_to_empty_strings() {
        let record: TableRecord = toml::from_str("name = \"Charts\"").expect("valid record");
        assert_eq!(record, TableRecord::new("Charts", "", ""));
    }

    #[test]
    fn clear_removes_all_rows() {
        let mut table = RecordTable::new();
        table.set_records(&demo());
        table.clear();
        assert!(table.is_empty());
        assert!(table.records().is_empty());
    }
}
