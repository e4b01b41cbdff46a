//! In-memory match table: one flattened row per match.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

pub mod flatten;
pub mod transform;

pub use flatten::flatten;

/// Column name to cell value. Keys are kept sorted, so column order is
/// alphabetical everywhere.
pub type Row = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted union of every row's columns.
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Cells of every row in `columns` order; missing cells render empty.
    pub fn records<'a>(
        &'a self,
        columns: &'a [&'a str],
    ) -> impl Iterator<Item = Vec<String>> + 'a {
        self.rows.iter().map(move |row| {
            columns
                .iter()
                .map(|column| row.get(*column).map(render_cell).unwrap_or_default())
                .collect()
        })
    }
}

/// Text form of a cell: strings raw, null empty, anything else as compact JSON.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
