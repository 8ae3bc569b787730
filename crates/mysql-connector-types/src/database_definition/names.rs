use std::collections::HashMap;

use super::{Table, TableColumn, TableColumnId, TableId};

/// Lookup indices from database names to ids. The definition lives for a
/// single generation pass, so names are stored as plain strings.
#[derive(Default, Debug, Clone)]
pub(super) struct Names {
    tables: HashMap<String, TableId>,
    table_columns: HashMap<(TableId, String), TableColumnId>,
}

impl Names {
    pub(super) fn intern_table(&mut self, table: &Table, table_id: TableId) {
        self.tables.insert(table.database_name().to_string(), table_id);
    }

    pub(super) fn intern_table_column(&mut self, column: &TableColumn, column_id: TableColumnId) {
        self.table_columns
            .insert((column.table_id(), column.database_name().to_string()), column_id);
    }

    pub(super) fn get_table_id(&self, table_name: &str) -> Option<TableId> {
        self.tables.get(table_name).copied()
    }

    pub(super) fn get_table_column_id(&self, table_id: TableId, column_name: &str) -> Option<TableColumnId> {
        self.table_columns.get(&(table_id, column_name.to_string())).copied()
    }
}
