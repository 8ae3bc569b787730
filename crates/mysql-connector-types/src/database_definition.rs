mod ids;
mod names;
mod table;
mod table_column;
mod walkers;

pub use ids::{TableColumnId, TableId};
use names::Names;
pub use table::Table;
pub use table_column::TableColumn;
pub use walkers::{TableColumnWalker, TableWalker, Walker};

/// Definition of a MySQL database schema: the tables and columns needed to
/// render a GraphQL contract and to execute queries against the database.
///
/// Built once per generation pass by introspection and read-only afterwards.
/// Table order is discovery order, column order is ordinal position; both
/// orders drive the generated contract, so they must be preserved.
#[derive(Debug, Clone)]
pub struct DatabaseDefinition {
    /// The schema (database) name this definition was introspected from.
    schema_name: String,
    /// Ordered by discovery.
    tables: Vec<Table>,
    /// Ordered by table id, then ordinal position.
    table_columns: Vec<TableColumn>,
    names: Names,
}

impl DatabaseDefinition {
    pub fn new(schema_name: &str) -> Self {
        Self {
            schema_name: schema_name.to_string(),
            tables: Vec::new(),
            table_columns: Vec::new(),
            names: Names::default(),
        }
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Iterates over all tables of the introspected schema.
    pub fn tables(&self) -> impl ExactSizeIterator<Item = TableWalker<'_>> + '_ {
        (0..self.tables.len()).map(move |id| self.walk(TableId(id as u32)))
    }

    /// Finds a table with the given database name, if existing.
    pub fn find_table(&self, table_name: &str) -> Option<TableWalker<'_>> {
        self.get_table_id(table_name).map(|table_id| self.walk(table_id))
    }

    /// Adds a table to the definition.
    pub fn push_table(&mut self, table: Table) -> TableId {
        let id = self.next_table_id();
        self.names.intern_table(&table, id);
        self.tables.push(table);

        id
    }

    /// Adds a table column to the definition. Columns must be pushed in
    /// ordinal order, directly after their owning table.
    pub fn push_table_column(&mut self, column: TableColumn) -> TableColumnId {
        let id = self.next_table_column_id();
        self.names.intern_table_column(&column, id);
        self.table_columns.push(column);

        id
    }

    /// Finds the id of a table with the given name, if existing.
    pub fn get_table_id(&self, table_name: &str) -> Option<TableId> {
        self.names.get_table_id(table_name)
    }

    /// Finds the id of a column in a table with the given name, if existing.
    pub fn get_table_column_id(&self, table_id: TableId, column_name: &str) -> Option<TableColumnId> {
        self.names.get_table_column_id(table_id, column_name)
    }

    /// Walk an item in the definition by its ID.
    pub fn walk<Id>(&self, id: Id) -> Walker<'_, Id> {
        Walker {
            id,
            database_definition: self,
        }
    }

    fn next_table_id(&self) -> TableId {
        TableId(self.tables.len() as u32)
    }

    fn next_table_column_id(&self) -> TableColumnId {
        TableColumnId(self.table_columns.len() as u32)
    }
}
