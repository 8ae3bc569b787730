use super::{table_column::TableColumnWalker, Walker};
use crate::database_definition::{Table, TableColumnId, TableId};

/// A table definition.
pub type TableWalker<'a> = Walker<'a, TableId>;

impl<'a> TableWalker<'a> {
    /// The name of the table in the database.
    pub fn database_name(self) -> &'a str {
        self.get().database_name()
    }

    /// The name of the corresponding object type in the GraphQL API.
    pub fn client_name(self) -> &'a str {
        self.get().client_name()
    }

    /// The name of the collection query field in the GraphQL API.
    pub fn client_field_name(self) -> &'a str {
        self.get().client_field_name()
    }

    /// The name of the single-row query field in the GraphQL API.
    pub fn client_field_name_singular(self) -> &'a str {
        self.get().client_field_name_singular()
    }

    /// The columns of the table, in ordinal order.
    pub fn columns(self) -> impl Iterator<Item = TableColumnWalker<'a>> + 'a {
        let table_id = self.id;
        let definition = self.database_definition;

        definition
            .table_columns
            .iter()
            .enumerate()
            .filter(move |(_, column)| column.table_id() == table_id)
            .map(move |(id, _)| definition.walk(TableColumnId(id as u32)))
    }

    /// The primary key column, if the table has one. Composite keys are
    /// rejected during introspection, so at most one column qualifies.
    pub fn primary_key(self) -> Option<TableColumnWalker<'a>> {
        self.columns().find(|column| column.is_primary_key())
    }

    fn get(self) -> &'a Table {
        &self.database_definition.tables[self.id.0 as usize]
    }
}
