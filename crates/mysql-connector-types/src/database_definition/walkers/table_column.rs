use super::{table::TableWalker, Walker};
use crate::{
    database_definition::{TableColumn, TableColumnId},
    scalar::ScalarType,
};

/// A column definition.
pub type TableColumnWalker<'a> = Walker<'a, TableColumnId>;

impl<'a> TableColumnWalker<'a> {
    /// The table this column belongs to.
    pub fn table(self) -> TableWalker<'a> {
        self.walk(self.get().table_id())
    }

    /// The name of the column in the database.
    pub fn database_name(self) -> &'a str {
        self.get().database_name()
    }

    /// The name of the field in the GraphQL APIs.
    pub fn client_name(self) -> &'a str {
        self.get().client_name()
    }

    /// The GraphQL scalar the column value maps into.
    pub fn scalar_type(self) -> ScalarType {
        self.get().scalar_type()
    }

    pub fn nullable(self) -> bool {
        self.get().nullable()
    }

    pub fn is_primary_key(self) -> bool {
        self.get().is_primary_key()
    }

    /// True if the value is assigned by the database on insert.
    pub fn is_generated(self) -> bool {
        self.get().is_generated()
    }

    /// True if the column gets a pattern-search query field: text columns
    /// only, keys excluded.
    pub fn is_searchable(self) -> bool {
        self.scalar_type() == ScalarType::String && !self.is_primary_key()
    }

    fn get(self) -> &'a TableColumn {
        &self.database_definition.table_columns[self.id.0 as usize]
    }
}
