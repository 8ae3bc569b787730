use mysql_connector_types::database_definition::{TableColumnId, TableId};

/// What a generated field does, as data. Executable bindings are resolved
/// through a single dispatch over this enum instead of dynamically keyed
/// lookups, so inputs and outputs stay statically typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Unconditional select over the table.
    FindAll { table_id: TableId },
    /// Select one row by primary key equality.
    FindOne { table_id: TableId },
    /// Select rows matching a `LIKE` pattern on one text column.
    Search {
        table_id: TableId,
        column_id: TableColumnId,
    },
    /// Insert a row from the supplied non-generated column values.
    CreateOne { table_id: TableId },
    /// Partial update of a row by primary key.
    UpdateOne { table_id: TableId },
    /// Delete a row by primary key.
    DeleteOne { table_id: TableId },
}

/// One generated contract field and the operation behind it.
#[derive(Debug, Clone)]
pub struct OperationRecord {
    pub name: String,
    pub operation: Operation,
}

/// A field-level derivation: the stored value of a temporal text column is
/// normalized to canonical RFC 3339 form before being returned.
#[derive(Debug, Clone)]
pub struct DerivedField {
    pub type_name: String,
    pub field_name: String,
    pub table_id: TableId,
    pub column_id: TableColumnId,
}
