use inflector::Inflector;

use super::TableId;
use crate::scalar::ScalarType;

#[derive(Debug, Clone)]
pub struct TableColumn {
    table_id: TableId,
    database_name: String,
    client_name: String,
    scalar_type: ScalarType,
    nullable: bool,
    is_primary_key: bool,
    is_generated: bool,
}

impl TableColumn {
    pub fn new(table_id: TableId, database_name: String, scalar_type: ScalarType) -> Self {
        let client_name = database_name.to_camel_case();

        Self {
            table_id,
            database_name,
            client_name,
            scalar_type,
            nullable: false,
            is_primary_key: false,
            is_generated: false,
        }
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }

    pub fn set_is_primary_key(&mut self, is_primary_key: bool) {
        self.is_primary_key = is_primary_key;
    }

    /// Marks the column value as assigned by the database (auto-increment).
    /// Generated columns are never accepted on create.
    pub fn set_is_generated(&mut self, is_generated: bool) {
        self.is_generated = is_generated;
    }

    pub(crate) fn table_id(&self) -> TableId {
        self.table_id
    }

    pub(crate) fn database_name(&self) -> &str {
        &self.database_name
    }

    pub(crate) fn client_name(&self) -> &str {
        &self.client_name
    }

    pub(crate) fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    pub(crate) fn nullable(&self) -> bool {
        self.nullable
    }

    pub(crate) fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }

    pub(crate) fn is_generated(&self) -> bool {
        self.is_generated
    }
}
