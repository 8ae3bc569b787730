use mysql_connector_types::database_definition::DatabaseDefinition;

use super::{DerivedField, MetaField, ObjectType, OperationRecord, Registry};

/// Collects the generated contract while the table walkers still borrow the
/// database definition; merged into the registry at the end of the pass.
#[derive(Debug, Default)]
pub(super) struct OutputContext {
    object_types: Vec<ObjectType>,
    query_fields: Vec<MetaField>,
    mutation_fields: Vec<MetaField>,
    operations: Vec<OperationRecord>,
    field_resolvers: Vec<DerivedField>,
}

impl OutputContext {
    pub(super) fn create_object_type(&mut self, object_type: ObjectType) {
        self.object_types.push(object_type);
    }

    pub(super) fn push_query(&mut self, field: MetaField, record: OperationRecord) {
        self.query_fields.push(field);
        self.operations.push(record);
    }

    pub(super) fn push_mutation(&mut self, field: MetaField, record: OperationRecord) {
        self.mutation_fields.push(field);
        self.operations.push(record);
    }

    pub(super) fn push_field_resolver(&mut self, field_resolver: DerivedField) {
        self.field_resolvers.push(field_resolver);
    }

    pub(super) fn into_registry(self, database_definition: DatabaseDefinition) -> Registry {
        Registry {
            database_definition,
            object_types: self.object_types,
            query_fields: self.query_fields,
            mutation_fields: self.mutation_fields,
            operations: self.operations,
            field_resolvers: self.field_resolvers,
        }
    }
}
