use mysql_connector_types::database_definition::TableWalker;

use crate::registry::{context::OutputContext, MetaField, MetaInputValue, Operation, OperationRecord};

/// The delete mutation: keyed by the primary key, returning whether a row
/// was actually deleted.
pub(crate) fn register(table: TableWalker<'_>, output_ctx: &mut OutputContext) {
    let Some(primary_key) = table.primary_key() else {
        return;
    };

    let field_name = format!("delete{}", table.client_name());

    let mut field = MetaField::new(field_name.as_str(), "Boolean!");
    field.push_arg(MetaInputValue::new(primary_key.client_name(), "ID!"));

    let record = OperationRecord {
        name: field_name,
        operation: Operation::DeleteOne { table_id: table.id() },
    };

    output_ctx.push_mutation(field, record);
}
