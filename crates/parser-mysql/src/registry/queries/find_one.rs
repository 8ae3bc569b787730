use mysql_connector_types::database_definition::TableWalker;

use crate::registry::{context::OutputContext, MetaField, MetaInputValue, Operation, OperationRecord};

/// The single-row query, keyed by the primary key. Absence is a valid
/// result, so the return type stays nullable. Tables without a primary key
/// get no single-row query.
pub(crate) fn register(table: TableWalker<'_>, output_ctx: &mut OutputContext) {
    let Some(primary_key) = table.primary_key() else {
        return;
    };

    let field_name = table.client_field_name_singular();

    let mut field = MetaField::new(field_name, table.client_name());
    field.push_arg(MetaInputValue::new(primary_key.client_name(), "ID!"));

    let record = OperationRecord {
        name: field_name.to_string(),
        operation: Operation::FindOne { table_id: table.id() },
    };

    output_ctx.push_query(field, record);
}
