use mysql_connector_types::database_definition::TableWalker;

use crate::registry::{client_base_type, context::OutputContext, MetaField, MetaInputValue, Operation, OperationRecord};

/// The update mutation: keyed by the primary key, with every other
/// non-generated column as an optional argument. Arguments left out of a
/// call leave the column unchanged. Requires a primary key and at least one
/// updatable column.
pub(crate) fn register(table: TableWalker<'_>, output_ctx: &mut OutputContext) {
    let Some(primary_key) = table.primary_key() else {
        return;
    };

    let updatable: Vec<_> = table
        .columns()
        .filter(|column| !column.is_primary_key() && !column.is_generated())
        .collect();

    if updatable.is_empty() {
        return;
    }

    let field_name = format!("update{}", table.client_name());
    let mut field = MetaField::new(field_name.as_str(), format!("{}!", table.client_name()));

    field.push_arg(MetaInputValue::new(primary_key.client_name(), "ID!"));

    for column in updatable {
        field.push_arg(MetaInputValue::new(column.client_name(), client_base_type(column)));
    }

    let record = OperationRecord {
        name: field_name,
        operation: Operation::UpdateOne { table_id: table.id() },
    };

    output_ctx.push_mutation(field, record);
}
