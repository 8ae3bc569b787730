use mysql_connector_types::database_definition::TableWalker;

use crate::registry::{context::OutputContext, MetaField, Operation, OperationRecord};

/// The collection query: all rows of the table, as a non-null list.
pub(crate) fn register(table: TableWalker<'_>, output_ctx: &mut OutputContext) {
    let field_name = table.client_field_name();
    let field = MetaField::new(field_name, format!("[{}!]!", table.client_name()));

    let record = OperationRecord {
        name: field_name.to_string(),
        operation: Operation::FindAll { table_id: table.id() },
    };

    output_ctx.push_query(field, record);
}
