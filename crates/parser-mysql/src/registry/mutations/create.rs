use mysql_connector_types::database_definition::TableWalker;

use crate::registry::{client_base_type, context::OutputContext, MetaField, MetaInputValue, Operation, OperationRecord};

/// The create mutation: one argument per non-generated column, required when
/// the column is non-nullable. Generated (auto-increment) values are always
/// assigned by the database and never accepted here. Skipped entirely when
/// every column is generated.
pub(crate) fn register(table: TableWalker<'_>, output_ctx: &mut OutputContext) {
    let insertable: Vec<_> = table.columns().filter(|column| !column.is_generated()).collect();

    if insertable.is_empty() {
        return;
    }

    let field_name = format!("create{}", table.client_name());
    let mut field = MetaField::new(field_name.as_str(), format!("{}!", table.client_name()));

    for column in insertable {
        let base_type = client_base_type(column);

        let client_type = if column.nullable() {
            base_type.to_string()
        } else {
            format!("{base_type}!")
        };

        field.push_arg(MetaInputValue::new(column.client_name(), client_type));
    }

    let record = OperationRecord {
        name: field_name,
        operation: Operation::CreateOne { table_id: table.id() },
    };

    output_ctx.push_mutation(field, record);
}
