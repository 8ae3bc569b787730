use mysql_connector_types::{database_definition::TableWalker, naming};

use crate::registry::{context::OutputContext, MetaField, MetaInputValue, Operation, OperationRecord};

/// One pattern-search query per non-key text column, in column order. The
/// caller controls wildcard placement in the pattern.
pub(crate) fn register(table: TableWalker<'_>, output_ctx: &mut OutputContext) {
    for column in table.columns().filter(|column| column.is_searchable()) {
        let field_name = format!(
            "{}By{}",
            table.client_field_name(),
            naming::to_type_name(column.database_name())
        );

        let mut field = MetaField::new(field_name.as_str(), format!("[{}!]!", table.client_name()));
        field.push_arg(MetaInputValue::new(format!("{}Pattern", column.client_name()), "String!"));

        let record = OperationRecord {
            name: field_name,
            operation: Operation::Search {
                table_id: table.id(),
                column_id: column.id(),
            },
        };

        output_ctx.push_query(field, record);
    }
}
