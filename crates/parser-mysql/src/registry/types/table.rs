use mysql_connector_types::{database_definition::TableWalker, scalar::ScalarType};

use crate::registry::{
    client_base_type, context::OutputContext, DerivedField, DerivedFieldRules, MetaField, ObjectType,
};

/// Registers the object type for a table, one field per column in ordinal
/// order, and the derived resolvers for its temporal text columns.
pub(crate) fn generate(table: TableWalker<'_>, rules: &DerivedFieldRules, output_ctx: &mut OutputContext) {
    let mut fields = Vec::new();

    for column in table.columns() {
        let base_type = client_base_type(column);

        // Primary keys are always required in the contract, even if the
        // database marks the column nullable.
        let client_type = if column.nullable() && !column.is_primary_key() {
            base_type.to_string()
        } else {
            format!("{base_type}!")
        };

        fields.push(MetaField::new(column.client_name(), client_type));

        if column.scalar_type() == ScalarType::String && rules.matches(column.database_name()) {
            output_ctx.push_field_resolver(DerivedField {
                type_name: table.client_name().to_string(),
                field_name: column.client_name().to_string(),
                table_id: table.id(),
                column_id: column.id(),
            });
        }
    }

    output_ctx.create_object_type(ObjectType::new(table.client_name(), fields));
}
