use mysql_connector_types::{
    database_definition::{DatabaseDefinition, TableColumn, TableId},
    scalar::ScalarType,
    transport::{Transport, TransportExt},
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::DiscoveryError;

#[derive(Debug, Deserialize, Clone, Copy)]
enum Nullability {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

#[derive(Debug, Deserialize)]
struct Row {
    name: String,
    data_type: String,
    is_nullable: Nullability,
    column_key: String,
    extra: String,
}

pub(super) async fn introspect<T>(
    transport: &T,
    database_definition: &mut DatabaseDefinition,
) -> Result<(), DiscoveryError>
where
    T: Transport + Sync,
{
    let query = include_str!("queries/columns.sql");
    let schema = database_definition.schema_name().to_string();

    let tables: Vec<(TableId, String)> = database_definition
        .tables()
        .map(|table| (table.id(), table.database_name().to_string()))
        .collect();

    for (table_id, table_name) in tables {
        let params = vec![Value::from(schema.as_str()), Value::from(table_name.as_str())];

        let rows = transport
            .collect_query::<Row>(query, params)
            .await
            .map_err(|source| DiscoveryError::Metadata {
                schema: schema.clone(),
                source,
            })?;

        let mut primary_keys = 0;

        for row in rows {
            let scalar_type = ScalarType::from_storage_type(&row.data_type);
            let mut column = TableColumn::new(table_id, row.name, scalar_type);

            column.set_nullable(matches!(row.is_nullable, Nullability::Yes));

            if row.column_key == "PRI" {
                column.set_is_primary_key(true);
                primary_keys += 1;
            }

            if row.extra.contains("auto_increment") {
                column.set_is_generated(true);
            }

            database_definition.push_table_column(column);
        }

        // Composite keys are not supported; failing here beats silently
        // generating a contract with the wrong key semantics.
        if primary_keys > 1 {
            return Err(DiscoveryError::CompositeKey { table: table_name });
        }
    }

    Ok(())
}
