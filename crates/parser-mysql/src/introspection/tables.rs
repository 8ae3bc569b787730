use mysql_connector_types::{
    database_definition::{DatabaseDefinition, Table},
    transport::{Transport, TransportExt},
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::DiscoveryError;

#[derive(Debug, Deserialize)]
struct Row {
    name: String,
}

pub(super) async fn introspect<T>(
    transport: &T,
    database_definition: &mut DatabaseDefinition,
) -> Result<(), DiscoveryError>
where
    T: Transport + Sync,
{
    let query = include_str!("queries/tables.sql");
    let schema = database_definition.schema_name().to_string();

    let rows = transport
        .collect_query::<Row>(query, vec![Value::from(schema.as_str())])
        .await
        .map_err(|source| DiscoveryError::Metadata {
            schema: schema.clone(),
            source,
        })?;

    for row in rows {
        database_definition.push_table(Table::new(row.name));
    }

    Ok(())
}
