mod columns;
mod tables;

use mysql_connector_types::{database_definition::DatabaseDefinition, transport::Transport};

use crate::error::DiscoveryError;

/// Introspects a MySQL schema into a database definition.
///
/// Issues one query for the table list, then one query per table for its
/// columns. The N+1 access pattern is deliberate: discovery runs once per
/// generation pass, sequentially, so the metadata snapshot cannot race with
/// itself.
pub(crate) async fn introspect<T>(transport: &T, schema_name: &str) -> Result<DatabaseDefinition, DiscoveryError>
where
    T: Transport + Sync,
{
    let mut database_definition = DatabaseDefinition::new(schema_name);

    // order matters
    tables::introspect(transport, &mut database_definition).await?;
    columns::introspect(transport, &mut database_definition).await?;

    tracing::debug!(
        schema = schema_name,
        tables = database_definition.tables().len(),
        "introspected schema metadata"
    );

    Ok(database_definition)
}
