mod error;
mod introspection;
mod registry;

pub use error::DiscoveryError;
pub use registry::{
    DerivedField, DerivedFieldRules, MetaField, MetaInputValue, ObjectType, Operation, OperationRecord, Registry,
};

use mysql_connector_types::transport::Transport;

/// Introspects a MySQL schema and generates the GraphQL registry for it: the
/// object types, query and mutation fields, and one operation record per
/// generated field.
///
/// The registry is rebuilt from scratch on every call; nothing is cached
/// across passes.
pub async fn introspect<T>(transport: &T, schema_name: &str) -> Result<Registry, DiscoveryError>
where
    T: Transport + Sync,
{
    introspect_with_rules(transport, schema_name, DerivedFieldRules::default()).await
}

/// Like [`introspect`], with custom rules for detecting temporal columns.
pub async fn introspect_with_rules<T>(
    transport: &T,
    schema_name: &str,
    rules: DerivedFieldRules,
) -> Result<Registry, DiscoveryError>
where
    T: Transport + Sync,
{
    let database_definition = introspection::introspect(transport, schema_name).await?;

    Ok(registry::generate(database_definition, &rules))
}
