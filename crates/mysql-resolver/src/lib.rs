mod derived;
mod error;
mod request;
mod row;

pub use error::ResolverError;
pub use parser_mysql::{DerivedFieldRules, DiscoveryError, Registry};

use indexmap::IndexMap;
use mysql_connector_types::transport::Transport;
use parser_mysql::Operation;
use serde_json::{Map, Value};

/// Introspects a MySQL schema and binds the generated contract to the given
/// transport: the SDL to serve, plus one executable operation per contract
/// field. Everything is derived fresh from the catalog; nothing survives
/// from earlier passes.
pub async fn generate_schema<T>(transport: T, schema_name: &str) -> Result<GeneratedSchema<T>, DiscoveryError>
where
    T: Transport + Sync,
{
    generate_schema_with_rules(transport, schema_name, DerivedFieldRules::default()).await
}

/// Like [`generate_schema`], with custom rules for detecting temporal
/// columns.
pub async fn generate_schema_with_rules<T>(
    transport: T,
    schema_name: &str,
    rules: DerivedFieldRules,
) -> Result<GeneratedSchema<T>, DiscoveryError>
where
    T: Transport + Sync,
{
    let registry = parser_mysql::introspect_with_rules(&transport, schema_name, rules).await?;

    Ok(GeneratedSchema::new(registry, transport))
}

/// The served contract: type definitions and the operations satisfying
/// them. Operations run independently; a failure in one call never affects
/// other operations or future calls.
pub struct GeneratedSchema<T> {
    registry: Registry,
    operations: IndexMap<String, Operation>,
    type_defs: String,
    transport: T,
}

impl<T> GeneratedSchema<T>
where
    T: Transport + Sync,
{
    fn new(registry: Registry, transport: T) -> Self {
        let operations = registry
            .operations()
            .iter()
            .map(|record| (record.name.clone(), record.operation))
            .collect();

        let type_defs = registry.to_sdl();

        Self {
            registry,
            operations,
            type_defs,
            transport,
        }
    }

    /// The contract as GraphQL SDL.
    pub fn type_defs(&self) -> &str {
        &self.type_defs
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The names of the generated operations, in contract order.
    pub fn operation_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    /// Runs one generated operation. Rows come back keyed by client field
    /// names. Runs to completion or failure; cancellation is not supported.
    pub async fn execute(&self, operation_name: &str, args: &Map<String, Value>) -> Result<Value, ResolverError> {
        let operation = self
            .operations
            .get(operation_name)
            .ok_or_else(|| ResolverError::UnknownOperation(operation_name.to_string()))?;

        let definition = self.registry.database_definition();

        match *operation {
            Operation::FindAll { table_id } => {
                request::find_all::execute(&self.transport, definition.walk(table_id)).await
            }
            Operation::FindOne { table_id } => {
                request::find_one::execute(&self.transport, definition.walk(table_id), args).await
            }
            Operation::Search { table_id, column_id } => {
                request::search::execute(
                    &self.transport,
                    definition.walk(table_id),
                    definition.walk(column_id),
                    args,
                )
                .await
            }
            Operation::CreateOne { table_id } => {
                request::create_one::execute(&self.transport, definition.walk(table_id), args).await
            }
            Operation::UpdateOne { table_id } => {
                request::update_one::execute(&self.transport, definition.walk(table_id), args).await
            }
            Operation::DeleteOne { table_id } => {
                request::delete_one::execute(&self.transport, definition.walk(table_id), args).await
            }
        }
    }

    /// Resolves a derived field against an already-fetched row: temporal
    /// text columns are normalized to RFC 3339, null stays null. Returns
    /// `None` when the field has no derivation and the plain row value
    /// should be used.
    pub fn resolve_field(&self, type_name: &str, field_name: &str, parent: &Map<String, Value>) -> Option<Value> {
        self.registry
            .field_resolvers()
            .iter()
            .find(|field| field.type_name == type_name && field.field_name == field_name)?;

        Some(derived::normalize_timestamp(parent.get(field_name).unwrap_or(&Value::Null)))
    }
}
