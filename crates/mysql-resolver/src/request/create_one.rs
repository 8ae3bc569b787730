use mysql_connector_types::{database_definition::TableWalker, transport::Transport};
use serde_json::{Map, Value};

use super::{find_one, log, query};
use crate::error::ResolverError;

/// Inserts the supplied non-generated column values, then returns the
/// created row: re-fetched by the store-assigned id when the table has a
/// primary key (falling back to the caller-supplied key value), otherwise
/// the input echoed back.
pub(crate) async fn execute<T>(transport: &T, table: TableWalker<'_>, args: &Map<String, Value>) -> Result<Value, ResolverError>
where
    T: Transport + Sync,
{
    let mut columns = Vec::new();
    let mut params = Vec::new();

    for column in table.columns().filter(|column| !column.is_generated()) {
        if let Some(value) = args.get(column.client_name()) {
            columns.push(column.database_name());
            params.push(value.clone());
        }
    }

    let sql = query::insert(table, &columns);
    let summary = format!("Failed to create {}", table.client_field_name_singular());

    let result = log::execute(transport, &sql, params)
        .await
        .map_err(|error| ResolverError::operation(summary.as_str(), &error))?;

    let Some(primary_key) = table.primary_key() else {
        return Ok(Value::Object(args.clone()));
    };

    let key = result
        .last_insert_id
        .map(Value::from)
        .or_else(|| args.get(primary_key.client_name()).cloned());

    match key {
        Some(key) => find_one::fetch_by_key(transport, table, primary_key, key, &summary).await,
        None => Ok(Value::Null),
    }
}
