use mysql_connector_types::{
    database_definition::{TableColumnWalker, TableWalker},
    transport::Transport,
};
use serde_json::{Map, Value};

use super::{log, query};
use crate::{error::ResolverError, row};

pub(crate) async fn execute<T>(transport: &T, table: TableWalker<'_>, args: &Map<String, Value>) -> Result<Value, ResolverError>
where
    T: Transport + Sync,
{
    let Some(primary_key) = table.primary_key() else {
        return Err(ResolverError::Validation(format!(
            "table {} has no primary key",
            table.database_name()
        )));
    };

    let key = args
        .get(primary_key.client_name())
        .cloned()
        .ok_or_else(|| ResolverError::missing_argument(primary_key.client_name()))?;

    let summary = format!("Failed to fetch {}", table.client_field_name_singular());

    fetch_by_key(transport, table, primary_key, key, &summary).await
}

/// Selects one row by key equality: the first match, or null when there is
/// none. Also the re-fetch step of create and update.
pub(super) async fn fetch_by_key<T>(
    transport: &T,
    table: TableWalker<'_>,
    primary_key: TableColumnWalker<'_>,
    key: Value,
    summary: &str,
) -> Result<Value, ResolverError>
where
    T: Transport + Sync,
{
    let sql = query::select_by_column(table, primary_key);

    let rows = log::query(transport, &sql, vec![key])
        .await
        .map_err(|error| ResolverError::operation(summary, &error))?;

    Ok(rows
        .into_iter()
        .next()
        .map(|row| row::map_row(table, row))
        .unwrap_or(Value::Null))
}
