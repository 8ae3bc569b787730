use mysql_connector_types::{database_definition::TableWalker, transport::Transport};
use serde_json::Value;

use super::{log, query};
use crate::{error::ResolverError, row};

pub(crate) async fn execute<T>(transport: &T, table: TableWalker<'_>) -> Result<Value, ResolverError>
where
    T: Transport + Sync,
{
    let sql = query::select_all(table);

    let rows = log::query(transport, &sql, Vec::new())
        .await
        .map_err(|error| ResolverError::operation(format!("Failed to fetch {}", table.database_name()), &error))?;

    Ok(Value::Array(rows.into_iter().map(|row| row::map_row(table, row)).collect()))
}
