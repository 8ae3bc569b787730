use mysql_connector_types::{database_definition::TableWalker, transport::Transport};
use serde_json::{Map, Value};

use super::{log, query};
use crate::error::ResolverError;

/// Deletes by primary key. True iff a row was actually removed; deleting a
/// key that does not exist is a false, not an error.
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

    let sql = query::delete(table, primary_key);

    let result = log::execute(transport, &sql, vec![key]).await.map_err(|error| {
        ResolverError::operation(
            format!("Failed to delete {}", table.client_field_name_singular()),
            &error,
        )
    })?;

    Ok(Value::Bool(result.affected_rows > 0))
}
