use mysql_connector_types::{
    database_definition::{TableColumnWalker, TableWalker},
    transport::Transport,
};
use serde_json::{Map, Value};

use super::{log, query};
use crate::{error::ResolverError, row};

/// Pattern search over one text column. The caller-supplied pattern is
/// passed to `LIKE` verbatim; wildcard placement is the caller's business.
pub(crate) async fn execute<T>(
    transport: &T,
    table: TableWalker<'_>,
    column: TableColumnWalker<'_>,
    args: &Map<String, Value>,
) -> Result<Value, ResolverError>
where
    T: Transport + Sync,
{
    let pattern_arg = format!("{}Pattern", column.client_name());

    let pattern = args
        .get(&pattern_arg)
        .cloned()
        .ok_or_else(|| ResolverError::missing_argument(&pattern_arg))?;

    let sql = query::select_like(table, column);

    let rows = log::query(transport, &sql, vec![pattern]).await.map_err(|error| {
        ResolverError::operation(
            format!("Failed to fetch {} by {}", table.database_name(), column.database_name()),
            &error,
        )
    })?;

    Ok(Value::Array(rows.into_iter().map(|row| row::map_row(table, row)).collect()))
}
