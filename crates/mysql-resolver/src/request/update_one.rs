use mysql_connector_types::{database_definition::TableWalker, transport::Transport};
use serde_json::{Map, Value};

use super::{find_one, log, query};
use crate::error::ResolverError;

/// Partial update by primary key: only the arguments present in the call
/// become assignments, omitted columns stay untouched. A call with nothing
/// to assign fails validation before the store is touched.
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

    let mut assignments = Vec::new();
    let mut params = Vec::new();

    let updatable = table
        .columns()
        .filter(|column| !column.is_primary_key() && !column.is_generated());

    for column in updatable {
        if let Some(value) = args.get(column.client_name()) {
            assignments.push(column.database_name());
            params.push(value.clone());
        }
    }

    if assignments.is_empty() {
        return Err(ResolverError::Validation("no fields to update".to_string()));
    }

    params.push(key.clone());

    let sql = query::update(table, &assignments, primary_key);
    let summary = format!("Failed to update {}", table.client_field_name_singular());

    log::execute(transport, &sql, params)
        .await
        .map_err(|error| ResolverError::operation(summary.as_str(), &error))?;

    find_one::fetch_by_key(transport, table, primary_key, key, &summary).await
}
