use mysql_connector_types::transport::{ExecuteResult, Transport};
use serde_json::Value;

pub(super) async fn query<T>(transport: &T, sql: &str, params: Vec<Value>) -> mysql_connector_types::Result<Vec<Value>>
where
    T: Transport + Sync,
{
    tracing::debug!(params = params.len(), "{sql}");
    transport.parameterized_query(sql, params).await
}

pub(super) async fn execute<T>(
    transport: &T,
    sql: &str,
    params: Vec<Value>,
) -> mysql_connector_types::Result<ExecuteResult>
where
    T: Transport + Sync,
{
    tracing::debug!(params = params.len(), "{sql}");
    transport.parameterized_execute(sql, params).await
}
