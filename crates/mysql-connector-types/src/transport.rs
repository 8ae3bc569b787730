use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The outcome of a write statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteResult {
    /// The number of rows the statement touched.
    pub affected_rows: u64,
    /// The auto-increment id assigned by the database, if the insert
    /// generated one. MySQL reports zero when nothing was generated; the
    /// transport surfaces that as `None`.
    pub last_insert_id: Option<u64>,
}

/// Access to the database. Statements are parameterized with `?`
/// placeholders; values never end up in the statement text.
///
/// Connection management, pooling and timeouts belong to the implementor.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Runs a select, returning the matching rows as JSON objects keyed by
    /// database column names.
    async fn parameterized_query(&self, query: &str, params: Vec<Value>) -> crate::Result<Vec<Value>>;

    /// Runs a write statement.
    async fn parameterized_execute(&self, query: &str, params: Vec<Value>) -> crate::Result<ExecuteResult>;

    async fn query(&self, query: &str) -> crate::Result<Vec<Value>> {
        self.parameterized_query(query, Vec::new()).await
    }

    async fn execute(&self, query: &str) -> crate::Result<ExecuteResult> {
        self.parameterized_execute(query, Vec::new()).await
    }
}

#[async_trait]
impl Transport for Arc<dyn Transport> {
    async fn parameterized_query(&self, query: &str, params: Vec<Value>) -> crate::Result<Vec<Value>> {
        self.as_ref().parameterized_query(query, params).await
    }

    async fn parameterized_execute(&self, query: &str, params: Vec<Value>) -> crate::Result<ExecuteResult> {
        self.as_ref().parameterized_execute(query, params).await
    }
}

#[async_trait]
pub trait TransportExt: Transport {
    /// Runs a select and deserializes every row into `T`. A row that does
    /// not fit `T` fails the whole call.
    async fn collect_query<T>(&self, query: &str, params: Vec<Value>) -> crate::Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.parameterized_query(query, params)
            .await?
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(crate::Error::from))
            .collect()
    }
}

impl<T> TransportExt for T where T: Transport + ?Sized {}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde::Deserialize;
    use serde_json::{json, Value};

    use super::{ExecuteResult, Transport, TransportExt};

    struct CannedTransport(Vec<Value>);

    #[async_trait]
    impl Transport for CannedTransport {
        async fn parameterized_query(&self, _query: &str, _params: Vec<Value>) -> crate::Result<Vec<Value>> {
            Ok(self.0.clone())
        }

        async fn parameterized_execute(&self, _query: &str, _params: Vec<Value>) -> crate::Result<ExecuteResult> {
            Ok(ExecuteResult::default())
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
    }

    #[tokio::test]
    async fn collect_query_deserializes_every_row() {
        let transport = CannedTransport(vec![json!({ "name": "users" }), json!({ "name": "posts" })]);

        let rows: Vec<Row> = transport.collect_query("SELECT 1", Vec::new()).await.unwrap();

        assert_eq!(
            vec![Row { name: "users".to_string() }, Row { name: "posts".to_string() }],
            rows,
        );
    }

    #[tokio::test]
    async fn a_row_that_does_not_fit_fails_the_whole_call() {
        let transport = CannedTransport(vec![json!({ "name": "users" }), json!({ "name": 42 })]);

        let error = transport.collect_query::<Row>("SELECT 1", Vec::new()).await.unwrap_err();

        assert!(matches!(error, crate::Error::Row(_)));
    }
}
