use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use mysql_connector_types::transport::{ExecuteResult, Transport};
use mysql_resolver::ResolverError;
use serde_json::{json, Map, Value};

enum Response {
    Rows(Vec<Value>),
    Execute(ExecuteResult),
}

#[derive(Default)]
struct Inner {
    responses: Mutex<VecDeque<Response>>,
    statements: Mutex<Vec<(String, Vec<Value>)>>,
}

/// Replays queued responses and records every statement it was asked to
/// run. Clones share state, so a copy can be handed to the generated
/// schema while the test keeps queuing responses.
#[derive(Clone, Default)]
struct MockTransport {
    inner: Arc<Inner>,
}

impl MockTransport {
    fn push_rows(&self, rows: Vec<Value>) {
        self.inner.lock_responses().push_back(Response::Rows(rows));
    }

    fn push_execute(&self, affected_rows: u64, last_insert_id: Option<u64>) {
        self.inner.lock_responses().push_back(Response::Execute(ExecuteResult {
            affected_rows,
            last_insert_id,
        }));
    }

    fn statements(&self) -> Vec<(String, Vec<Value>)> {
        self.inner.statements.lock().unwrap().clone()
    }

    fn statement_count(&self) -> usize {
        self.inner.statements.lock().unwrap().len()
    }
}

impl Inner {
    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Response>> {
        self.responses.lock().unwrap()
    }

    fn pop(&self, query: &str, params: &[Value]) -> mysql_connector_types::Result<Response> {
        self.statements
            .lock()
            .unwrap()
            .push((query.to_string(), params.to_vec()));

        self.lock_responses()
            .pop_front()
            .ok_or_else(|| mysql_connector_types::Error::Query(format!("unexpected statement: {query}")))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn parameterized_query(
        &self,
        query: &str,
        params: Vec<Value>,
    ) -> mysql_connector_types::Result<Vec<Value>> {
        match self.inner.pop(query, &params)? {
            Response::Rows(rows) => Ok(rows),
            Response::Execute(_) => Err(mysql_connector_types::Error::Query(
                "expected a select, got a write".to_string(),
            )),
        }
    }

    async fn parameterized_execute(
        &self,
        query: &str,
        params: Vec<Value>,
    ) -> mysql_connector_types::Result<ExecuteResult> {
        match self.inner.pop(query, &params)? {
            Response::Execute(result) => Ok(result),
            Response::Rows(_) => Err(mysql_connector_types::Error::Query(
                "expected a write, got a select".to_string(),
            )),
        }
    }
}

fn column(name: &str, data_type: &str, nullable: bool, key: &str, extra: &str) -> Value {
    json!({
        "name": name,
        "data_type": data_type,
        "is_nullable": if nullable { "YES" } else { "NO" },
        "column_key": key,
        "extra": extra,
    })
}

/// Queues the introspection responses for a `users` table with an
/// auto-increment key and a temporal column.
fn users_transport() -> MockTransport {
    let transport = MockTransport::default();

    transport.push_rows(vec![json!({ "name": "users" })]);
    transport.push_rows(vec![
        column("id", "int", false, "PRI", "auto_increment"),
        column("name", "varchar", false, "", ""),
        column("email", "varchar", false, "", ""),
        column("created_at", "timestamp", true, "", ""),
    ]);

    transport
}

async fn users_schema(transport: &MockTransport) -> mysql_resolver::GeneratedSchema<MockTransport> {
    mysql_resolver::generate_schema(transport.clone(), "test")
        .await
        .expect("discovery")
}

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("arguments are always an object"),
    }
}

#[tokio::test]
async fn fetch_all_maps_rows_to_client_names() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    transport.push_rows(vec![
        json!({ "id": 1, "name": "A", "email": "a@x.com", "created_at": "2024-01-15 10:30:00" }),
    ]);

    let result = schema.execute("users", &Map::new()).await.unwrap();

    assert_eq!(
        json!([{ "id": 1, "name": "A", "email": "a@x.com", "createdAt": "2024-01-15 10:30:00" }]),
        result,
    );

    let statements = transport.statements();
    let (sql, params) = statements.last().unwrap();
    assert_eq!("SELECT * FROM `users`", sql);
    assert!(params.is_empty());
}

#[tokio::test]
async fn create_then_fetch_one_round_trip() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    // insert, then the re-fetch by the store-assigned id
    transport.push_execute(1, Some(7));
    transport.push_rows(vec![
        json!({ "id": 7, "name": "A", "email": "a@x.com", "created_at": null }),
    ]);

    let created = schema
        .execute("createUser", &args(json!({ "name": "A", "email": "a@x.com" })))
        .await
        .unwrap();

    assert_eq!(json!({ "id": 7, "name": "A", "email": "a@x.com", "createdAt": null }), created);

    let statements = transport.statements();
    let (insert_sql, insert_params) = &statements[statements.len() - 2];
    assert_eq!("INSERT INTO `users` (`name`, `email`) VALUES (?, ?)", insert_sql);
    assert_eq!(&vec![json!("A"), json!("a@x.com")], insert_params);

    let (select_sql, select_params) = &statements[statements.len() - 1];
    assert_eq!("SELECT * FROM `users` WHERE `id` = ?", select_sql);
    assert_eq!(&vec![json!(7)], select_params);

    // fetching by the returned key yields the same row
    transport.push_rows(vec![
        json!({ "id": 7, "name": "A", "email": "a@x.com", "created_at": null }),
    ]);

    let fetched = schema.execute("user", &args(json!({ "id": 7 }))).await.unwrap();
    assert_eq!(created, fetched);
}

// The primary key is not auto-increment, so the store assigns no id and
// the re-fetch falls back to the caller-supplied key value.
#[tokio::test]
async fn create_without_generated_id_refetches_by_the_supplied_key() {
    let transport = MockTransport::default();
    transport.push_rows(vec![json!({ "name": "widgets" })]);
    transport.push_rows(vec![
        column("a", "int", false, "PRI", ""),
        column("b", "varchar", true, "", ""),
    ]);

    let schema = mysql_resolver::generate_schema(transport.clone(), "test")
        .await
        .expect("discovery");

    transport.push_execute(1, None);
    transport.push_rows(vec![json!({ "a": 5, "b": "x" })]);

    let created = schema
        .execute("createWidget", &args(json!({ "a": 5, "b": "x" })))
        .await
        .unwrap();

    assert_eq!(json!({ "a": 5, "b": "x" }), created);

    let statements = transport.statements();
    let (insert_sql, insert_params) = &statements[statements.len() - 2];
    assert_eq!("INSERT INTO `widgets` (`a`, `b`) VALUES (?, ?)", insert_sql);
    assert_eq!(&vec![json!(5), json!("x")], insert_params);

    let (select_sql, select_params) = &statements[statements.len() - 1];
    assert_eq!("SELECT * FROM `widgets` WHERE `a` = ?", select_sql);
    assert_eq!(&vec![json!(5)], select_params);
}

// Without a primary key there is nothing to re-fetch by; create inserts
// and echoes the input back.
#[tokio::test]
async fn create_on_a_table_without_primary_key_echoes_the_input() {
    let transport = MockTransport::default();
    transport.push_rows(vec![json!({ "name": "logs" })]);
    transport.push_rows(vec![
        column("message", "text", false, "", ""),
        column("level", "int", true, "", ""),
    ]);

    let schema = mysql_resolver::generate_schema(transport.clone(), "test")
        .await
        .expect("discovery");

    transport.push_execute(1, None);

    let created = schema
        .execute("createLog", &args(json!({ "message": "hi" })))
        .await
        .unwrap();

    assert_eq!(json!({ "message": "hi" }), created);

    let statements = transport.statements();
    let (sql, params) = statements.last().unwrap();
    assert_eq!("INSERT INTO `logs` (`message`) VALUES (?)", sql);
    assert_eq!(&vec![json!("hi")], params);
}

#[tokio::test]
async fn fetch_one_missing_row_is_null() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    transport.push_rows(Vec::new());

    let result = schema.execute("user", &args(json!({ "id": 42 }))).await.unwrap();
    assert_eq!(Value::Null, result);
}

#[tokio::test]
async fn search_passes_the_pattern_verbatim() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    transport.push_rows(vec![json!({ "id": 1, "name": "Alice", "email": "a@x.com", "created_at": null })]);

    let result = schema
        .execute("usersByName", &args(json!({ "namePattern": "%Ali%" })))
        .await
        .unwrap();

    assert_eq!(1, result.as_array().unwrap().len());

    let statements = transport.statements();
    let (sql, params) = statements.last().unwrap();
    assert_eq!("SELECT * FROM `users` WHERE `name` LIKE ?", sql);
    assert_eq!(&vec![json!("%Ali%")], params);
}

#[tokio::test]
async fn update_assigns_only_supplied_fields() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    transport.push_execute(1, None);
    transport.push_rows(vec![
        json!({ "id": 1, "name": "B", "email": "a@x.com", "created_at": null }),
    ]);

    let result = schema
        .execute("updateUser", &args(json!({ "id": 1, "name": "B" })))
        .await
        .unwrap();

    assert_eq!(json!({ "id": 1, "name": "B", "email": "a@x.com", "createdAt": null }), result);

    let statements = transport.statements();
    let (sql, params) = &statements[statements.len() - 2];
    assert_eq!("UPDATE `users` SET `name` = ? WHERE `id` = ?", sql);
    assert_eq!(&vec![json!("B"), json!(1)], params);
}

#[tokio::test]
async fn update_with_no_fields_fails_validation_without_touching_the_store() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    let before = transport.statement_count();

    let error = schema
        .execute("updateUser", &args(json!({ "id": 1 })))
        .await
        .unwrap_err();

    assert!(matches!(&error, ResolverError::Validation(message) if message == "no fields to update"));
    assert_eq!(before, transport.statement_count());
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    transport.push_execute(1, None);
    let deleted = schema.execute("deleteUser", &args(json!({ "id": 1 }))).await.unwrap();
    assert_eq!(Value::Bool(true), deleted);

    let statements = transport.statements();
    let (sql, params) = statements.last().unwrap();
    assert_eq!("DELETE FROM `users` WHERE `id` = ?", sql);
    assert_eq!(&vec![json!(1)], params);

    // deleting a key that does not exist is not an error
    transport.push_execute(0, None);
    let deleted = schema.execute("deleteUser", &args(json!({ "id": 1 }))).await.unwrap();
    assert_eq!(Value::Bool(false), deleted);
}

#[tokio::test]
async fn operation_failures_carry_a_stable_summary() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    // nothing queued: the select fails
    let error = schema.execute("users", &Map::new()).await.unwrap_err();

    assert!(matches!(&error, ResolverError::Operation(summary) if summary == "Failed to fetch users"));

    // the next call is unaffected
    transport.push_rows(Vec::new());
    let result = schema.execute("users", &Map::new()).await.unwrap();
    assert_eq!(json!([]), result);
}

#[tokio::test]
async fn unknown_operations_are_rejected() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    let error = schema.execute("nope", &Map::new()).await.unwrap_err();
    assert!(matches!(error, ResolverError::UnknownOperation(name) if name == "nope"));
}

#[tokio::test]
async fn derived_fields_normalize_temporal_text() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    let row = args(json!({ "id": 1, "createdAt": "2024-01-15 10:30:00" }));

    assert_eq!(
        Some(json!("2024-01-15T10:30:00+00:00")),
        schema.resolve_field("User", "createdAt", &row),
    );

    let row = args(json!({ "id": 1, "createdAt": null }));
    assert_eq!(Some(Value::Null), schema.resolve_field("User", "createdAt", &row));

    // fields without a derivation resolve to nothing
    assert_eq!(None, schema.resolve_field("User", "name", &row));
}

#[tokio::test]
async fn operation_names_follow_contract_order() {
    let transport = users_transport();
    let schema = users_schema(&transport).await;

    let names: Vec<_> = schema.operation_names().collect();

    assert_eq!(
        vec![
            "users",
            "user",
            "usersByName",
            "usersByEmail",
            "usersByCreatedAt",
            "createUser",
            "updateUser",
            "deleteUser",
        ],
        names,
    );
}
