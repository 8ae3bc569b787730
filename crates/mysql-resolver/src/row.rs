use mysql_connector_types::database_definition::TableWalker;
use serde_json::{Map, Value};

/// Re-keys a fetched row from database column names to client field names,
/// preserving column order. Keys the catalog does not know about are kept
/// as-is.
pub(crate) fn map_row(table: TableWalker<'_>, row: Value) -> Value {
    let Value::Object(mut row) = row else {
        return row;
    };

    let mut mapped = Map::new();

    for column in table.columns() {
        if let Some(value) = row.remove(column.database_name()) {
            mapped.insert(column.client_name().to_string(), value);
        }
    }

    for (key, value) in row {
        mapped.entry(key).or_insert(value);
    }

    Value::Object(mapped)
}

#[cfg(test)]
mod tests {
    use mysql_connector_types::{
        database_definition::{DatabaseDefinition, Table, TableColumn},
        scalar::ScalarType,
    };
    use serde_json::json;

    use super::map_row;

    #[test]
    fn maps_database_names_to_client_names() {
        let mut definition = DatabaseDefinition::new("test");
        let table_id = definition.push_table(Table::new("users".to_string()));

        definition.push_table_column(TableColumn::new(table_id, "id".to_string(), ScalarType::Int));
        definition.push_table_column(TableColumn::new(table_id, "created_at".to_string(), ScalarType::String));

        let table = definition.find_table("users").unwrap();
        let row = json!({ "id": 1, "created_at": "2024-01-15 10:30:00" });

        assert_eq!(
            json!({ "id": 1, "createdAt": "2024-01-15 10:30:00" }),
            map_row(table, row),
        );
    }

    #[test]
    fn unknown_keys_pass_through() {
        let mut definition = DatabaseDefinition::new("test");
        let table_id = definition.push_table(Table::new("users".to_string()));
        definition.push_table_column(TableColumn::new(table_id, "id".to_string(), ScalarType::Int));

        let table = definition.find_table("users").unwrap();
        let row = json!({ "id": 1, "extra": true });

        assert_eq!(json!({ "id": 1, "extra": true }), map_row(table, row));
    }

    #[test]
    fn non_object_rows_are_left_alone() {
        let definition = {
            let mut definition = DatabaseDefinition::new("test");
            definition.push_table(Table::new("users".to_string()));
            definition
        };

        let table = definition.find_table("users").unwrap();

        assert_eq!(json!(null), map_row(table, json!(null)));
    }
}
