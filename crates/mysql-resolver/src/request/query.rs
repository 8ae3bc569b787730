//! Parameterized statement builders. Identifiers come from introspected
//! metadata and are backtick-quoted; values always travel as `?`
//! parameters, never as statement text.

use mysql_connector_types::database_definition::{TableColumnWalker, TableWalker};

pub(super) fn select_all(table: TableWalker<'_>) -> String {
    format!("SELECT * FROM `{}`", table.database_name())
}

pub(super) fn select_by_column(table: TableWalker<'_>, column: TableColumnWalker<'_>) -> String {
    format!(
        "SELECT * FROM `{}` WHERE `{}` = ?",
        table.database_name(),
        column.database_name()
    )
}

pub(super) fn select_like(table: TableWalker<'_>, column: TableColumnWalker<'_>) -> String {
    format!(
        "SELECT * FROM `{}` WHERE `{}` LIKE ?",
        table.database_name(),
        column.database_name()
    )
}

pub(super) fn insert(table: TableWalker<'_>, columns: &[&str]) -> String {
    let names = columns.iter().map(|name| format!("`{name}`")).collect::<Vec<_>>().join(", ");
    let placeholders = vec!["?"; columns.len()].join(", ");

    format!("INSERT INTO `{}` ({names}) VALUES ({placeholders})", table.database_name())
}

pub(super) fn update(table: TableWalker<'_>, assignments: &[&str], key: TableColumnWalker<'_>) -> String {
    let assignments = assignments
        .iter()
        .map(|name| format!("`{name}` = ?"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE `{}` SET {assignments} WHERE `{}` = ?",
        table.database_name(),
        key.database_name()
    )
}

pub(super) fn delete(table: TableWalker<'_>, key: TableColumnWalker<'_>) -> String {
    format!(
        "DELETE FROM `{}` WHERE `{}` = ?",
        table.database_name(),
        key.database_name()
    )
}
