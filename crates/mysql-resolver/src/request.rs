pub(crate) mod create_one;
pub(crate) mod delete_one;
pub(crate) mod find_all;
pub(crate) mod find_one;
pub(crate) mod search;
pub(crate) mod update_one;

mod log;
mod query;
