pub(super) mod collection;
pub(super) mod find_one;
pub(super) mod search;
