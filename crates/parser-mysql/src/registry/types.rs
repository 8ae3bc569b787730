pub(super) mod table;
