#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId(pub(crate) u32);

impl From<u32> for TableId {
    fn from(value: u32) -> Self {
        TableId(value)
    }
}

impl From<TableId> for u32 {
    fn from(value: TableId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableColumnId(pub(crate) u32);

impl From<u32> for TableColumnId {
    fn from(value: u32) -> Self {
        TableColumnId(value)
    }
}

impl From<TableColumnId> for u32 {
    fn from(value: TableColumnId) -> Self {
        value.0
    }
}
