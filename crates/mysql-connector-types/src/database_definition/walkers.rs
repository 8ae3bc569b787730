mod table;
mod table_column;

pub use table::TableWalker;
pub use table_column::TableColumnWalker;

use super::DatabaseDefinition;

/// An accessor to the database definition, guaranteeing the existence of
/// the item behind the given id.
#[derive(Clone, Copy)]
pub struct Walker<'a, Id> {
    pub(super) id: Id,
    pub(super) database_definition: &'a DatabaseDefinition,
}

impl<'a, Id> Walker<'a, Id>
where
    Id: Copy,
{
    pub fn id(self) -> Id {
        self.id
    }

    fn walk<T>(self, id: T) -> Walker<'a, T> {
        self.database_definition.walk(id)
    }
}
