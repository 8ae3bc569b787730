use inflector::Inflector;

use crate::naming;

#[derive(Debug, Clone)]
pub struct Table {
    database_name: String,
    client_name: String,
    client_field_name: String,
    client_field_name_singular: String,
}

impl Table {
    pub fn new(database_name: String) -> Self {
        let singular = naming::to_singular(&database_name);
        let client_name = naming::to_type_name(singular);
        let client_field_name = database_name.to_camel_case();
        let client_field_name_singular = singular.to_camel_case();

        Self {
            database_name,
            client_name,
            client_field_name,
            client_field_name_singular,
        }
    }

    /// The name of the table in the database.
    pub(crate) fn database_name(&self) -> &str {
        &self.database_name
    }

    /// The name of the corresponding object type in the GraphQL API.
    pub(crate) fn client_name(&self) -> &str {
        &self.client_name
    }

    /// The name of the collection query field in the GraphQL API.
    pub(crate) fn client_field_name(&self) -> &str {
        &self.client_field_name
    }

    /// The name of the single-row query field in the GraphQL API.
    pub(crate) fn client_field_name_singular(&self) -> &str {
        &self.client_field_name_singular
    }
}
