mod context;
mod field;
mod mutations;
mod operations;
mod queries;
mod render;
mod rules;
mod types;

pub use field::{MetaField, MetaInputValue, ObjectType};
pub use operations::{DerivedField, Operation, OperationRecord};
pub use rules::DerivedFieldRules;

use mysql_connector_types::database_definition::{DatabaseDefinition, TableColumnWalker};

use self::context::OutputContext;

/// The generated GraphQL contract for one introspected schema: the type
/// definitions as structured data, plus one tagged operation record per
/// generated field. Derived fresh on every generation pass.
#[derive(Debug)]
pub struct Registry {
    database_definition: DatabaseDefinition,
    object_types: Vec<ObjectType>,
    query_fields: Vec<MetaField>,
    mutation_fields: Vec<MetaField>,
    operations: Vec<OperationRecord>,
    field_resolvers: Vec<DerivedField>,
}

impl Registry {
    pub fn database_definition(&self) -> &DatabaseDefinition {
        &self.database_definition
    }

    /// The object types, one per table, in catalog order.
    pub fn object_types(&self) -> &[ObjectType] {
        &self.object_types
    }

    /// The query fields, in contract order.
    pub fn query_fields(&self) -> &[MetaField] {
        &self.query_fields
    }

    /// The mutation fields, in contract order.
    pub fn mutation_fields(&self) -> &[MetaField] {
        &self.mutation_fields
    }

    /// The operation records, in contract order: per table the query fields
    /// (collection, single-row, pattern searches in column order), then the
    /// mutation fields (create, update, delete).
    pub fn operations(&self) -> &[OperationRecord] {
        &self.operations
    }

    /// Field-level derivations: temporal text columns whose values are
    /// normalized before being returned to the client.
    pub fn field_resolvers(&self) -> &[DerivedField] {
        &self.field_resolvers
    }

    /// Renders the contract as GraphQL SDL. The output is deterministic for
    /// a given catalog, so it can be golden-tested.
    pub fn to_sdl(&self) -> String {
        render::to_sdl(self)
    }
}

pub(crate) fn generate(database_definition: DatabaseDefinition, rules: &DerivedFieldRules) -> Registry {
    let mut output_ctx = OutputContext::default();

    for table in database_definition.tables() {
        types::table::generate(table, rules, &mut output_ctx);

        queries::collection::register(table, &mut output_ctx);
        queries::find_one::register(table, &mut output_ctx);
        queries::search::register(table, &mut output_ctx);

        mutations::create::register(table, &mut output_ctx);
        mutations::update::register(table, &mut output_ctx);
        mutations::delete::register(table, &mut output_ctx);
    }

    output_ctx.into_registry(database_definition)
}

/// The client-side base type of a column. Primary keys surface as `ID` in
/// the contract regardless of their storage scalar.
pub(crate) fn client_base_type(column: TableColumnWalker<'_>) -> &'static str {
    use mysql_connector_types::scalar::ScalarType;

    if column.is_primary_key() {
        return "ID";
    }

    match column.scalar_type() {
        ScalarType::Int => "Int",
        ScalarType::Float => "Float",
        ScalarType::String => "String",
        ScalarType::Boolean => "Boolean",
    }
}
