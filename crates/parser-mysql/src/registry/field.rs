use indexmap::IndexMap;

/// An output field of an object, query or mutation type. The type is stored
/// in its rendered form (`[User!]!`); wrapping decisions are made where the
/// field is constructed.
#[derive(Debug, Clone)]
pub struct MetaField {
    pub(crate) name: String,
    pub(crate) r#type: String,
    pub(crate) args: IndexMap<String, MetaInputValue>,
}

impl MetaField {
    pub fn new(name: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
            args: IndexMap::new(),
        }
    }

    pub(crate) fn push_arg(&mut self, arg: MetaInputValue) {
        self.args.insert(arg.name.clone(), arg);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn r#type(&self) -> &str {
        &self.r#type
    }

    pub fn args(&self) -> impl ExactSizeIterator<Item = &MetaInputValue> {
        self.args.values()
    }
}

/// An argument of a field.
#[derive(Debug, Clone)]
pub struct MetaInputValue {
    pub(crate) name: String,
    pub(crate) r#type: String,
}

impl MetaInputValue {
    pub fn new(name: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn r#type(&self) -> &str {
        &self.r#type
    }
}

/// A GraphQL object type with its fields in column order.
#[derive(Debug, Clone)]
pub struct ObjectType {
    pub(crate) name: String,
    pub(crate) fields: Vec<MetaField>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = MetaField>) -> Self {
        Self {
            name: name.into(),
            fields: fields.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &MetaField> {
        self.fields.iter()
    }
}
