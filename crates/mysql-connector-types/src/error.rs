#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error connecting to the database: {0}")]
    Connection(String),
    #[error("error executing a statement: {0}")]
    Query(String),
    #[error("error deserializing a row: {0}")]
    Row(String),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Row(error.to_string())
    }
}
