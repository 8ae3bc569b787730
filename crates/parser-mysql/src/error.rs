/// A failure during schema discovery. Discovery is all-or-nothing: any error
/// aborts the generation pass and no partial registry is returned.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("failed to read metadata for schema {schema}: {source}")]
    Metadata {
        schema: String,
        #[source]
        source: mysql_connector_types::Error,
    },
    #[error("table {table} has a composite primary key, which is not supported")]
    CompositeKey { table: String },
}
