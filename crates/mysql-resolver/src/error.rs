use mysql_connector_types::Error as TransportError;

/// A failure of one generated operation. Isolated to the call that hit it;
/// never retried.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// A data-access failure. Carries a stable summary naming the affected
    /// table or operation; the underlying cause goes to the server-side log
    /// only.
    #[error("{0}")]
    Operation(String),
    /// The caller-supplied arguments were insufficient. The store is never
    /// touched.
    #[error("{0}")]
    Validation(String),
    #[error("unknown operation {0}")]
    UnknownOperation(String),
}

impl ResolverError {
    pub(crate) fn operation(summary: impl Into<String>, source: &TransportError) -> Self {
        let summary = summary.into();
        tracing::error!(error = %source, "{summary}");

        Self::Operation(summary)
    }

    pub(crate) fn missing_argument(name: &str) -> Self {
        Self::Validation(format!("missing argument {name}"))
    }
}
