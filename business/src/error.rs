use thiserror::Error;

/// Failures while turning the bundled JSON documents into table inputs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse {document}: {source}")]
    Parse {
        document: &'static str,
        source: serde_json::Error,
    },
    #[error("Duplicate row id {id} in dataset")]
    DuplicateRowId { id: String },
}

impl LoadError {
    pub fn parse(document: &'static str, source: serde_json::Error) -> Self {
        Self::Parse { document, source }
    }
}
