use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog has {records} records but the embedding matrix has {rows} rows")]
    RowCountMismatch { records: usize, rows: usize },

    #[error("record at row {row} is missing required field `{field}`")]
    MissingField { row: usize, field: &'static str },

    #[error("embedding row {row} contains a NaN or infinite value")]
    NonFiniteEmbedding { row: usize },

    #[error("no such {entity}: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` for errors that prevent a catalog from being built.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::RowCountMismatch { .. }
                | Self::MissingField { .. }
                | Self::NonFiniteEmbedding { .. }
        )
    }

    /// Returns `true` when the error indicates the entity was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
