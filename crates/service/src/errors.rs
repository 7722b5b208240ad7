use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Client-facing message without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound(m) | Self::Conflict(m) | Self::Db(m) => m.clone(),
            Self::Model(e) => e.to_string(),
        }
    }
}
