#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.item_unavailable")]
    ItemUnavailable,
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl CartError {
    /// Maps a cart lookup failure, keeping "missing" distinct from storage errors.
    pub fn from_lookup(error: crate::domain::errors::RepositoryError) -> Self {
        match error {
            crate::domain::errors::RepositoryError::NotFound => CartError::NotFound,
            other => CartError::Repository(other),
        }
    }
}
