#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
