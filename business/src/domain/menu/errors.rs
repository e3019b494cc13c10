#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("menu.outlet_not_found")]
    OutletNotFound,
    #[error("menu.outlet_coming_soon")]
    OutletComingSoon,
    #[error("repository.storage")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
