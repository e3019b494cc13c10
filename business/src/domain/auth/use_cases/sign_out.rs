use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::Session;

pub struct SignOutParams {
    pub session: Session,
}

#[async_trait]
pub trait SignOutUseCase: Send + Sync {
    async fn execute(&self, params: SignOutParams) -> Result<(), AuthError>;
}
