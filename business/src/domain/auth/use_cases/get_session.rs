use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::Session;

pub struct GetSessionParams {
    pub access_token: String,
}

#[async_trait]
pub trait GetSessionUseCase: Send + Sync {
    async fn execute(&self, params: GetSessionParams) -> Result<Option<Session>, AuthError>;
}
