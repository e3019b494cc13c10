use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::Role;

pub struct SignUpParams {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub member_id: Option<String>,
}

#[async_trait]
pub trait SignUpUseCase: Send + Sync {
    async fn execute(&self, params: SignUpParams) -> Result<(), AuthError>;
}
