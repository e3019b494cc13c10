use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::Session;
use crate::domain::auth::provider::AuthProvider;
use crate::domain::auth::use_cases::get_session::{GetSessionParams, GetSessionUseCase};
use crate::domain::logger::Logger;

pub struct GetSessionUseCaseImpl {
    pub provider: Arc<dyn AuthProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSessionUseCase for GetSessionUseCaseImpl {
    async fn execute(&self, params: GetSessionParams) -> Result<Option<Session>, AuthError> {
        let session = self.provider.get_session(&params.access_token).await?;
        match &session {
            Some(s) => self
                .logger
                .debug(&format!("Session resolved for {}", s.identity.user_id)),
            None => self.logger.debug("Session token no longer valid"),
        }
        Ok(session)
    }
}
