use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::provider::AuthProvider;
use crate::domain::auth::use_cases::sign_out::{SignOutParams, SignOutUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notification, Notifier};

pub struct SignOutUseCaseImpl {
    pub provider: Arc<dyn AuthProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignOutUseCase for SignOutUseCaseImpl {
    async fn execute(&self, params: SignOutParams) -> Result<(), AuthError> {
        let user_id = params.session.identity.user_id.clone();
        self.logger.info(&format!("Signing out: {}", user_id));

        match self.provider.sign_out(&params.session).await {
            Ok(()) => {
                self.notifier.notify(Notification::info(
                    "Logged Out",
                    "You have been successfully logged out.",
                ));
                Ok(())
            }
            Err(err) => {
                self.notifier.notify(Notification::destructive(
                    "Error",
                    err.detail().unwrap_or("An error occurred during sign out."),
                ));
                self.logger
                    .error(&format!("Sign-out failed for {}: {}", user_id, err));
                Err(err)
            }
        }
    }
}
