use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{Credentials, Session};
use crate::domain::auth::provider::AuthProvider;
use crate::domain::auth::use_cases::sign_in::{SignInParams, SignInUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notification, Notifier};

pub struct SignInUseCaseImpl {
    pub provider: Arc<dyn AuthProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignInUseCase for SignInUseCaseImpl {
    async fn execute(&self, params: SignInParams) -> Result<Session, AuthError> {
        let credentials = Credentials {
            email: params.email.trim().to_string(),
            password: params.password,
        };
        self.logger
            .info(&format!("Signing in: {}", credentials.email));

        match self.provider.sign_in(&credentials).await {
            Ok(session) => {
                self.notifier.notify(Notification::info(
                    "Login Successful",
                    "Welcome back to BUFC!",
                ));
                self.logger
                    .info(&format!("Signed in: {}", session.identity.user_id));
                Ok(session)
            }
            Err(err) => {
                self.notifier.notify(Notification::destructive(
                    "Login Failed",
                    err.detail().unwrap_or("An error occurred during login."),
                ));
                self.logger
                    .warn(&format!("Sign-in failed for {}: {}", credentials.email, err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::{Identity, Role};
    use crate::test_support::{MockProvider, expect_notice, mock_logger, test_user_id};

    fn session() -> Session {
        Session {
            access_token: "access".to_string(),
            refresh_token: Some("refresh".to_string()),
            expires_at: None,
            identity: Identity::new(test_user_id()).with_role(Role::Student),
        }
    }

    #[tokio::test]
    async fn should_return_session_on_valid_credentials() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_in()
            .withf(|c| c.email == "student@campus.edu")
            .returning(|_| Ok(session()));

        let use_case = SignInUseCaseImpl {
            provider: Arc::new(provider),
            notifier: expect_notice("Login Successful"),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SignInParams {
                email: "  student@campus.edu ".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().identity.role, Some(Role::Student));
    }

    #[tokio::test]
    async fn should_notify_and_return_error_on_invalid_credentials() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_in()
            .returning(|_| Err(AuthError::InvalidCredentials));

        let use_case = SignInUseCaseImpl {
            provider: Arc::new(provider),
            notifier: expect_notice("Login Failed"),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SignInParams {
                email: "student@campus.edu".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }
}
