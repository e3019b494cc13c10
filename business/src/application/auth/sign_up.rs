use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{Credentials, SignUpProfile};
use crate::domain::auth::provider::AuthProvider;
use crate::domain::auth::use_cases::sign_up::{SignUpParams, SignUpUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notification, Notifier};

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(email))
}

pub struct SignUpUseCaseImpl {
    pub provider: Arc<dyn AuthProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl SignUpUseCaseImpl {
    fn validate(params: &SignUpParams) -> Result<(), AuthError> {
        if !is_valid_email(params.email.trim()) {
            return Err(AuthError::InvalidEmail);
        }
        if params.password.is_empty() {
            return Err(AuthError::PasswordEmpty);
        }
        if params.password != params.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }
}

#[async_trait]
impl SignUpUseCase for SignUpUseCaseImpl {
    async fn execute(&self, params: SignUpParams) -> Result<(), AuthError> {
        if let Err(err) = Self::validate(&params) {
            let title = match err {
                AuthError::PasswordMismatch => "Password Error",
                _ => "Registration Failed",
            };
            self.notifier.notify(Notification::destructive(
                title,
                err.detail().unwrap_or("An error occurred during registration."),
            ));
            return Err(err);
        }

        let credentials = Credentials {
            email: params.email.trim().to_string(),
            password: params.password,
        };
        let profile = SignUpProfile {
            role: params.role,
            member_id: params
                .member_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
        };
        self.logger.info(&format!(
            "Registering {} as {}",
            credentials.email, profile.role
        ));

        match self.provider.sign_up(&credentials, &profile).await {
            Ok(()) => {
                self.notifier.notify(Notification::info(
                    "Registration Successful",
                    "Welcome to BUFC! Please check your email for verification.",
                ));
                Ok(())
            }
            Err(err) => {
                self.notifier.notify(Notification::destructive(
                    "Registration Failed",
                    err.detail().unwrap_or("An error occurred during registration."),
                ));
                self.logger
                    .warn(&format!("Registration failed for {}: {}", credentials.email, err));
                Err(err)
            }
        }
    }
}
