use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::domain::auth::model::SessionEvent;
use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;

/// Ends cart lifetimes when their owner's session ends.
pub struct SessionWatcher {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl SessionWatcher {
    pub fn spawn(self, events: broadcast::Receiver<SessionEvent>) -> JoinHandle<()> {
        tokio::spawn(self.run(events))
    }

    /// Consumes events until the provider drops its sender.
    pub async fn run(self, mut events: broadcast::Receiver<SessionEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.handle(event).await,
                Err(RecvError::Lagged(skipped)) => {
                    self.logger
                        .warn(&format!("Session watcher lagged, skipped {} events", skipped));
                }
                Err(RecvError::Closed) => {
                    self.logger.debug("Session event stream closed");
                    break;
                }
            }
        }
    }

    async fn handle(&self, event: SessionEvent) {
        match event {
            SessionEvent::SignedIn(identity) => {
                self.logger
                    .debug(&format!("Session started for {}", identity.user_id));
            }
            SessionEvent::SignedOut(user_id) => match self.repository.delete_by_owner(&user_id).await {
                Ok(count) => self.logger.info(&format!(
                    "Discarded {} carts after {} signed out",
                    count, user_id
                )),
                Err(err) => self.logger.error(&format!(
                    "Failed to discard carts for {}: {}",
                    user_id, err
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::Identity;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockCartRepo, mock_logger, test_user_id};

    #[tokio::test]
    async fn should_discard_carts_when_owner_signs_out() {
        let mut repo = MockCartRepo::new();
        repo.expect_delete_by_owner()
            .withf(|owner| owner == &test_user_id())
            .times(1)
            .returning(|_| Ok(2));

        let (sender, receiver) = broadcast::channel(8);
        let watcher = SessionWatcher {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        sender
            .send(SessionEvent::SignedOut(test_user_id()))
            .unwrap();
        drop(sender);

        watcher.run(receiver).await;
    }

    #[tokio::test]
    async fn should_leave_carts_alone_on_sign_in() {
        let mut repo = MockCartRepo::new();
        repo.expect_delete_by_owner().never();

        let (sender, receiver) = broadcast::channel(8);
        let watcher = SessionWatcher {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        sender
            .send(SessionEvent::SignedIn(Identity::new(test_user_id())))
            .unwrap();
        drop(sender);

        watcher.run(receiver).await;
    }

    #[tokio::test]
    async fn should_keep_running_after_repository_failure() {
        let mut repo = MockCartRepo::new();
        repo.expect_delete_by_owner()
            .times(2)
            .returning(|_| Err(RepositoryError::Storage));

        let (sender, receiver) = broadcast::channel(8);
        let watcher = SessionWatcher {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        sender.send(SessionEvent::SignedOut(test_user_id())).unwrap();
        sender.send(SessionEvent::SignedOut(test_user_id())).unwrap();
        drop(sender);

        watcher.spawn(receiver).await.unwrap();
    }
}
