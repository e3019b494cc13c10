use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;

/// Discards carts nobody has touched for `idle_ttl`. Anonymous carts have no
/// sign-out to end them, so this is what bounds the store.
pub struct IdleCartSweeper {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
    pub idle_ttl: Duration,
}

impl IdleCartSweeper {
    /// `every` must be non-zero.
    pub fn spawn(self, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.sweep().await;
            }
        })
    }

    /// Runs one pass and returns how many carts were dropped.
    pub async fn sweep(&self) -> u64 {
        let Some(cutoff) = TimeDelta::from_std(self.idle_ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_sub_signed(ttl))
        else {
            self.logger
                .warn(&format!("Idle cart TTL {:?} out of range, skipping sweep", self.idle_ttl));
            return 0;
        };

        match self.repository.delete_idle(cutoff).await {
            Ok(0) => 0,
            Ok(count) => {
                self.logger
                    .info(&format!("Swept {} carts idle since {}", count, cutoff));
                count
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to sweep idle carts: {}", err));
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockCartRepo, mock_logger};

    #[tokio::test]
    async fn should_cut_off_at_now_minus_ttl() {
        let before = Utc::now();
        let mut repo = MockCartRepo::new();
        repo.expect_delete_idle()
            .withf(move |cutoff| {
                let expected = before - TimeDelta::minutes(30);
                *cutoff >= expected && *cutoff <= Utc::now() - TimeDelta::minutes(30)
            })
            .times(1)
            .returning(|_| Ok(3));

        let sweeper = IdleCartSweeper {
            repository: Arc::new(repo),
            logger: mock_logger(),
            idle_ttl: Duration::from_secs(30 * 60),
        };

        assert_eq!(sweeper.sweep().await, 3);
    }

    #[tokio::test]
    async fn should_report_nothing_swept_on_repository_failure() {
        let mut repo = MockCartRepo::new();
        repo.expect_delete_idle()
            .times(1)
            .returning(|_| Err(RepositoryError::Storage));

        let sweeper = IdleCartSweeper {
            repository: Arc::new(repo),
            logger: mock_logger(),
            idle_ttl: Duration::from_secs(60),
        };

        assert_eq!(sweeper.sweep().await, 0);
    }

    #[tokio::test]
    async fn should_skip_sweep_when_ttl_is_out_of_range() {
        let mut repo = MockCartRepo::new();
        repo.expect_delete_idle().never();

        let sweeper = IdleCartSweeper {
            repository: Arc::new(repo),
            logger: mock_logger(),
            idle_ttl: Duration::MAX,
        };

        assert_eq!(sweeper.sweep().await, 0);
    }

    #[tokio::test]
    async fn should_sweep_repeatedly_while_running() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut repo = MockCartRepo::new();
        repo.expect_delete_idle().returning(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        });

        let sweeper = IdleCartSweeper {
            repository: Arc::new(repo),
            logger: mock_logger(),
            idle_ttl: Duration::from_secs(60),
        };

        let handle = sweeper.spawn(Duration::from_millis(20));
        time::sleep(Duration::from_millis(150)).await;
        handle.abort();

        assert!(calls.load(Ordering::SeqCst) >= 2);
    }
}
