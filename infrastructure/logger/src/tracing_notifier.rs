use business::domain::notifier::{Notification, NotificationVariant, Notifier};
use tracing::{info, warn};

const TARGET: &str = "campus_eats::notice";

/// Emits user-facing notices as structured log events.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => info!(
                target: TARGET,
                title = %notification.title,
                variant = %notification.variant,
                "{}",
                notification.description
            ),
            NotificationVariant::Destructive => warn!(
                target: TARGET,
                title = %notification.title,
                variant = %notification.variant,
                "{}",
                notification.description
            ),
        }
    }
}
