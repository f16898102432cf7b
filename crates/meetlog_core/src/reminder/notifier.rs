//! Reminder delivery seam.

use chrono::{DateTime, Local};
use log::info;

/// Sink for fired reminders.
///
/// Implementations must be cheap and non-blocking; they run on the
/// scheduler's worker thread. Delivery is best-effort: the meeting may have
/// been edited or deleted since the reminder was armed.
pub trait ReminderNotifier: Send + Sync {
    fn notify(&self, description: &str, start: DateTime<Local>);
}

/// Notifier that writes reminders to the log file.
///
/// Default sink for headless callers; the CLI installs a console notifier
/// instead.
pub struct LogNotifier;

impl ReminderNotifier for LogNotifier {
    fn notify(&self, description: &str, start: DateTime<Local>) {
        info!(
            "event=reminder_fired start={} description={description}",
            start.format("%Y-%m-%d %H:%M")
        );
    }
}
