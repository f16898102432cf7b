//! One-shot reminder timers over a private tokio runtime.
//!
//! # Responsibility
//! - Compute each meeting's notification moment and sleep until it.
//! - Track pending timers by meeting ID so mutations can cancel them.
//!
//! # Invariants
//! - A reminder fires at most once; a cancelled reminder never fires.
//! - Dropping the scheduler (process exit) drops all pending timers.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use chrono::Local;
use log::debug;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::model::meeting::{Meeting, MeetingId};
use crate::reminder::notifier::ReminderNotifier;

/// Fire-and-forget reminder timers, cancellable by meeting ID.
///
/// The registry calls in from the interactive thread; timers run on a single
/// dedicated worker thread owned by the scheduler's runtime.
pub struct ReminderScheduler {
    runtime: Runtime,
    pending: Arc<Mutex<HashMap<MeetingId, JoinHandle<()>>>>,
    notifier: Arc<dyn ReminderNotifier>,
}

impl ReminderScheduler {
    /// Builds a scheduler delivering reminders through `notifier`.
    pub fn new(notifier: Arc<dyn ReminderNotifier>) -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("meetlog-reminder")
            .enable_time()
            .build()?;

        Ok(Self {
            runtime,
            pending: Arc::new(Mutex::new(HashMap::new())),
            notifier,
        })
    }

    /// Arms a one-shot timer for the meeting's reminder.
    ///
    /// Returns whether a timer was armed. Skipped silently when the meeting
    /// has no reminder offset or its notification moment already passed.
    ///
    /// The description and start time are captured by value: delivery is
    /// unaffected by later edits or deletion unless the timer is cancelled
    /// first.
    pub fn schedule(&self, meeting: &Meeting) -> bool {
        let Some(notify_at) = meeting.notify_at() else {
            return false;
        };
        let Ok(delay) = (notify_at - Local::now()).to_std() else {
            debug!(
                "event=reminder_skipped id={} reason=notify_moment_passed",
                meeting.id
            );
            return false;
        };

        let id = meeting.id;
        let description = meeting.description.clone();
        let start = meeting.start;
        let notifier = Arc::clone(&self.notifier);
        let pending = Arc::clone(&self.pending);

        // Hold the map lock across spawn so the timer cannot observe the map
        // before its own handle is inserted.
        let mut pending_guard = self.pending.blocking_lock();
        let handle = self.runtime.spawn(async move {
            sleep(delay).await;
            notifier.notify(&description, start);
            pending.lock().await.remove(&id);
        });
        pending_guard.insert(id, handle);

        debug!("event=reminder_armed id={id} delay_secs={}", delay.as_secs());
        true
    }

    /// Cancels the pending reminder for `id`, if one exists.
    ///
    /// Returns whether a timer was actually cancelled.
    pub fn cancel(&self, id: MeetingId) -> bool {
        match self.pending.blocking_lock().remove(&id) {
            Some(handle) => {
                handle.abort();
                debug!("event=reminder_cancelled id={id}");
                true
            }
            None => false,
        }
    }

    /// Number of reminders armed and not yet fired.
    pub fn pending_count(&self) -> usize {
        self.pending.blocking_lock().len()
    }
}
