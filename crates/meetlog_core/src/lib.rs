//! Core domain logic for MeetLog.
//! This crate is the single source of truth for scheduling invariants.

pub mod export;
pub mod logging;
pub mod model;
pub mod registry;
pub mod reminder;

pub use export::day_export::{
    export_file_name, format_row, write_day_export, ExportError, ExportResult, EXPORT_HEADER,
};
pub use logging::{default_log_level, init_logging};
pub use model::meeting::{Meeting, MeetingDraft, MeetingId, MeetingStatus};
pub use registry::meeting_registry::{MeetingRegistry, RegistryError, RegistryResult};
pub use reminder::notifier::{LogNotifier, ReminderNotifier};
pub use reminder::scheduler::ReminderScheduler;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
