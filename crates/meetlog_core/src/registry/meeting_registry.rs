//! In-memory meeting registry and its rejection taxonomy.
//!
//! # Responsibility
//! - Validate and apply create/edit/delete operations on the schedule.
//! - Answer day-scoped queries for the lister and exporter.
//! - Arm and cancel deferred reminders alongside mutations.
//!
//! # Invariants
//! - `create` and `edit` go through the same validation path; an edit only
//!   skips the overlap comparison against the record it replaces.
//! - Rejections are expected outcomes reported as `Err`, not panics.
//! - Single-threaded: one interactive caller at a time, no internal locking.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use log::{info, warn};

use crate::export::day_export::{export_day_to_dir, ExportResult};
use crate::model::meeting::{Meeting, MeetingDraft, MeetingId};
use crate::reminder::scheduler::ReminderScheduler;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Rejection reasons for registry mutations.
///
/// All variants are recoverable; the caller reports them and carries on.
#[derive(Debug)]
pub enum RegistryError {
    /// Start time was already in the past when the operation was validated.
    PastStart { start: DateTime<Local> },
    /// Interval overlaps an already registered meeting.
    Overlap { conflict: MeetingId },
    /// No meeting with the given ID exists in the registry.
    UnknownMeeting(MeetingId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PastStart { start } => write!(
                f,
                "meetings can only be scheduled for the future (start was {})",
                start.format("%Y-%m-%d %H:%M")
            ),
            Self::Overlap { conflict } => {
                write!(f, "meeting overlaps an existing meeting ({conflict})")
            }
            Self::UnknownMeeting(id) => write!(f, "no meeting with id {id}"),
        }
    }
}

impl Error for RegistryError {}

/// Ordered collection of meetings with creation invariants.
///
/// Owns an optional [`ReminderScheduler`]; without one, registrations simply
/// never arm reminders (useful for tests and headless callers).
pub struct MeetingRegistry {
    meetings: Vec<Meeting>,
    scheduler: Option<ReminderScheduler>,
}

impl MeetingRegistry {
    /// Creates an empty registry that never schedules reminders.
    pub fn new() -> Self {
        Self {
            meetings: Vec::new(),
            scheduler: None,
        }
    }

    /// Creates an empty registry that arms reminders on the given scheduler.
    pub fn with_scheduler(scheduler: ReminderScheduler) -> Self {
        Self {
            meetings: Vec::new(),
            scheduler: Some(scheduler),
        }
    }

    /// Registers a new meeting.
    ///
    /// # Contract
    /// - Rejects a `start` before now (`RegistryError::PastStart`).
    /// - Rejects half-open interval overlap with any registered meeting
    ///   (`RegistryError::Overlap`); touching endpoints are accepted.
    /// - Appends in insertion order; no chronological sorting.
    /// - Arms a one-shot reminder when the draft carries an offset and the
    ///   notification moment is still in the future.
    pub fn create(&mut self, draft: MeetingDraft) -> RegistryResult<MeetingId> {
        let now = Local::now();
        self.validate(&draft, now, None)?;

        let meeting = Meeting::new(draft);
        if let Some(scheduler) = &self.scheduler {
            scheduler.schedule(&meeting);
        }
        info!(
            "event=meeting_created id={} start={} end={}",
            meeting.id,
            meeting.start.format("%Y-%m-%d %H:%M"),
            meeting.end.format("%Y-%m-%d %H:%M"),
        );

        let id = meeting.id;
        self.meetings.push(meeting);
        Ok(id)
    }

    /// Replaces the meeting identified by `id` wholesale with `draft`.
    ///
    /// Validated exactly like [`create`](Self::create), except the edited
    /// record itself is excluded from the overlap scan. On success any
    /// pending reminder for the old record is cancelled and a new one is
    /// armed from the new fields.
    pub fn edit(&mut self, id: MeetingId, draft: MeetingDraft) -> RegistryResult<()> {
        let position = self
            .position_of(id)
            .ok_or(RegistryError::UnknownMeeting(id))?;

        let now = Local::now();
        self.validate(&draft, now, Some(id))?;

        let meeting = Meeting::from_draft(id, draft);
        if let Some(scheduler) = &self.scheduler {
            scheduler.cancel(id);
            scheduler.schedule(&meeting);
        }
        info!(
            "event=meeting_edited id={} start={} end={}",
            meeting.id,
            meeting.start.format("%Y-%m-%d %H:%M"),
            meeting.end.format("%Y-%m-%d %H:%M"),
        );

        self.meetings[position] = meeting;
        Ok(())
    }

    /// Removes the meeting identified by `id`.
    ///
    /// Cancels any reminder still pending for it; later meetings shift down
    /// one display position.
    pub fn delete(&mut self, id: MeetingId) -> RegistryResult<()> {
        let position = self
            .position_of(id)
            .ok_or(RegistryError::UnknownMeeting(id))?;

        self.meetings.remove(position);
        if let Some(scheduler) = &self.scheduler {
            scheduler.cancel(id);
        }
        info!("event=meeting_deleted id={id}");
        Ok(())
    }

    /// All registered meetings in insertion order.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Looks up one meeting by stable ID.
    pub fn get(&self, id: MeetingId) -> Option<&Meeting> {
        self.meetings.iter().find(|meeting| meeting.id == id)
    }

    /// Resolves a zero-based display position to a stable ID.
    ///
    /// Positions shift on deletion; this is a display-layer convenience for
    /// the interactive menu, not an identity.
    pub fn meeting_id_at(&self, index: usize) -> Option<MeetingId> {
        self.meetings.get(index).map(|meeting| meeting.id)
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// All meetings whose `start` falls on the given calendar date, in
    /// insertion order. Pure read.
    pub fn query_by_day(&self, day: NaiveDate) -> Vec<&Meeting> {
        self.meetings
            .iter()
            .filter(|meeting| meeting.start.date_naive() == day)
            .collect()
    }

    /// Exports the given day's meetings into `dir`.
    ///
    /// Returns the written file path, or `ExportError::NothingToExport`
    /// without touching the filesystem when the day is empty.
    pub fn export_day(&self, day: NaiveDate, dir: &Path) -> ExportResult<PathBuf> {
        let meetings = self.query_by_day(day);
        export_day_to_dir(&meetings, day, dir)
    }

    /// Number of reminders currently armed and not yet fired.
    pub fn pending_reminders(&self) -> usize {
        self.scheduler
            .as_ref()
            .map_or(0, ReminderScheduler::pending_count)
    }

    fn position_of(&self, id: MeetingId) -> Option<usize> {
        self.meetings.iter().position(|meeting| meeting.id == id)
    }

    /// Shared validation path for create and edit.
    ///
    /// `exclude` names the record being replaced by an edit; it is skipped
    /// in the overlap scan so a meeting may be edited within its own slot.
    fn validate(
        &self,
        draft: &MeetingDraft,
        now: DateTime<Local>,
        exclude: Option<MeetingId>,
    ) -> RegistryResult<()> {
        if draft.start < now {
            warn!(
                "event=meeting_rejected reason=past_start start={}",
                draft.start.format("%Y-%m-%d %H:%M")
            );
            return Err(RegistryError::PastStart { start: draft.start });
        }

        for existing in &self.meetings {
            if exclude == Some(existing.id) {
                continue;
            }
            if existing.overlaps(draft.start, draft.end) {
                warn!(
                    "event=meeting_rejected reason=overlap conflict={}",
                    existing.id
                );
                return Err(RegistryError::Overlap {
                    conflict: existing.id,
                });
            }
        }

        Ok(())
    }
}

impl Default for MeetingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
