//! Meeting domain model.
//!
//! # Responsibility
//! - Define the canonical meeting record and its derived temporal status.
//! - Keep status a pure function of `(start, end, now)` so it can never go
//!   stale while the record exists.
//!
//! # Invariants
//! - `id` is stable and never reused for another meeting.
//! - `end` is expected to be after `start`; callers are trusted on this and
//!   the registry does not enforce it.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a meeting, assigned once at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MeetingId = Uuid;

/// Temporal state of a meeting relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    /// Has not started yet.
    Planned,
    /// Currently running.
    InProgress,
    /// Already over.
    Past,
}

impl MeetingStatus {
    /// Human-readable label used by the day listing and the export file.
    ///
    /// Labels match the export file contract, which predates this crate.
    pub fn label(self) -> &'static str {
        match self {
            Self::Planned => "Запланировано",
            Self::InProgress => "В процессе",
            Self::Past => "Прошло",
        }
    }
}

/// Caller-supplied fields for creating or editing a meeting.
///
/// The same shape feeds both paths so edits are validated exactly like
/// creations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingDraft {
    /// Free text, may be empty.
    pub description: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    /// Minutes before `start` at which a reminder should fire.
    /// `None` disables the reminder.
    pub reminder_offset: Option<u32>,
}

/// One meeting on the personal schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Stable global ID used for edit/delete addressing and reminder
    /// cross-referencing.
    pub id: MeetingId,
    /// Free text, may be empty.
    pub description: String,
    pub start: DateTime<Local>,
    /// Expected end of the meeting. Should be after `start`.
    pub end: DateTime<Local>,
    /// Minutes before `start` for the reminder; `None` disables it.
    pub reminder_offset: Option<u32>,
}

impl Meeting {
    /// Creates a meeting with a freshly generated stable ID.
    pub fn new(draft: MeetingDraft) -> Self {
        Self::from_draft(Uuid::new_v4(), draft)
    }

    /// Creates a meeting under a caller-provided ID.
    ///
    /// Used by the edit path, which replaces a record wholesale while
    /// preserving its identity.
    pub(crate) fn from_draft(id: MeetingId, draft: MeetingDraft) -> Self {
        Self {
            id,
            description: draft.description,
            start: draft.start,
            end: draft.end,
            reminder_offset: draft.reminder_offset,
        }
    }

    /// Derives the temporal status of this meeting as seen at `now`.
    ///
    /// # Contract
    /// - `Past` when `end < now`.
    /// - `InProgress` when `start < now < end`.
    /// - `Planned` otherwise (including exactly at `start` or `end`).
    pub fn status_at(&self, now: DateTime<Local>) -> MeetingStatus {
        if self.end < now {
            MeetingStatus::Past
        } else if self.start < now && now < self.end {
            MeetingStatus::InProgress
        } else {
            MeetingStatus::Planned
        }
    }

    /// Half-open interval overlap test against `[start, end)`.
    ///
    /// Touching endpoints do not count as overlapping.
    pub fn overlaps(&self, start: DateTime<Local>, end: DateTime<Local>) -> bool {
        start < self.end && end > self.start
    }

    /// Moment at which this meeting's reminder should fire.
    ///
    /// Returns `None` when no reminder offset is set.
    pub fn notify_at(&self) -> Option<DateTime<Local>> {
        self.reminder_offset
            .map(|minutes| self.start - Duration::minutes(i64::from(minutes)))
    }
}
