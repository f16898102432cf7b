//! Domain model for the personal meeting schedule.
//!
//! # Responsibility
//! - Define the canonical meeting record used by registry, export and
//!   reminder code.
//!
//! # Invariants
//! - Every meeting is identified by a stable `MeetingId`.
//! - Temporal status is derived on demand, never stored.

pub mod meeting;
