//! Deferred one-shot reminder notifications.
//!
//! # Responsibility
//! - Arm a single timer per meeting and deliver its notification exactly
//!   once through a caller-provided sink.
//!
//! # Invariants
//! - Firing is a pure side channel: it never mutates registry state.
//! - Every pending timer is cancellable by the meeting's stable ID.

pub mod notifier;
pub mod scheduler;
