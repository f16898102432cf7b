//! Meeting registry: the single owner of schedule state.
//!
//! # Responsibility
//! - Hold the ordered meeting collection and enforce creation invariants.
//! - Surface rejections as semantic errors, never panics.
//!
//! # Invariants
//! - No two registered meetings have overlapping `[start, end)` intervals.
//! - Insertion order is preserved; it doubles as display order.

pub mod meeting_registry;
