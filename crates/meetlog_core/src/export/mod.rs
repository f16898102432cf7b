//! Day export and listing formatters.
//!
//! # Responsibility
//! - Render day-scoped meeting views into the fixed pipe-delimited text
//!   format shared by the on-screen listing and the export file.

pub mod day_export;
