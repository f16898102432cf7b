//! Day export writer.
//!
//! # Responsibility
//! - Write one day's meetings into `Meetings_YYYYMMDD.txt`: a fixed header
//!   line plus one pipe-delimited row per meeting in insertion order.
//!
//! # Invariants
//! - An empty day writes nothing and reports `NothingToExport`.
//! - Row status labels are computed at write time, not at record creation.
//! - Embedded `|` in descriptions is not escaped (inherited file contract).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use log::info;

use crate::model::meeting::Meeting;

/// Fixed first line of every export file and day listing.
pub const EXPORT_HEADER: &str = "Время встречи: | Описание: | Статус:";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug)]
pub enum ExportError {
    /// The requested day has no meetings; nothing was written.
    NothingToExport { day: NaiveDate },
    Io(io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NothingToExport { day } => {
                write!(f, "no meetings to export for {day}")
            }
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NothingToExport { .. } => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// File name for a day's export: `Meetings_YYYYMMDD.txt`.
pub fn export_file_name(day: NaiveDate) -> String {
    format!("Meetings_{}.txt", day.format("%Y%m%d"))
}

/// Renders one meeting as a listing/export row.
///
/// Field order is fixed: `start - end | description | status`, with the
/// status derived at `now`.
pub fn format_row(meeting: &Meeting, now: DateTime<Local>) -> String {
    format!(
        "{} - {} | {} | {}",
        meeting.start.format(TIMESTAMP_FORMAT),
        meeting.end.format(TIMESTAMP_FORMAT),
        meeting.description,
        meeting.status_at(now).label(),
    )
}

/// Writes the header plus one row per meeting to `sink`.
///
/// Pure formatting over an already day-filtered view; does not decide
/// whether the export should happen at all.
pub fn write_day_export<W: Write>(
    meetings: &[&Meeting],
    now: DateTime<Local>,
    sink: &mut W,
) -> io::Result<()> {
    writeln!(sink, "{EXPORT_HEADER}")?;
    for meeting in meetings {
        writeln!(sink, "{}", format_row(meeting, now))?;
    }
    Ok(())
}

/// Exports a day-filtered view into a file under `dir`.
///
/// Returns the written path. An empty view is rejected before any
/// filesystem access.
pub fn export_day_to_dir(
    meetings: &[&Meeting],
    day: NaiveDate,
    dir: &Path,
) -> ExportResult<PathBuf> {
    if meetings.is_empty() {
        return Err(ExportError::NothingToExport { day });
    }

    let path = dir.join(export_file_name(day));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    write_day_export(meetings, Local::now(), &mut writer)?;
    writer.flush()?;

    info!(
        "event=day_exported day={day} rows={} path={}",
        meetings.len(),
        path.display()
    );
    Ok(path)
}
