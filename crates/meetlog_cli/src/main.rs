//! Interactive meeting manager.
//!
//! # Responsibility
//! - Drive the numbered menu loop over the core meeting registry.
//! - Parse raw line input into dates and integers before anything reaches
//!   the core; contain bad input per iteration so one bad entry never ends
//!   the session.
//!
//! # Invariants
//! - Menu numbers are 1-based display positions, resolved to stable meeting
//!   IDs before calling edit/delete.

mod args;

use std::io::{self, BufRead};
use std::path::Path;
use std::process;
use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use meetlog_core::{
    format_row, ExportError, MeetingDraft, MeetingId, MeetingRegistry, ReminderNotifier,
    ReminderScheduler, EXPORT_HEADER,
};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

type InputLines = io::Lines<io::StdinLock<'static>>;

/// Prints fired reminders straight to the terminal.
struct ConsoleNotifier;

impl ReminderNotifier for ConsoleNotifier {
    fn notify(&self, description: &str, start: DateTime<Local>) {
        println!(
            "\nReminder: meeting '{description}' starts at {}",
            start.format(DATE_TIME_FORMAT)
        );
    }
}

fn main() {
    let args = args::parse(std::env::args().skip(1).collect());

    if let Err(err) = meetlog_core::init_logging(&args.log_level, &args.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let scheduler = match ReminderScheduler::new(Arc::new(ConsoleNotifier)) {
        Ok(scheduler) => scheduler,
        Err(err) => {
            eprintln!("failed to start the reminder scheduler: {err}");
            process::exit(1);
        }
    };
    let mut registry = MeetingRegistry::with_scheduler(scheduler);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Today's meetings:");
        show_day(&registry, Local::now().date_naive());
        println!();
        println!("Choose an action (enter a number):");
        println!("1. Create meeting");
        println!("2. Edit meeting");
        println!("3. Delete meeting");
        println!("4. Export a day's meetings");
        println!("5. Exit");

        let Some(choice) = read_line(&mut lines) else {
            break;
        };
        let outcome = match choice.trim() {
            "1" => create_meeting(&mut registry, &mut lines),
            "2" => edit_meeting(&mut registry, &mut lines),
            "3" => delete_meeting(&mut registry, &mut lines),
            "4" => export_day(&registry, &mut lines, &args.export_dir),
            "5" => break,
            other => {
                println!("Unknown action `{other}`; enter a number from 1 to 5.");
                Some(())
            }
        };
        if outcome.is_none() {
            // Stdin closed mid-dialogue.
            break;
        }
    }
}

fn show_day(registry: &MeetingRegistry, day: NaiveDate) {
    let meetings = registry.query_by_day(day);
    if meetings.is_empty() {
        println!("(none)");
        return;
    }

    let now = Local::now();
    println!("{EXPORT_HEADER}");
    for meeting in meetings {
        println!("{}", format_row(meeting, now));
    }
}

fn create_meeting(registry: &mut MeetingRegistry, lines: &mut InputLines) -> Option<()> {
    let Some(draft) = read_draft(lines)? else {
        return Some(());
    };
    match registry.create(draft) {
        Ok(_) => println!("Meeting added."),
        Err(err) => println!("Rejected: {err}."),
    }
    Some(())
}

fn edit_meeting(registry: &mut MeetingRegistry, lines: &mut InputLines) -> Option<()> {
    let Some(id) = pick_meeting(registry, lines, "Enter the number of the meeting to edit:")?
    else {
        return Some(());
    };
    let Some(draft) = read_draft(lines)? else {
        return Some(());
    };
    match registry.edit(id, draft) {
        Ok(()) => println!("Meeting updated."),
        Err(err) => println!("Rejected: {err}."),
    }
    Some(())
}

fn delete_meeting(registry: &mut MeetingRegistry, lines: &mut InputLines) -> Option<()> {
    let Some(id) = pick_meeting(registry, lines, "Enter the number of the meeting to delete:")?
    else {
        return Some(());
    };
    match registry.delete(id) {
        Ok(()) => println!("Meeting deleted."),
        Err(err) => println!("Rejected: {err}."),
    }
    Some(())
}

fn export_day(registry: &MeetingRegistry, lines: &mut InputLines, dir: &Path) -> Option<()> {
    let input = prompt(lines, "Enter the date to export (YYYY-MM-DD):")?;
    let Some(day) = parse_date(&input) else {
        println!("Could not parse the date; expected YYYY-MM-DD.");
        return Some(());
    };
    match registry.export_day(day, dir) {
        Ok(path) => println!("Meetings exported to {}.", path.display()),
        Err(err @ ExportError::NothingToExport { .. }) => println!("{err}."),
        Err(err) => println!("Export failed: {err}."),
    }
    Some(())
}

/// Reads the shared create/edit field dialogue.
///
/// Outer `None` means stdin closed; inner `None` means a parse failure that
/// was already reported to the user.
fn read_draft(lines: &mut InputLines) -> Option<Option<MeetingDraft>> {
    let description = prompt(lines, "Enter a description:")?;

    let start_input = prompt(lines, "Enter the start date and time (YYYY-MM-DD HH:MM):")?;
    let Some(start) = parse_date_time(&start_input) else {
        println!("Could not parse the start time; expected YYYY-MM-DD HH:MM.");
        return Some(None);
    };

    let end_input = prompt(lines, "Enter the end date and time (YYYY-MM-DD HH:MM):")?;
    let Some(end) = parse_date_time(&end_input) else {
        println!("Could not parse the end time; expected YYYY-MM-DD HH:MM.");
        return Some(None);
    };

    let offset_input = prompt(lines, "Enter the reminder offset in minutes (-1 for none):")?;
    let Ok(reminder_offset) = parse_reminder_offset(&offset_input) else {
        println!("Could not parse the reminder offset; expected a whole number.");
        return Some(None);
    };

    Some(Some(MeetingDraft {
        description,
        start,
        end,
        reminder_offset,
    }))
}

/// Shows the full numbered list and resolves the user's pick to a stable ID.
fn pick_meeting(
    registry: &MeetingRegistry,
    lines: &mut InputLines,
    text: &str,
) -> Option<Option<MeetingId>> {
    if registry.is_empty() {
        println!("There are no meetings yet.");
        return Some(None);
    }

    let now = Local::now();
    for (position, meeting) in registry.meetings().iter().enumerate() {
        println!("{}. {}", position + 1, format_row(meeting, now));
    }

    let input = prompt(lines, text)?;
    let Ok(number) = input.trim().parse::<usize>() else {
        println!("Could not parse the meeting number.");
        return Some(None);
    };
    match number
        .checked_sub(1)
        .and_then(|index| registry.meeting_id_at(index))
    {
        Some(id) => Some(Some(id)),
        None => {
            println!("Invalid meeting number.");
            Some(None)
        }
    }
}

fn prompt(lines: &mut InputLines, text: &str) -> Option<String> {
    println!("{text}");
    read_line(lines)
}

fn read_line(lines: &mut InputLines) -> Option<String> {
    match lines.next() {
        Some(Ok(line)) => Some(line),
        _ => None,
    }
}

fn parse_date_time(input: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), DATE_TIME_FORMAT).ok()?;
    Local.from_local_datetime(&naive).single()
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Any negative value disables the reminder, mirroring the `-1` convention
/// of the menu prompt. An empty line counts as "no reminder" too.
fn parse_reminder_offset(input: &str) -> Result<Option<u32>, ()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let minutes: i64 = trimmed.parse().map_err(|_| ())?;
    if minutes < 0 {
        return Ok(None);
    }
    u32::try_from(minutes).map(Some).map_err(|_| ())
}
