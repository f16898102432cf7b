use chrono::{DateTime, Local, TimeZone};
use meetlog_core::{MeetingDraft, MeetingRegistry, RegistryError};
use uuid::Uuid;

// Fixed far-future dates keep the past-start check deterministic without
// mocking the clock.
fn dt(hour: u32, minute: u32) -> DateTime<Local> {
    dt_on(20, hour, minute)
}

fn dt_on(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2030, 5, day, hour, minute, 0)
        .single()
        .expect("unambiguous local time")
}

fn draft(start: DateTime<Local>, end: DateTime<Local>, description: &str) -> MeetingDraft {
    MeetingDraft {
        description: description.to_string(),
        start,
        end,
        reminder_offset: None,
    }
}

#[test]
fn create_accepts_future_meeting() {
    let mut registry = MeetingRegistry::new();

    let id = registry
        .create(draft(dt(10, 0), dt(11, 0), "standup"))
        .unwrap();

    assert_eq!(registry.len(), 1);
    let meeting = registry.get(id).unwrap();
    assert_eq!(meeting.description, "standup");
    assert_eq!(meeting.start, dt(10, 0));
}

#[test]
fn create_rejects_past_start() {
    let mut registry = MeetingRegistry::new();

    let past = Local
        .with_ymd_and_hms(2000, 1, 1, 10, 0, 0)
        .single()
        .unwrap();
    let err = registry
        .create(draft(past, past + chrono::Duration::hours(1), "ancient"))
        .unwrap_err();

    assert!(matches!(err, RegistryError::PastStart { .. }));
    assert!(registry.is_empty());
}

#[test]
fn create_rejects_overlapping_interval() {
    let mut registry = MeetingRegistry::new();

    let first = registry
        .create(draft(dt(10, 0), dt(11, 0), "first"))
        .unwrap();
    let err = registry
        .create(draft(dt(10, 30), dt(11, 30), "second"))
        .unwrap_err();

    assert!(matches!(err, RegistryError::Overlap { conflict } if conflict == first));
    assert_eq!(registry.len(), 1);
}

#[test]
fn create_accepts_touching_endpoints() {
    let mut registry = MeetingRegistry::new();

    registry
        .create(draft(dt(10, 0), dt(11, 0), "middle"))
        .unwrap();
    registry
        .create(draft(dt(11, 0), dt(12, 0), "right after"))
        .unwrap();
    registry
        .create(draft(dt(9, 0), dt(10, 0), "right before"))
        .unwrap();

    assert_eq!(registry.len(), 3);
}

#[test]
fn insertion_order_is_preserved_over_chronological_order() {
    let mut registry = MeetingRegistry::new();

    registry.create(draft(dt(14, 0), dt(15, 0), "later")).unwrap();
    registry
        .create(draft(dt(9, 0), dt(10, 0), "earlier"))
        .unwrap();

    let descriptions: Vec<_> = registry
        .meetings()
        .iter()
        .map(|meeting| meeting.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["later", "earlier"]);
}

#[test]
fn edit_within_own_slot_is_accepted() {
    let mut registry = MeetingRegistry::new();

    let id = registry
        .create(draft(dt(10, 0), dt(11, 0), "standup"))
        .unwrap();
    registry
        .edit(id, draft(dt(10, 15), dt(10, 45), "short standup"))
        .unwrap();

    let meeting = registry.get(id).unwrap();
    assert_eq!(meeting.description, "short standup");
    assert_eq!(meeting.start, dt(10, 15));
    assert_eq!(meeting.id, id);
}

#[test]
fn edit_rejects_overlap_with_another_meeting() {
    let mut registry = MeetingRegistry::new();

    let first = registry
        .create(draft(dt(10, 0), dt(11, 0), "first"))
        .unwrap();
    let second = registry
        .create(draft(dt(12, 0), dt(13, 0), "second"))
        .unwrap();

    let err = registry
        .edit(second, draft(dt(10, 30), dt(11, 30), "moved"))
        .unwrap_err();

    assert!(matches!(err, RegistryError::Overlap { conflict } if conflict == first));
    // Rejected edit leaves the record untouched.
    assert_eq!(registry.get(second).unwrap().start, dt(12, 0));
}

#[test]
fn edit_rejects_past_start() {
    let mut registry = MeetingRegistry::new();

    let id = registry
        .create(draft(dt(10, 0), dt(11, 0), "standup"))
        .unwrap();
    let past = Local
        .with_ymd_and_hms(2000, 1, 1, 10, 0, 0)
        .single()
        .unwrap();
    let err = registry
        .edit(id, draft(past, past + chrono::Duration::hours(1), "moved back"))
        .unwrap_err();

    assert!(matches!(err, RegistryError::PastStart { .. }));
}

#[test]
fn edit_unknown_id_is_rejected() {
    let mut registry = MeetingRegistry::new();

    let ghost = Uuid::new_v4();
    let err = registry
        .edit(ghost, draft(dt(10, 0), dt(11, 0), "ghost"))
        .unwrap_err();

    assert!(matches!(err, RegistryError::UnknownMeeting(id) if id == ghost));
}

#[test]
fn delete_removes_meeting_and_shifts_positions() {
    let mut registry = MeetingRegistry::new();

    let first = registry
        .create(draft(dt(9, 0), dt(10, 0), "first"))
        .unwrap();
    let second = registry
        .create(draft(dt(10, 0), dt(11, 0), "second"))
        .unwrap();
    let third = registry
        .create(draft(dt(11, 0), dt(12, 0), "third"))
        .unwrap();

    registry.delete(second).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.meeting_id_at(0), Some(first));
    assert_eq!(registry.meeting_id_at(1), Some(third));
    assert_eq!(registry.meeting_id_at(2), None);
    assert!(registry.get(second).is_none());
}

#[test]
fn delete_unknown_id_is_rejected() {
    let mut registry = MeetingRegistry::new();

    let ghost = Uuid::new_v4();
    let err = registry.delete(ghost).unwrap_err();

    assert!(matches!(err, RegistryError::UnknownMeeting(id) if id == ghost));
}

#[test]
fn query_by_day_filters_by_start_date_in_insertion_order() {
    let mut registry = MeetingRegistry::new();

    registry
        .create(draft(dt_on(20, 14, 0), dt_on(20, 15, 0), "afternoon"))
        .unwrap();
    registry
        .create(draft(dt_on(21, 9, 0), dt_on(21, 10, 0), "other day"))
        .unwrap();
    registry
        .create(draft(dt_on(20, 10, 0), dt_on(20, 11, 0), "morning"))
        .unwrap();

    let day = dt_on(20, 0, 0).date_naive();
    let descriptions: Vec<_> = registry
        .query_by_day(day)
        .iter()
        .map(|meeting| meeting.description.as_str())
        .collect();

    // Insertion order, not chronological order within the day.
    assert_eq!(descriptions, vec!["afternoon", "morning"]);
}

#[test]
fn query_by_day_ignores_time_of_day_of_end() {
    let mut registry = MeetingRegistry::new();

    // Starts on the 20th, ends on the 21st: counts for the 20th only.
    registry
        .create(draft(dt_on(20, 23, 0), dt_on(21, 1, 0), "late night"))
        .unwrap();

    assert_eq!(registry.query_by_day(dt_on(20, 0, 0).date_naive()).len(), 1);
    assert!(registry
        .query_by_day(dt_on(21, 0, 0).date_naive())
        .is_empty());
}

#[test]
fn day_scenario_create_overlap_touch_delete() {
    let mut registry = MeetingRegistry::new();

    let a = registry
        .create(draft(dt(10, 0), dt(11, 0), "A"))
        .unwrap();
    assert!(matches!(
        registry.create(draft(dt(10, 30), dt(11, 30), "B")),
        Err(RegistryError::Overlap { .. })
    ));
    registry.create(draft(dt(11, 0), dt(12, 0), "B'")).unwrap();

    registry.delete(a).unwrap();

    let day = dt(0, 0).date_naive();
    let remaining: Vec<_> = registry
        .query_by_day(day)
        .iter()
        .map(|meeting| meeting.description.as_str())
        .collect();
    assert_eq!(remaining, vec!["B'"]);
}
