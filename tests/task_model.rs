use chrono::{TimeZone, Utc};
use std::collections::HashSet;
use tasklist_core::{IdSource, Task, TaskId, UuidIdSource};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new(TaskId::from("t-1"), "hello");

    assert_eq!(task.id.as_str(), "t-1");
    assert_eq!(task.title, "hello");
    assert!(!task.completed);
}

#[test]
fn uuid_id_source_produces_distinct_ids() {
    let mut source = UuidIdSource;
    let ids: HashSet<TaskId> = (0..64).map(|_| source.fresh_id()).collect();
    assert_eq!(ids.len(), 64);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let created_at = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();
    let mut task = Task::with_created_at(TaskId::from("abc-123"), "Buy milk", created_at);
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "abc-123");
    assert_eq!(json["title"], "Buy milk");
    assert_eq!(json["completed"], true);
    assert_eq!(json["createdAt"], "2026-08-29T12:00:00Z");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn wire_shape_carries_exactly_four_fields() {
    let task = Task::new(TaskId::from("t-1"), "check fields");
    let json = serde_json::to_value(&task).unwrap();

    let keys: HashSet<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    let expected: HashSet<&str> = ["id", "title", "completed", "createdAt"].into();
    assert_eq!(keys, expected);
}

#[test]
fn unknown_wire_fields_are_treated_as_corrupt() {
    let result: Result<Task, _> = serde_json::from_str(
        r#"{
            "id": "t-1",
            "title": "extra",
            "completed": false,
            "createdAt": "2026-08-29T12:00:00Z",
            "priority": 3
        }"#,
    );
    assert!(result.is_err());
}
