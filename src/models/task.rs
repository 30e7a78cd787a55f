use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Stored as "todo" / "in-progress" / "done" so the localStorage payload stays
// readable by anything else that shares the key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Every column, in display order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Wire name, also used as the DOM id of the column drop zone.
    pub fn key(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(new_task: NewTask, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges `patch` into the task and stamps `updated_at`, even when the
    /// patch carries no fields.
    pub fn apply(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now;
    }

    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.trim().is_empty())
    }
}

/// Payload of the add-task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
}

impl NewTask {
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            description: None,
            status,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The fields of a task that may change after creation. `id` and
/// `created_at` cannot be patched.
///
/// `description` is doubly optional: `None` leaves it alone, `Some(None)`
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn details(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description),
            status: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[fixture]
    fn task(now: DateTime<Utc>) -> Task {
        Task::new(
            NewTask::new("Write release notes", TaskStatus::Todo).with_description("v0.2"),
            now,
        )
    }

    #[rstest]
    fn new_task_sets_both_timestamps(task: Task, now: DateTime<Utc>) {
        assert_eq!(task.created_at, now);
        assert_eq!(task.updated_at, now);
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(Uuid::parse_str(&task.id).is_ok());
    }

    #[rstest]
    fn apply_changes_only_named_fields(mut task: Task, now: DateTime<Utc>) {
        let later = now + chrono::Duration::minutes(5);
        let before = task.clone();

        task.apply(TaskPatch::status(TaskStatus::Done), later);

        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.title, before.title);
        assert_eq!(task.description, before.description);
        assert_eq!(task.id, before.id);
        assert_eq!(task.created_at, before.created_at);
        assert_eq!(task.updated_at, later);
    }

    #[rstest]
    fn apply_can_clear_description(mut task: Task, now: DateTime<Utc>) {
        task.apply(TaskPatch::details("Renamed", None), now);

        assert_eq!(task.title, "Renamed");
        assert_eq!(task.description, None);
        assert!(!task.has_description());
    }

    #[rstest]
    fn serializes_with_camel_case_keys(task: Task) {
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["status"], "todo");
        assert_eq!(value["description"], "v0.2");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[rstest]
    #[case(TaskStatus::Todo, "\"todo\"")]
    #[case(TaskStatus::InProgress, "\"in-progress\"")]
    #[case(TaskStatus::Done, "\"done\"")]
    fn status_wire_names_match_keys(#[case] status: TaskStatus, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&status).unwrap(), json);
        assert_eq!(format!("\"{}\"", status.key()), json);
        assert_eq!(serde_json::from_str::<TaskStatus>(json).unwrap(), status);
    }

    #[rstest]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<TaskStatus>("\"archived\"").is_err());
    }

    #[rstest]
    fn missing_description_deserializes_as_none() {
        let raw = r#"{
            "id": "a",
            "title": "A",
            "status": "done",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.description, None);
        assert_eq!(task.status, TaskStatus::Done);
    }
}
