use std::sync::{Arc, RwLock};

use tracing::{debug, error, warn};

use crate::core::error::{StorageError, StorageResult};
use crate::models::Task;

/// Where the task list lives between page loads.
///
/// `load` never fails: a missing or unreadable payload yields an empty
/// board. `save` reports failures, but callers treat it as best-effort.
pub trait TaskRepository {
    fn load(&self) -> Vec<Task>;

    fn save(&self, tasks: &[Task]) -> StorageResult<()>;
}

// Safe task serialization: every task must come out as a non-empty object,
// otherwise the whole write is refused so a partial list never replaces a
// complete one.
pub fn serialize_tasks_safely(tasks: &[Task]) -> StorageResult<String> {
    let json_tasks: Vec<serde_json::Value> = tasks
        .iter()
        .filter_map(|t| match serde_json::to_value(t) {
            Ok(value) if value.as_object().is_some_and(|o| !o.is_empty()) => Some(value),
            Ok(_) => {
                error!(task_id = %t.id, "task serialization produced an empty object");
                None
            }
            Err(e) => {
                error!(task_id = %t.id, error = %e, "failed to serialize task");
                None
            }
        })
        .collect();

    if json_tasks.len() != tasks.len() {
        return Err(StorageError::DataLoss {
            lost: tasks.len() - json_tasks.len(),
            total: tasks.len(),
        });
    }

    Ok(serde_json::to_string(&json_tasks)?)
}

// Tasks that fail to decode on their own are dropped; only a payload that
// is not a list at all is an error.
pub fn deserialize_tasks(raw: &str) -> StorageResult<Vec<Task>> {
    let tasks_json: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| StorageError::Decode(e.to_string()))?;
    let total = tasks_json.len();

    let tasks: Vec<Task> = tasks_json
        .into_iter()
        .filter_map(|v| match serde_json::from_value(v) {
            Ok(task) => Some(task),
            Err(e) => {
                warn!(error = %e, "skipping stored task that failed to decode");
                None
            }
        })
        .collect();

    if tasks.len() != total {
        warn!(kept = tasks.len(), total, "some stored tasks were discarded");
    }
    Ok(tasks)
}

// A failed read is not the same as an empty slot: it is reported at warn
// before the board falls back to empty.
fn stored_payload(read: StorageResult<Option<String>>) -> Option<String> {
    read.unwrap_or_else(|e| {
        warn!(error = %e, "cannot read stored tasks");
        None
    })
}

// Decode with the "must not fail" policy of `TaskRepository::load`.
fn load_or_empty(raw: Option<String>) -> Vec<Task> {
    match raw {
        None => {
            debug!("no stored tasks, starting with an empty board");
            Vec::new()
        }
        Some(raw) => deserialize_tasks(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "stored tasks are unreadable, starting with an empty board");
            Vec::new()
        }),
    }
}

/// Browser `localStorage`, one JSON array under a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorageRepository {
    key: String,
}

impl LocalStorageRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    // Looked up on every call rather than held, so the repository stays
    // Send + Sync and can sit inside a signal.
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl TaskRepository for LocalStorageRepository {
    fn load(&self) -> Vec<Task> {
        let read = Self::storage().and_then(|storage| {
            storage
                .get_item(&self.key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        });
        let tasks = load_or_empty(stored_payload(read));
        debug!(key = %self.key, count = tasks.len(), "loaded tasks");
        tasks
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let payload = serialize_tasks_safely(tasks)?;
        Self::storage()?
            .set_item(&self.key, &payload)
            .map_err(|e| StorageError::Write(format!("{e:?}")))?;
        debug!(key = %self.key, count = tasks.len(), "saved tasks");
        Ok(())
    }
}

/// Process-local repository. Clones share the same backing slot, so a test
/// can hand one clone to a store and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    raw: Option<String>,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `raw` as the stored payload, whatever it contains.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let repo = Self::default();
        if let Ok(mut state) = repo.state.write() {
            state.raw = Some(raw.into());
        }
        repo
    }

    pub fn with_tasks(tasks: &[Task]) -> StorageResult<Self> {
        Ok(Self::with_raw(serialize_tasks_safely(tasks)?))
    }

    /// Makes every later `save` fail with [`StorageError::Write`].
    pub fn fail_saves(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_saves = fail;
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.state.read().ok().and_then(|s| s.raw.clone())
    }

    /// Number of successful writes so far.
    pub fn save_count(&self) -> usize {
        self.state.read().map(|s| s.saves).unwrap_or(0)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn load(&self) -> Vec<Task> {
        load_or_empty(self.raw())
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let payload = serialize_tasks_safely(tasks)?;
        let mut state = self
            .state
            .write()
            .map_err(|_| StorageError::Write("in-memory store poisoned".to_string()))?;
        if state.fail_saves {
            return Err(StorageError::Write("injected failure".to_string()));
        }
        state.raw = Some(payload);
        state.saves += 1;
        Ok(())
    }
}
