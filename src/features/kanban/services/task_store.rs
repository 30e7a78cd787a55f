use mockable::Clock;
use tracing::{debug, info, warn};

use crate::core::services::TaskRepository;
use crate::models::{NewTask, Task, TaskPatch};

/// The ordered task list plus the repository it is mirrored to.
///
/// List order is meaningful: it is the global order and, filtered by
/// status, the order inside each column. Every mutation that changes the
/// list is followed by a full-list `save`.
pub struct TaskStore<R, C> {
    tasks: Vec<Task>,
    repository: R,
    clock: C,
}

impl<R: TaskRepository, C: Clock> TaskStore<R, C> {
    /// Loads the persisted list. Never fails; an unreadable store gives an
    /// empty board.
    pub fn open(repository: R, clock: C) -> Self {
        let tasks = repository.load();
        info!(count = tasks.len(), "task store opened");
        Self {
            tasks,
            repository,
            clock,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a new task. Titles are not validated here.
    pub fn add_task(&mut self, new_task: NewTask) -> Task {
        let mut task = Task::new(new_task.clone(), self.clock.utc());
        // v4 collisions are not expected, but ids must be unique in the list
        while self.get(&task.id).is_some() {
            task = Task::new(new_task.clone(), task.created_at);
        }

        info!(task_id = %task.id, status = task.status.key(), "task added");
        self.tasks.push(task.clone());
        self.persist();
        task
    }

    /// Merges `patch` into the task with `id` and refreshes `updated_at`.
    /// Returns `false` and leaves the list alone when no task matches.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> bool {
        let now = self.clock.utc();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(task_id = %id, "update ignored, task not found");
            return false;
        };

        task.apply(patch, now);
        debug!(task_id = %id, status = task.status.key(), "task updated");
        self.persist();
        true
    }

    /// Removes the task with `id`. Returns `false` when no task matches.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);

        if self.tasks.len() == before {
            debug!(task_id = %id, "delete ignored, task not found");
            return false;
        }
        info!(task_id = %id, "task deleted");
        self.persist();
        true
    }

    /// Moves the task at `from` to `to`, shifting everything in between.
    /// Timestamps are untouched. Out-of-range indices and `from == to` do
    /// nothing.
    pub fn reorder_tasks(&mut self, from: usize, to: usize) -> bool {
        let len = self.tasks.len();
        if from == to || from >= len || to >= len {
            return false;
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        debug!(from, to, "tasks reordered");
        self.persist();
        true
    }

    // Best-effort: a failed write is logged and the in-memory list stays
    // authoritative.
    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.tasks) {
            warn!(error = %e, "failed to save tasks");
        }
    }
}
