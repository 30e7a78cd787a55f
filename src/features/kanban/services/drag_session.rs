//! Drag-and-drop reconciliation.
//!
//! A gesture is `start`, any number of `over` calls, then `drop_on` or
//! `cancel`. Hovering over a task in the same column reorders the list
//! live; the status change for a cross-column move is committed once, at
//! drop time. The session never edits the list itself, it only decides
//! which [`TaskStore`] operation to call.

use mockable::Clock;
use tracing::{debug, info};

use super::task_store::TaskStore;
use crate::core::services::TaskRepository;
use crate::models::{Task, TaskPatch, TaskStatus};

/// What the pointer is over: a task card or a column's drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Task(String),
    Column(TaskStatus),
}

/// Result of feeding one event to a [`DragSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing changed.
    Ignored,
    /// Same-column hover moved the active task from `from` to `to`.
    Reordered { from: usize, to: usize },
    /// Drop committed a new status.
    Moved {
        id: String,
        from: TaskStatus,
        to: TaskStatus,
    },
    /// Drop landed in the task's own column; ordering was already applied
    /// while hovering.
    Settled,
    /// The gesture ended with no usable target.
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    /// `active` is the task as it was at pick-up, kept for the drag preview.
    /// Decisions always re-read the live task from the store.
    Dragging { active: Task },
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    pub fn active(&self) -> Option<&Task> {
        match self {
            DragSession::Dragging { active } => Some(active),
            DragSession::Idle => None,
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active().map(|t| t.id.as_str())
    }

    /// Picks up the task with `id`. Unknown ids leave the session idle.
    pub fn start<R, C>(&mut self, store: &TaskStore<R, C>, id: &str) -> bool
    where
        R: TaskRepository,
        C: Clock,
    {
        match store.get(id) {
            Some(task) => {
                debug!(task_id = %id, "drag started");
                *self = DragSession::Dragging {
                    active: task.clone(),
                };
                true
            }
            None => {
                debug!(task_id = %id, "drag start ignored, task not found");
                *self = DragSession::Idle;
                false
            }
        }
    }

    /// Handles one hover event. Only a task target in the active task's
    /// current column causes a reorder; columns and other-column tasks are
    /// left for [`drop_on`](Self::drop_on).
    pub fn over<R, C>(&self, store: &mut TaskStore<R, C>, target: &DropTarget) -> DragOutcome
    where
        R: TaskRepository,
        C: Clock,
    {
        let Some(active_id) = self.active_id() else {
            return DragOutcome::Ignored;
        };
        let DropTarget::Task(over_id) = target else {
            return DragOutcome::Ignored;
        };
        if over_id == active_id {
            return DragOutcome::Ignored;
        }

        let (Some(from), Some(to)) = (store.index_of(active_id), store.index_of(over_id)) else {
            return DragOutcome::Ignored;
        };
        let tasks = store.tasks();
        if tasks[from].status != tasks[to].status {
            return DragOutcome::Ignored;
        }

        if store.reorder_tasks(from, to) {
            DragOutcome::Reordered { from, to }
        } else {
            DragOutcome::Ignored
        }
    }

    /// Ends the gesture over `target`. A column target wins; otherwise the
    /// hovered task's status names the column. When that column differs
    /// from the active task's status, the status is updated (which also
    /// refreshes `updated_at`). The session is idle afterwards in every case.
    pub fn drop_on<R, C>(
        &mut self,
        store: &mut TaskStore<R, C>,
        target: Option<&DropTarget>,
    ) -> DragOutcome
    where
        R: TaskRepository,
        C: Clock,
    {
        let session = std::mem::take(self);
        let Some(active_id) = session.active_id() else {
            return DragOutcome::Ignored;
        };

        let column = match target {
            Some(DropTarget::Column(status)) => Some(*status),
            Some(DropTarget::Task(over_id)) => store.get(over_id).map(|t| t.status),
            None => None,
        };
        let Some(column) = column else {
            debug!(task_id = %active_id, "drop without a target column, cancelled");
            return DragOutcome::Cancelled;
        };

        let Some(current) = store.get(active_id).map(|t| t.status) else {
            debug!(task_id = %active_id, "dropped task no longer exists");
            return DragOutcome::Ignored;
        };
        if current == column {
            return DragOutcome::Settled;
        }

        store.update_task(active_id, TaskPatch::status(column));
        info!(task_id = %active_id, from = current.key(), to = column.key(), "task moved");
        DragOutcome::Moved {
            id: active_id.to_string(),
            from: current,
            to: column,
        }
    }

    /// Abandons the gesture without touching the list.
    pub fn cancel(&mut self) -> DragOutcome {
        if std::mem::take(self).is_dragging() {
            debug!("drag cancelled");
            DragOutcome::Cancelled
        } else {
            DragOutcome::Ignored
        }
    }
}
