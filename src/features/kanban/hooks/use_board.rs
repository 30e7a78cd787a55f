use leptos::prelude::*;
use mockable::DefaultClock;

use crate::core::config::BoardConfig;
use crate::core::services::LocalStorageRepository;
use crate::features::kanban::services::{
    column_count, column_tasks, DragOutcome, DragSession, DropTarget, TaskStore,
};
use crate::models::{NewTask, Task, TaskPatch, TaskStatus};

pub type BoardStore = TaskStore<LocalStorageRepository, DefaultClock>;

// Both signals are Copy, so the hook is handed around by value and every
// component can call the handlers directly.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub store: RwSignal<BoardStore>,
    pub drag: RwSignal<DragSession>,
}

pub fn use_board(config: &BoardConfig) -> BoardHook {
    // Load tasks once on mount; localStorage is synchronous so there is no
    // loading state to track
    let repository = LocalStorageRepository::new(config.storage_key.clone());
    let store = RwSignal::new(TaskStore::open(repository, DefaultClock));
    let drag = RwSignal::new(DragSession::Idle);

    BoardHook { store, drag }
}

/// The board created by the nearest [`use_board`] caller up the tree.
pub fn expect_board() -> BoardHook {
    use_context::<BoardHook>().expect("BoardHook context")
}

impl BoardHook {
    pub fn column(&self, status: TaskStatus) -> Vec<Task> {
        self.store
            .with(|store| column_tasks(store.tasks(), status).into_iter().cloned().collect())
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.store.with(|store| column_count(store.tasks(), status))
    }

    pub fn add_task(&self, new_task: NewTask) {
        self.store.update(|store| {
            store.add_task(new_task);
        });
    }

    pub fn update_task(&self, id: String, patch: TaskPatch) {
        // Skip the notify when the id is gone (deleted in another card's menu)
        self.store.maybe_update(|store| store.update_task(&id, patch));
    }

    pub fn delete_task(&self, id: String) {
        self.store.maybe_update(|store| store.delete_task(&id));
    }

    pub fn drag_start(&self, id: &str) {
        let store = self.store;
        self.drag.update(|session| {
            store.with_untracked(|store| session.start(store, id));
        });
    }

    // dragover fires continuously while the pointer rests on a target; only
    // an actual reorder should re-render the board
    pub fn drag_over(&self, target: DropTarget) {
        let session = self.drag.get_untracked();
        self.store
            .maybe_update(|store| matches!(session.over(store, &target), DragOutcome::Reordered { .. }));
    }

    pub fn drag_drop(&self, target: Option<DropTarget>) {
        let mut session = self.drag.get_untracked();
        if !session.is_dragging() {
            return;
        }
        self.store.maybe_update(|store| {
            matches!(session.drop_on(store, target.as_ref()), DragOutcome::Moved { .. })
        });
        self.drag.set(session);
    }

    pub fn drag_cancel(&self) {
        if self.drag.with_untracked(DragSession::is_dragging) {
            self.drag.update(|session| {
                session.cancel();
            });
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.drag.with(|session| session.active_id() == Some(id))
    }
}
