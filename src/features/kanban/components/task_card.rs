use leptos::ev::DragEvent;
use leptos::prelude::*;
use tracing::debug;

use super::task_form::TaskForm;
use crate::features::kanban::hooks::expect_board;
use crate::features::kanban::services::DropTarget;
use crate::models::{Task, TaskPatch};

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let board = expect_board();
    let (editing, set_editing) = signal(false);

    let save_edit = {
        let task_id = task.id.clone();
        Callback::new(move |(title, description): (String, Option<String>)| {
            board.update_task(task_id.clone(), TaskPatch::details(title, description));
            set_editing.set(false);
        })
    };
    let cancel_edit = Callback::new(move |_: ()| set_editing.set(false));

    move || {
        if editing.get() {
            view! {
                <div class="task-card editing">
                    <TaskForm
                        initial_title=task.title.clone()
                        initial_description=task.description.clone().unwrap_or_default()
                        submit_label="SAVE"
                        on_submit=save_edit
                        on_cancel=cancel_edit
                    />
                </div>
            }
            .into_any()
        } else {
            // Each handler owns its own copy of the id
            let id_for_class = task.id.clone();
            let id_for_start = task.id.clone();
            let id_for_over = task.id.clone();
            let id_for_drop = task.id.clone();
            let id_for_delete = task.id.clone();
            let description = task
                .has_description()
                .then(|| task.description.clone().unwrap_or_default());

            view! {
                <div
                    class="task-card"
                    class:dragging=move || board.is_active(&id_for_class)
                    draggable="true"
                    on:dragstart=move |ev: DragEvent| {
                        // Firefox refuses to start a drag without a payload
                        if let Some(data) = ev.data_transfer() {
                            if let Err(e) = data.set_data("text/plain", &id_for_start) {
                                debug!(task_id = %id_for_start, error = ?e, "drag payload rejected");
                            }
                            data.set_effect_allowed("move");
                        }
                        board.drag_start(&id_for_start);
                    }
                    on:dragover=move |ev: DragEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        board.drag_over(DropTarget::Task(id_for_over.clone()));
                    }
                    on:drop=move |ev: DragEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        board.drag_drop(Some(DropTarget::Task(id_for_drop.clone())));
                    }
                    on:dragend=move |_| board.drag_cancel()
                >
                    <div class="task-content">
                        <h4>{task.title.clone()}</h4>
                        {description.map(|text| view! { <p>{text}</p> })}
                    </div>
                    <div class="task-actions">
                        <button
                            class="task-action-btn edit-btn"
                            on:click=move |_| set_editing.set(true)
                        >"Edit"</button>
                        <button
                            class="task-action-btn delete-btn"
                            on:click=move |_| board.delete_task(id_for_delete.clone())
                        >"Delete"</button>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
