use leptos::ev::DragEvent;
use leptos::prelude::*;

use super::task_card::TaskCard;
use super::task_form::TaskForm;
use crate::features::kanban::hooks::expect_board;
use crate::features::kanban::services::DropTarget;
use crate::models::{NewTask, TaskStatus};

#[component]
pub fn KanbanColumn(status: TaskStatus) -> impl IntoView {
    let board = expect_board();
    let (show_form, set_show_form) = signal(false);

    // New tasks land in the column whose form was used
    let add_task = Callback::new(move |(title, description): (String, Option<String>)| {
        board.add_task(NewTask {
            title,
            description,
            status,
        });
        set_show_form.set(false);
    });
    let close_form = Callback::new(move |_: ()| set_show_form.set(false));

    view! {
        <div
            class="kanban-column"
            id=status.key()
            // Dropping anywhere in the column, not only on a card, is allowed
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                board.drag_over(DropTarget::Column(status));
            }
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                board.drag_drop(Some(DropTarget::Column(status)));
            }
        >
            <div class="column-header">
                <h3>{status.as_str()}</h3>
                // Reactive task count - updates automatically when tasks change
                <span class="task-count">{move || board.count(status)}</span>
                <button
                    class="btn-secondary column-add-btn"
                    on:click=move |_| set_show_form.update(|open| *open = !*open)
                >
                    {move || if show_form.get() { "Close" } else { "Add" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <TaskForm on_submit=add_task on_cancel=close_form />
            </Show>

            {move || {
                (board.count(status) == 0 && !show_form.get()).then(|| {
                    view! { <p class="column-empty">"No tasks here yet. Add one to get started!"</p> }
                })
            }}

            <div class="column-content">
                // Re-renders when the store changes, in list order
                {move || {
                    board
                        .column(status)
                        .into_iter()
                        .map(|task| view! { <TaskCard task=task /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
