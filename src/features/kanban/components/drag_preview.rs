use leptos::prelude::*;

use crate::features::kanban::hooks::expect_board;

// Floating copy of the card being dragged, taken from the snapshot the
// drag session captured at pick-up.
#[component]
pub fn DragPreview() -> impl IntoView {
    let board = expect_board();

    move || {
        board.drag.with(|session| session.active().cloned()).map(|task| {
            view! {
                <div class="drag-preview">
                    <span class="drag-preview-label">"Moving"</span>
                    <h4>{task.title}</h4>
                    <span class="drag-preview-status">{task.status.as_str()}</span>
                </div>
            }
        })
    }
}
