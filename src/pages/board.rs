use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::features::kanban::components::{BoardHeader, DragPreview, KanbanColumn};
use crate::features::kanban::hooks::use_board;
use crate::models::TaskStatus;

#[component]
pub fn BoardPage() -> impl IntoView {
    // Fall back to the defaults when mounted without an App around it
    let config = use_context::<BoardConfig>().unwrap_or_default();

    // The store and drag session are shared by every column and card below
    let board = use_board(&config);
    provide_context(board);

    view! {
        <div class="kanban-page">
            <BoardHeader title=config.title.clone() subtitle=config.subtitle.clone() />

            <div class="kanban-board">
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| view! { <KanbanColumn status=status /> })
                    .collect_view()}
            </div>

            <DragPreview />
        </div>
    }
}
