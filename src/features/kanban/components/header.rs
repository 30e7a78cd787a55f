use leptos::prelude::*;

use crate::features::kanban::hooks::expect_board;

#[component]
pub fn BoardHeader(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    let board = expect_board();

    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>{title}</h1>
                <p class="kanban-subtitle">{subtitle}</p>
            </div>
            <span class="task-total">
                {move || board.store.with(|store| match store.len() {
                    1 => "1 task".to_string(),
                    n => format!("{n} tasks"),
                })}
            </span>
        </header>
    }
}
