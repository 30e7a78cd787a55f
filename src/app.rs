use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::pages::BoardPage;

#[component]
pub fn App(#[prop(optional)] config: Option<BoardConfig>) -> impl IntoView {
    provide_context(config.unwrap_or_default());

    view! {
        <main class="app">
            <BoardPage />
        </main>
    }
}
