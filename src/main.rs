use bloop_board::{logging, App};
use leptos::prelude::*;

fn main() {
    // Surface Rust panics in the browser console instead of "unreachable"
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    logging::init(level);

    leptos::mount::mount_to_body(|| view! { <App /> });
}
