pub mod columns;
pub mod drag_session;
pub mod task_store;

#[cfg(test)]
pub(crate) mod step_clock;

pub use columns::*;
pub use drag_session::*;
pub use task_store::*;
