pub mod column;
pub mod drag_preview;
pub mod header;
pub mod task_card;
pub mod task_form;

pub use column::KanbanColumn;
pub use drag_preview::DragPreview;
pub use header::BoardHeader;
pub use task_card::TaskCard;
pub use task_form::TaskForm;
