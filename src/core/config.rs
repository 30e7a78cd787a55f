/// Board-wide settings, provided to the component tree through context.
///
/// Columns are not part of the configuration: they come from the closed
/// [`TaskStatus`](crate::models::TaskStatus) enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// `localStorage` key the task list is written under.
    pub storage_key: String,
    pub title: String,
    pub subtitle: String,
}

pub const DEFAULT_STORAGE_KEY: &str = "bloop-tasks";

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            title: "Bloop - Task Management Board".to_string(),
            subtitle: "Drag tasks between columns to track progress.".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
