use farmhand_types::{Language, Task, WeeklyTasks};

use crate::screen::Screen;

/// Top-level application message enum.
///
/// All user interactions and load results flow through this enum.
#[derive(Debug, Clone)]
pub enum Message {
    // ========== Navigation ==========
    /// Navigate to a screen
    Navigate(Screen),

    // ========== Localization ==========
    /// Interface language picked in the sidebar
    LanguageSelected(Language),

    // ========== Data loading ==========
    /// Today's tasks finished loading
    TasksLoaded(Result<Vec<Task>, String>),
    /// Week-ahead preview finished loading (None when the host has no
    /// schedule at all, distinct from an empty one)
    WeeklyTasksLoaded(Result<Option<WeeklyTasks>, String>),
    /// Reload both task feeds
    Refresh,

    // ========== Task actions ==========
    /// Checkbox change on the task with the given id
    ToggleTask(String),

    // ========== Animation ==========
    /// Skeleton pulse tick while data is loading
    SkeletonTick,
}
