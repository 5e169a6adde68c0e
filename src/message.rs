use crate::core::task::TaskDraft;

/// A user intent, applied by [`crate::application::Application::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Lists
    SelectList(String),
    AddList(String),
    DeleteList(String),
    ToggleSidebar,

    // Task CRUD (active list)
    AddTask(String),
    ToggleTask(String),
    DeleteTask(String),

    // Editing
    StartEdit(String),
    CancelEdit,
    SaveEdit(String, String),

    // AI suggestions
    ToggleSuggestions,
    SuggestionGoalChanged(String),
    SubmitSuggestion,
    /// Outcome of a suggestion request for the list it was submitted from.
    SuggestionsReady(String, Result<Vec<TaskDraft>, String>),
}

/// Follow-up work requested by an update, run by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Suggest { list_id: String, goal: String },
}
