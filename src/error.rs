use thiserror::Error;

/// Why a list or task mutation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Empty or whitespace-only input. Callers treat this as a silent no-op.
    #[error("{0} must not be empty")]
    Validation(&'static str),
    /// The mutation would break a state invariant; shown to the user.
    #[error("{0}")]
    InvariantViolation(String),
    #[error("task {0} is completed and cannot be edited")]
    EditCompleted(String),
}

impl StateError {
    /// Whether the refusal should be reported rather than swallowed.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}

/// Terminal failure of a suggestion request.
#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("API key is not configured.")]
    Configuration,
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("no text in API response: {0}")]
    MalformedResponse(String),
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("response has no \"tasks\" array")]
    MissingTasks,
}

impl SuggestionError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration)
    }

    /// Message shown next to the suggestion form.
    pub fn user_message(&self) -> String {
        if self.is_configuration() {
            self.to_string()
        } else {
            format!("Failed to get task suggestions from AI. ({})", self)
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
