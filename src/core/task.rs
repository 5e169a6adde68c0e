use serde::{Deserialize, Serialize};

/// A single actionable item inside a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Completed tasks are read-only until reopened.
    pub fn is_editable(&self) -> bool {
        !self.completed
    }
}

/// A task without an id yet, as produced by the suggestion client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub text: String,
    pub completed: bool,
}

impl TaskDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_leaves_original_untouched() {
        let task = Task::new("a", "Water plants");
        let done = task.toggled();
        assert!(!task.completed);
        assert!(done.completed);
        assert_eq!(done.text, "Water plants");
        assert!(done.toggled() == task);
    }

    #[test]
    fn completed_tasks_are_not_editable() {
        let task = Task::new("a", "Water plants").toggled();
        assert!(!task.is_editable());
    }

    #[test]
    fn deserializes_original_shape() {
        let task: Task =
            serde_json::from_str(r#"{"id":"1-1","text":"Welcome","completed":true}"#).unwrap();
        assert_eq!(task.id, "1-1");
        assert!(task.completed);
    }
}
