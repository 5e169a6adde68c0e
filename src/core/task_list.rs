use serde::{Deserialize, Serialize};

use super::task::Task;

/// A named, ordered collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn has_task(&self, id: &str) -> bool {
        self.task(id).is_some()
    }

    pub fn open_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed)
    }

    pub fn completion_ratio(&self) -> (usize, usize) {
        (self.completed_tasks().count(), self.tasks.len())
    }

    /// Same list with its task sequence replaced.
    pub fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            tasks,
        }
    }
}
