use serde::{Deserialize, Serialize};

use super::id::fresh_id;
use super::task::Task;
use super::task_list::TaskList;

pub const DEFAULT_LIST_NAME: &str = "My Tasks";

/// Everything the task manager persists: the lists, which one is active, and
/// the sidebar preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub lists: Vec<TaskList>,
    pub active_list_id: String,
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            lists: initial_lists(),
            active_list_id: "1".to_string(),
            sidebar_collapsed: false,
        }
    }
}

/// First-run content shown before anything has been saved.
pub fn initial_lists() -> Vec<TaskList> {
    let welcome = [
        ("1-1", "Welcome to your new task manager!", false),
        ("1-2", "Click the checkbox to complete a task", false),
        ("1-3", "Use the \"+\" button to add a new task", false),
        ("1-4", "Create new lists from the sidebar", true),
    ];

    let mut my_tasks = TaskList::new("1", DEFAULT_LIST_NAME);
    my_tasks.tasks = welcome
        .iter()
        .map(|(id, text, completed)| Task {
            id: id.to_string(),
            text: text.to_string(),
            completed: *completed,
        })
        .collect();

    vec![my_tasks, TaskList::new("2", "Shopping List")]
}

impl AppState {
    pub fn new(lists: Vec<TaskList>, active_list_id: impl Into<String>, sidebar_collapsed: bool) -> Self {
        Self {
            lists,
            active_list_id: active_list_id.into(),
            sidebar_collapsed,
        }
    }

    pub fn list(&self, id: &str) -> Option<&TaskList> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn has_list(&self, id: &str) -> bool {
        self.list(id).is_some()
    }

    /// The active list. Always `Some` on a repaired state.
    pub fn active_list(&self) -> Option<&TaskList> {
        self.list(&self.active_list_id)
    }

    pub fn is_consistent(&self) -> bool {
        self.active_list().is_some()
    }

    /// Bring the active id back in line with the list collection.
    ///
    /// A dangling active id falls back to the first list; an empty collection
    /// gets a fresh default list. Repairing a consistent state returns it
    /// unchanged.
    pub fn repaired(self) -> Self {
        if self.is_consistent() {
            return self;
        }

        if let Some(first) = self.lists.first() {
            log::warn!(
                "Active list {:?} not found, selecting {:?}",
                self.active_list_id,
                first.id
            );
            let active_list_id = first.id.clone();
            return Self {
                active_list_id,
                ..self
            };
        }

        let id = fresh_id(None, |_| false);
        log::warn!("No task lists found, creating default list {}", id);
        Self {
            lists: vec![TaskList::new(id.clone(), DEFAULT_LIST_NAME)],
            active_list_id: id,
            sidebar_collapsed: self.sidebar_collapsed,
        }
    }

    /// Same state with the list `id` replaced by `f(list)`.
    pub(crate) fn map_list(&self, id: &str, f: impl FnOnce(&TaskList) -> TaskList) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.lists.iter_mut().find(|l| l.id == id) {
            *slot = f(slot);
        }
        next
    }
}
