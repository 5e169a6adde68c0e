//! Pure state transitions for lists and tasks.
//!
//! Every operation takes the current state by reference and returns the next
//! one; the input is never modified. Task operations act on the active list.

use super::id::fresh_id;
use super::state::AppState;
use super::task::{Task, TaskDraft};
use super::task_list::TaskList;
use crate::error::StateError;

pub const LAST_LIST_MESSAGE: &str = "You must have at least one task list.";

fn non_empty<'a>(input: &'a str, what: &'static str) -> Result<&'a str, StateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(StateError::Validation(what))
    } else {
        Ok(trimmed)
    }
}

fn new_task_id(list: &TaskList) -> String {
    fresh_id(Some(&list.id), |id| list.has_task(id))
}

/// Append a new empty list and make it active.
pub fn add_list(state: &AppState, name: &str) -> Result<AppState, StateError> {
    let name = non_empty(name, "List name")?;
    let id = fresh_id(None, |id| state.has_list(id));

    let mut next = state.clone();
    next.lists.push(TaskList::new(id.clone(), name));
    next.active_list_id = id;
    Ok(next)
}

/// Remove a list. The last remaining list can never be deleted.
pub fn delete_list(state: &AppState, id: &str) -> Result<AppState, StateError> {
    if state.lists.len() <= 1 {
        return Err(StateError::InvariantViolation(LAST_LIST_MESSAGE.to_string()));
    }

    let mut next = state.clone();
    next.lists.retain(|l| l.id != id);
    if next.active_list_id == id {
        if let Some(first) = next.lists.first() {
            next.active_list_id = first.id.clone();
        }
    }
    Ok(next)
}

/// Point the active id at `id`. Dangling ids are left for repair to fix.
pub fn select_list(state: &AppState, id: &str) -> AppState {
    AppState {
        active_list_id: id.to_string(),
        ..state.clone()
    }
}

pub fn toggle_sidebar(state: &AppState) -> AppState {
    AppState {
        sidebar_collapsed: !state.sidebar_collapsed,
        ..state.clone()
    }
}

fn map_active_tasks(state: &AppState, f: impl FnOnce(&TaskList) -> Vec<Task>) -> AppState {
    let active = state.active_list_id.clone();
    state.map_list(&active, |list| list.with_tasks(f(list)))
}

/// Append a new open task to the active list.
pub fn add_task(state: &AppState, text: &str) -> Result<AppState, StateError> {
    let text = non_empty(text, "Task text")?;
    Ok(map_active_tasks(state, |list| {
        let mut tasks = list.tasks.clone();
        tasks.push(Task::new(new_task_id(list), text));
        tasks
    }))
}

/// Flip completion of one task in the active list. Unknown ids are ignored.
pub fn toggle_task(state: &AppState, id: &str) -> AppState {
    map_active_tasks(state, |list| {
        list.tasks
            .iter()
            .map(|t| if t.id == id { t.toggled() } else { t.clone() })
            .collect()
    })
}

/// Remove one task from the active list. Unknown ids are ignored.
pub fn delete_task(state: &AppState, id: &str) -> AppState {
    map_active_tasks(state, |list| {
        list.tasks.iter().filter(|t| t.id != id).cloned().collect()
    })
}

/// Replace the text of an open task in the active list.
///
/// Empty text is rejected and leaves the task as it was. Completed tasks
/// cannot be edited.
pub fn edit_task(state: &AppState, id: &str, new_text: &str) -> Result<AppState, StateError> {
    if let Some(task) = state.active_list().and_then(|l| l.task(id)) {
        if !task.is_editable() {
            return Err(StateError::EditCompleted(id.to_string()));
        }
    }
    let text = non_empty(new_text, "Task text")?;

    Ok(map_active_tasks(state, |list| {
        list.tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    Task {
                        text: text.to_string(),
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect()
    }))
}

/// Append suggested drafts to `list_id`, minting an id for each.
///
/// Drafts with blank text are dropped. Returns the state unchanged when the
/// list no longer exists.
pub fn add_drafts(state: &AppState, list_id: &str, drafts: Vec<TaskDraft>) -> AppState {
    state.map_list(list_id, |list| {
        let mut scratch = list.clone();
        for draft in drafts {
            let text = draft.text.trim();
            if text.is_empty() {
                continue;
            }
            let id = new_task_id(&scratch);
            scratch.tasks.push(Task::new(id, text));
        }
        scratch
    })
}
