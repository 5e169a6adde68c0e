use taskpad::application::SuggestionPanel;
use taskpad::core::task::Task;
use taskpad::core::task_list::TaskList;

pub fn header_view(name: &str) -> String {
    let title = if name.trim().is_empty() { "Tasks" } else { name };
    format!("== {} ==\n", title)
}

fn task_row(task: &Task, editing: bool) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let edit = if editing { " (editing)" } else { "" };
    format!("  {} {}{}  [{}]\n", check, task.text, edit, task.id)
}

fn suggestion_view(panel: &SuggestionPanel) -> String {
    let mut out = String::from("\nSuggest tasks with AI\n");
    if panel.loading {
        out.push_str(&format!("  Thinking about \"{}\"...\n", panel.goal));
    } else if !panel.goal.is_empty() {
        out.push_str(&format!("  Goal: {}\n", panel.goal));
    }
    if let Some(ref error) = panel.error {
        out.push_str(&format!("  ! {}\n", error));
    }
    out
}

/// Open tasks first, then a separate completed section.
pub fn task_list_view(list: &TaskList, editing: Option<&str>, panel: &SuggestionPanel) -> String {
    let mut out = String::new();

    for task in list.open_tasks() {
        out.push_str(&task_row(task, editing == Some(task.id.as_str())));
    }

    let completed: Vec<&Task> = list.completed_tasks().collect();
    if !completed.is_empty() {
        out.push_str(&format!("\nCompleted ({})\n", completed.len()));
        for task in completed {
            out.push_str(&task_row(task, false));
        }
    }

    if list.tasks.is_empty() && !panel.open {
        out.push_str("  No tasks yet. Add one, or let AI suggest some.\n");
    }

    if panel.open {
        out.push_str(&suggestion_view(panel));
    }
    out
}
