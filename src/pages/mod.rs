pub mod sidebar;
pub mod task_list;

use taskpad::application::Application;

/// Full screen: sidebar, header, then the active list.
pub fn view(app: &Application) -> String {
    let state = app.state();
    let mut out = sidebar::sidebar_view(state);
    out.push('\n');

    match app.active_list() {
        Some(list) => {
            out.push_str(&task_list::header_view(&list.name));
            out.push_str(&task_list::task_list_view(list, app.editing(), app.suggestion()));
        }
        None => out.push_str("Select or create a list to get started.\n"),
    }
    out
}
