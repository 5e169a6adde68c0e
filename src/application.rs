//! The application driver.
//!
//! Owns the persisted [`AppState`] plus session-only UI state (edit mode,
//! suggestion panel, notices). Each [`Message`] is turned into a new state by
//! the pure operations in [`crate::core::ops`], repaired, and written through
//! to storage before `update` returns.

use crate::core::ops;
use crate::core::state::AppState;
use crate::core::task_list::TaskList;
use crate::error::StateError;
use crate::message::{Command, Message};
use crate::store::{self, Storage};
use crate::suggest::{self, ModelBackend};

/// Session state of the suggestion form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionPanel {
    pub open: bool,
    pub goal: String,
    /// A request is in flight; further submissions are ignored.
    pub loading: bool,
    pub error: Option<String>,
}

pub struct Application {
    state: AppState,
    storage: Box<dyn Storage>,
    editing: Option<String>,
    suggestion: SuggestionPanel,
    notice: Option<String>,
}

impl Application {
    /// Load persisted state from `storage` and repair it before first use.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let loaded = store::load_state(storage.as_ref());
        let state = loaded.clone().repaired();

        let mut app = Self {
            state,
            storage,
            editing: None,
            suggestion: SuggestionPanel::default(),
            notice: None,
        };
        if app.state != loaded {
            app.persist();
        }
        log::info!(
            "Loaded {} task lists, active {:?}",
            app.state.lists.len(),
            app.state.active_list_id
        );
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn active_list(&self) -> Option<&TaskList> {
        self.state.active_list()
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn suggestion(&self) -> &SuggestionPanel {
        &self.suggestion
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    fn persist(&mut self) {
        store::save_state(self.storage.as_mut(), &self.state);
    }

    /// Install `next` as the current state: repair, then write through.
    fn commit(&mut self, next: AppState) {
        let next = next.repaired();
        if next == self.state {
            return;
        }
        self.state = next;
        if let Some(id) = self.editing.as_deref() {
            let still_open = self
                .state
                .active_list()
                .and_then(|l| l.task(id))
                .is_some_and(|t| t.is_editable());
            if !still_open {
                self.editing = None;
            }
        }
        self.persist();
    }

    fn apply(&mut self, result: Result<AppState, StateError>) {
        match result {
            Ok(next) => self.commit(next),
            Err(e) if e.is_user_facing() => {
                log::warn!("Refused: {}", e);
                self.notice = Some(e.to_string());
            }
            Err(e) => log::debug!("Ignored: {}", e),
        }
    }

    pub fn update(&mut self, message: Message) -> Command {
        match message {
            Message::SelectList(id) => {
                self.editing = None;
                let next = ops::select_list(&self.state, &id);
                self.commit(next);
            }

            Message::AddList(name) => {
                let next = ops::add_list(&self.state, &name);
                self.apply(next);
            }

            Message::DeleteList(id) => {
                let next = ops::delete_list(&self.state, &id);
                self.apply(next);
            }

            Message::ToggleSidebar => {
                let next = ops::toggle_sidebar(&self.state);
                self.commit(next);
            }

            Message::AddTask(text) => {
                let next = ops::add_task(&self.state, &text);
                self.apply(next);
            }

            Message::ToggleTask(id) => {
                let next = ops::toggle_task(&self.state, &id);
                self.commit(next);
            }

            Message::DeleteTask(id) => {
                let next = ops::delete_task(&self.state, &id);
                self.commit(next);
            }

            Message::StartEdit(id) => {
                let editable = self
                    .active_list()
                    .and_then(|l| l.task(&id))
                    .is_some_and(|t| t.is_editable());
                if editable {
                    self.editing = Some(id);
                }
            }

            Message::CancelEdit => {
                self.editing = None;
            }

            Message::SaveEdit(id, text) => {
                let next = ops::edit_task(&self.state, &id, &text);
                self.apply(next);
                self.editing = None;
            }

            Message::ToggleSuggestions => {
                self.suggestion.open = !self.suggestion.open;
            }

            Message::SuggestionGoalChanged(goal) => {
                self.suggestion.goal = goal;
            }

            Message::SubmitSuggestion => {
                let goal = self.suggestion.goal.trim().to_string();
                if goal.is_empty() || self.suggestion.loading {
                    return Command::None;
                }
                self.suggestion.loading = true;
                self.suggestion.error = None;
                return Command::Suggest {
                    list_id: self.state.active_list_id.clone(),
                    goal,
                };
            }

            Message::SuggestionsReady(list_id, result) => {
                self.suggestion.loading = false;
                match result {
                    Ok(_) if !self.state.has_list(&list_id) => {
                        log::warn!("List {} was deleted before its suggestions arrived", list_id);
                        self.suggestion.error =
                            Some("The list these suggestions were for no longer exists.".to_string());
                    }
                    Ok(drafts) => {
                        let next = ops::add_drafts(&self.state, &list_id, drafts);
                        self.commit(next);
                        self.suggestion.goal.clear();
                        self.suggestion.open = false;
                    }
                    Err(e) => {
                        log::error!("Task suggestion failed: {}", e);
                        self.suggestion.error = Some(e);
                    }
                }
            }
        }

        Command::None
    }

    /// Run a command returned by [`Application::update`] and feed its
    /// outcome back in.
    pub async fn perform<B: ModelBackend>(&mut self, command: Command, backend: &B) {
        if let Command::Suggest { list_id, goal } = command {
            let result = suggest::suggest(backend, &goal)
                .await
                .map_err(|e| e.user_message());
            self.update(Message::SuggestionsReady(list_id, result));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ops::LAST_LIST_MESSAGE;
    use crate::core::task::TaskDraft;
    use crate::store::{ACTIVE_LIST_KEY, LISTS_KEY, MemoryStorage};
    use crate::suggest::tests::Canned;
    use pretty_assertions::assert_eq;

    fn app() -> Application {
        Application::new(Box::new(MemoryStorage::default()))
    }

    fn active_texts(app: &Application) -> Vec<String> {
        app.active_list()
            .unwrap()
            .tasks
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn loads_first_run_defaults() {
        let app = app();
        assert_eq!(app.state(), &AppState::default());
        assert_eq!(app.active_list().unwrap().name, "My Tasks");
    }

    #[test]
    fn repairs_dangling_active_id_on_load() {
        let mut storage = MemoryStorage::default();
        storage.set(ACTIVE_LIST_KEY, "\"deleted\"").unwrap();
        let app = Application::new(Box::new(storage));
        assert_eq!(app.state().active_list_id, "1");
    }

    #[test]
    fn repairs_empty_collection_on_load() {
        let mut storage = MemoryStorage::default();
        storage.set(LISTS_KEY, "[]").unwrap();
        let app = Application::new(Box::new(storage));
        assert_eq!(app.state().lists.len(), 1);
        assert!(app.state().is_consistent());
    }

    #[test]
    fn deleting_last_list_sets_notice() {
        let mut app = app();
        app.update(Message::DeleteList("2".into()));
        assert!(app.notice().is_none());
        let before = app.state().clone();

        app.update(Message::DeleteList("1".into()));
        assert_eq!(app.state(), &before);
        assert_eq!(app.take_notice().as_deref(), Some(LAST_LIST_MESSAGE));
        assert!(app.notice().is_none());
    }

    #[test]
    fn blank_input_is_silently_ignored() {
        let mut app = app();
        let before = app.state().clone();
        app.update(Message::AddList("  ".into()));
        app.update(Message::AddTask("".into()));
        assert_eq!(app.state(), &before);
        assert!(app.notice().is_none());
    }

    #[test]
    fn edit_session_covers_one_open_task() {
        let mut app = app();
        app.update(Message::StartEdit("1-4".into()));
        assert_eq!(app.editing(), None);

        app.update(Message::StartEdit("1-1".into()));
        app.update(Message::StartEdit("1-2".into()));
        assert_eq!(app.editing(), Some("1-2"));

        app.update(Message::SaveEdit("1-2".into(), "   ".into()));
        assert_eq!(app.editing(), None);
        assert_eq!(active_texts(&app)[1], "Click the checkbox to complete a task");

        app.update(Message::StartEdit("1-2".into()));
        app.update(Message::SaveEdit("1-2".into(), "Tick the box".into()));
        assert_eq!(app.editing(), None);
        assert_eq!(active_texts(&app)[1], "Tick the box");
    }

    #[test]
    fn completing_the_edited_task_closes_the_editor() {
        let mut app = app();
        app.update(Message::StartEdit("1-1".into()));
        app.update(Message::ToggleTask("1-1".into()));
        assert_eq!(app.editing(), None);
    }

    #[test]
    fn empty_goal_does_not_submit() {
        let mut app = app();
        app.update(Message::ToggleSuggestions);
        app.update(Message::SuggestionGoalChanged("   ".into()));
        assert_eq!(app.update(Message::SubmitSuggestion), Command::None);
        assert!(!app.suggestion().loading);
    }

    #[test]
    fn second_submission_while_loading_is_ignored() {
        let mut app = app();
        app.update(Message::SuggestionGoalChanged("Plan a birthday party".into()));
        let first = app.update(Message::SubmitSuggestion);
        assert_eq!(
            first,
            Command::Suggest {
                list_id: "1".into(),
                goal: "Plan a birthday party".into()
            }
        );
        assert!(app.suggestion().loading);
        assert_eq!(app.update(Message::SubmitSuggestion), Command::None);
    }

    #[test]
    fn suggestions_land_in_the_submitting_list() {
        let mut app = app();
        app.update(Message::SuggestionGoalChanged("Stock up".into()));
        let command = app.update(Message::SubmitSuggestion);
        app.update(Message::SelectList("2".into()));

        if let Command::Suggest { list_id, .. } = command {
            app.update(Message::SuggestionsReady(
                list_id,
                Ok(vec![TaskDraft::new("Milk"), TaskDraft::new("Bread")]),
            ));
        }
        assert_eq!(app.state().list("1").unwrap().tasks.len(), 6);
        assert!(app.state().list("2").unwrap().tasks.is_empty());
    }

    #[test]
    fn suggestions_for_a_deleted_list_keep_the_panel_open() {
        let mut app = app();
        app.update(Message::SelectList("2".into()));
        app.update(Message::ToggleSuggestions);
        app.update(Message::SuggestionGoalChanged("Stock up".into()));
        let command = app.update(Message::SubmitSuggestion);
        app.update(Message::DeleteList("2".into()));
        let before = app.state().clone();

        if let Command::Suggest { list_id, .. } = command {
            app.update(Message::SuggestionsReady(list_id, Ok(vec![TaskDraft::new("Milk")])));
        }
        assert_eq!(app.state(), &before);
        let panel = app.suggestion();
        assert!(panel.open);
        assert!(!panel.loading);
        assert_eq!(panel.goal, "Stock up");
        assert!(panel.error.is_some());
    }

    #[tokio::test]
    async fn successful_suggestion_appends_and_closes_panel() {
        let mut app = app();
        let backend = Canned::ok(r#"{"tasks":["Book venue","Send invitations","Order cake"]}"#);

        app.update(Message::ToggleSuggestions);
        app.update(Message::SuggestionGoalChanged("Plan a birthday party".into()));
        let command = app.update(Message::SubmitSuggestion);
        app.perform(command, &backend).await;

        let texts = active_texts(&app);
        assert_eq!(&texts[4..], &["Book venue", "Send invitations", "Order cake"]);
        let tasks = &app.active_list().unwrap().tasks;
        assert!(tasks[4..].iter().all(|t| !t.completed));
        assert_eq!(app.suggestion(), &SuggestionPanel::default());
    }

    #[tokio::test]
    async fn malformed_suggestion_keeps_tasks_and_reports() {
        let mut app = app();
        let backend = Canned::ok("not json");
        let before = app.state().clone();

        app.update(Message::ToggleSuggestions);
        app.update(Message::SuggestionGoalChanged("Plan a birthday party".into()));
        let command = app.update(Message::SubmitSuggestion);
        app.perform(command, &backend).await;

        assert_eq!(app.state(), &before);
        let panel = app.suggestion();
        assert!(panel.open);
        assert!(!panel.loading);
        assert_eq!(panel.goal, "Plan a birthday party");
        assert!(
            panel
                .error
                .as_deref()
                .unwrap()
                .starts_with("Failed to get task suggestions from AI.")
        );
    }
}
