use clap::{Args, Parser, Subcommand};

use taskpad::message::Message;

#[derive(Parser)]
#[command(name = "taskpad", about = "Task lists in your terminal, with AI suggestions", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the resulting state as JSON instead of the list view
    #[arg(long, global = true)]
    pub json: bool,

    /// Store task lists in this directory instead of the configured one
    #[arg(long = "data-dir", global = true, env = "TASKPAD_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the active list (default)
    Show,
    /// Show all lists
    Lists,
    /// Create a list and switch to it
    AddList(NameArgs),
    /// Delete a list (the last one cannot be deleted)
    DeleteList(IdArgs),
    /// Switch to another list
    Select(IdArgs),
    /// Add a task to the active list
    Add(TextArgs),
    /// Mark a task done, or open again
    Toggle(IdArgs),
    /// Delete a task from the active list
    Delete(IdArgs),
    /// Change the text of an open task
    Edit(EditArgs),
    /// Ask the AI to break a goal down into tasks
    Suggest(GoalArgs),
    /// Collapse or expand the list sidebar
    Sidebar,
}

#[derive(Args)]
pub struct NameArgs {
    /// List name
    pub name: String,
}

#[derive(Args)]
pub struct IdArgs {
    /// List or task id
    pub id: String,
}

#[derive(Args)]
pub struct TextArgs {
    /// Task text
    pub text: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    pub id: String,
    /// New task text
    pub text: String,
}

#[derive(Args)]
pub struct GoalArgs {
    /// What you want to get done, e.g. "Plan a birthday party"
    pub goal: String,
}

impl Commands {
    /// The intents one invocation stands for, in order.
    pub fn messages(&self) -> Vec<Message> {
        match self {
            Self::Show | Self::Lists => Vec::new(),
            Self::AddList(args) => vec![Message::AddList(args.name.clone())],
            Self::DeleteList(args) => vec![Message::DeleteList(args.id.clone())],
            Self::Select(args) => vec![Message::SelectList(args.id.clone())],
            Self::Add(args) => vec![Message::AddTask(args.text.clone())],
            Self::Toggle(args) => vec![Message::ToggleTask(args.id.clone())],
            Self::Delete(args) => vec![Message::DeleteTask(args.id.clone())],
            Self::Edit(args) => vec![
                Message::StartEdit(args.id.clone()),
                Message::SaveEdit(args.id.clone(), args.text.clone()),
            ],
            Self::Suggest(args) => vec![
                Message::ToggleSuggestions,
                Message::SuggestionGoalChanged(args.goal.clone()),
                Message::SubmitSuggestion,
            ],
            Self::Sidebar => vec![Message::ToggleSidebar],
        }
    }
}
