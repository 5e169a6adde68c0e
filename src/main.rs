use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod pages;

use cli::{Cli, Commands};
use taskpad::application::Application;
use taskpad::config::TaskpadConfig;
use taskpad::message::Message;
use taskpad::store::{FileStorage, MemoryStorage, Storage};
use taskpad::suggest::GeminiClient;

/// Log to the systemd user journal (`journalctl --user -t taskpad -f`).
/// Crate targets at info/debug (per config), everything else at warn.
fn init_logging() {
    struct FilteredJournal {
        inner: systemd_journal_logger::JournalLog,
    }

    impl log::Log for FilteredJournal {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            if metadata.target().starts_with("taskpad") {
                let max = if taskpad::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
                metadata.level() <= max
            } else {
                metadata.level() <= log::LevelFilter::Warn
            }
        }
        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.inner.log(record);
            }
        }
        fn flush(&self) {
            self.inner.flush();
        }
    }

    let journal = match systemd_journal_logger::JournalLog::new() {
        Ok(journal) => journal.with_syslog_identifier("taskpad".to_string()),
        Err(e) => {
            eprintln!("warning: journal logging unavailable: {}", e);
            return;
        }
    };

    if log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).is_ok() {
        // Global max must be Debug so debug logs can pass through when toggled
        log::set_max_level(log::LevelFilter::Debug);
    }
}

/// File storage in the data directory, or session-only storage when the
/// directory cannot be created.
fn open_storage(dir: PathBuf) -> Box<dyn Storage> {
    let storage = FileStorage::new(dir);
    match storage.ensure_dir() {
        Ok(()) => Box::new(storage),
        Err(e) => {
            log::error!(
                "Data directory {} unusable, changes will not be saved: {}",
                storage.dir().display(),
                e
            );
            Box::new(MemoryStorage::default())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    taskpad::set_debug_logging(cli.debug);
    init_logging();

    let mut config = TaskpadConfig::load();
    if let Some(ref dir) = cli.data_dir {
        config.data_directory = PathBuf::from(dir);
    }
    config.debug_logging |= cli.debug;
    taskpad::set_debug_logging(config.debug_logging);

    let backend = GeminiClient::from_config(&config);
    let mut app = Application::new(open_storage(config.data_directory.clone()));

    let command = cli.command.unwrap_or(Commands::Show);
    let mut failed = false;

    for message in command.messages() {
        let is_edit = matches!(message, Message::StartEdit(_));
        let pending = app.update(message);
        if is_edit && app.editing().is_none() {
            eprintln!("error: no open task with that id in the active list");
            failed = true;
            break;
        }
        app.perform(pending, &backend).await;
    }

    if let Some(notice) = app.take_notice() {
        eprintln!("error: {}", notice);
        failed = true;
    }
    if let Some(ref error) = app.suggestion().error {
        eprintln!("error: {}", error);
        failed = true;
    }

    if cli.json {
        match serde_json::to_string_pretty(app.state()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                failed = true;
            }
        }
    } else if matches!(command, Commands::Lists) {
        print!("{}", pages::sidebar::sidebar_view(app.state()));
    } else {
        print!("{}", pages::view(&app));
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
