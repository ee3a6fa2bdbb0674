use std::sync::Arc;

use simpletodo::config::TodoConfig;
use simpletodo::core::controller::TaskListController;
use simpletodo::core::task::Task;
use simpletodo::store::{FileStore, TaskStore};

fn print_section(title: &str, tasks: &[&Task]) {
    if tasks.is_empty() {
        return;
    }
    println!("--- {} ---", title);
    for task in tasks {
        let mark = if task.completed { "x" } else { " " };
        println!(
            "  [{}] {}  ({}, created {})",
            mark,
            task.title,
            task.id,
            task.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    println!();
}

#[tokio::main]
async fn main() {
    if let Ok(journal) = systemd_journal_logger::JournalLog::new() {
        let journal = journal.with_syslog_identifier("simpletodo-check".to_string());
        if journal.install().is_ok() {
            log::set_max_level(log::LevelFilter::Info);
        }
    }

    let (config, issues) = TodoConfig::load();
    for issue in issues {
        log::warn!("{}", issue);
    }
    let store = TaskStore::new(Arc::new(FileStore::new(config.data_directory.clone())));

    println!("=== Saved tasks: {} ===\n", config.store_path().display());

    let loaded = store.load().await;
    if loaded.is_none() {
        println!("No saved tasks (missing or unreadable).");
        return;
    }

    let mut controller = TaskListController::new();
    controller.initialize(loaded);

    let views = controller.views();
    println!(
        "{} pending, {} completed\n",
        views.pending_count(),
        views.completed_count()
    );
    print_section("Pending Tasks", &views.pending);
    print_section("Completed Tasks", &views.completed);
}
