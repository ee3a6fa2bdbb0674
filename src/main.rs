use cosmic::app::Settings;
use cosmic::iced::Limits;

mod application;
mod components;
mod localize;
mod message;
mod pages;

use simpletodo::config;
use simpletodo::core;
use simpletodo::error;
use simpletodo::store;

use application::{Flags, SimpleTodo};
use config::TodoConfig;

/// Journal logger that lets this app's targets through at info/debug (per
/// config) and everything else at warn.
struct FilteredJournal {
    inner: systemd_journal_logger::JournalLog,
}

/// Both the library and this binary log under `simpletodo::*` targets.
fn max_level_for(target: &str, debug: bool) -> log::LevelFilter {
    if !target.starts_with("simpletodo") {
        log::LevelFilter::Warn
    } else if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

impl log::Log for FilteredJournal {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= max_level_for(metadata.target(), simpletodo::debug_logging())
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

/// Log to the systemd user journal (`journalctl --user -t simpletodo -f`).
fn init_logging(config: &TodoConfig) {
    simpletodo::set_debug_logging(config.debug_logging);

    let journal = match systemd_journal_logger::JournalLog::new() {
        Ok(journal) => journal.with_syslog_identifier("simpletodo".to_string()),
        Err(e) => {
            eprintln!("simpletodo: journal unavailable, logging disabled: {}", e);
            return;
        }
    };

    if let Err(e) = log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })) {
        eprintln!("simpletodo: failed to install logger: {}", e);
        return;
    }
    // Global max must be Debug so debug logs can pass through when toggled
    log::set_max_level(log::LevelFilter::Debug);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, issues) = TodoConfig::load();

    init_logging(&config);
    for issue in issues {
        log::warn!("{}", issue);
    }
    localize::localize();

    let settings = Settings::default().size_limits(Limits::NONE.min_width(360.0).min_height(480.0));

    cosmic::app::run::<SimpleTodo>(settings, Flags { config })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn app_targets_follow_debug_flag() {
        for target in ["simpletodo", "simpletodo::application", "simpletodo::store"] {
            assert_eq!(max_level_for(target, false), LevelFilter::Info);
            assert_eq!(max_level_for(target, true), LevelFilter::Debug);
        }
    }

    #[test]
    fn foreign_targets_stay_at_warn() {
        for target in ["wgpu_core", "cosmic::app", "iced_winit", "zbus"] {
            assert_eq!(max_level_for(target, false), LevelFilter::Warn);
            assert_eq!(max_level_for(target, true), LevelFilter::Warn);
        }
    }
}
