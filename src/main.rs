use cosmic::app::Settings;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::Limits;

mod application;
mod message;
mod pages;

use nudge::config;
use nudge::tool::ReTool;

use application::{Flags, Nudge};
use config::{CONFIG_VERSION, NudgeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cosmic_cfg = cosmic::cosmic_config::Config::new("dev.nudge.app", CONFIG_VERSION)
        .map_err(|e| format!("failed to open cosmic config: {:?}", e))?;
    let config = NudgeConfig::get_entry(&cosmic_cfg).unwrap_or_else(|(_, cfg)| cfg);

    // Set up logging to the systemd user journal (`journalctl --user -t nudge -f`).
    // Wrapper filters: nudge crate at info/debug (per config), everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                let target = metadata.target();
                if target.starts_with("nudge") {
                    let max = if nudge::debug_logging() {
                        log::LevelFilter::Debug
                    } else {
                        log::LevelFilter::Info
                    };
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

        let journal = systemd_journal_logger::JournalLog::new()?
            .with_syslog_identifier("nudge".to_string());

        nudge::set_debug_logging(config.debug_logging);

        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal }))?;
        // Global max must be Debug so nudge debug logs can pass through when toggled
        log::set_max_level(log::LevelFilter::Debug);
    }

    let tool = match ReTool::from_config(&config) {
        Ok(tool) => tool,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("nudge: {}", e);
            return Err(e.into());
        }
    };

    let mut settings = Settings::default();
    settings = settings.size_limits(Limits::NONE.min_width(360.0).min_height(240.0));

    let flags = Flags { config, tool };
    cosmic::app::run::<Nudge>(settings, flags)?;

    Ok(())
}
