use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::bullet::HomeLookup;

pub const CONFIG_VERSION: u64 = 1;

fn default_task_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("evolution")
        .join("tasks")
        .join("system")
        .join("tasks.ics")
}

fn default_rc_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("~/.rerc"), PathBuf::from("/etc/rerc")]
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct NudgeConfig {
    /// External work-log tool, looked up on `PATH` unless it contains a `/`.
    pub tool: String,
    /// Leading lines of the tool's dump that are banner text, not work.
    pub header_lines: usize,
    pub poll_interval_secs: u64,
    /// rc files searched in order for a `BULLET => '<char>'` assignment.
    pub rc_paths: Vec<PathBuf>,
    pub home_lookup: HomeLookup,
    pub task_file: PathBuf,
    /// `EDITOR` for the tool when dumping or appending; must print and exit.
    pub dump_editor: String,
    /// `EDITOR` for the tool when discovering its backing file.
    pub path_editor: String,
    pub notifier: String,
    pub debug_logging: bool,
}

impl Default for NudgeConfig {
    fn default() -> Self {
        Self {
            tool: "re".into(),
            header_lines: 1,
            poll_interval_secs: 1200,
            rc_paths: default_rc_paths(),
            home_lookup: HomeLookup::Expanded,
            task_file: default_task_file(),
            dump_editor: "cat".into(),
            path_editor: "echo".into(),
            notifier: "notify-send".into(),
            debug_logging: false,
        }
    }
}

impl NudgeConfig {
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs.max(1))
    }
}
