pub mod re;

use std::path::PathBuf;

use crate::core::work_item::WorkItem;

pub use re::ReTool;

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("work-log tool `{0}` not found on PATH")]
    NotFound(String),
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("{0} did not report a file path")]
    NoTargetPath(String),
}

/// The external work log, seen as a repository of in-progress items.
pub trait WorkLog {
    /// Raw text of the log, as shown to the user for editing.
    fn dump(&self) -> Result<String, ToolError>;

    fn list_items(&self) -> Result<Vec<WorkItem>, ToolError>;

    fn append_item(&self, text: &str) -> Result<(), ToolError>;

    /// The file the tool edits, for writing the log back wholesale.
    fn discover_target_path(&self) -> Result<PathBuf, ToolError>;
}
