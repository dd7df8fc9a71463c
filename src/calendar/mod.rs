pub mod ical;
pub mod vtodo;

use std::path::{Path, PathBuf};

use crate::core::task_record::{TaskRecord, highest_priority};

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed calendar data at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Where the next suggested task comes from.
pub trait PrioritySource {
    fn highest_priority_task(&self) -> Result<Option<String>, CalendarError>;
}

/// A calendar file of VTODOs maintained by some other application.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All to-dos in the file. A missing file has none.
    pub fn load(&self) -> Result<Vec<TaskRecord>, CalendarError> {
        if !self.path.exists() {
            log::debug!("Task file {} does not exist", self.path.display());
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| CalendarError::Io {
            path: self.path.clone(),
            source,
        })?;
        vtodo::parse_todos(&content)
    }
}

impl PrioritySource for TaskFile {
    fn highest_priority_task(&self) -> Result<Option<String>, CalendarError> {
        let records = self.load()?;
        Ok(highest_priority(&records).map(|r| r.summary.clone()))
    }
}
