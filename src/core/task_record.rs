/// A to-do entry read from the task calendar. Only the fields the prompter uses are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskRecord {
    pub summary: String,
    /// Higher is more urgent.
    pub priority: Option<u32>,
    pub percent_complete: Option<u32>,
}

impl TaskRecord {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_percent_complete(mut self, percent: u32) -> Self {
        self.percent_complete = Some(percent);
        self
    }

    pub fn is_open(&self) -> bool {
        self.percent_complete != Some(100)
    }

    /// Eligible for suggestion: prioritized and not finished.
    pub fn is_candidate(&self) -> bool {
        self.priority.is_some() && self.is_open()
    }
}

/// The open, prioritized record with the highest priority. Ties go to the earliest record.
pub fn highest_priority(records: &[TaskRecord]) -> Option<&TaskRecord> {
    let mut best: Option<(&TaskRecord, u32)> = None;
    for record in records.iter().filter(|r| r.is_candidate()) {
        let Some(priority) = record.priority else { continue };
        match best {
            Some((_, top)) if top >= priority => {}
            _ => best = Some((record, priority)),
        }
    }
    best.map(|(record, _)| record)
}
