use super::work_item::WorkItem;

/// Title shown on every prompt.
pub const PROMPT_SUMMARY: &str = "Tasks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// "Are you still working on this?" for an in-progress item.
    RequestWork { item: String },
    /// The next priority task from the calendar.
    SuggestTask { summary: String },
    /// Nothing in progress and nothing to suggest.
    RequestTask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptAction {
    Yes,
    View,
    Finish,
    Select,
    Postpone,
    AddTask,
}

impl PromptAction {
    pub const ALL: &[PromptAction] = &[
        Self::Yes,
        Self::View,
        Self::Finish,
        Self::Select,
        Self::Postpone,
        Self::AddTask,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::View => "view",
            Self::Finish => "finish",
            Self::Select => "select",
            Self::Postpone => "postpone",
            Self::AddTask => "addtask",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::View => "View",
            Self::Finish => "Finish",
            Self::Select => "Select",
            Self::Postpone => "Delay",
            Self::AddTask => "Add Task",
        }
    }
}

impl Prompt {
    pub fn body(&self) -> String {
        match self {
            Self::RequestWork { item } => {
                format!("Are you still working on this task?\n{}", item)
            }
            Self::SuggestTask { summary } => {
                format!("This is the next priority task:\n{}", summary)
            }
            Self::RequestTask => "What are you working on?".to_string(),
        }
    }

    pub fn actions(&self) -> &'static [PromptAction] {
        match self {
            Self::RequestWork { .. } => {
                &[PromptAction::Yes, PromptAction::View, PromptAction::Finish]
            }
            Self::SuggestTask { .. } => {
                &[PromptAction::Select, PromptAction::Postpone, PromptAction::AddTask]
            }
            Self::RequestTask => &[PromptAction::AddTask],
        }
    }

    pub fn offers(&self, action: PromptAction) -> bool {
        self.actions().contains(&action)
    }
}

/// Pick the prompt for one polling cycle: work in progress first, then the next
/// task, then the open question.
pub fn decide(work: &[WorkItem], next_task: Option<String>) -> Prompt {
    if let Some(item) = work.first() {
        return Prompt::RequestWork { item: item.text.clone() };
    }
    suggest(next_task)
}

/// The prompt shown once current work is finished.
pub fn suggest(next_task: Option<String>) -> Prompt {
    match next_task {
        Some(summary) => Prompt::SuggestTask { summary },
        None => Prompt::RequestTask,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_in_progress_beats_task_data() {
        let work = vec![WorkItem::new("Write report"), WorkItem::new("Buy milk")];
        let prompt = decide(&work, Some("Ship it".into()));
        assert_eq!(prompt, Prompt::RequestWork { item: "Write report".into() });
    }

    #[test]
    fn suggestion_when_idle() {
        let prompt = decide(&[], Some("Ship it".into()));
        assert_eq!(prompt, Prompt::SuggestTask { summary: "Ship it".into() });
    }

    #[test]
    fn open_question_when_nothing_known() {
        assert_eq!(decide(&[], None), Prompt::RequestTask);
    }

    #[test]
    fn action_sets() {
        let work = Prompt::RequestWork { item: "x".into() };
        assert_eq!(work.actions(), &[PromptAction::Yes, PromptAction::View, PromptAction::Finish]);
        assert!(!work.offers(PromptAction::AddTask));
        assert_eq!(Prompt::RequestTask.actions(), &[PromptAction::AddTask]);
        assert!(Prompt::SuggestTask { summary: "x".into() }.offers(PromptAction::Select));
    }

    #[test]
    fn keys_round_trip() {
        for action in PromptAction::ALL {
            assert_eq!(PromptAction::from_key(action.key()), Some(*action));
        }
        assert_eq!(PromptAction::from_key("default"), None);
    }

    #[test]
    fn bodies_carry_payload() {
        let prompt = Prompt::SuggestTask { summary: "Ship it".into() };
        assert_eq!(prompt.body(), "This is the next priority task:\nShip it");
        assert_eq!(Prompt::RequestTask.body(), "What are you working on?");
    }
}
