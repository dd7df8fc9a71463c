use std::path::PathBuf;

use uuid::Uuid;

use super::prompt::{Prompt, PromptAction, decide, suggest};
use super::registry::Registry;
use super::work_item::{WorkItem, single_line};
use crate::calendar::{CalendarError, PrioritySource};
use crate::tool::{ToolError, WorkLog};

pub const WORK_LOG_TITLE: &str = "Work Log";
pub const ADD_TASK_TITLE: &str = "Add Task";

/// What saving an editor does with its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Add the text to the work log as one new item.
    Append,
    /// Replace the work log's backing file with the text.
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub title: String,
    pub mode: SaveMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Startup and every timer tick.
    Poll,
    /// A notification went away, with the action the user picked if any.
    Answered { prompt: Uuid, action: Option<PromptAction> },
    Save { editor: Uuid, text: String },
    CloseEditor(Uuid),
}

/// Work for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowPrompt { id: Uuid, prompt: Prompt },
    OpenEditor { id: Uuid, title: String, text: String },
    CloseEditor(Uuid),
}

#[derive(Debug, thiserror::Error)]
pub enum PrompterError {
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no open editor {0}")]
    UnknownEditor(Uuid),
}

/// Owns the live prompts and editors and turns events into effects.
pub struct Prompter<W, P> {
    work_log: W,
    tasks: P,
    work: Vec<WorkItem>,
    prompts: Registry<Prompt>,
    editors: Registry<Editor>,
}

impl<W: WorkLog, P: PrioritySource> Prompter<W, P> {
    pub fn new(work_log: W, tasks: P) -> Self {
        Self {
            work_log,
            tasks,
            work: Vec::new(),
            prompts: Registry::default(),
            editors: Registry::default(),
        }
    }

    pub fn work_log(&self) -> &W {
        &self.work_log
    }

    pub fn tasks(&self) -> &P {
        &self.tasks
    }

    pub fn work(&self) -> &[WorkItem] {
        &self.work
    }

    pub fn live_prompts(&self) -> usize {
        self.prompts.len()
    }

    pub fn editor(&self, id: Uuid) -> Option<&Editor> {
        self.editors.get(id)
    }

    pub fn handle(&mut self, event: Event) -> Result<Vec<Effect>, PrompterError> {
        match event {
            Event::Poll => self.poll(),
            Event::Answered { prompt, action } => self.answer(prompt, action),
            Event::Save { editor, text } => self.save(editor, &text),
            Event::CloseEditor(id) => Ok(self.close_editor(id)),
        }
    }

    pub fn refresh_work(&mut self) -> Result<(), ToolError> {
        self.work = self.work_log.list_items()?;
        Ok(())
    }

    fn poll(&mut self) -> Result<Vec<Effect>, PrompterError> {
        self.refresh_work()?;
        let next_task = if self.work.is_empty() {
            self.tasks.highest_priority_task()?
        } else {
            None
        };
        let prompt = decide(&self.work, next_task);
        Ok(vec![self.show(prompt)])
    }

    fn answer(
        &mut self,
        id: Uuid,
        action: Option<PromptAction>,
    ) -> Result<Vec<Effect>, PrompterError> {
        let Some(prompt) = self.prompts.remove(id) else {
            log::debug!("Prompt {} already handled", id);
            return Ok(Vec::new());
        };
        let Some(action) = action else {
            log::debug!("Prompt {} dismissed", id);
            return Ok(Vec::new());
        };
        if !prompt.offers(action) {
            log::warn!("Prompt {:?} does not offer {:?}", prompt, action);
            return Ok(Vec::new());
        }
        log::info!("Prompt answered with {}", action.key());

        let effect = match (action, prompt) {
            (PromptAction::Yes | PromptAction::Postpone, _) => return Ok(Vec::new()),
            (PromptAction::View, _) => {
                let text = self.work_log.dump()?;
                self.open_editor(WORK_LOG_TITLE, text, SaveMode::Overwrite)
            }
            (PromptAction::Finish, _) => {
                let next_task = self.tasks.highest_priority_task()?;
                self.show(suggest(next_task))
            }
            (PromptAction::Select, Prompt::SuggestTask { summary }) => {
                self.open_editor(ADD_TASK_TITLE, summary, SaveMode::Append)
            }
            (PromptAction::Select, _) | (PromptAction::AddTask, _) => {
                self.open_editor(ADD_TASK_TITLE, String::new(), SaveMode::Append)
            }
        };
        Ok(vec![effect])
    }

    fn save(&mut self, id: Uuid, text: &str) -> Result<Vec<Effect>, PrompterError> {
        let editor = self.editors.get(id).ok_or(PrompterError::UnknownEditor(id))?;
        match editor.mode {
            SaveMode::Append => {
                let line = single_line(text);
                if line.is_empty() {
                    log::info!("Nothing to add from {}", editor.title);
                } else {
                    self.work_log.append_item(&line)?;
                }
            }
            SaveMode::Overwrite => {
                let path = self.work_log.discover_target_path()?;
                std::fs::write(&path, text).map_err(|source| PrompterError::Write {
                    path: path.clone(),
                    source,
                })?;
                log::info!("Rewrote work log at {}", path.display());
            }
        }
        self.editors.remove(id);
        self.refresh_quietly();
        Ok(vec![Effect::CloseEditor(id)])
    }

    fn close_editor(&mut self, id: Uuid) -> Vec<Effect> {
        match self.editors.remove(id) {
            Some(_) => vec![Effect::CloseEditor(id)],
            None => Vec::new(),
        }
    }

    fn show(&mut self, prompt: Prompt) -> Effect {
        let id = self.prompts.insert(prompt.clone());
        Effect::ShowPrompt { id, prompt }
    }

    fn open_editor(&mut self, title: &str, text: String, mode: SaveMode) -> Effect {
        let id = self.editors.insert(Editor {
            title: title.to_string(),
            mode,
        });
        self.refresh_quietly();
        Effect::OpenEditor {
            id,
            title: title.to_string(),
            text,
        }
    }

    fn refresh_quietly(&mut self) {
        if let Err(e) = self.refresh_work() {
            log::warn!("Failed to refresh work log: {}", e);
        }
    }
}
