use cosmic::app::{Core, Task as CosmicTask};
use cosmic::iced::Length;
use cosmic::widget::{button, column, container, row, scrollable, text, text_editor};
use cosmic::{Application, Element, executor};
use uuid::Uuid;

use nudge::calendar::TaskFile;
use nudge::config::NudgeConfig;
use nudge::core::prompter::{Effect, Event, Prompter};
use nudge::notify::NotifySend;
use nudge::tool::ReTool;

use crate::message::Message;
use crate::pages;

/// An editor surface on screen. Its save semantics live in the prompter's registry.
pub struct OpenEditor {
    pub id: Uuid,
    pub title: String,
    pub content: text_editor::Content,
}

pub struct Nudge {
    core: Core,
    config: NudgeConfig,
    prompter: Prompter<ReTool, TaskFile>,
    notifier: NotifySend,

    // UI state
    editors: Vec<OpenEditor>,
    last_poll: Option<chrono::DateTime<chrono::Local>>,
    error: Option<String>,
}

pub struct Flags {
    pub config: NudgeConfig,
    pub tool: ReTool,
}

impl Application for Nudge {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.nudge.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;
        let tasks = TaskFile::new(config.task_file.clone());
        let notifier = NotifySend::new(config.notifier.clone());

        let mut app = Self {
            core,
            prompter: Prompter::new(flags.tool, tasks),
            notifier,
            config,
            editors: Vec::new(),
            last_poll: None,
            error: None,
        };
        let task = app.poll();

        (app, task)
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        vec![
            row()
                .spacing(4)
                .push(button::standard("Check now").on_press(Message::Poll))
                .push(button::destructive("Quit").on_press(Message::Quit))
                .into(),
        ]
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::Poll => {
                return self.poll();
            }

            Message::PromptAnswered(id, result) => {
                let action = match result {
                    Ok(action) => action,
                    Err(e) => {
                        log::error!("Notification failed: {}", e);
                        self.error = Some(e);
                        None
                    }
                };
                return self.dispatch(Event::Answered { prompt: id, action });
            }

            Message::EditorAction(id, action) => {
                if let Some(editor) = self.editors.iter_mut().find(|e| e.id == id) {
                    editor.content.perform(action);
                }
            }

            Message::SaveEditor(id) => {
                if let Some(editor) = self.editors.iter().find(|e| e.id == id) {
                    let text = editor.content.text();
                    return self.dispatch(Event::Save { editor: id, text });
                }
            }

            Message::CloseEditor(id) => {
                return self.dispatch(Event::CloseEditor(id));
            }

            Message::DismissError => {
                self.error = None;
            }

            Message::Quit => {
                log::info!("Quitting");
                std::process::exit(0);
            }
        }
        CosmicTask::none()
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Message> {
        cosmic::iced::time::every(self.config.poll_interval()).map(|_| Message::Poll)
    }

    fn view(&self) -> Element<'_, Message> {
        let mut content = column().spacing(16).padding(16);

        content = content.push(self.status_view());

        if let Some(ref error) = self.error {
            content = content.push(
                row()
                    .spacing(8)
                    .push(text::body(error.as_str()).width(Length::Fill))
                    .push(button::text("Dismiss").on_press(Message::DismissError)),
            );
        }

        if self.editors.is_empty() {
            content = content.push(text::caption("No open editors"));
        } else {
            for editor in &self.editors {
                content = content.push(pages::editor::editor_view(editor));
            }
        }

        container(scrollable(content)).width(Length::Fill).height(Length::Fill).into()
    }
}

impl Nudge {
    fn poll(&mut self) -> CosmicTask<Message> {
        self.last_poll = Some(chrono::Local::now());
        self.dispatch(Event::Poll)
    }

    fn dispatch(&mut self, event: Event) -> CosmicTask<Message> {
        match self.prompter.handle(event) {
            Ok(effects) => {
                let tasks: Vec<_> = effects.into_iter().map(|effect| self.apply(effect)).collect();
                CosmicTask::batch(tasks)
            }
            Err(e) => {
                log::error!("{}", e);
                self.error = Some(e.to_string());
                CosmicTask::none()
            }
        }
    }

    fn apply(&mut self, effect: Effect) -> CosmicTask<Message> {
        match effect {
            Effect::ShowPrompt { id, prompt } => {
                let notifier = self.notifier.clone();
                CosmicTask::perform(
                    async move { notifier.show(&prompt).await.map_err(|e| e.to_string()) },
                    move |result| cosmic::Action::App(Message::PromptAnswered(id, result)),
                )
            }
            Effect::OpenEditor { id, title, text } => {
                self.editors.push(OpenEditor {
                    id,
                    title,
                    content: text_editor::Content::with_text(&text),
                });
                CosmicTask::none()
            }
            Effect::CloseEditor(id) => {
                self.editors.retain(|e| e.id != id);
                CosmicTask::none()
            }
        }
    }

    fn status_view(&self) -> Element<'_, Message> {
        let mut col = column().spacing(4);

        let work = self.prompter.work();
        col = col.push(text::title4(match work.first() {
            Some(item) => format!("Working on: {}", item),
            None => "Nothing in progress".to_string(),
        }));
        if work.len() > 1 {
            col = col.push(text::caption(format!("{} more in progress", work.len() - 1)));
        }

        let waiting = self.prompter.live_prompts();
        if waiting > 0 {
            col = col.push(text::caption(format!("{} prompt(s) waiting for an answer", waiting)));
        }

        col = col.push(text::caption(format!(
            "Work log from {}, tasks from {}",
            self.prompter.work_log().program().display(),
            self.prompter.tasks().path().display(),
        )));

        if let Some(at) = self.last_poll {
            col = col.push(text::caption(format!("Last checked {}", at.format("%H:%M"))));
        }

        col.into()
    }
}
