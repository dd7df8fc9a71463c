use cosmic::widget::text_editor;
use uuid::Uuid;

use nudge::core::prompt::PromptAction;

#[derive(Debug, Clone)]
pub enum Message {
    /// Timer tick, or the user asking for a check now.
    Poll,

    // Notifications
    PromptAnswered(Uuid, Result<Option<PromptAction>, String>),

    // Editors
    EditorAction(Uuid, text_editor::Action),
    SaveEditor(Uuid),
    CloseEditor(Uuid),

    DismissError,
    Quit,
}
