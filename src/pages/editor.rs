use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, row, text, text_editor};
use cosmic::Element;

use crate::application::OpenEditor;
use crate::message::Message;

pub fn editor_view(editor: &OpenEditor) -> Element<'_, Message> {
    let id = editor.id;

    let header = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::title4(editor.title.as_str()).width(Length::Fill))
        .push(button::suggested("Save").on_press(Message::SaveEditor(id)))
        .push(button::standard("Close").on_press(Message::CloseEditor(id)));

    let body = container(
        text_editor(&editor.content)
            .on_action(move |action| Message::EditorAction(id, action))
            .height(Length::Fixed(240.0)),
    )
    .width(Length::Fill);

    column().spacing(8).push(header).push(body).into()
}
