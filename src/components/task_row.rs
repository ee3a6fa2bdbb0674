use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, container, icon, row, text};
use cosmic::{Element, theme};

use crate::core::task::Task;
use crate::fl;
use crate::message::Message;

const COL_CHECK: f32 = 28.0;

/// Overlay each character with U+0336 so the title renders struck through.
pub fn strikethrough(title: &str) -> String {
    let mut out = String::with_capacity(title.len() * 3);
    for c in title.chars() {
        out.push(c);
        out.push('\u{0336}');
    }
    out
}

pub fn task_row(task: &Task, confirming_delete: bool) -> Element<'static, Message> {
    let id = task.id.clone();

    let check = container(
        checkbox("", task.completed).on_toggle({
            let id = id.clone();
            move |_| Message::ToggleTask(id.clone())
        }),
    )
    .width(Length::Fixed(COL_CHECK));

    let title: Element<'static, Message> = if task.completed {
        text::body(strikethrough(&task.title)).into()
    } else {
        text::body(task.title.clone()).into()
    };

    let title_btn = button::custom(title)
        .padding([0, 0])
        .class(theme::Button::Text)
        .on_press(Message::ToggleTask(id.clone()));

    let mut task_row = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(check)
        .push(container(title_btn).width(Length::Fill));

    if confirming_delete {
        task_row = task_row
            .push(
                button::destructive(fl!("delete-task"))
                    .on_press(Message::DeleteTask(id)),
            )
            .push(
                button::standard(fl!("delete-cancel"))
                    .on_press(Message::CancelDeleteTask),
            );
    } else {
        task_row = task_row.push(
            button::icon(icon::from_name("edit-delete-symbolic"))
                .on_press(Message::ConfirmDeleteTask(id)),
        );
    }

    task_row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strikethrough_overlays_every_char() {
        assert_eq!(strikethrough("ab"), "a\u{0336}b\u{0336}");
        assert_eq!(strikethrough(""), "");
    }

    #[test]
    fn strikethrough_keeps_base_text() {
        let struck = strikethrough("Buy milk");
        let base: String = struck.chars().filter(|c| *c != '\u{0336}').collect();
        assert_eq!(base, "Buy milk");
    }
}
