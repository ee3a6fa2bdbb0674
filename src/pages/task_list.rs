use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, row, scrollable, text, text_input};
use cosmic::Element;

use crate::components::task_row::task_row;
use crate::core::task::{Task, TaskId};
use crate::core::task_list::TaskViews;
use crate::fl;
use crate::message::Message;

fn section<'a>(
    title: String,
    tasks: &[&Task],
    pending_delete: Option<&TaskId>,
) -> Element<'a, Message> {
    let mut col = column().spacing(8).push(text::title4(title));
    for task in tasks {
        col = col.push(task_row(task, pending_delete == Some(&task.id)));
    }
    col.into()
}

pub fn task_list_view<'a>(
    views: &TaskViews<'_>,
    input_value: &str,
    refreshing: bool,
    pending_delete: Option<&TaskId>,
) -> Element<'a, Message> {
    let mut content = column().spacing(16);

    // Header summary
    let summary = fl!(
        "header-summary",
        pending = views.pending_count(),
        completed = views.completed_count()
    );
    let mut header = column()
        .spacing(4)
        .push(text::title3(fl!("app-title")))
        .push(text::caption(summary));
    if refreshing {
        header = header.push(text::caption(fl!("refreshing")));
    }
    content = content.push(header);

    // Creation input
    let input = text_input::text_input(fl!("input-placeholder"), input_value.to_string())
        .on_input(Message::InputChanged)
        .on_submit(|_| Message::Submit)
        .width(Length::Fill);

    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(input)
            .push(
                button::suggested(fl!("add-task"))
                    .on_press(Message::Submit),
            ),
    );

    if views.is_empty() {
        content = content.push(
            container(
                column()
                    .spacing(8)
                    .align_x(Alignment::Center)
                    .push(text::title4(fl!("empty-title")))
                    .push(text::caption(fl!("empty-subtitle"))),
            )
            .padding(60)
            .center_x(Length::Fill)
            .width(Length::Fill),
        );
    } else {
        if !views.pending.is_empty() {
            content = content.push(section(fl!("section-pending"), &views.pending, pending_delete));
        }
        if !views.completed.is_empty() {
            content = content.push(section(
                fl!("section-completed"),
                &views.completed,
                pending_delete,
            ));
        }
    }

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
