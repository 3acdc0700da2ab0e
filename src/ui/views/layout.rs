//! Main window layout: header, upload card and dashboard link.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};

use crate::ui::messages::Message;
use crate::ui::state::UploaderState;
use crate::ui::theme::{self, color, spacing, typography};

/// The whole window below the toast overlay
pub fn main_view(s: &UploaderState) -> Element<'_, Message> {
    let content = column![header_view(s), upload_card(s), dashboard_row()]
        .spacing(spacing::XL)
        .max_width(560.0);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(iced::alignment::Horizontal::Center)
        .style(|_| theme::container_style(color::BASE))
        .into()
}

fn header_view(s: &UploaderState) -> Element<'_, Message> {
    column![
        text("Log Uploader")
            .size(typography::SIZE_TITLE)
            .color(color::TEXT_PRIMARY),
        text(format!("Server: {}", s.config.server.base_url))
            .size(typography::SIZE_SMALL)
            .color(color::TEXT_MUTED),
    ]
    .spacing(spacing::XS)
    .into()
}

/// File picker, drop target, filename label and submit button.
///
/// Everything that can change the selection is disabled while a
/// submission is in flight.
fn upload_card(s: &UploaderState) -> Element<'_, Message> {
    let can_select = s.controller.can_select();
    let control = s.controller.submit_control();

    let browse = button(text("Browse…").size(typography::SIZE_BODY))
        .padding([spacing::SM, spacing::LG])
        .style(theme::button_secondary)
        .on_press_maybe(can_select.then_some(Message::BrowsePressed));

    let hint = if s.drop_hover {
        "Release to select this file"
    } else {
        "or drop a log file anywhere on this window"
    };
    let hover = s.drop_hover;
    let drop_zone = container(
        text(hint)
            .size(typography::SIZE_SMALL)
            .color(color::TEXT_MUTED),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(iced::alignment::Horizontal::Center)
    .style(move |_| theme::drop_zone_style(hover));

    // Label sits right before the submit button
    let file_label = text(s.controller.file_label())
        .size(typography::SIZE_BODY)
        .color(color::TEXT_SECONDARY);

    let submit = button(text(control.label()).size(typography::SIZE_BODY))
        .padding([spacing::SM, spacing::LG])
        .style(theme::button_primary)
        .on_press_maybe(control.is_enabled().then_some(Message::SubmitPressed));

    let card = column![
        text("Upload a log file")
            .size(typography::SIZE_HEADING)
            .color(color::TEXT_PRIMARY),
        browse,
        drop_zone,
        row![file_label, Space::with_width(Length::Fill), submit]
            .spacing(spacing::MD)
            .align_y(iced::Alignment::Center),
    ]
    .spacing(spacing::MD);

    container(card)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(|_| theme::card_style())
        .into()
}

fn dashboard_row() -> Element<'static, Message> {
    row![
        text("Processed logs are browsable on the server.")
            .size(typography::SIZE_SMALL)
            .color(color::TEXT_SECONDARY),
        Space::with_width(Length::Fill),
        button(text("Open dashboard").size(typography::SIZE_BODY))
            .padding([spacing::SM, spacing::LG])
            .style(theme::button_secondary)
            .on_press(Message::OpenDashboard),
    ]
    .spacing(spacing::MD)
    .align_y(iced::Alignment::Center)
    .into()
}
