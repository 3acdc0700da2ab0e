//! Toast overlay rendering.
//!
//! Toasts sit in a column anchored to the bottom-right corner, on top of
//! the main content. Each one fades with the opacity its lifecycle reports.

use iced::widget::{Space, button, container, row, text};
use iced::{Color, Element, Length, Padding};

use crate::ui::messages::Message;
use crate::ui::theme::{self, color, radius, spacing, typography};
use crate::ui::toast::{Severity, Toast, ToastStack};

/// Accent color for a severity
fn accent(severity: Severity) -> Color {
    match severity {
        Severity::Info => color::PRIMARY,
        Severity::Success => color::SUCCESS,
        Severity::Error => color::ERROR,
    }
}

/// Render a single toast notification
fn toast_view(toast: &Toast) -> Element<'_, Message> {
    let opacity = toast.opacity();
    let accent = color::with_alpha(accent(toast.severity()), opacity);

    let message_text = text(toast.message())
        .size(typography::SIZE_BODY)
        .color(color::with_alpha(color::TEXT_PRIMARY, opacity));

    let dismiss_btn = button(
        text("×")
            .size(typography::SIZE_SMALL)
            .color(color::with_alpha(color::TEXT_MUTED, opacity)),
    )
    .padding([spacing::XS, spacing::SM])
    .style(theme::button_ghost)
    .on_press(Message::ToastDismiss(toast.id()));

    let content = row![
        message_text,
        Space::with_width(Length::Fill),
        dismiss_btn,
    ]
    .spacing(spacing::SM)
    .align_y(iced::Alignment::Center)
    .padding([spacing::SM, spacing::MD]);

    // Left accent border stands in for a severity icon
    container(content)
        .width(Length::Fixed(360.0))
        .style(move |_| container::Style {
            background: Some(iced::Background::Color(color::with_alpha(
                color::SURFACE_ELEVATED,
                opacity,
            ))),
            border: iced::Border {
                color: accent,
                width: 3.0,
                radius: radius::MD.into(),
            },
            shadow: iced::Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3 * opacity),
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}

/// Render the toast overlay, if there is anything to show.
/// This should be stacked on top of the main content.
pub fn toast_overlay(stack: &ToastStack) -> Option<Element<'_, Message>> {
    if stack.is_empty() {
        return None;
    }

    let toast_elements: Vec<Element<Message>> = stack.iter().map(toast_view).collect();

    let toast_column = iced::widget::column(toast_elements)
        .spacing(spacing::SM)
        .align_x(iced::Alignment::End);

    let overlay = container(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(Padding {
            top: 0.0,
            right: spacing::XL as f32,
            bottom: spacing::XL as f32,
            left: 0.0,
        });

    Some(overlay.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_accents_are_distinct() {
        assert_ne!(accent(Severity::Info), accent(Severity::Success));
        assert_ne!(accent(Severity::Success), accent(Severity::Error));
    }

    #[test]
    fn test_no_overlay_without_toasts() {
        assert!(toast_overlay(&ToastStack::new()).is_none());
    }
}
