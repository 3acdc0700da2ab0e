//! UI module for Log Uploader.

mod messages;
mod state;
pub mod theme;
pub mod toast;
mod update;
mod views;

use iced::widget::stack;
use iced::{Element, Event, Subscription, Task, event, keyboard, time, window};
use std::time::Duration;

use crate::config::{Config, Overrides};

pub use messages::Message;
use state::UploaderState;
use toast::Severity;

pub struct LogUploader {
    state: UploaderState,
}

impl LogUploader {
    /// `stored` is the config as loaded from disk; `overrides` apply to this
    /// run only.
    pub fn new(stored: Config, overrides: Overrides) -> (Self, Task<Message>) {
        tracing::debug!("UI::new() started");

        let (mut state, startup_error) = UploaderState::new(stored, &overrides);
        let task = match startup_error {
            Some(reason) => update::notify(
                &mut state,
                format!("Uploads unavailable: {reason}"),
                Severity::Error,
            ),
            None => Task::none(),
        };

        (Self { state }, task)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        // Toast animation tick, only while something is fading
        // Uses time::every() instead of window::frames() for a steady 60fps
        // that doesn't flood the channel on high refresh rate monitors.
        if self.state.toasts.is_animating() {
            subscriptions.push(time::every(Duration::from_millis(16)).map(|_| Message::ToastTick));
        }

        // Keyboard shortcuts - global within the app
        subscriptions.push(keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        }));

        // Files dragged onto the window
        subscriptions.push(event::listen_with(file_drop_event));

        Subscription::batch(subscriptions)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = views::main_view(&self.state);

        match views::toast_overlay(&self.state.toasts) {
            Some(overlay) => stack![content, overlay].into(),
            None => content,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if !matches!(message, Message::ToastTick) {
            tracing::trace!(target: "ui::update", message = ?message, "Update received");
        }

        let s = &mut self.state;
        match &message {
            Message::KeyPressed(key, modifiers) => match update::shortcut(key, *modifiers) {
                Some(action) => Task::done(action),
                None => Task::none(),
            },
            Message::ToastTick
            | Message::ToastExpired(_)
            | Message::ToastForceRemove(_)
            | Message::ToastDismiss(_) => update::handle_toast(s, &message),
            _ => update::handle_upload(s, &message),
        }
    }
}

fn file_drop_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}
