//! Toast handlers.
//!
//! Each toast gets its own pair of timer tasks at creation: one starts the
//! exit transition, the other removes the toast if the transition end was
//! never delivered. Frame ticks come from the subscription while any toast
//! is animating.

use iced::Task;
use std::time::{Duration, Instant};

use super::super::messages::Message;
use super::super::state::UploaderState;
use super::super::toast::{REMOVAL_GRACE, Severity, TOAST_DURATION, TRANSITION, ToastId};

/// Show a toast. Never blocks; the returned task owns its timers.
pub fn notify(s: &mut UploaderState, message: impl Into<String>, severity: Severity) -> Task<Message> {
    let id = s.toasts.notify(message, severity, Instant::now());
    Task::batch(schedule(id).map(|(delay, message)| after(delay, message)))
}

/// Timer messages for a new toast, with their delay from creation
pub(crate) fn schedule(id: ToastId) -> [(Duration, Message); 2] {
    [
        (TOAST_DURATION, Message::ToastExpired(id)),
        (
            TOAST_DURATION + TRANSITION + REMOVAL_GRACE,
            Message::ToastForceRemove(id),
        ),
    ]
}

fn after(delay: Duration, message: Message) -> Task<Message> {
    // Sleep is created inside the future so no runtime is needed up front
    Task::perform(async move { tokio::time::sleep(delay).await }, move |()| message.clone())
}

/// Handle toast-related messages
pub fn handle_toast(s: &mut UploaderState, msg: &Message) -> Task<Message> {
    match msg {
        Message::ToastTick => {
            s.toasts.on_frame(Instant::now());
        }
        Message::ToastExpired(id) | Message::ToastDismiss(id) => {
            begin_exit(s, *id);
        }
        Message::ToastForceRemove(id) => {
            s.toasts.force_remove(*id);
        }
        _ => {}
    }
    Task::none()
}

fn begin_exit(s: &mut UploaderState, id: ToastId) {
    if !s.toasts.begin_exit(id, Instant::now()) {
        tracing::trace!(?id, "Toast already gone or leaving");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Overrides};
    use crate::ui::toast::ToastStack;
    use crate::upload::UnavailableUpload;
    use std::sync::Arc;

    const FRAME: Duration = Duration::from_millis(16);

    fn state() -> UploaderState {
        UploaderState::with_api(
            Config::default(),
            &Overrides::default(),
            Arc::new(UnavailableUpload::new("offline")),
        )
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Deliver every timer due by `now`, as if each fired exactly on time
    fn fire_due(
        toasts: &mut ToastStack,
        timers: &mut Vec<(Duration, Message)>,
        created: Instant,
        now: Instant,
    ) {
        let (due, pending): (Vec<_>, Vec<_>) = timers
            .drain(..)
            .partition(|(delay, _)| created + *delay <= now);
        *timers = pending;

        for (delay, message) in due {
            match message {
                Message::ToastExpired(id) => {
                    toasts.begin_exit(id, created + delay);
                }
                Message::ToastForceRemove(id) => {
                    toasts.force_remove(id);
                }
                other => panic!("unexpected timer message {other:?}"),
            }
        }
    }

    /// Frame ticks every 16 ms in `(from, to]`
    fn frames(toasts: &mut ToastStack, from: Instant, to: Instant) {
        let mut now = from + FRAME;
        while now <= to {
            toasts.on_frame(now);
            now += FRAME;
        }
        toasts.on_frame(to);
    }

    #[test]
    fn test_schedule_expires_then_falls_back() {
        let id = ToastStack::new().notify("hello", Severity::Info, Instant::now());
        let [expire, fallback] = schedule(id);

        assert_eq!(expire.0, ms(4000));
        assert!(matches!(expire.1, Message::ToastExpired(t) if t == id));
        assert_eq!(fallback.0, ms(4000 + 300 + 1000));
        assert!(matches!(fallback.1, Message::ToastForceRemove(t) if t == id));
    }

    #[test]
    fn test_toast_stays_four_seconds_then_leaves() {
        let created = Instant::now();
        let mut toasts = ToastStack::new();
        let id = toasts.notify("Processed", Severity::Success, created);
        let mut timers = schedule(id).to_vec();

        frames(&mut toasts, created, created + ms(400));
        fire_due(&mut toasts, &mut timers, created, created + ms(3999));
        let toast = toasts.get(id).unwrap();
        assert!(toast.is_visible());
        assert_eq!(toast.opacity(), 1.0);

        fire_due(&mut toasts, &mut timers, created, created + ms(4000));
        assert!(!toasts.get(id).unwrap().is_visible());

        // Removed once the exit transition has run its course
        frames(&mut toasts, created + ms(4000), created + ms(4300));
        assert!(toasts.is_empty());

        // The later fallback timer finds nothing to do
        fire_due(&mut toasts, &mut timers, created, created + ms(5300));
        assert!(timers.is_empty());
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_fallback_removes_toast_when_transition_never_ends() {
        let created = Instant::now();
        let mut toasts = ToastStack::new();
        let id = toasts.notify("hello", Severity::Info, created);
        let mut timers = schedule(id).to_vec();

        frames(&mut toasts, created, created + ms(400));
        fire_due(&mut toasts, &mut timers, created, created + ms(4000));

        // No frames after the exit starts, so no transition end arrives
        fire_due(&mut toasts, &mut timers, created, created + ms(5299));
        assert_eq!(toasts.len(), 1);

        fire_due(&mut toasts, &mut timers, created, created + ms(5300));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_notify_inserts_hidden_toast() {
        let mut s = state();
        let _ = notify(&mut s, "Processed", Severity::Success);

        let toast = s.toasts.iter().next().unwrap();
        assert_eq!(toast.message(), "Processed");
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_tick_makes_toast_visible() {
        let mut s = state();
        let _ = notify(&mut s, "hello", Severity::Info);

        let _ = handle_toast(&mut s, &Message::ToastTick);

        assert!(s.toasts.iter().all(|t| t.is_visible()));
    }

    #[test]
    fn test_expiry_starts_exit_without_removing() {
        let mut s = state();
        let _ = notify(&mut s, "hello", Severity::Info);
        let id = s.toasts.iter().next().unwrap().id();
        let _ = handle_toast(&mut s, &Message::ToastTick);

        let _ = handle_toast(&mut s, &Message::ToastExpired(id));

        let toast = s.toasts.get(id).unwrap();
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_dismiss_then_expiry_is_harmless() {
        let mut s = state();
        let _ = notify(&mut s, "hello", Severity::Info);
        let id = s.toasts.iter().next().unwrap().id();

        let _ = handle_toast(&mut s, &Message::ToastDismiss(id));
        let _ = handle_toast(&mut s, &Message::ToastForceRemove(id));
        let _ = handle_toast(&mut s, &Message::ToastExpired(id));

        assert!(s.toasts.is_empty());
    }

    #[test]
    fn test_force_remove_ignores_shown_toast() {
        let mut s = state();
        let _ = notify(&mut s, "hello", Severity::Info);
        let id = s.toasts.iter().next().unwrap().id();

        let _ = handle_toast(&mut s, &Message::ToastForceRemove(id));

        assert_eq!(s.toasts.len(), 1);
    }
}
