//! Toast notifications: ephemeral messages that fade in, stay for a fixed
//! time, fade out and remove themselves.
//!
//! Lifecycle of a single toast:
//!
//! ```text
//! notify ─▶ hidden ─(next frame)─▶ fading in ─▶ shown ─(4s timer)─▶ fading out ─(transition end)─▶ removed
//! ```
//!
//! [`ToastStack`] is pure state driven by explicit timestamps. The iced side
//! (`ui::update::toast`) feeds it frame ticks and timer expiries.
//! Toasts never share state with each other; there is no queue and no cap.

use std::time::{Duration, Instant};

use super::theme::timing;

/// Time from creation until the exit transition starts
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Length of the fade in / fade out transitions
pub const TRANSITION: Duration = Duration::from_millis(timing::SLOW);

/// Extra time after the exit transition before a toast is removed even if
/// its transition end was never observed
pub const REMOVAL_GRACE: Duration = Duration::from_secs(1);

/// Toast severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// Unique (per stack) toast identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// An opacity transition in progress
#[derive(Debug, Clone, Copy)]
struct Transition {
    from: f32,
    started_at: Instant,
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    message: String,
    created_at: Instant,
    /// Target state; the rendered opacity follows it through `transition`
    visible: bool,
    /// Inserted but not yet flipped visible
    awaiting_frame: bool,
    transition: Option<Transition>,
    opacity: f32,
    /// One-shot "remove on transition end" listener, armed at exit
    remove_on_transition_end: bool,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rendered opacity as of the last frame, 0.0..=1.0
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    fn target_opacity(&self) -> f32 {
        if self.visible { 1.0 } else { 0.0 }
    }

    fn start_transition(&mut self, now: Instant) {
        self.transition = Some(Transition {
            from: self.opacity,
            started_at: now,
        });
    }

    /// Advance the running transition. Returns true when it finished on
    /// this frame (the transition end signal).
    fn advance(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };

        let elapsed = now.saturating_duration_since(transition.started_at);
        let progress = (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).min(1.0);
        let target = self.target_opacity();
        self.opacity = transition.from + (target - transition.from) * progress;

        if progress >= 1.0 {
            self.opacity = target;
            self.transition = None;
            true
        } else {
            false
        }
    }
}

/// All live toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new, still invisible toast. It becomes visible on the next
    /// [`on_frame`](Self::on_frame).
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let message = message.into();
        tracing::debug!(?id, ?severity, %message, "Toast created");

        self.toasts.push(Toast {
            id,
            severity,
            message,
            created_at: now,
            visible: false,
            awaiting_frame: true,
            transition: None,
            opacity: 0.0,
            remove_on_transition_end: false,
        });
        id
    }

    /// Animation frame: flip freshly inserted toasts visible, advance
    /// running transitions and deliver transition end signals.
    pub fn on_frame(&mut self, now: Instant) {
        let mut ended = Vec::new();

        for toast in &mut self.toasts {
            if toast.awaiting_frame {
                toast.awaiting_frame = false;
                toast.visible = true;
                toast.start_transition(now);
                continue;
            }
            if toast.advance(now) {
                ended.push(toast.id);
            }
        }

        for id in ended {
            self.on_transition_end(id);
        }
    }

    /// Start the exit transition (auto-dismiss timer or close button).
    ///
    /// Returns false if the toast is gone or already leaving.
    pub fn begin_exit(&mut self, id: ToastId, now: Instant) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if toast.remove_on_transition_end {
            return false;
        }

        tracing::debug!(?id, "Toast exiting");
        toast.awaiting_frame = false;
        toast.visible = false;
        toast.start_transition(now);
        toast.remove_on_transition_end = true;
        true
    }

    /// Transition end signal for `id`.
    ///
    /// Removes the toast if its exit listener is armed. The listener is
    /// consumed by the first signal; entry transitions and repeated signals
    /// are ignored. Returns whether the toast was removed.
    pub fn on_transition_end(&mut self, id: ToastId) -> bool {
        let Some(index) = self.toasts.iter().position(|t| t.id == id) else {
            return false;
        };
        if !std::mem::take(&mut self.toasts[index].remove_on_transition_end) {
            return false;
        }

        self.toasts.remove(index);
        tracing::debug!(?id, "Toast removed");
        true
    }

    /// Fallback removal for a toast whose exit transition end never arrived.
    ///
    /// Only toasts that have started exiting are affected.
    pub fn force_remove(&mut self, id: ToastId) -> bool {
        let Some(index) = self
            .toasts
            .iter()
            .position(|t| t.id == id && t.remove_on_transition_end)
        else {
            return false;
        };

        let toast = self.toasts.remove(index);
        tracing::warn!(
            ?id,
            age = ?toast.created_at.elapsed(),
            "Toast transition end never observed, removing"
        );
        true
    }

    /// Whether any toast needs frame ticks
    pub fn is_animating(&self) -> bool {
        self.toasts
            .iter()
            .any(|t| t.awaiting_frame || t.transition.is_some())
    }

    #[cfg(test)]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
