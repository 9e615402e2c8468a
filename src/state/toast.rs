//! Transient notifications shown on top of the form

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Most toasts visible at once; a newer toast replaces older ones
pub const TOAST_LIMIT: usize = 1;

/// Visual severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A message for the user: title, description and severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Fire-and-forget sink for user notifications
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// A notification on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Toasts waiting to be shown or dismissed, newest first
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
        }
    }

    /// Toast currently on screen
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.front()
    }

    /// Dismiss the toast on screen
    pub fn dismiss(&mut self) -> Option<Toast> {
        self.toasts.pop_front()
    }

    /// Drop every toast whose display time has run out
    pub fn prune_expired(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        let toast = Toast {
            id: Uuid::new_v4(),
            notification,
            expires_at: Instant::now() + self.duration,
        };
        tracing::debug!(id = %toast.id, title = %toast.notification.title, "toast");
        self.toasts.push_front(toast);
        self.toasts.truncate(TOAST_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let queue = ToastQueue::new(Duration::from_secs(5));
        assert!(queue.is_empty());
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_destructive_constructor() {
        let n = Notification::destructive("Oops", "Something broke");
        assert!(n.is_destructive());
        assert!(!Notification::new("Hi", "there").is_destructive());
    }

    #[test]
    fn test_newest_toast_replaces_older() {
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        queue.notify(Notification::new("first", ""));
        queue.notify(Notification::new("second", ""));
        assert_eq!(queue.current().unwrap().notification.title, "second");
        queue.dismiss();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_toasts_get_distinct_ids() {
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        queue.notify(Notification::new("first", ""));
        let first = queue.current().unwrap().id;
        queue.notify(Notification::new("second", ""));
        assert_ne!(queue.current().unwrap().id, first);
    }

    #[test]
    fn test_dismiss_removes_current() {
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        queue.notify(Notification::new("hello", ""));
        let dismissed = queue.dismiss();
        assert_eq!(dismissed.unwrap().notification.title, "hello");
        assert!(queue.is_empty());
        assert!(queue.dismiss().is_none());
    }

    #[test]
    fn test_prune_expired() {
        let mut queue = ToastQueue::new(Duration::from_millis(100));
        queue.notify(Notification::new("hello", ""));

        queue.prune_expired(Instant::now());
        assert!(queue.current().is_some());

        queue.prune_expired(Instant::now() + Duration::from_secs(1));
        assert!(queue.is_empty());
    }
}
