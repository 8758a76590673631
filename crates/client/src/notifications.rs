//! Push-style notifications shown as toasts.
//!
//! A [`NotificationSource`] delivers events to subscribers as they happen;
//! nothing polls. [`NotificationHub`] is the in-process source the app
//! publishes to (for example after the user completes a post).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::toast::Severity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    PostCompleted { post_id: i64 },
    /// A contact request went out because no conversation could be opened.
    ContactRequestSent { username: String },
}

/// How a notification is shown: severity, text and duration override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastSpec {
    pub severity: Severity,
    pub message: String,
    pub duration_ms: Option<u32>,
}

impl Notification {
    pub fn to_toast(&self) -> ToastSpec {
        match self {
            Self::PostCompleted { .. } => ToastSpec {
                severity: Severity::Success,
                message: "Post marked as completed".to_string(),
                duration_ms: Some(5000),
            },
            Self::ContactRequestSent { username } => ToastSpec {
                severity: Severity::Success,
                message: format!("Contact request sent to {username}!"),
                duration_ms: Some(6000),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Rc<dyn Fn(&Notification)>;

pub trait NotificationSource {
    fn subscribe(&self, handler: Rc<dyn Fn(&Notification)>) -> SubscriptionId;

    /// Returns `false` if the subscription was not active.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

#[derive(Default)]
pub struct NotificationHub {
    handlers: RefCell<Vec<(SubscriptionId, Handler)>>,
    next_id: Cell<u64>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver to every current subscriber, in subscription order.
    pub fn publish(&self, notification: Notification) {
        crate::log_debug!("Notification: {:?}", notification);
        let handlers: Vec<Handler> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            handler(&notification);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl NotificationSource for NotificationHub {
    fn subscribe(&self, handler: Rc<dyn Fn(&Notification)>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(hid, _)| *hid != id);
        handlers.len() != before
    }
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_to_toasts() {
        let done = Notification::PostCompleted { post_id: 3 }.to_toast();
        assert_eq!((done.severity, done.duration_ms), (Severity::Success, Some(5000)));
        assert_eq!(done.message, "Post marked as completed");

        let sent = Notification::ContactRequestSent {
            username: "sara".into(),
        }
        .to_toast();
        assert_eq!((sent.severity, sent.duration_ms), (Severity::Success, Some(6000)));
        assert_eq!(sent.message, "Contact request sent to sara!");
    }

    #[test]
    fn subscribers_receive_until_unsubscribed() {
        let hub = NotificationHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = Rc::clone(&seen);
        let id = hub.subscribe(Rc::new(move |n: &Notification| s.borrow_mut().push(n.clone())));

        hub.publish(Notification::PostCompleted { post_id: 1 });
        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
        hub.publish(Notification::PostCompleted { post_id: 2 });

        assert_eq!(*seen.borrow(), vec![Notification::PostCompleted { post_id: 1 }]);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn handler_may_unsubscribe_itself() {
        let hub = Rc::new(NotificationHub::new());
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let h = Rc::clone(&hub);
        let s = Rc::clone(&slot);
        let id = hub.subscribe(Rc::new(move |_: &Notification| {
            if let Some(id) = s.get() {
                h.unsubscribe(id);
            }
        }));
        slot.set(Some(id));

        hub.publish(Notification::PostCompleted { post_id: 1 });
        assert_eq!(hub.subscriber_count(), 0);
    }
}
