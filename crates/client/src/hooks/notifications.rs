use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::toast::use_toaster;
use crate::notifications::{Notification, NotificationHub, NotificationSource};

/// Provide the app's [`NotificationHub`] and show everything it delivers as
/// a toast. Call once, below the toast provider.
pub fn use_notification_toasts() -> Rc<NotificationHub> {
    let toaster = use_toaster();
    let hub = use_context_provider(|| Rc::new(NotificationHub::new()));

    let subscription = use_hook({
        let hub = Rc::clone(&hub);
        move || {
            hub.subscribe(Rc::new(move |notification: &Notification| {
                let toast = notification.to_toast();
                toaster.show(toast.message, toast.severity, toast.duration_ms);
            }))
        }
    });

    use_drop({
        let hub = Rc::clone(&hub);
        move || {
            hub.unsubscribe(subscription);
        }
    });

    hub
}

/// The hub provided by [`use_notification_toasts`].
pub fn use_notifier() -> Rc<NotificationHub> {
    use_context::<Rc<NotificationHub>>()
}
