//! Toast queue: the state behind transient notifications.
//!
//! Each toast moves `Created -> Visible -> removed`. Removal happens when its
//! own duration runs out or when it is dismissed; toasts never affect each
//! other. Insertion order is display order.
//!
//! [`run_toast`] is the per-toast timer. It works on any [`QueueHandle`], so
//! the Dioxus layer drives it through a signal and tests through a plain
//! cell.

use chrono::{DateTime, Utc};

/// Used when the caller does not pick a duration.
pub const DEFAULT_DURATION_MS: u32 = 4000;

/// Delay before a new toast is shown, for the slide-in transition.
pub const ENTER_DELAY_MS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub i64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Created,
    Visible,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u32,
    pub created_at: DateTime<Utc>,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn is_visible(&self) -> bool {
        self.phase == ToastPhase::Visible
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    last_id: i64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast created at `now`.
    ///
    /// Ids are derived from the creation time in milliseconds, bumped past
    /// the previous id so two toasts in the same millisecond stay distinct.
    pub fn push(
        &mut self,
        now: DateTime<Utc>,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: Option<u32>,
    ) -> ToastId {
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        let id = ToastId(id);

        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            duration_ms: duration_ms.unwrap_or(DEFAULT_DURATION_MS),
            created_at: now,
            phase: ToastPhase::Created,
        });
        id
    }

    /// Returns `false` if the toast is already gone.
    pub fn mark_visible(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.phase = ToastPhase::Visible;
                true
            }
            None => false,
        }
    }

    /// Remove one toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

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

/// Shared access to the queue a toast timer updates.
pub trait QueueHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut ToastQueue) -> R) -> R;
}

/// Drive one toast through its lifetime: visible after the enter delay,
/// removed once its own duration has passed since it was queued.
///
/// A toast dismissed early is left alone.
pub async fn run_toast(mut queue: impl QueueHandle, id: ToastId, duration_ms: u32) {
    sleep_ms(ENTER_DELAY_MS).await;
    if !queue.update(|q| q.mark_visible(id)) {
        return;
    }
    sleep_ms(duration_ms.saturating_sub(ENTER_DELAY_MS)).await;
    queue.update(|q| q.dismiss(id));
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(tokio::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::time::{sleep, Duration as Wait};

    impl QueueHandle for Rc<RefCell<ToastQueue>> {
        fn update<R>(&mut self, f: impl FnOnce(&mut ToastQueue) -> R) -> R {
            f(&mut self.borrow_mut())
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    fn ms(n: i64) -> Duration {
        Duration::milliseconds(n)
    }

    #[test]
    fn new_toast_uses_default_duration_and_starts_created() {
        let mut q = ToastQueue::new();
        let id = q.push(t0(), "Saved", Severity::Success, None);
        let toast = q.get(id).unwrap();
        assert_eq!(toast.duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(toast.phase, ToastPhase::Created);

        assert!(q.mark_visible(id));
        assert!(q.get(id).unwrap().is_visible());
    }

    #[test]
    fn ids_are_unique_within_one_millisecond() {
        let mut q = ToastQueue::new();
        let a = q.push(t0(), "a", Severity::Info, None);
        let b = q.push(t0(), "b", Severity::Info, None);
        let c = q.push(t0() - ms(5), "c", Severity::Info, None);
        assert_eq!(a.0, t0().timestamp_millis());
        assert!(a < b && b < c);
    }

    #[test]
    fn display_order_is_insertion_order() {
        let mut q = ToastQueue::new();
        q.push(t0(), "first", Severity::Error, Some(6000));
        q.push(t0(), "second", Severity::Info, Some(1000));
        q.push(t0(), "third", Severity::Warning, None);
        let messages: Vec<_> = q.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[tokio::test(start_paused = true)]
    async fn each_toast_expires_on_its_own_schedule() {
        let queue = Rc::new(RefCell::new(ToastQueue::new()));
        let (long, short, mid) = {
            let mut q = queue.borrow_mut();
            (
                q.push(t0(), "long", Severity::Info, Some(6000)),
                q.push(t0(), "short", Severity::Info, Some(1000)),
                q.push(t0(), "mid", Severity::Info, Some(4000)),
            )
        };

        let check = {
            let queue = Rc::clone(&queue);
            async move {
                sleep(Wait::from_millis(5)).await;
                assert!(queue.borrow().iter().all(|t| !t.is_visible()));

                sleep(Wait::from_millis(15)).await;
                assert_eq!(queue.borrow().iter().filter(|t| t.is_visible()).count(), 3);

                sleep(Wait::from_millis(990)).await;
                let ids: Vec<_> = queue.borrow().iter().map(|t| t.id).collect();
                assert_eq!(ids, [long, mid]);

                sleep(Wait::from_millis(3500)).await;
                let ids: Vec<_> = queue.borrow().iter().map(|t| t.id).collect();
                assert_eq!(ids, [long]);

                sleep(Wait::from_millis(1000)).await;
                assert!(queue.borrow().get(long).unwrap().is_visible());
            }
        };

        futures_util::join!(
            run_toast(Rc::clone(&queue), long, 6000),
            run_toast(Rc::clone(&queue), short, 1000),
            run_toast(Rc::clone(&queue), mid, 4000),
            check,
        );
        assert!(queue.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn early_dismissal_stops_the_timer() {
        let queue = Rc::new(RefCell::new(ToastQueue::new()));
        let gone = queue.borrow_mut().push(t0(), "gone", Severity::Error, None);
        let kept = queue.borrow_mut().push(t0(), "kept", Severity::Success, Some(8000));
        queue.borrow_mut().dismiss(gone);

        let check = {
            let queue = Rc::clone(&queue);
            async move {
                sleep(Wait::from_millis(u64::from(DEFAULT_DURATION_MS) + 100)).await;
                let ids: Vec<_> = queue.borrow().iter().map(|t| t.id).collect();
                assert_eq!(ids, [kept]);
            }
        };

        futures_util::join!(
            run_toast(Rc::clone(&queue), gone, DEFAULT_DURATION_MS),
            run_toast(Rc::clone(&queue), kept, 8000),
            check,
        );
        assert!(queue.borrow().is_empty());
    }

    #[test]
    fn dismissing_one_leaves_the_others() {
        let mut q = ToastQueue::new();
        let a = q.push(t0(), "a", Severity::Success, None);
        let b = q.push(t0(), "b", Severity::Error, None);
        let c = q.push(t0(), "c", Severity::Info, None);

        assert!(q.dismiss(b));
        assert!(!q.dismiss(b));
        let ids: Vec<_> = q.iter().map(|t| t.id).collect();
        assert_eq!(ids, [a, c]);

        // a late timer for an already dismissed toast changes nothing
        assert!(!q.mark_visible(b));
        assert_eq!(q.len(), 2);
    }
}
