//! Reusable components.

pub mod confirm_dialog;
pub mod contact_button;
pub mod feedback_rating;
pub mod match_badge;
pub mod post_card;
pub mod toast;
pub mod ui;

pub use confirm_dialog::ConfirmDialog;
pub use contact_button::ContactButton;
pub use feedback_rating::FeedbackRating;
pub use match_badge::MatchBadge;
pub use post_card::{MatchAction, PostCard, TypeBadge};
pub use toast::{use_toaster, ToastProvider, Toaster};
