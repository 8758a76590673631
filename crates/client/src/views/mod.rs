//! View components for the application.

pub mod conversation;
pub mod feed;
pub mod feedback_history;
pub mod layouts;
pub mod login;
pub mod messages;
pub mod my_posts;
pub mod new_post;
pub mod post_detail;
pub mod register;
pub mod user_profile;

pub use conversation::ConversationDetail;
pub use feed::Feed;
pub use feedback_history::FeedbackHistory;
pub use layouts::{AppLayout, NotFound, RouteGuard};
pub use login::Login;
pub use messages::Messages;
pub use my_posts::MyPosts;
pub use new_post::NewPost;
pub use post_detail::PostDetail;
pub use register::Register;
pub use user_profile::UserProfile;
