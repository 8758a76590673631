//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{
    AppLayout, ConversationDetail, FeedbackHistory, Feed, Login, Messages, MyPosts, NewPost,
    NotFound, PostDetail, Register, RouteGuard, UserProfile,
};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RouteGuard)]
        // Auth routes
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},

        // Everything else needs a session
        #[layout(AppLayout)]
            #[route("/")]
            Feed {},
            #[route("/new")]
            NewPost {},
            #[route("/post/:id")]
            PostDetail { id: i64 },
            #[route("/my-posts")]
            MyPosts {},
            #[route("/feedback")]
            FeedbackHistory {},
            #[route("/messages")]
            Messages {},
            #[route("/messages/:conversation_id")]
            ConversationDetail { conversation_id: i64 },
            #[route("/user/:user_id")]
            UserProfile { user_id: i64 },
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
