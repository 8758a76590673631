//! REST endpoint paths and header helpers for the aid-exchange API.
//!
//! Paths are relative to the API base URL (see the client's config).

use crate::models::PostFilters;

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// `Authorization` header value for a session token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";

pub const POSTS: &str = "/posts";
pub const MY_POSTS: &str = "/posts/my/posts";

pub fn posts_filtered(filters: &PostFilters) -> String {
    format!("{POSTS}{}", filters.to_query())
}

pub fn post(id: i64) -> String {
    format!("/posts/{id}")
}

pub fn complete_post(id: i64) -> String {
    format!("/posts/{id}/complete")
}

pub const MATCHES: &str = "/matches";
pub const MY_MATCHES: &str = "/matches/my";
pub const RECEIVED_MATCHES: &str = "/matches/received";

pub fn post_matches(post_id: i64) -> String {
    format!("/matches/post/{post_id}")
}

pub const CONVERSATIONS: &str = "/messages/conversations";
pub const START_CONVERSATION: &str = "/messages/conversations/start";
pub const CONTACT_REQUESTS: &str = "/messages/contact-requests";

pub fn conversation_messages(conversation_id: i64) -> String {
    format!("/messages/conversations/{conversation_id}/messages")
}

pub const FEEDBACK: &str = "/feedback";

pub fn user(id: i64) -> String {
    format!("/users/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PostFilters};

    #[test]
    fn parameterised_paths() {
        assert_eq!(post(7), "/posts/7");
        assert_eq!(complete_post(7), "/posts/7/complete");
        assert_eq!(post_matches(3), "/matches/post/3");
        assert_eq!(conversation_messages(11), "/messages/conversations/11/messages");
        assert_eq!(user(2), "/users/2");
        assert_eq!(bearer("abc"), "Bearer abc");
    }

    #[test]
    fn feed_path_carries_filters() {
        assert_eq!(posts_filtered(&PostFilters::default()), "/posts");
        let filters = PostFilters {
            category: Some(Category::Medical),
            ..Default::default()
        };
        assert_eq!(posts_filtered(&filters), "/posts?category=medical");
    }
}
