//! HTTP API client with bearer-token authentication.
//!
//! Every call is independent: no retries, caching, deduplication or
//! queueing. Failures come back as [`ApiError`] with the HTTP status and a
//! readable message, or status `0` when no usable response arrived.

use aidswap_shared::{
    protocol, ApiError, AuthResponse, ContactRequest, Conversation, ConversationRef,
    CreateMatchRequest, CreatePostRequest, FeedbackRequest, LoginRequest, Match, MatchActivity,
    Message, Post, PostFilters, RegisterRequest, SendMessageRequest, StartConversationRequest,
    User,
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// The endpoints the match/contact workflow drives. Implemented by
/// [`ApiClient`]; tests substitute a scripted fake.
#[async_trait(?Send)]
pub trait AidApi {
    async fn create_match(&self, post_id: i64) -> Result<Value, ApiError>;

    async fn start_conversation(
        &self,
        request: &StartConversationRequest,
    ) -> Result<ConversationRef, ApiError>;

    async fn send_message(
        &self,
        conversation_id: i64,
        request: &SendMessageRequest,
    ) -> Result<Message, ApiError>;

    async fn send_contact_request(&self, request: &ContactRequest) -> Result<Value, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
            token: None,
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attach a session token; `None` sends requests anonymously.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut rb = self
            .client
            .request(method, self.url(path))
            .header(protocol::HEADER_CONTENT_TYPE, protocol::CONTENT_TYPE_JSON);
        if let Some(token) = &self.token {
            rb = rb.header(protocol::HEADER_AUTHORIZATION, protocol::bearer(token));
        }
        rb
    }

    async fn send<TRes: DeserializeOwned>(rb: RequestBuilder) -> Result<TRes, ApiError> {
        let resp = rb.send().await.map_err(|e| {
            crate::log_warn!("Request failed: {}", e);
            ApiError::connection()
        })?;

        let status = resp.status().as_u16();
        let text = resp.text().await.map_err(|e| {
            crate::log_warn!("Failed to read response body: {}", e);
            ApiError::connection()
        })?;

        decode_response(status, &text)
    }

    fn encode<TReq: Serialize>(body: &TReq) -> Result<Vec<u8>, ApiError> {
        serde_json::to_vec(body).map_err(|e| {
            crate::log_error!("Failed to encode request body: {}", e);
            ApiError::new(0, aidswap_shared::GENERIC_ERROR_MESSAGE)
        })
    }

    /// Make a GET request
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        Self::send(self.request(Method::GET, path)).await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body = Self::encode(body)?;
        Self::send(self.request(Method::POST, path).body(body)).await
    }

    /// Make a PATCH request with a JSON body
    pub async fn patch_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body = Self::encode(body)?;
        Self::send(self.request(Method::PATCH, path).body(body)).await
    }

    /// Make a PATCH request without a body
    pub async fn patch<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        Self::send(self.request(Method::PATCH, path)).await
    }

    // --- Auth ---

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(protocol::AUTH_LOGIN, request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(protocol::AUTH_REGISTER, request).await
    }

    // --- Posts ---

    pub async fn list_posts(&self, filters: &PostFilters) -> Result<Vec<Post>, ApiError> {
        self.get_json(&protocol::posts_filtered(filters)).await
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.get_json(&protocol::post(id)).await
    }

    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<Value, ApiError> {
        self.post_json(protocol::POSTS, request).await
    }

    pub async fn complete_post(&self, id: i64) -> Result<Value, ApiError> {
        self.patch(&protocol::complete_post(id)).await
    }

    pub async fn my_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json(protocol::MY_POSTS).await
    }

    // --- Matches ---

    /// Matches the current user initiated; only the post ids are relied on.
    pub async fn my_matches(&self) -> Result<Vec<Match>, ApiError> {
        self.get_json(protocol::MY_MATCHES).await
    }

    /// The same matches as [`Self::my_matches`], with the post details used
    /// by the activity history.
    pub async fn my_activity(&self) -> Result<Vec<MatchActivity>, ApiError> {
        self.get_json(protocol::MY_MATCHES).await
    }

    pub async fn received_activity(&self) -> Result<Vec<MatchActivity>, ApiError> {
        self.get_json(protocol::RECEIVED_MATCHES).await
    }

    pub async fn post_matches(&self, post_id: i64) -> Result<Vec<Match>, ApiError> {
        self.get_json(&protocol::post_matches(post_id)).await
    }

    // --- Messaging ---

    pub async fn conversations(&self) -> Result<Vec<Conversation>, ApiError> {
        self.get_json(protocol::CONVERSATIONS).await
    }

    pub async fn conversation_messages(&self, conversation_id: i64) -> Result<Vec<Message>, ApiError> {
        self.get_json(&protocol::conversation_messages(conversation_id))
            .await
    }

    // --- Feedback / users ---

    pub async fn submit_feedback(&self, request: &FeedbackRequest) -> Result<Value, ApiError> {
        self.post_json(protocol::FEEDBACK, request).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get_json(&protocol::user(id)).await
    }
}

#[async_trait(?Send)]
impl AidApi for ApiClient {
    async fn create_match(&self, post_id: i64) -> Result<Value, ApiError> {
        self.post_json(protocol::MATCHES, &CreateMatchRequest { post_id })
            .await
    }

    async fn start_conversation(
        &self,
        request: &StartConversationRequest,
    ) -> Result<ConversationRef, ApiError> {
        self.post_json(protocol::START_CONVERSATION, request).await
    }

    async fn send_message(
        &self,
        conversation_id: i64,
        request: &SendMessageRequest,
    ) -> Result<Message, ApiError> {
        self.post_json(&protocol::conversation_messages(conversation_id), request)
            .await
    }

    async fn send_contact_request(&self, request: &ContactRequest) -> Result<Value, ApiError> {
        self.post_json(protocol::CONTACT_REQUESTS, request).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a status and body into the call's result.
///
/// A success body that is not the expected JSON is reported like a failed
/// connection: the caller got nothing it can use.
fn decode_response<TRes: DeserializeOwned>(status: u16, body: &str) -> Result<TRes, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }

    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| {
        crate::log_warn!("Unexpected response body (status {}): {}", status, e);
        ApiError::connection()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aidswap_shared::{CONNECTION_ERROR_MESSAGE, GENERIC_ERROR_MESSAGE};

    const BASE: &str = "http://localhost:3000/api";

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new().with_base_url("http://localhost:3000/api/");
        assert_eq!(client.url("/posts/7"), "http://localhost:3000/api/posts/7");
        assert_eq!(client.url("posts"), "http://localhost:3000/api/posts");
        assert_eq!(client.url("https://other.example/x"), "https://other.example/x");
    }

    #[test]
    fn token_is_sent_as_bearer() {
        let client = ApiClient::new()
            .with_base_url(BASE)
            .with_token(Some("abc".into()));
        let req = client.request(Method::GET, "/posts/7").build().unwrap();

        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.url().as_str(), "http://localhost:3000/api/posts/7");
        assert_eq!(req.headers()["authorization"], "Bearer abc");
        assert_eq!(req.headers()["content-type"], "application/json");
    }

    #[test]
    fn anonymous_requests_have_no_authorization() {
        let client = ApiClient::new().with_base_url(BASE).with_token(Some(String::new()));
        let req = client.request(Method::POST, "/auth/login").build().unwrap();
        assert!(req.headers().get("authorization").is_none());
        assert_eq!(req.headers()["content-type"], "application/json");
    }

    #[test]
    fn success_bodies_decode() {
        let post: ConversationRef = decode_response(201, r#"{"id":12,"extra":true}"#).unwrap();
        assert_eq!(post.id, 12);

        let nothing: Value = decode_response(200, "").unwrap();
        assert_eq!(nothing, Value::Null);
    }

    #[test]
    fn failures_normalise_to_one_shape() {
        let err = decode_response::<Value>(403, r#"{"error":"Not your post"}"#).unwrap_err();
        assert_eq!((err.status, err.message.as_str()), (403, "Not your post"));

        let err = decode_response::<Value>(502, "Bad Gateway").unwrap_err();
        assert_eq!((err.status, err.message.as_str()), (502, GENERIC_ERROR_MESSAGE));

        let err = decode_response::<ConversationRef>(200, "<html>").unwrap_err();
        assert_eq!((err.status, err.message.as_str()), (0, CONNECTION_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        // Port 9 (discard) on localhost: nothing listens there in CI
        let client = ApiClient::new().with_base_url("http://127.0.0.1:9/api");
        let err = client.get_post(7).await.unwrap_err();
        assert!(err.is_connection_failure());
        assert_eq!(err.message, CONNECTION_ERROR_MESSAGE);
    }
}
