//! Match and contact workflows shared by the feed, post detail and profile
//! views.
//!
//! Starting a match is three separate requests: register interest, open (or
//! reuse) a conversation with the owner, send an opening message. They are
//! not a transaction. When a step fails the error names the step and, if it
//! already exists, the conversation; earlier steps are not rolled back.

use aidswap_shared::{
    ApiError, ContactRequest, Post, PostStatus, PostType, SendMessageRequest,
    StartConversationRequest,
};

use crate::api_client::AidApi;

/// The post facts the match workflow needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTarget {
    pub post_id: i64,
    pub owner_id: i64,
    pub post_type: PostType,
    pub item_name: String,
    pub status: PostStatus,
}

impl From<&Post> for MatchTarget {
    fn from(post: &Post) -> Self {
        Self {
            post_id: post.id,
            owner_id: post.user_id,
            post_type: post.post_type,
            item_name: post.item_name.clone(),
            status: post.status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStep {
    RegisterInterest,
    StartConversation,
    SendOpeningMessage,
}

impl std::fmt::Display for MatchStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::RegisterInterest => "register interest",
            Self::StartConversation => "start conversation",
            Self::SendOpeningMessage => "send opening message",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("This is your own post")]
    OwnPost,
    #[error("You already responded to this post")]
    AlreadyMatched,
    #[error("This post is already completed")]
    PostClosed,
    #[error("Could not {step}: {source}")]
    Step {
        step: MatchStep,
        /// Set when the conversation was opened before the failure.
        conversation_id: Option<i64>,
        source: ApiError,
    },
}

impl MatchError {
    /// The server recorded the match before the failure, so a retry would be
    /// rejected as a duplicate.
    pub fn interest_registered(&self) -> bool {
        matches!(self, Self::Step { step, .. } if *step != MatchStep::RegisterInterest)
    }

    pub fn conversation_id(&self) -> Option<i64> {
        match self {
            Self::Step {
                conversation_id, ..
            } => *conversation_id,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStarted {
    pub conversation_id: i64,
    pub notice: &'static str,
}

/// How the match button for a post should look to the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchButton {
    OwnPost,
    AlreadyMatched,
    Closed,
    Available(PostType),
}

impl MatchButton {
    pub fn for_post(
        target: &MatchTarget,
        current_user_id: Option<i64>,
        already_matched: bool,
    ) -> Self {
        match check_can_match(target, current_user_id, already_matched) {
            Ok(()) => Self::Available(target.post_type),
            Err(MatchError::OwnPost) => Self::OwnPost,
            Err(MatchError::AlreadyMatched) => Self::AlreadyMatched,
            Err(_) => Self::Closed,
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OwnPost => "Your post",
            Self::AlreadyMatched => "Responded",
            Self::Closed => "Completed",
            Self::Available(PostType::Have) => "I need this",
            Self::Available(PostType::Need) => "I can help",
        }
    }
}

/// Client-side gate, checked before any request is made.
///
/// An unknown current user is treated as a possible owner, so nothing is
/// sent until identity is known.
pub fn check_can_match(
    target: &MatchTarget,
    current_user_id: Option<i64>,
    already_matched: bool,
) -> Result<(), MatchError> {
    match current_user_id {
        Some(id) if id != target.owner_id => {}
        _ => return Err(MatchError::OwnPost),
    }
    if already_matched {
        return Err(MatchError::AlreadyMatched);
    }
    if target.status == PostStatus::Completed {
        return Err(MatchError::PostClosed);
    }
    Ok(())
}

/// First message sent to the owner when a match starts.
pub fn opening_message(post_type: PostType, item_name: &str) -> String {
    match post_type {
        PostType::Have => format!(
            "Hello, I'm interested in the {item_name} you posted. Is it still available?"
        ),
        PostType::Need => format!("Hello, I can help provide {item_name}. How can I reach you?"),
    }
}

fn started_notice(post_type: PostType) -> &'static str {
    match post_type {
        PostType::Have => "Conversation started with the post owner!",
        PostType::Need => "Conversation started with the person who needs help!",
    }
}

/// Register interest in a post, open a conversation with its owner and send
/// the opening message, in that order.
pub async fn start_match<A: AidApi + ?Sized>(
    api: &A,
    target: &MatchTarget,
    current_user_id: Option<i64>,
    already_matched: bool,
) -> Result<MatchStarted, MatchError> {
    check_can_match(target, current_user_id, already_matched)?;

    api.create_match(target.post_id)
        .await
        .map_err(|source| MatchError::Step {
            step: MatchStep::RegisterInterest,
            conversation_id: None,
            source,
        })?;

    let conversation = api
        .start_conversation(&StartConversationRequest {
            other_user_id: target.owner_id,
            post_id: Some(target.post_id),
        })
        .await
        .map_err(|source| MatchError::Step {
            step: MatchStep::StartConversation,
            conversation_id: None,
            source,
        })?;

    let message = SendMessageRequest {
        content: opening_message(target.post_type, &target.item_name),
    };
    api.send_message(conversation.id, &message)
        .await
        .map_err(|source| MatchError::Step {
            step: MatchStep::SendOpeningMessage,
            conversation_id: Some(conversation.id),
            source,
        })?;

    crate::log_info!(
        "Match started on post {} (conversation {})",
        target.post_id,
        conversation.id
    );

    Ok(MatchStarted {
        conversation_id: conversation.id,
        notice: started_notice(target.post_type),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// A conversation is open; the caller navigates to it.
    Conversation { conversation_id: i64 },
    /// Opening a conversation failed, a contact request was queued instead.
    RequestSent,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("You cannot contact yourself")]
    SelfContact,
    #[error("{request}")]
    Failed {
        conversation: ApiError,
        request: ApiError,
    },
}

/// Reach out to a user directly: open a conversation, or fall back to a
/// contact request carrying the optional note.
pub async fn contact_user<A: AidApi + ?Sized>(
    api: &A,
    current_user_id: Option<i64>,
    recipient_id: i64,
    post_id: Option<i64>,
    note: &str,
) -> Result<ContactOutcome, ContactError> {
    if current_user_id.map_or(true, |id| id == recipient_id) {
        return Err(ContactError::SelfContact);
    }

    let started = api
        .start_conversation(&StartConversationRequest {
            other_user_id: recipient_id,
            post_id,
        })
        .await;

    let conversation_error = match started {
        Ok(conversation) => {
            return Ok(ContactOutcome::Conversation {
                conversation_id: conversation.id,
            })
        }
        Err(e) => e,
    };
    crate::log_warn!(
        "Could not open a conversation with user {}: {}; sending a contact request",
        recipient_id,
        conversation_error
    );

    let note = note.trim();
    let request = ContactRequest {
        recipient_id,
        post_id,
        message: (!note.is_empty()).then(|| note.to_string()),
    };
    match api.send_contact_request(&request).await {
        Ok(_) => Ok(ContactOutcome::RequestSent),
        Err(request) => Err(ContactError::Failed {
            conversation: conversation_error,
            request,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aidswap_shared::{ConversationRef, Message};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        fail_match: bool,
        fail_conversation: bool,
        fail_message: bool,
        fail_contact: bool,
    }

    impl FakeApi {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn outcome<T>(&self, fail: bool, status: u16, ok: T) -> Result<T, ApiError> {
            if fail {
                Err(ApiError::new(status, format!("failed with {status}")))
            } else {
                Ok(ok)
            }
        }
    }

    #[async_trait(?Send)]
    impl AidApi for FakeApi {
        async fn create_match(&self, post_id: i64) -> Result<Value, ApiError> {
            self.calls.borrow_mut().push(format!("match {post_id}"));
            self.outcome(self.fail_match, 400, Value::Null)
        }

        async fn start_conversation(
            &self,
            request: &StartConversationRequest,
        ) -> Result<ConversationRef, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("start {} {:?}", request.other_user_id, request.post_id));
            self.outcome(self.fail_conversation, 500, ConversationRef { id: 77 })
        }

        async fn send_message(
            &self,
            conversation_id: i64,
            request: &SendMessageRequest,
        ) -> Result<Message, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("send {conversation_id}: {}", request.content));
            let sent = Message {
                id: 1,
                content: request.content.clone(),
                sender_id: 1,
                username: None,
                created_at: "2024-01-01T00:00:00Z".into(),
                is_read: false,
            };
            self.outcome(self.fail_message, 0, sent)
        }

        async fn send_contact_request(&self, request: &ContactRequest) -> Result<Value, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("contact {} {:?}", request.recipient_id, request.message));
            self.outcome(self.fail_contact, 503, Value::Null)
        }
    }

    fn target(post_type: PostType) -> MatchTarget {
        MatchTarget {
            post_id: 7,
            owner_id: 2,
            post_type,
            item_name: "rice".into(),
            status: PostStatus::Active,
        }
    }

    #[tokio::test]
    async fn happy_path_runs_three_steps_in_order() {
        let api = FakeApi::default();
        let started = start_match(&api, &target(PostType::Have), Some(1), false)
            .await
            .unwrap();

        assert_eq!(started.conversation_id, 77);
        assert_eq!(started.notice, "Conversation started with the post owner!");
        assert_eq!(
            api.calls(),
            vec![
                "match 7".to_string(),
                "start 2 Some(7)".to_string(),
                format!("send 77: {}", opening_message(PostType::Have, "rice")),
            ]
        );
    }

    #[tokio::test]
    async fn own_post_is_blocked_without_network() {
        let api = FakeApi::default();
        let err = start_match(&api, &target(PostType::Need), Some(2), false)
            .await
            .unwrap_err();
        assert_eq!(err, MatchError::OwnPost);
        assert!(api.calls().is_empty());

        // unknown identity is blocked too
        let err = start_match(&api, &target(PostType::Need), None, false)
            .await
            .unwrap_err();
        assert_eq!(err, MatchError::OwnPost);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn already_matched_and_completed_posts_are_blocked() {
        let api = FakeApi::default();
        let err = start_match(&api, &target(PostType::Have), Some(1), true)
            .await
            .unwrap_err();
        assert_eq!(err, MatchError::AlreadyMatched);

        let mut closed = target(PostType::Have);
        closed.status = PostStatus::Completed;
        let err = start_match(&api, &closed, Some(1), false).await.unwrap_err();
        assert_eq!(err, MatchError::PostClosed);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn failure_reports_the_step_and_stops() {
        let api = FakeApi {
            fail_conversation: true,
            ..Default::default()
        };
        let err = start_match(&api, &target(PostType::Need), Some(1), false)
            .await
            .unwrap_err();
        match err {
            MatchError::Step {
                step,
                conversation_id,
                source,
            } => {
                assert_eq!(step, MatchStep::StartConversation);
                assert_eq!(conversation_id, None);
                assert_eq!(source.status, 500);
            }
            other => panic!("unexpected {other:?}"),
        }
        // the registered interest is not rolled back, no message is sent
        assert_eq!(api.calls(), vec!["match 7", "start 2 Some(7)"]);
    }

    #[tokio::test]
    async fn message_failure_keeps_the_conversation_id() {
        let api = FakeApi {
            fail_message: true,
            ..Default::default()
        };
        let err = start_match(&api, &target(PostType::Need), Some(1), false)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            MatchError::Step {
                step: MatchStep::SendOpeningMessage,
                conversation_id: Some(77),
                source: ApiError::new(0, "failed with 0"),
            }
        );
        assert_eq!(err.to_string(), "Could not send opening message: failed with 0");
    }

    #[tokio::test]
    async fn late_failure_marks_the_post_as_responded() {
        let api = FakeApi {
            fail_message: true,
            ..Default::default()
        };
        let t = target(PostType::Have);
        let err = start_match(&api, &t, Some(1), false).await.unwrap_err();
        assert!(err.interest_registered());
        assert_eq!(err.conversation_id(), Some(77));

        // the button flips, and a second click sends nothing
        let button = MatchButton::for_post(&t, Some(1), err.interest_registered());
        assert_eq!(button, MatchButton::AlreadyMatched);
        let retry = start_match(&api, &t, Some(1), err.interest_registered()).await;
        assert_eq!(retry, Err(MatchError::AlreadyMatched));
        assert_eq!(api.calls().len(), 3);
    }

    #[tokio::test]
    async fn conversation_failure_still_counts_as_responded() {
        let api = FakeApi {
            fail_conversation: true,
            ..Default::default()
        };
        let err = start_match(&api, &target(PostType::Need), Some(1), false)
            .await
            .unwrap_err();
        assert!(err.interest_registered());
        assert_eq!(err.conversation_id(), None);
        assert!(err.to_string().starts_with("Could not start conversation"));
    }

    #[tokio::test]
    async fn first_step_failure_sends_nothing_else() {
        let api = FakeApi {
            fail_match: true,
            ..Default::default()
        };
        let err = start_match(&api, &target(PostType::Have), Some(1), false)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MatchError::Step {
                step: MatchStep::RegisterInterest,
                ..
            }
        ));
        assert!(!err.interest_registered());
        assert!(!MatchError::OwnPost.interest_registered());
        assert_eq!(api.calls(), vec!["match 7"]);
    }

    #[test]
    fn button_reflects_ownership_and_history() {
        let t = target(PostType::Have);

        assert_eq!(MatchButton::for_post(&t, Some(2), false), MatchButton::OwnPost);
        assert_eq!(MatchButton::for_post(&t, Some(1), true), MatchButton::AlreadyMatched);

        let available = MatchButton::for_post(&t, Some(1), false);
        assert!(available.is_enabled());
        assert_eq!(available.label(), "I need this");
        assert_eq!(
            MatchButton::Available(PostType::Need).label(),
            "I can help"
        );
        assert!(!MatchButton::OwnPost.is_enabled());
    }

    #[test]
    fn opening_message_depends_on_post_type() {
        assert!(opening_message(PostType::Have, "milk").contains("interested in the milk"));
        assert!(opening_message(PostType::Need, "milk").contains("help provide milk"));
    }

    #[tokio::test]
    async fn contact_opens_a_conversation() {
        let api = FakeApi::default();
        let outcome = contact_user(&api, Some(1), 2, Some(7), "hi").await.unwrap();
        assert_eq!(outcome, ContactOutcome::Conversation { conversation_id: 77 });
        assert_eq!(api.calls(), vec!["start 2 Some(7)"]);
    }

    #[tokio::test]
    async fn contact_falls_back_to_a_request() {
        let api = FakeApi {
            fail_conversation: true,
            ..Default::default()
        };
        let outcome = contact_user(&api, Some(1), 2, None, "  can we talk? ").await.unwrap();
        assert_eq!(outcome, ContactOutcome::RequestSent);
        assert_eq!(
            api.calls(),
            vec!["start 2 None", "contact 2 Some(\"can we talk?\")"]
        );
    }

    #[tokio::test]
    async fn contact_reports_the_last_failure() {
        let api = FakeApi {
            fail_conversation: true,
            fail_contact: true,
            ..Default::default()
        };
        let err = contact_user(&api, Some(1), 2, None, "").await.unwrap_err();
        assert_eq!(err.to_string(), "failed with 503");

        let err = contact_user(&api, Some(2), 2, None, "").await.unwrap_err();
        assert_eq!(err, ContactError::SelfContact);
    }
}
