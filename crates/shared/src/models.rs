//! Data models for the aid-exchange API.
//!
//! Field names follow the server's JSON exactly: snake_case for entities,
//! camelCase for the messaging request bodies.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// --- Enumerations ---

/// Whether a post offers an item or asks for one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostType {
    Have,
    Need,
}

impl PostType {
    pub const ALL: [PostType; 2] = [PostType::Have, PostType::Need];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Have => "HAVE",
            Self::Need => "NEED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Have => "I have",
            Self::Need => "I need",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Water,
    Medical,
    Baby,
    Power,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Water,
        Category::Medical,
        Category::Baby,
        Category::Power,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Water => "water",
            Self::Medical => "medical",
            Self::Baby => "baby",
            Self::Power => "power",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Water => "Water",
            Self::Medical => "Medical",
            Self::Baby => "Baby",
            Self::Power => "Power",
            Self::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Area {
    #[serde(rename = "North Gaza")]
    NorthGaza,
    #[serde(rename = "Gaza City")]
    GazaCity,
    #[serde(rename = "Deir Al-Balah")]
    DeirAlBalah,
    #[serde(rename = "Khan Younis")]
    KhanYounis,
    #[serde(rename = "Rafah")]
    Rafah,
}

impl Area {
    pub const ALL: [Area; 5] = [
        Area::NorthGaza,
        Area::GazaCity,
        Area::DeirAlBalah,
        Area::KhanYounis,
        Area::Rafah,
    ];

    /// The wire value, which doubles as the display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NorthGaza => "North Gaza",
            Self::GazaCity => "Gaza City",
            Self::DeirAlBalah => "Deir Al-Balah",
            Self::KhanYounis => "Khan Younis",
            Self::Rafah => "Rafah",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Active,
    Completed,
}

impl PostStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

// --- Identity ---

/// The identity half of a session, as stored under the `user` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: SessionUser,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Result<Self, ValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingRequired { field: "username" });
        }
        if password.is_empty() {
            return Err(ValidationError::MissingRequired { field: "password" });
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    pub const MIN_PASSWORD_LEN: usize = 6;

    pub fn new(username: &str, password: &str, confirm: &str) -> Result<Self, ValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingRequired { field: "username" });
        }
        if password.is_empty() {
            return Err(ValidationError::MissingRequired { field: "password" });
        }
        if password.chars().count() < Self::MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: Self::MIN_PASSWORD_LEN,
            });
        }
        if password != confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

// --- Posts ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub post_type: PostType,
    #[serde(default)]
    pub type_ar: Option<String>,
    pub item_name: String,
    pub category: Category,
    #[serde(default)]
    pub category_ar: Option<String>,
    pub quantity: String,
    pub area: Area,
    #[serde(default)]
    pub area_ar: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    pub created_at: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl Post {
    pub fn is_active(&self) -> bool {
        self.status == PostStatus::Active
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    pub fn owner_name(&self) -> &str {
        self.username.as_deref().unwrap_or("user")
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePostRequest {
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub item_name: String,
    pub category: Category,
    pub quantity: String,
    pub area: Area,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for CreatePostRequest {
    fn default() -> Self {
        Self {
            post_type: PostType::Have,
            item_name: String::new(),
            category: Category::Food,
            quantity: String::new(),
            area: Area::GazaCity,
            description: None,
        }
    }
}

impl CreatePostRequest {
    /// Check required fields and return a trimmed copy ready to send.
    pub fn validated(&self) -> Result<Self, ValidationError> {
        let item_name = self.item_name.trim();
        if item_name.is_empty() {
            return Err(ValidationError::MissingRequired { field: "item_name" });
        }
        let quantity = self.quantity.trim();
        if quantity.is_empty() {
            return Err(ValidationError::MissingRequired { field: "quantity" });
        }
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(Self {
            post_type: self.post_type,
            item_name: item_name.to_string(),
            category: self.category,
            quantity: quantity.to_string(),
            area: self.area,
            description,
        })
    }
}

/// Optional filters for `GET /posts`. Unset filters are omitted from the
/// query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilters {
    pub post_type: Option<PostType>,
    pub category: Option<Category>,
    pub area: Option<Area>,
    pub user_id: Option<i64>,
}

impl PostFilters {
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Render as `?key=value&...`, or an empty string when nothing is set.
    pub fn to_query(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if let Some(t) = self.post_type {
            query.append_pair("type", t.as_str());
        }
        if let Some(c) = self.category {
            query.append_pair("category", c.as_str());
        }
        if let Some(a) = self.area {
            query.append_pair("area", a.as_str());
        }
        if let Some(id) = self.user_id {
            query.append_pair("user_id", &id.to_string());
        }
        let query = query.finish();
        if query.is_empty() {
            query
        } else {
            format!("?{query}")
        }
    }
}

// --- Matches ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    pub id: i64,
    pub post_id: i64,
    #[serde(default)]
    pub helper_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub post_type: Option<PostType>,
    #[serde(default)]
    pub participant_role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateMatchRequest {
    pub post_id: i64,
}

/// A row of the activity history (`/matches/my`, `/matches/received`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchActivity {
    pub id: i64,
    pub post_id: i64,
    pub item_name: String,
    pub post_type: PostType,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub category_ar: Option<String>,
    #[serde(default)]
    pub area: Option<Area>,
    #[serde(default)]
    pub area_ar: Option<String>,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub participant_role: Option<String>,
    #[serde(default)]
    pub post_owner_username: Option<String>,
    #[serde(default)]
    pub helper_username: Option<String>,
    #[serde(default)]
    pub helper_id: Option<i64>,
    pub created_at: String,
    #[serde(default)]
    pub status: PostStatus,
}

// --- Messaging ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    pub id: i64,
    pub other_user_id: i64,
    pub other_username: String,
    #[serde(default)]
    pub last_message_preview: Option<String>,
    #[serde(default)]
    pub last_message_at: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
}

/// The part of a conversation response the client needs to navigate to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationRef {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub sender_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StartConversationRequest {
    pub other_user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub content: String,
}

impl SendMessageRequest {
    /// Returns `None` for blank input; blank messages are never sent.
    pub fn new(content: &str) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() {
            None
        } else {
            Some(Self {
                content: content.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub recipient_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
    pub message: Option<String>,
}

// --- Feedback ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub post_id: i64,
    pub helper_id: i64,
    pub rating: u8,
    pub comment: Option<String>,
}

impl FeedbackRequest {
    pub fn new(
        post_id: i64,
        helper_id: i64,
        rating: u8,
        comment: &str,
    ) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange(rating));
        }
        let comment = comment.trim();
        Ok(Self {
            post_id,
            helper_id,
            rating,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_from_server_json() {
        let json = r#"{
            "id": 7, "user_id": 3, "type": "NEED", "type_ar": "أحتاج",
            "item_name": "Rice", "category": "food", "quantity": "5 kg",
            "area": "Khan Younis", "status": "active",
            "created_at": "2024-03-01T10:00:00Z", "username": "amal"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.post_type, PostType::Need);
        assert_eq!(post.area, Area::KhanYounis);
        assert!(post.is_active());
        assert!(post.is_owned_by(3));
        assert_eq!(post.owner_name(), "amal");
        assert_eq!(post.description, None);
    }

    #[test]
    fn create_post_rejects_empty_item_name() {
        let req = CreatePostRequest {
            item_name: "   ".into(),
            quantity: "2".into(),
            ..Default::default()
        };
        assert_eq!(
            req.validated(),
            Err(ValidationError::MissingRequired { field: "item_name" })
        );

        let req = CreatePostRequest {
            item_name: "Milk".into(),
            ..Default::default()
        };
        assert_eq!(
            req.validated(),
            Err(ValidationError::MissingRequired { field: "quantity" })
        );
    }

    #[test]
    fn create_post_trims_and_drops_blank_description() {
        let req = CreatePostRequest {
            item_name: " Milk ".into(),
            quantity: " 3 cans".into(),
            description: Some("  ".into()),
            ..Default::default()
        };
        let ok = req.validated().unwrap();
        assert_eq!(ok.item_name, "Milk");
        assert_eq!(ok.quantity, "3 cans");
        assert_eq!(ok.description, None);

        let body = serde_json::to_value(&ok).unwrap();
        assert_eq!(body["type"], "HAVE");
        assert_eq!(body["area"], "Gaza City");
        assert!(body.get("description").is_none());
    }

    #[test]
    fn filters_render_only_set_values() {
        assert_eq!(PostFilters::default().to_query(), "");
        assert!(PostFilters::default().is_empty());

        let filters = PostFilters {
            post_type: Some(PostType::Have),
            area: Some(Area::DeirAlBalah),
            ..Default::default()
        };
        assert_eq!(filters.to_query(), "?type=HAVE&area=Deir+Al-Balah");
        assert_eq!(PostFilters::for_user(12).to_query(), "?user_id=12");
    }

    #[test]
    fn messaging_bodies_use_camel_case() {
        let start = StartConversationRequest {
            other_user_id: 4,
            post_id: Some(9),
        };
        assert_eq!(
            serde_json::to_string(&start).unwrap(),
            r#"{"otherUserId":4,"postId":9}"#
        );

        let contact = ContactRequest {
            recipient_id: 4,
            post_id: None,
            message: None,
        };
        assert_eq!(
            serde_json::to_string(&contact).unwrap(),
            r#"{"recipientId":4,"message":null}"#
        );
    }

    #[test]
    fn blank_messages_are_not_sendable() {
        assert_eq!(SendMessageRequest::new("  \n"), None);
        assert_eq!(SendMessageRequest::new(" hi ").unwrap().content, "hi");
    }

    #[test]
    fn feedback_requires_rating() {
        assert_eq!(
            FeedbackRequest::new(1, 2, 0, ""),
            Err(ValidationError::RatingOutOfRange(0))
        );
        let ok = FeedbackRequest::new(1, 2, 5, "  thanks ").unwrap();
        assert_eq!(ok.comment.as_deref(), Some("thanks"));
        assert_eq!(FeedbackRequest::new(1, 2, 3, "").unwrap().comment, None);
    }

    #[test]
    fn register_checks_passwords() {
        assert_eq!(
            RegisterRequest::new("sara", "secret1", "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            RegisterRequest::new("sara", "abc", "abc"),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert!(RegisterRequest::new(" sara ", "secret1", "secret1").is_ok());
        assert!(LoginRequest::new("", "x").is_err());
    }
}
