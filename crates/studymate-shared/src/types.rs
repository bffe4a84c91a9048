use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope wrapped around every remote API response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

/// Post visibility as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
    Private,
    FollowersOnly,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Public
    }
}

/// A study-log post as returned by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub content: String,
    pub author_name: String,
    pub author_email: String,
    #[serde(default)]
    pub author_profile_image_url: Option<String>,
    pub visibility: Visibility,
    pub like_count: i64,
    pub comment_count: i64,
    pub view_count: i64,
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author_name: String,
    #[serde(default)]
    pub author_profile_image_url: Option<String>,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// A user profile with the counters the leaderboard scores on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    pub follower_count: i64,
    pub following_count: i64,
    pub post_count: i64,
}

/// One infinite-scroll page (Spring `Slice` shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slice<T> {
    pub content: Vec<T>,
    /// Zero-based page number as reported by the server.
    pub number: u32,
    pub size: u32,
    pub number_of_elements: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

/// One numbered-pagination page (profile listings).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_nums: Vec<u32>,
    pub prev: bool,
    pub next: bool,
    pub total_count: u64,
    pub prev_page: u32,
    pub next_page: u32,
    pub total_page: u32,
    pub current: u32,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreate {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// UUID of a previously uploaded cover file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
}

/// Body of `PUT /posts/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
}

/// Body of `POST /posts/{id}/comments` and `PUT /comments/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreate {
    pub content: String,
}

/// Category passed to the file upload / image view endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadKind {
    Post,
    User,
    Thumbnail,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Post => "POST",
            UploadKind::User => "USER",
            UploadKind::Thumbnail => "THUMBNAIL",
        }
    }
}

/// Per-batch outcome of `POST /files/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReport {
    pub total_count: u32,
    pub success_count: u32,
    pub fail_count: u32,
    pub success_file_names: Vec<String>,
    pub success_file_ids: Vec<String>,
    #[serde(default)]
    pub fail_file_details: std::collections::HashMap<String, String>,
}

/// Feed ordering selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Latest,
    Popular,
    Views,
}

impl SortMode {
    /// Wire value for the `orderCondition` query parameter.
    pub fn order_condition(&self) -> &'static str {
        match self {
            SortMode::Latest => "CREATED_AT_DESC",
            SortMode::Popular => "LIKE_COUNT_DESC",
            SortMode::Views => "VIEW_COUNT_DESC",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "latest" => Some(SortMode::Latest),
            "popular" => Some(SortMode::Popular),
            "views" => Some(SortMode::Views),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortMode::Latest => "latest",
            SortMode::Popular => "popular",
            SortMode::Views => "views",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_mode_order_condition() {
        assert_eq!(SortMode::Latest.order_condition(), "CREATED_AT_DESC");
        assert_eq!(SortMode::Popular.order_condition(), "LIKE_COUNT_DESC");
        assert_eq!(SortMode::Views.order_condition(), "VIEW_COUNT_DESC");
    }

    #[test]
    fn sort_mode_parse_roundtrip() {
        for mode in [SortMode::Latest, SortMode::Popular, SortMode::Views] {
            assert_eq!(SortMode::parse(&mode.to_string()), Some(mode));
        }
        assert_eq!(SortMode::parse("newest"), None);
    }

    #[test]
    fn post_deserializes_from_wire_shape() {
        let json = r#"{
            "id": 42,
            "content": "<p>done</p>",
            "authorName": "Mina",
            "authorEmail": "mina@example.com",
            "visibility": "PUBLIC",
            "likeCount": 3,
            "commentCount": 1,
            "viewCount": 17,
            "createdAt": "2024-05-01T09:30:00Z",
            "modifiedAt": "2024-05-01T09:30:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 42);
        assert_eq!(post.visibility, Visibility::Public);
        assert!(post.image_url.is_none());
        assert!(post.hashtags.is_none());
    }

    #[test]
    fn post_create_skips_absent_fields() {
        let body = PostCreate {
            content: "studied".into(),
            visibility: Some(Visibility::Public),
            file_id: None,
            hashtags: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["visibility"], "PUBLIC");
        assert!(json.get("fileId").is_none());
        assert!(json.get("hashtags").is_none());
    }

    #[test]
    fn slice_envelope_deserializes() {
        let json = r#"{
            "success": true,
            "data": {
                "content": [],
                "number": 0,
                "size": 20,
                "numberOfElements": 0,
                "first": true,
                "last": true,
                "empty": true
            }
        }"#;
        let result: ApiResult<Slice<Post>> = serde_json::from_str(json).unwrap();
        assert!(result.success);
        assert!(result.data.last);
        assert!(result.message.is_none());
    }
}
