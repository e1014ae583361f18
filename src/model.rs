//! Wire types for the Simple Social REST API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Account returned by `/users/me` and `/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_verified: bool,
}

impl User {
    /// Local part of the email, used as a greeting name.
    pub fn display_name(&self) -> &str {
        display_name(&self.email)
    }
}

/// Local part of an email address (everything before the first `@`).
pub fn display_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Kind of media attached to a post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a wire `file_type`. Anything that isn't `image` plays as video.
    pub fn from_file_type(file_type: &str) -> Self {
        if file_type == "image" {
            Self::Image
        } else {
            Self::Video
        }
    }

    /// Classify a MIME type the same way the upload endpoint does.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("video/") {
            Self::Video
        } else {
            Self::Image
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// A media post in the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub url: String,
    pub file_type: String,
    pub file_name: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub is_owner: bool,
    pub email: String,
}

impl Post {
    pub fn media_kind(&self) -> MediaKind {
        MediaKind::from_file_type(&self.file_type)
    }

    /// Caption, with empty strings treated as absent.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref().filter(|c| !c.is_empty())
    }
}

/// Body of `GET /feed`, newest post first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Body of `POST /auth/jwt/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body sent to `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub post_id: String,
    pub url: String,
    pub file_id: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Body of `DELETE /posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
