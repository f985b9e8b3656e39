use serde::{Deserialize, Serialize};

use super::Author;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub author: Author,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub user_has_liked: bool,
}

/// Counters returned by the blog like sub-resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogReaction {
    pub likes_count: i64,
    pub user_has_liked: bool,
}

/// Payload for creating a blog post.
///
/// Sent as a multipart form (not JSON): `title`, `content`, an optional
/// `image` file part, and one `tags` field per tag.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub image: Option<BlogImage>,
    pub tags: Vec<String>,
}

/// In-memory image attachment for [`NewBlog`].
#[derive(Debug, Clone)]
pub struct BlogImage {
    pub file_name: String,
    /// MIME type, e.g. "image/png".
    pub content_type: String,
    pub bytes: Vec<u8>,
}
