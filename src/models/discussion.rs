use serde::{Deserialize, Serialize};

use super::Category;

/// Author attribution embedded in discussions, comments, snippets, and blogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discussion {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created_at: String,
    pub category: Category,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author: Author,
    pub created_at: String,
}

/// Payload for creating a discussion; `category` is the category id.
#[derive(Debug, Clone, Serialize)]
pub struct NewDiscussion {
    pub title: String,
    pub content: String,
    pub category: i64,
}

/// Payload for creating a comment; `discussion` is the discussion id.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub discussion: i64,
    pub content: String,
}
