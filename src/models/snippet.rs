use serde::{Deserialize, Serialize};

use super::{Author, Language};

/// A reaction the current user has recorded on a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: Author,
    pub created_at: String,
    #[serde(default)]
    pub codes: Vec<SnippetCode>,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub dislikes_count: i64,
    #[serde(default)]
    pub user_reaction: Option<Reaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetCode {
    pub id: i64,
    pub language: Language,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSnippet {
    pub title: String,
    pub description: String,
    pub codes: Vec<NewSnippetCode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSnippetCode {
    pub language_id: i64,
    pub code: String,
}

/// Counters returned by the like/dislike sub-resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionSummary {
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub user_reaction: Option<Reaction>,
}

/// Server-side sort orders for the snippet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnippetSort {
    #[default]
    Newest,
    Oldest,
    MostLiked,
}

impl SnippetSort {
    /// Query-parameter value understood by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            SnippetSort::Newest => "newest",
            SnippetSort::Oldest => "oldest",
            SnippetSort::MostLiked => "most_liked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_query_values() {
        assert_eq!(SnippetSort::Newest.as_str(), "newest");
        assert_eq!(SnippetSort::Oldest.as_str(), "oldest");
        assert_eq!(SnippetSort::MostLiked.as_str(), "most_liked");
        assert_eq!(SnippetSort::default(), SnippetSort::Newest);
    }

    #[test]
    fn test_reaction_summary_null_reaction() {
        let summary: ReactionSummary = serde_json::from_str(
            r#"{"likes_count":3,"dislikes_count":1,"user_reaction":null}"#,
        )
        .expect("Failed to parse reaction summary");

        assert_eq!(summary.likes_count, 3);
        assert!(summary.user_reaction.is_none());

        let summary: ReactionSummary = serde_json::from_str(
            r#"{"likes_count":4,"dislikes_count":1,"user_reaction":"like"}"#,
        )
        .expect("Failed to parse reaction summary");
        assert_eq!(summary.user_reaction, Some(Reaction::Like));
    }
}
