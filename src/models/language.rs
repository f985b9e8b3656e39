use serde::{Deserialize, Serialize};

/// A programming language snippets can be written in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// Short identifier used for syntax highlighting (e.g. "rs", "py").
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewLanguage {
    pub name: String,
    pub code: String,
}

/// Partial language update; absent fields are left unchanged by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LanguageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
