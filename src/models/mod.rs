//! Wire-shape models for CodeHive resources.
//!
//! These structs mirror the backend's JSON exactly; the client transports
//! them without validation or caching. Grouped by resource family:
//!
//! - `user`: session and admin account types, login payloads
//! - `category`, `discussion`: forum taxonomy, threads, comments
//! - `snippet`, `language`: code snippets, reactions, sort orders
//! - `blog`, `news`: posts, tags, announcements
//! - `role`: admin-editable role rows
//! - `page`: the paginated list envelope

pub mod blog;
pub mod category;
pub mod discussion;
pub mod language;
pub mod news;
pub mod page;
pub mod role;
pub mod snippet;
pub mod user;

pub use blog::{Blog, BlogImage, BlogReaction, NewBlog, Tag};
pub use category::{Category, CategoryUpdate, NewCategory};
pub use discussion::{Author, Comment, Discussion, NewComment, NewDiscussion};
pub use language::{Language, LanguageUpdate, NewLanguage};
pub use news::{NewNews, NewsItem};
pub use page::Page;
pub use role::{NewRole, RoleRecord, RoleUpdate};
pub use snippet::{
    NewSnippet, NewSnippetCode, Reaction, ReactionSummary, Snippet, SnippetCode, SnippetSort,
};
pub use user::{
    LoginCredentials, LoginResponse, LoginUser, NewUser, SessionUser, UserAccount, UserUpdate,
};
