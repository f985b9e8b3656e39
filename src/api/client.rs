//! API gateway for the CodeHive backend.
//!
//! One method per backend operation, all funneled through a single dispatch
//! point that attaches the bearer token from the [`SessionStore`], echoes the
//! backend's CSRF cookie, and reacts globally to authentication expiry.
//!
//! The gateway transports payloads; it does not cache, retry, or dedupe
//! requests, and it issues each call exactly once.

use std::sync::{Arc, Mutex};

use reqwest::{header, multipart, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::auth::SessionStore;
use crate::config::Config;
use crate::models::{
    Blog, BlogReaction, Category, CategoryUpdate, Comment, Discussion, Language, LanguageUpdate,
    LoginCredentials, LoginResponse, NewBlog, NewCategory, NewComment, NewDiscussion, NewLanguage,
    NewNews, NewRole, NewSnippet, NewUser, NewsItem, Page, ReactionSummary, RoleRecord,
    RoleUpdate, Snippet, SnippetSort, Tag, UserAccount, UserUpdate,
};

use super::ApiError;

/// Cookie the backend sets for CSRF protection
const CSRF_COOKIE: &str = "csrftoken";

/// Header echoing the CSRF cookie value back to the backend
const CSRF_HEADER: &str = "X-CSRFToken";

/// Invoked after a 401 response has torn down the session.
///
/// This is the library seam for the platform's "return to the login screen"
/// behavior: the embedding application navigates here. The gateway calls it
/// exactly once per 401, after clearing the session store and before the
/// rejection reaches the caller. The default handler only logs.
pub trait SessionExpiredHandler: Send + Sync {
    fn on_session_expired(&self);
}

struct LogOnExpiry;

impl SessionExpiredHandler for LogOnExpiry {
    fn on_session_expired(&self) {
        warn!("session expired; application should return to the login screen");
    }
}

/// API gateway for CodeHive.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<SessionStore>,
    csrf_token: Arc<Mutex<Option<String>>>,
    on_expired: Arc<dyn SessionExpiredHandler>,
}

impl ApiClient {
    /// Create a new gateway over the given session store.
    pub fn new(config: &Config, store: Arc<SessionStore>) -> Result<Self, ApiError> {
        // Cookie store keeps the csrftoken cookie round-tripping; the header
        // echo is handled separately below.
        let client = Client::builder().cookie_store(true).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
            csrf_token: Arc::new(Mutex::new(None)),
            on_expired: Arc::new(LogOnExpiry),
        })
    }

    /// Replace the 401 handler.
    pub fn with_session_expired_handler(
        mut self,
        handler: Arc<dyn SessionExpiredHandler>,
    ) -> Self {
        self.on_expired = handler;
        self
    }

    // ===== Auth =====

    /// Raw login call. Most callers want [`SessionStore::login`], which
    /// validates and persists the result.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        self.post_json("/login/", credentials).await
    }

    // ===== Categories (admin) =====

    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/admin/categories/").await
    }

    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.post_json("/admin/categories/", category).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        update: &CategoryUpdate,
    ) -> Result<Category, ApiError> {
        self.patch_json(&format!("/admin/categories/{}", id), update)
            .await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/categories/{}", id)).await
    }

    // ===== Discussions =====

    /// Fetch a page of discussions. Pages are 1-based.
    pub async fn get_discussions(&self, page: u32) -> Result<Page<Discussion>, ApiError> {
        self.get_json(&format!("/discussions/?page={}", page)).await
    }

    pub async fn get_discussions_by_category(
        &self,
        category_slug: &str,
        page: u32,
    ) -> Result<Page<Discussion>, ApiError> {
        self.get_json(&format!(
            "/discussions/?category={}&page={}",
            category_slug, page
        ))
        .await
    }

    pub async fn get_discussion(&self, id: i64) -> Result<Discussion, ApiError> {
        self.get_json(&format!("/discussions/{}/", id)).await
    }

    pub async fn create_discussion(
        &self,
        discussion: &NewDiscussion,
    ) -> Result<Discussion, ApiError> {
        self.post_json("/discussions/", discussion).await
    }

    pub async fn delete_discussion(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/discussions/{}/", id)).await
    }

    // ===== Comments =====

    pub async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ApiError> {
        self.post_json("/comments/", comment).await
    }

    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/comments/{}/", id)).await
    }

    // ===== News =====

    pub async fn get_news(&self) -> Result<Vec<NewsItem>, ApiError> {
        self.get_json("/news/").await
    }

    pub async fn create_news(&self, news: &NewNews) -> Result<NewsItem, ApiError> {
        self.post_json("/news/", news).await
    }

    pub async fn delete_news(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/news/{}/", id)).await
    }

    // ===== Languages (admin) =====

    pub async fn get_languages(&self) -> Result<Vec<Language>, ApiError> {
        self.get_json("/admin/languages/").await
    }

    pub async fn create_language(&self, language: &NewLanguage) -> Result<Language, ApiError> {
        self.post_json("/admin/languages/", language).await
    }

    pub async fn update_language(
        &self,
        id: i64,
        update: &LanguageUpdate,
    ) -> Result<Language, ApiError> {
        self.patch_json(&format!("/admin/languages/{}", id), update)
            .await
    }

    pub async fn delete_language(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/languages/{}", id)).await
    }

    // ===== Snippets =====

    pub async fn get_snippets(&self, sort: SnippetSort) -> Result<Vec<Snippet>, ApiError> {
        self.get_json(&format!("/snippets/?sort={}", sort.as_str()))
            .await
    }

    pub async fn get_snippet(&self, id: i64) -> Result<Snippet, ApiError> {
        self.get_json(&format!("/snippets/{}/", id)).await
    }

    pub async fn create_snippet(&self, snippet: &NewSnippet) -> Result<Snippet, ApiError> {
        self.post_json("/snippets/", snippet).await
    }

    pub async fn like_snippet(&self, id: i64) -> Result<ReactionSummary, ApiError> {
        self.post_empty(&format!("/snippets/{}/like/", id)).await
    }

    pub async fn dislike_snippet(&self, id: i64) -> Result<ReactionSummary, ApiError> {
        self.post_empty(&format!("/snippets/{}/dislike/", id)).await
    }

    // ===== Blogs =====

    /// Fetch blogs, optionally filtered by tag slug.
    pub async fn get_blogs(&self, tag: Option<&str>) -> Result<Vec<Blog>, ApiError> {
        let path = match tag {
            Some(tag) => format!("/blogs/?tag={}", tag),
            None => "/blogs/".to_string(),
        };
        self.get_json(&path).await
    }

    pub async fn get_blog(&self, id: i64) -> Result<Blog, ApiError> {
        self.get_json(&format!("/blogs/{}/", id)).await
    }

    /// Create a blog post. This is the one multipart operation: `title`,
    /// `content`, an optional `image` file part, and one `tags` field per
    /// tag, instead of the default JSON encoding.
    pub async fn create_blog(&self, blog: &NewBlog) -> Result<Blog, ApiError> {
        let mut form = multipart::Form::new()
            .text("title", blog.title.clone())
            .text("content", blog.content.clone());

        if let Some(ref image) = blog.image {
            let part = multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)
                .map_err(|error| {
                    ApiError::InvalidRequest(format!(
                        "invalid image content type {}: {}",
                        image.content_type, error
                    ))
                })?;
            form = form.part("image", part);
        }
        for tag in &blog.tags {
            form = form.text("tags", tag.clone());
        }

        let url = self.url("/blogs/");
        let response = self
            .dispatch(self.client.post(&url).multipart(form), &url)
            .await?;
        Self::decode(response, &url).await
    }

    pub async fn like_blog(&self, id: i64) -> Result<BlogReaction, ApiError> {
        self.post_empty(&format!("/blogs/{}/like/", id)).await
    }

    pub async fn get_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get_json("/tags/").await
    }

    // ===== Users (admin) =====

    pub async fn get_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.get_json("/admin/users/").await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<UserAccount, ApiError> {
        self.post_json("/admin/users/create/", user).await
    }

    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<UserAccount, ApiError> {
        self.patch_json(&format!("/admin/users/{}/", id), update)
            .await
    }

    /// Flip an account's active flag. `currently_active` is the state being
    /// toggled away from.
    pub async fn toggle_user_status(
        &self,
        id: i64,
        currently_active: bool,
    ) -> Result<UserAccount, ApiError> {
        self.patch_json(
            &format!("/admin/users/{}/toggle/", id),
            &json!({ "isActive": !currently_active }),
        )
        .await
    }

    // ===== Roles (admin) =====

    pub async fn get_roles(&self) -> Result<Vec<RoleRecord>, ApiError> {
        self.get_json("/admin/roles/").await
    }

    pub async fn create_role(&self, role: &NewRole) -> Result<RoleRecord, ApiError> {
        self.post_json("/admin/roles/", role).await
    }

    pub async fn update_role(&self, id: i64, update: &RoleUpdate) -> Result<RoleRecord, ApiError> {
        self.patch_json(&format!("/admin/roles/{}/", id), update)
            .await
    }

    pub async fn delete_role(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/roles/{}/", id)).await
    }

    // ===== Transport =====

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Single choke point for every request: attaches credentials, captures
    /// the CSRF cookie, and maps failure statuses. A 401 tears down the
    /// session and fires the expiry handler before rejecting.
    async fn dispatch(
        &self,
        mut request: RequestBuilder,
        url: &str,
    ) -> Result<Response, ApiError> {
        if let Some(token) = self.store.token() {
            request = request.bearer_auth(token);
        }
        if let Some(csrf) = self.csrf_value() {
            request = request.header(CSRF_HEADER, csrf);
        }

        let response = request.send().await?;
        self.capture_csrf(&response);

        if response.status() == StatusCode::UNAUTHORIZED {
            debug!(url = url, "401 response, tearing down session");
            if let Err(error) = self.store.clear() {
                warn!(error = %error, "failed to clear persisted session after 401");
            }
            self.on_expired.on_session_expired();
            return Err(ApiError::Unauthorized);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!(url = url, status = %status, "request failed");
            return Err(ApiError::from_status(status, &body));
        }

        Ok(response)
    }

    /// Remember the csrftoken cookie value whenever the backend (re)sets it.
    fn capture_csrf(&self, response: &Response) {
        for value in response.headers().get_all(header::SET_COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            let pair = raw.split(';').next().unwrap_or_default();
            let Some((name, token)) = pair.trim().split_once('=') else {
                continue;
            };
            if name == CSRF_COOKIE && !token.is_empty() {
                debug!("captured csrf token from response cookie");
                *self
                    .csrf_token
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
            }
        }
    }

    fn csrf_value(&self) -> Option<String> {
        self.csrf_token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
        response.json().await.map_err(|error| {
            ApiError::InvalidResponse(format!(
                "failed to decode response from {}: {}",
                url, error
            ))
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.dispatch(self.client.get(&url), &url).await?;
        Self::decode(response, &url).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let response = self
            .dispatch(self.client.post(&url).json(body), &url)
            .await?;
        Self::decode(response, &url).await
    }

    /// POST without a body, used by the like/dislike sub-resources.
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.dispatch(self.client.post(&url), &url).await?;
        Self::decode(response, &url).await
    }

    async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let response = self
            .dispatch(self.client.patch(&url).json(body), &url)
            .await?;
        Self::decode(response, &url).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        self.dispatch(self.client.delete(&url), &url).await?;
        Ok(())
    }
}
