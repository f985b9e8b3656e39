use serde::{Deserialize, Serialize};

/// Paginated envelope returned by list endpoints that page.
///
/// `next` and `previous` are opaque URLs owned by the backend; callers treat
/// them as booleans for "can page further" and re-request with a page number.
/// The gateway never follows them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}
