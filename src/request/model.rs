pub const DEFAULT_METHOD: &str = "GET";
pub const ELLIPSIS: &str = "...";

/// Request metadata resolved from the CGI variables, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub method: String,
    pub query: String,
    pub content_length: u64,
    pub body: String,
}

impl Default for RequestInfo {
    fn default() -> Self {
        Self {
            method: DEFAULT_METHOD.to_string(),
            query: String::new(),
            content_length: 0,
            body: String::new(),
        }
    }
}

impl RequestInfo {
    pub fn body_preview(&self, limit: usize) -> String {
        truncate_for_display(&self.body, limit)
    }
}

/// Keeps the first `limit` characters of `body`, appending `...` only when
/// something was cut.
pub fn truncate_for_display(body: &str, limit: usize) -> String {
    match body.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut preview = String::with_capacity(cut + ELLIPSIS.len());
            preview.push_str(&body[..cut]);
            preview.push_str(ELLIPSIS);
            preview
        }
        None => body.to_string(),
    }
}
