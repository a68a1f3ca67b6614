use std::sync::Arc;

/// Configuration for fetch operations.
///
/// # Examples
///
/// ```
/// use imgpull_fetch::FetchOptions;
///
/// let options = FetchOptions::default()
///     .user_agent("imgpull-batch/1.0")
///     .header("Accept", "image/*");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Overrides the client's default `User-Agent`.
    pub user_agent: Option<String>,

    /// Extra request headers, sent verbatim with every GET.
    pub headers: Arc<[(String, String)]>,
}

impl FetchOptions {
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a single custom HTTP header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        headers.push((key.into(), value.into()));
        self.headers = Arc::from(headers);
        self
    }

    /// All headers for a request, `User-Agent` included when overridden.
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        if let Some(ua) = &self.user_agent {
            headers.push(("User-Agent".to_string(), ua.clone()));
        }
        headers
    }
}

/// A fully buffered HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
