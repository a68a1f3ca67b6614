use crate::core::parse_source;
use crate::data::FetchOptions;
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Fetches raw image bytes, one attempt per call.
pub struct Fetcher<C: HttpClient> {
    client: C,
    options: FetchOptions,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch the complete body behind `source`.
    ///
    /// `source` is validated before anything touches the network; an
    /// unparseable string yields [`FetchError::InvalidUrl`] and the client
    /// is never called.
    pub fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        let url = parse_source(source)?;
        let headers = self.options.request_headers();

        tracing::debug!(url = %url, "sending GET");
        let response = self
            .client
            .get(&url, &headers)
            .map_err(|e| FetchError::Transfer {
                url: source.to_string(),
                source: Box::new(e),
            })?;

        if !response.is_success() {
            return Err(FetchError::Status {
                url: source.to_string(),
                status: response.status,
            });
        }

        tracing::debug!(url = %url, bytes = response.body.len(), "body received");
        Ok(response.body)
    }
}
