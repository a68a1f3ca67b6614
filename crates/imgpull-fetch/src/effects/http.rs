use url::Url;

use crate::data::HttpResponse;

/// Blocking HTTP client abstraction.
///
/// This trait provides the minimal interface needed for fetching: one GET,
/// body fully buffered. Implementations handle their own redirect following
/// and timeout configuration, and must not retry.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest::blocking`
/// - Mock implementations for testing
pub trait HttpClient {
    /// Error type for transport failures (DNS, refused connection, reset,
    /// timeout, truncated body).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Perform a GET and read the complete response body.
    ///
    /// Non-2xx statuses are *not* errors at this layer; they come back in
    /// [`HttpResponse::status`].
    fn get(&self, url: &Url, headers: &[(String, String)]) -> Result<HttpResponse, Self::Error>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    type Error = C::Error;

    fn get(&self, url: &Url, headers: &[(String, String)]) -> Result<HttpResponse, Self::Error> {
        (**self).get(url, headers)
    }
}

#[cfg(feature = "reqwest")]
mod reqwest_client {
    use super::*;
    use reqwest::Proxy;
    use reqwest::blocking::Client;

    const DEFAULT_USER_AGENT: &str = concat!("imgpull/", env!("CARGO_PKG_VERSION"));

    /// Proxy selection for [`ReqwestClient`].
    ///
    /// Without an explicit proxy the usual `HTTP_PROXY`/`HTTPS_PROXY`
    /// environment variables apply unless `no_proxy` is set.
    #[derive(Clone, Debug, Default)]
    pub struct ClientSetting {
        pub proxy: Option<Url>,
        pub no_proxy: bool,
    }

    impl ClientSetting {
        pub fn build(self) -> Result<ReqwestClient, reqwest::Error> {
            let mut cb = Client::builder().user_agent(DEFAULT_USER_AGENT);

            if self.no_proxy {
                cb = cb.no_proxy();
            } else if let Some(proxy) = self.proxy {
                cb = cb.proxy(Proxy::all(proxy.as_str())?);
            }

            Ok(ReqwestClient { client: cb.build()? })
        }
    }

    /// Production HTTP client implementation using reqwest.
    ///
    /// Each client keeps reqwest's default timeout and redirect policy.
    pub struct ReqwestClient {
        client: Client,
    }

    impl ReqwestClient {
        pub fn new() -> Result<Self, reqwest::Error> {
            ClientSetting::default().build()
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        fn get(&self, url: &Url, headers: &[(String, String)]) -> Result<HttpResponse, Self::Error> {
            let mut request = self.client.get(url.as_str());

            for (key, value) in headers {
                request = request.header(key.as_str(), value.as_str());
            }

            let response = request.send()?;
            let status = response.status().as_u16();
            let body = response.bytes()?.to_vec();

            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_client::{ClientSetting, ReqwestClient};
