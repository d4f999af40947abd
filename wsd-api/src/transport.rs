//! The request/response seam between typed clients and the network.
//!
//! `ApiClient` and `ReverseGeocoder` only need "GET this URL, give me the
//! body". `HttpTransport` does that with reqwest; `StaticTransport` serves
//! canned bodies in tests.

use reqwest::Url;

use crate::error::ApiError;

/// Performs a single GET and returns the response body.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded WASM executor.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &Url) -> Result<String, ApiError>;
}

/// reqwest-backed transport used by the web app and the CLI.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String, ApiError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[cfg(any(test, feature = "test-util"))]
pub use scripted::StaticTransport;

#[cfg(any(test, feature = "test-util"))]
mod scripted {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use reqwest::Url;

    use super::Transport;
    use crate::error::ApiError;

    /// Transport double answering from a fixed URL → body table.
    ///
    /// Unknown URLs answer 404. Every requested URL is recorded in order so
    /// tests can assert on what was (or was not) fetched. Clones share the
    /// request log.
    #[derive(Debug, Clone, Default)]
    pub struct StaticTransport {
        routes: HashMap<String, Result<String, u16>>,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl StaticTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer `url` with `body` and status 200.
        pub fn with(mut self, url: &str, body: &str) -> Self {
            self.routes.insert(url.to_string(), Ok(body.to_string()));
            self
        }

        /// Answer `url` with an error status.
        pub fn with_status(mut self, url: &str, status: u16) -> Self {
            self.routes.insert(url.to_string(), Err(status));
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl Transport for StaticTransport {
        async fn get(&self, url: &Url) -> Result<String, ApiError> {
            self.requests.borrow_mut().push(url.to_string());
            match self.routes.get(url.as_str()) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(status)) => Err(ApiError::Status(*status)),
                None => Err(ApiError::Status(404)),
            }
        }
    }
}
