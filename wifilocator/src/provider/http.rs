//! HTTP client abstraction for testability

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Errors raised by the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// Request exceeded its timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Connection or protocol failure before a response arrived
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// Server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Response body could not be read
    #[error("failed to read response from {url}: {message}")]
    Body { url: String, message: String },

    /// Client construction failed
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl HttpError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A successful (2xx) HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpResponse {
    /// Value of the `Content-Type` header, if present
    pub content_type: Option<String>,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(content_type: Option<&str>, body: Vec<u8>) -> Self {
        Self {
            content_type: content_type.map(str::to_string),
            body,
        }
    }
}

/// Trait for blocking HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests. Non-2xx responses are reported
/// as [`HttpError::Status`].
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    /// * `headers` - Slice of (header_name, header_value) tuples
    /// * `timeout` - Upper bound on the whole request
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<HttpResponse, HttpError>;

    /// Performs an HTTP POST request with a raw body.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    /// * `headers` - Slice of (header_name, header_value) tuples
    /// * `body` - Request body bytes
    /// * `timeout` - Upper bound on the whole request
    fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &[u8],
        timeout: Duration,
    ) -> Result<HttpResponse, HttpError>;
}

impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<HttpResponse, HttpError> {
        (**self).get(url, headers, timeout)
    }

    fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &[u8],
        timeout: Duration,
    ) -> Result<HttpResponse, HttpError> {
        (**self).post(url, headers, body, timeout)
    }
}

/// Default User-Agent string for HTTP requests that don't set their own.
const DEFAULT_USER_AGENT: &str = concat!("wifilocator/", env!("CARGO_PKG_VERSION"));

/// Real HTTP client implementation using reqwest.
///
/// Responses compressed with gzip or deflate are decoded transparently.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| HttpError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    fn execute(
        &self,
        url: &str,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<HttpResponse, HttpError> {
        let response = match request.send() {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                if e.is_timeout() {
                    return Err(HttpError::Timeout {
                        url: url.to_string(),
                    });
                }
                return Err(HttpError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                });
            }
        };

        // Check HTTP status
        if !response.status().is_success() {
            return Err(HttpError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // Read response body
        let body = response.bytes().map_err(|e| HttpError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        trace!(url = url, bytes = body.len(), "HTTP response body read");

        Ok(HttpResponse {
            content_type,
            body: body.to_vec(),
        })
    }
}

fn with_headers(
    mut request: reqwest::blocking::RequestBuilder,
    headers: &[(&str, &str)],
) -> reqwest::blocking::RequestBuilder {
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    request
}

impl HttpClient for ReqwestClient {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<HttpResponse, HttpError> {
        trace!(url = url, "HTTP GET request starting");
        let request = with_headers(self.client.get(url), headers).timeout(timeout);
        self.execute(url, request)
    }

    fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &[u8],
        timeout: Duration,
    ) -> Result<HttpResponse, HttpError> {
        trace!(url = url, bytes = body.len(), "HTTP POST request starting");
        let request = with_headers(self.client.post(url), headers)
            .body(body.to_vec())
            .timeout(timeout);
        self.execute(url, request)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    type Route = (String, Result<HttpResponse, HttpError>);

    /// One request as seen by [`MockHttpClient`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        pub url: String,
        pub headers: Vec<(String, String)>,
        pub timeout: Duration,
    }

    impl RecordedRequest {
        /// Value of the first header named `name`, compared case-insensitively.
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    /// Mock HTTP client for testing.
    ///
    /// Answers each request with the first route whose pattern is a substring
    /// of the URL, or a 404 when nothing matches. Clones share the request log.
    #[derive(Clone, Default)]
    pub struct MockHttpClient {
        routes: Arc<Vec<Route>>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds a route answering URLs that contain `pattern`.
        pub fn route(mut self, pattern: &str, response: Result<HttpResponse, HttpError>) -> Self {
            Arc::make_mut(&mut self.routes).push((pattern.to_string(), response));
            self
        }

        /// Adds a route answering with a PNG body.
        pub fn png(self, pattern: &str, body: Vec<u8>) -> Self {
            self.route(pattern, Ok(HttpResponse::new(Some("image/png"), body)))
        }

        /// Adds a route failing with the given HTTP status.
        pub fn status(self, pattern: &str, status: u16) -> Self {
            let url = pattern.to_string();
            self.route(pattern, Err(HttpError::Status { url, status }))
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn requested_urls(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.url.clone())
                .collect()
        }

        /// Every request made so far, in order.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn respond(
            &self,
            url: &str,
            headers: &[(&str, &str)],
            timeout: Duration,
        ) -> Result<HttpResponse, HttpError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                url: url.to_string(),
                headers: headers
                    .iter()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect(),
                timeout,
            });
            self.routes
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, response)| response.clone())
                .unwrap_or_else(|| {
                    Err(HttpError::Status {
                        url: url.to_string(),
                        status: 404,
                    })
                })
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(
            &self,
            url: &str,
            headers: &[(&str, &str)],
            timeout: Duration,
        ) -> Result<HttpResponse, HttpError> {
            self.respond(url, headers, timeout)
        }

        fn post(
            &self,
            url: &str,
            headers: &[(&str, &str)],
            _body: &[u8],
            timeout: Duration,
        ) -> Result<HttpResponse, HttpError> {
            self.respond(url, headers, timeout)
        }
    }

    /// Encodes a solid-colour PNG.
    pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        use image::{ImageFormat, Rgba, RgbaImage};
        use std::io::Cursor;

        let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png)
            .expect("Failed to encode PNG");
        buffer.into_inner()
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::new().png("example.com", vec![1, 2, 3, 4]);

        let result = mock.get("http://example.com", &[], Duration::from_secs(1));
        assert_eq!(result.unwrap().body, vec![1, 2, 3, 4]);
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_mock_client_unrouted_is_404() {
        let mock = MockHttpClient::new();

        let err = mock
            .get("http://example.com", &[], Duration::from_secs(1))
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_mock_clones_share_log() {
        let mock = MockHttpClient::new();
        let clone = mock.clone();

        let _ = clone.post("http://a", &[], &[1], Duration::from_secs(1));
        assert_eq!(mock.requested_urls(), vec!["http://a".to_string()]);
    }

    #[test]
    fn test_mock_records_headers_and_timeout() {
        let mock = MockHttpClient::new();

        let _ = mock.get(
            "http://a",
            &[("User-Agent", "ua/1")],
            Duration::from_secs(7),
        );
        let request = &mock.requests()[0];
        assert_eq!(request.header("user-agent"), Some("ua/1"));
        assert_eq!(request.header("Accept"), None);
        assert_eq!(request.timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_arc_client_delegates() {
        let mock = MockHttpClient::new().png("x", vec![9]);
        let shared: Arc<dyn HttpClient> = Arc::new(mock.clone());

        let result = shared.get("http://x", &[], Duration::from_secs(1)).unwrap();
        assert_eq!(result.body, vec![9]);
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_error_status_accessor() {
        let err = HttpError::Status {
            url: "u".to_string(),
            status: 403,
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "HTTP 403 from u");

        let err = HttpError::Timeout {
            url: "u".to_string(),
        };
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(ReqwestClient::new().is_ok());
    }
}
