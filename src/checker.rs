use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

/// Per-request timeout for a single health check.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of checking one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    /// HTTP status of the response, 0 when nothing came back.
    pub status_code: u16,
    /// Whether any response was received at all.
    pub is_up: bool,
}

impl CheckOutcome {
    pub const DOWN: Self = Self {
        status_code: 0,
        is_up: false,
    };

    pub fn responded(status_code: u16) -> Self {
        Self {
            status_code,
            is_up: true,
        }
    }
}

/// Something that can tell whether a URL is reachable.
pub trait StatusChecker {
    fn check(&self, address: &str) -> CheckOutcome;
}

/// Checks URLs with one blocking HTTP GET each.
///
/// "Up" means reachable: a 404 or 500 still counts. Only transport failures
/// (bad URL, DNS, refused connection, timeout) report the URL as down.
pub struct HttpChecker {
    client: Client,
}

impl HttpChecker {
    pub fn new() -> Result<Self> {
        Self::with_timeout(CHECK_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl StatusChecker for HttpChecker {
    fn check(&self, address: &str) -> CheckOutcome {
        match self.client.get(address).send() {
            Ok(response) => {
                let code = response.status().as_u16();
                log::debug!("GET {address} -> {code}");
                CheckOutcome::responded(code)
            }
            Err(err) => {
                log::debug!("GET {address} failed: {err}");
                CheckOutcome::DOWN
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    /// Run a check on a blocking thread; the blocking client must not live on the runtime.
    async fn check_blocking(address: String, timeout: Duration) -> CheckOutcome {
        tokio::task::spawn_blocking(move || {
            HttpChecker::with_timeout(timeout)
                .unwrap()
                .check(&address)
        })
        .await
        .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn ok_response_is_up() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = check_blocking(format!("{}/health", server.uri()), CHECK_TIMEOUT).await;
        assert_eq!(outcome, CheckOutcome::responded(200));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn not_found_is_still_up() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let outcome = check_blocking(format!("{}/missing", server.uri()), CHECK_TIMEOUT).await;
        assert_eq!(outcome.status_code, 404);
        assert!(outcome.is_up);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn server_error_is_still_up() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let outcome = check_blocking(server.uri(), CHECK_TIMEOUT).await;
        assert_eq!(outcome, CheckOutcome::responded(500));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn slow_response_times_out_as_down() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let outcome = check_blocking(server.uri(), Duration::from_millis(200)).await;
        assert_eq!(outcome, CheckOutcome::DOWN);
    }

    #[test]
    fn refused_connection_is_down() {
        // Grab a free port, then close it so nothing is listening.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let checker = HttpChecker::new().unwrap();
        assert_eq!(
            checker.check(&format!("http://127.0.0.1:{port}/")),
            CheckOutcome::DOWN
        );
    }

    #[test]
    fn empty_and_malformed_urls_are_down() {
        let checker = HttpChecker::new().unwrap();
        assert_eq!(checker.check(""), CheckOutcome::DOWN);
        assert_eq!(checker.check("not a url"), CheckOutcome::DOWN);
    }
}
