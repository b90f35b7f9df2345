//! HTTP transport to the MADAMIRA server

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;

use crate::error::{CliError, CliResult};

/// Default MADAMIRA server endpoint.
pub const DEFAULT_URL: &str = "http://localhost:8223";

/// Blocking HTTP client for a MADAMIRA server.
///
/// One request is in flight at a time; the response body is returned as a
/// byte stream so extraction can start before the server finishes sending.
pub struct MadamiraClient {
    url: String,
    http: Client,
}

impl MadamiraClient {
    /// Create a client for the given server URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }

    /// The server URL this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST a request document and return the streaming response body.
    ///
    /// Connection failures and non-success statuses both surface as
    /// [`CliError::Server`]; no partial output exists for a failed request.
    pub fn diacritize(&self, request: &str) -> CliResult<Response> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/xml; charset=utf-8")
            .body(request.to_owned())
            .send()
            .map_err(|e| CliError::Server(format!("{}: {}", self.url, e)))?;

        let response = response
            .error_for_status()
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_url() {
        let client = MadamiraClient::new("http://example.com:8223");
        assert_eq!(client.url(), "http://example.com:8223");
    }

    #[test]
    fn test_connection_refused_is_a_server_error() {
        // Bind-then-drop guarantees nothing is listening on the port.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = MadamiraClient::new(url);
        let result = client.diacritize("<madamira_input/>");

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("MADAMIRA server error"));
    }
}
