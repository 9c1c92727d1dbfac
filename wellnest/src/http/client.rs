use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    method: String,
    url: String,
    headers: HashMap<String, String>,
    body: Option<String>,
}

impl HttpRequest {
    pub fn post(url: &str) -> Self {
        Self {
            method: "POST".to_string(),
            url: url.to_string(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct HttpClientResponse {
    body: Option<Vec<u8>>,
    status_code: u16,
}

impl HttpClientResponse {
    pub fn new(status_code: u16, body: Option<Vec<u8>>) -> Self {
        Self { body, status_code }
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpClientError> {
        match &self.body {
            Some(body) => serde_json::from_slice(body)
                .map_err(|e| HttpClientError::Other(e.to_string())),
            None => Err(HttpClientError::Other("No body".to_string())),
        }
    }

    pub fn text(&self) -> String {
        self.body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HttpClientError {
    ConnectionError(String),
    Other(String),
}

impl fmt::Display for HttpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpClientError::ConnectionError(e) => {
                write!(f, "ConnectionError: {}", e)
            }
            HttpClientError::Other(e) => write!(f, "Other: {}", e),
        }
    }
}

impl std::error::Error for HttpClientError {}

pub type HttpClientResult = Result<HttpClientResponse, HttpClientError>;

/// Sends a single request and hands back the raw response. Non-2xx statuses
/// are returned as a response, not an error; interpreting them is up to the
/// caller.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> HttpClientResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize)]
    struct Message {
        message: String,
    }

    #[test]
    fn test_response_json() {
        let response = HttpClientResponse::new(
            400,
            Some(br#"{"message":"bad input"}"#.to_vec()),
        );
        assert!(!response.is_success());
        let parsed: Message = response.json().unwrap();
        assert_eq!(parsed.message, "bad input");
    }

    #[test]
    fn test_response_without_body() {
        let response = HttpClientResponse::new(201, None);
        assert!(response.is_success());
        assert_eq!(response.text(), "");
        assert!(response.json::<Message>().is_err());
    }
}
