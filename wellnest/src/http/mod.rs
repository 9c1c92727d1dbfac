mod client;
pub use client::{
    HttpClientError, HttpClientResponse, HttpClientResult, HttpRequest,
    HttpTransport,
};
