use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{DataSink, Table};
use crate::config::SinkConfig;
use crate::error::SinkError;
use crate::http::{HttpClientResponse, HttpRequest, HttpTransport};

/// Error body returned by PostgREST on a failed write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostgrestError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestError {
    fn describe(&self) -> String {
        let mut out = self.message.clone();
        if let Some(code) = &self.code {
            out.push_str(&format!(" [{}]", code));
        }
        if let Some(details) = &self.details {
            out.push_str(&format!(" ({})", details));
        }
        if let Some(hint) = &self.hint {
            out.push_str(&format!(" hint: {}", hint));
        }
        out
    }
}

/// Inserts rows through the Supabase REST endpoint.
pub struct PostgrestSink<H: HttpTransport> {
    config: SinkConfig,
    transport: H,
}

impl<H: HttpTransport> PostgrestSink<H> {
    pub fn new(config: SinkConfig, transport: H) -> Self {
        Self { config, transport }
    }

    fn build_request(
        &self,
        table: Table,
        rows: &Value,
    ) -> Result<HttpRequest, SinkError> {
        let bearer = format!("Bearer {}", self.config.anon_key());
        Ok(HttpRequest::post(&self.config.table_url(table.name()))
            .with_header("apikey", self.config.anon_key())
            .with_header("Authorization", &bearer)
            .with_header("Content-Type", "application/json")
            .with_header("Prefer", "return=minimal")
            .with_body(serde_json::to_string(rows)?))
    }
}

#[async_trait(?Send)]
impl<H: HttpTransport> DataSink for PostgrestSink<H> {
    async fn insert(&self, table: Table, rows: Value) -> Result<(), SinkError> {
        let request = self.build_request(table, &rows)?;
        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(());
        }
        Err(rejection(&response))
    }
}

fn rejection(response: &HttpClientResponse) -> SinkError {
    let message = match response.json::<PostgrestError>() {
        Ok(err) if !err.message.is_empty() => err.describe(),
        _ => response.text(),
    };
    SinkError::Rejected(response.status_code(), message)
}
