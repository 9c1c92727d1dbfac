use url::Url;

use crate::error::ConfigError;

pub const SUPABASE_URL_KEY: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY_KEY: &str = "SUPABASE_ANON_KEY";

/// Connection settings for the hosted database. Both values are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    url: Url,
    anon_key: String,
}

impl SinkConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = parse_url(url)?;
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(SUPABASE_ANON_KEY_KEY));
        }
        Ok(Self {
            url,
            anon_key: anon_key.to_string(),
        })
    }

    /// Builds the config from any key/value source, e.g. compile-time
    /// variables in the browser build.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let url = required(&lookup, SUPABASE_URL_KEY)?;
        let anon_key = required(&lookup, SUPABASE_ANON_KEY_KEY)?;
        Self::new(&url, &anon_key)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.url.as_str().trim_end_matches('/'),
            table
        )
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn parse_url(value: &str) -> Result<Url, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Missing(SUPABASE_URL_KEY));
    }
    let url = Url::parse(value).map_err(|e| ConfigError::Invalid {
        key: SUPABASE_URL_KEY,
        details: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::Invalid {
            key: SUPABASE_URL_KEY,
            details: format!("unsupported scheme '{}'", scheme),
        }),
    }
}
