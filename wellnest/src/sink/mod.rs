mod postgrest;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

pub use postgrest::{PostgrestError, PostgrestSink};

use crate::error::SinkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    UserSubmissions,
    VendorSubmissions,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::UserSubmissions => "user_submissions",
            Table::VendorSubmissions => "vendor_submissions",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Remote table insert. `rows` is a JSON array; the workflow always sends a
/// batch of one.
#[async_trait(?Send)]
pub trait DataSink {
    async fn insert(&self, table: Table, rows: Value) -> Result<(), SinkError>;
}
