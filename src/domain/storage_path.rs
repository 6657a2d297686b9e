use std::fmt;

use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Object name of an uploaded recording inside the audio bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn for_upload(prefix: &str, uploaded_at: DateTime<Utc>) -> Self {
        Self(format!(
            "{}_{}",
            prefix,
            uploaded_at.format(TIMESTAMP_FORMAT)
        ))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
