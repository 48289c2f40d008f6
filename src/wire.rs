//! JSON request and response shapes.
//!
//! A request is `{"t": "<text>"}` and its answer is `{"r": "<rant>"}`, one
//! object per line in `--json` mode.

use serde::{Deserialize, Serialize};

use crate::error::{RantError, Result};

/// Text to rant about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RantRequest {
    #[serde(default)]
    pub t: String,
}

/// The rant produced for a [`RantRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RantResponse {
    pub r: String,
}

impl RantRequest {
    /// Parse one JSON line into a request
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(RantError::JsonParseError("Empty line".to_string()));
        }

        serde_json::from_str(line).map_err(|e| RantError::JsonParseError(e.to_string()))
    }
}

impl RantResponse {
    pub fn new(r: String) -> Self {
        Self { r }
    }

    /// Serialize as a single JSON line, without the trailing newline
    pub fn to_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| RantError::JsonParseError(e.to_string()))
    }
}
