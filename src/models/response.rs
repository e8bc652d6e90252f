//! Generic backend reply for non-list endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de::opt_flag;

/// Reply object carrying optional `success`/`message`/`detail`/`error`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, deserialize_with = "opt_flag")]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl ApiMessage {
    /// Outcome text with fixed precedence: `message`, then `detail`, then
    /// `error`. Null and empty values are skipped.
    pub fn resolve_message(&self) -> Option<String> {
        [&self.message, &self.detail, &self.error]
            .into_iter()
            .find_map(|field| field.as_ref().and_then(render_value))
    }

    /// Same as [`resolve_message`](Self::resolve_message) with a fallback text
    pub fn resolve_or(&self, fallback: &str) -> String {
        self.resolve_message().unwrap_or_else(|| fallback.to_string())
    }

    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }

    /// Whether the backend flagged the reply as a failure
    pub fn is_failure(&self) -> bool {
        self.success == Some(false) || self.has_text(&self.error) || self.has_text(&self.detail)
    }

    fn has_text(&self, field: &Option<Value>) -> bool {
        field.as_ref().and_then(render_value).is_some()
    }
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
