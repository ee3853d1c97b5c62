//! Request DTOs for quote API endpoints.

use serde::Deserialize;
use serde_json::Value;

use super::calculators::{QuoteDefaults, QuoteInput};

/// Query string of `GET /api/quote` and of the landing page calculator.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteQuery {
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub install: Option<String>,
}

impl QuoteQuery {
    pub fn to_input(&self, defaults: &QuoteDefaults) -> QuoteInput {
        QuoteInput::from_text(
            self.width.as_deref(),
            self.height.as_deref(),
            self.material.as_deref(),
            self.install.as_deref(),
            defaults,
        )
    }
}

/// JSON body of `POST /api/quote`.
///
/// Values may be numbers or numeric strings; anything else counts as zero.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub width: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    #[serde(default)]
    pub material: Option<Value>,
    #[serde(default)]
    pub install: Option<Value>,
}

impl QuoteRequest {
    /// Parse a raw JSON body; a body that is not a JSON object of this
    /// shape (including numbers outside `f64` range) counts as all-missing.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|e| {
            tracing::debug!("Unreadable quote body, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn to_input(&self, defaults: &QuoteDefaults) -> QuoteInput {
        let width = value_text(&self.width);
        let height = value_text(&self.height);
        let material = value_text(&self.material);
        let install = value_text(&self.install);

        QuoteInput::from_text(
            width.as_deref(),
            height.as_deref(),
            material.as_deref(),
            install.as_deref(),
            defaults,
        )
    }
}

/// `null` and absent keys are both "missing".
fn value_text(value: &Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => Some(String::new()),
    }
}
