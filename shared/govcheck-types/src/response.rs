use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Envelope returned by every check endpoint.
///
/// A 2xx answer may still describe a failed verification: the server reports
/// it through `error` while `data` is usually absent. Nothing in the client
/// inspects `error`, callers have to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovCheckResponse<D> {
    /// Business error reported by the server, `None` when absent or null
    #[serde(default)]
    pub error: Option<Value>,
    /// Check result
    pub data: Option<D>,
}

impl<D> GovCheckResponse<D> {
    /// Returns the raw business error, if the server reported one
    #[must_use]
    pub const fn business_error(&self) -> Option<&Value> {
        self.error.as_ref()
    }

    /// Whether the server reported a business error
    #[must_use]
    pub const fn has_business_error(&self) -> bool {
        self.error.is_some()
    }

    /// Folds the business error into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns `BusinessError::Rejected` when `error` is set and
    /// `BusinessError::MissingData` when neither slot is populated.
    pub fn into_result(self) -> Result<D, BusinessError> {
        if let Some(raw) = self.error {
            return Err(BusinessError::rejected(raw));
        }

        self.data.ok_or(BusinessError::MissingData)
    }
}

/// Verification failure reported inside a successful HTTP response
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BusinessError {
    /// The server rejected the check
    #[error("Verification rejected: {message}")]
    Rejected {
        /// Best-effort human-readable message
        message: String,
        /// The `error` value exactly as received
        raw: Value,
    },

    /// Neither `error` nor `data` was present
    #[error("Response carried neither an error nor data")]
    MissingData,
}

impl BusinessError {
    fn rejected(raw: Value) -> Self {
        let message = match &raw {
            Value::String(s) => s.clone(),
            Value::Object(map) => map
                .get("message")
                .or_else(|| map.get("code"))
                .and_then(Value::as_str)
                .map_or_else(|| raw.to_string(), str::to_string),
            other => other.to_string(),
        };

        Self::Rejected { message, raw }
    }
}
