//! Error type shared by configuration loading and DOM wiring.
//!
//! Nothing here ever fails page load: the mount routine logs these and skips
//! the affected feature.

#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    /// Markup the feature depends on is not on the page.
    #[error("element not found: {selector}")]
    MissingElement { selector: String },

    /// A browser API call threw.
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },

    /// The inline config block is not valid JSON for `BehaviorConfig`.
    #[error("failed to parse behavior config: {0}")]
    Config(#[from] serde_json::Error),

    /// The inline config block parsed but carries an unusable value.
    #[error("invalid behavior config field {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl BehaviorError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}
