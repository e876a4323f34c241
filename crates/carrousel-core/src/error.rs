//! Error types for Carrousel.

/// Result type alias for Carrousel operations.
pub type Result<T> = std::result::Result<T, CarrouselError>;

/// Errors that can occur while building or bootstrapping a carrousel.
///
/// Navigation itself never fails; these only surface from construction and
/// from the glue that locates host elements and reads their options.
#[derive(Debug, thiserror::Error)]
pub enum CarrouselError {
    /// No usable host element was found.
    #[error("Invalid host element '{selector}': {message}")]
    InvalidHost { selector: String, message: String },

    /// A rendering surface operation failed.
    #[error("Surface operation '{operation}' failed: {message}")]
    Surface { operation: String, message: String },

    /// The options record could not be parsed.
    #[error("Invalid carrousel options: {source}")]
    InvalidOptions {
        #[source]
        source: serde_json::Error,
    },
}

impl CarrouselError {
    /// Create a host error.
    pub fn invalid_host(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHost {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create a surface error.
    pub fn surface(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Surface {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CarrouselError {
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidOptions { source }
    }
}
