//! Error types for page behaviors.

use thiserror::Error;

/// Errors raised while configuring or installing page behaviors.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Settings document is not valid YAML for `PageConfig`.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Settings parsed but cannot drive the behaviors.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A required element (selector) is absent from the document.
    #[error("required element missing: {0}")]
    MissingElement(&'static str),

    /// No global window (not running in a browser).
    #[error("no window available")]
    NoWindow,

    /// A DOM call was rejected by the host.
    #[error("dom error: {0}")]
    Dom(String),
}

impl FolioError {
    /// Whether the behavior that raised this error cannot attach.
    ///
    /// Configuration errors are not: the caller falls back to defaults.
    pub fn is_fatal_for_behavior(&self) -> bool {
        matches!(
            self,
            FolioError::MissingElement(_) | FolioError::Dom(_) | FolioError::NoWindow
        )
    }

    /// Whether the page as a whole cannot run any behavior.
    pub fn is_fatal_for_page(&self) -> bool {
        matches!(self, FolioError::NoWindow)
    }
}

/// Result alias for page behaviors
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_is_behavior_scoped() {
        let err = FolioError::MissingElement(".scroll-indicator");
        assert!(err.is_fatal_for_behavior());
        assert!(!err.is_fatal_for_page());
        assert_eq!(err.to_string(), "required element missing: .scroll-indicator");
    }

    #[test]
    fn test_no_window_is_page_fatal() {
        assert!(FolioError::NoWindow.is_fatal_for_page());
    }

    #[test]
    fn test_config_errors_are_not_behavior_fatal() {
        let err = FolioError::InvalidConfig("bad".into());
        assert!(!err.is_fatal_for_behavior());
    }
}
