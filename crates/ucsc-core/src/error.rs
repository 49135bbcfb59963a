//! Error types for UCS Central operations.
//!
//! Every helper surfaces failures through [`Error`]. Nothing in this layer retries or
//! recovers; errors reported by a session are passed to the caller unchanged.

use thiserror::Error;

/// Main error type for UCS Central operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key or required field was empty, or an argument was otherwise unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A field the kind's schema requires was absent at construction time
    #[error("Schema violation: {kind} requires property `{field}`")]
    SchemaViolation {
        /// Class id of the kind being built
        kind: String,
        /// Name of the missing property
        field: String,
    },

    /// The managed object targeted by a modify or delete does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Login was rejected by the appliance
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// The appliance rejected a committed mutation
    #[error("Commit rejected: {0}")]
    CommitError(String),

    /// Connection configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The session could not carry out the request
    #[error("Session error: {0}")]
    SessionError(String),
}

/// Specialized result type for UCS Central operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::SchemaViolation { .. } => "SCHEMA_VIOLATION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AuthError(_) => "AUTH_ERROR",
            Self::CommitError(_) => "COMMIT_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::SessionError(_) => "SESSION_ERROR",
        }
    }

    /// Returns true if the error came from the appliance rather than from local validation.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::AuthError(_) | Self::CommitError(_) | Self::SessionError(_)
        )
    }
}

// Conversions from external error types
impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::ConfigError(format!("invalid appliance endpoint: {err}"))
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::InvalidArgument("test".to_string()).error_code(),
            "INVALID_ARGUMENT"
        );
        assert_eq!(
            Error::SchemaViolation {
                kind: "AaaRole".to_string(),
                field: "priv".to_string()
            }
            .error_code(),
            "SCHEMA_VIOLATION"
        );
        assert_eq!(
            Error::NotFound("test".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            Error::AuthError("test".to_string()).error_code(),
            "AUTH_ERROR"
        );
        assert_eq!(
            Error::CommitError("test".to_string()).error_code(),
            "COMMIT_ERROR"
        );
        assert_eq!(
            Error::ConfigError("test".to_string()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::SessionError("test".to_string()).error_code(),
            "SESSION_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::SchemaViolation {
            kind: "AaaRole".to_string(),
            field: "priv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Schema violation: AaaRole requires property `priv`"
        );

        let err = Error::NotFound("org-root/role-missing".to_string());
        assert_eq!(err.to_string(), "Not found: org-root/role-missing");
    }

    #[test]
    fn test_is_remote() {
        assert!(Error::AuthError("test".to_string()).is_remote());
        assert!(Error::CommitError("test".to_string()).is_remote());
        assert!(Error::SessionError("test".to_string()).is_remote());

        assert!(!Error::NotFound("test".to_string()).is_remote());
        assert!(!Error::InvalidArgument("test".to_string()).is_remote());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let ucsc_err: Error = err.into();
        assert!(matches!(ucsc_err, Error::ConfigError(_)));
    }

    #[test]
    fn test_from_config_error() {
        let err = config::ConfigError::NotFound("ucscentral.hostname".to_string());
        let ucsc_err: Error = err.into();
        assert_eq!(ucsc_err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_error_partial_eq() {
        let err1 = Error::NotFound("test".to_string());
        let err2 = Error::NotFound("test".to_string());
        let err3 = Error::NotFound("other".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
