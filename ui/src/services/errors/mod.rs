use thiserror::Error;

/// Local, recoverable input problems. The display text is shown verbatim in
/// a warning toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter a valid email or username.")]
    IdentifierTooShort,

    #[error("Username must be between 3 and 20 characters.")]
    UsernameLength,

    #[error("Username can only contain letters, numbers, and underscores.")]
    UsernameCharacters,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Failures of the outbound send itself
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Host window unavailable: {reason}")]
    HostUnavailable { reason: String },

    #[error("Failed to encode request: {message}")]
    Encoding { message: String },

    #[error("postMessage failed: {message}")]
    PostMessage { message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("Configuration error: target origin must not be empty")]
    EmptyTargetOrigin,
}

pub type BridgeResult<T> = Result<T, BridgeError>;
