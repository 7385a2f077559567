// Integration errors for the TOTP login form.
//
// Runtime handlers (change, key-up, click) never fail. These variants cover
// misconfigured props, bad configuration input and focus failures reported
// by a binding.

/// Errors raised while wiring the form into a host application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The expected code length must be a positive integer.
    #[error("Invalid code length: {0} (must be at least 1)")]
    InvalidCodeLength(usize),

    /// The host could not move focus to the code input.
    #[error("Focus error: {0}")]
    Focus(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Unified result type for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FormError::InvalidCodeLength(0).to_string(),
            "Invalid code length: 0 (must be at least 1)"
        );
        assert_eq!(
            FormError::Config("bad".into()).to_string(),
            "Configuration error: bad"
        );
        assert_eq!(
            FormError::Focus("no element".into()).to_string(),
            "Focus error: no element"
        );
    }
}
