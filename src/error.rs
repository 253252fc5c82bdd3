//! Error types for countdown-widgets.

use thiserror::Error;

/// Returned when a countdown duration is not a positive number of seconds.
///
/// `input` is the rejected value, `None` when the input field was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter a valid duration in seconds.")]
pub struct InvalidDurationError {
    /// The value that was rejected.
    pub input: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_user_facing() {
        let err = InvalidDurationError { input: Some(0) };
        assert_eq!(err.to_string(), "Please enter a valid duration in seconds.");
    }
}
