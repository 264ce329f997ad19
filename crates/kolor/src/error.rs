//! Error types for color parsing and revival.

use thiserror::Error;

/// Errors produced by fallible color constructors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// A CSS hex string did not match `#rgb` or `#rrggbb`.
    #[error("invalid hex color format: {0}")]
    InvalidFormat(String),

    /// A JSON value matched none of the accepted color shapes.
    #[error("invalid color input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_includes_offending_input() {
        let err = ColorError::InvalidFormat("#12".into());
        let msg = format!("{err}");
        assert!(msg.contains("#12"), "missing input in: {msg}");
        assert!(msg.contains("hex"), "expected hex mention in: {msg}");
    }

    #[test]
    fn invalid_input_includes_message() {
        let err = ColorError::InvalidInput("expected array".into());
        let msg = format!("{err}");
        assert!(msg.contains("expected array"), "missing message in: {msg}");
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
