use parley_types::{BUSY_MESSAGE, GENERIC_ERROR_MESSAGE};
use thiserror::Error;

/// Why an exchange did not produce a reply
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Network unreachable, connection refused, body could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status
    #[error("API request failed with HTTP {status}: {detail}")]
    Application {
        status: u16,
        detail: serde_json::Value,
    },

    /// 2xx status but the body is not a reply
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Another exchange is still pending on this session
    #[error("an exchange is already in flight for this session")]
    Busy,

    /// Finished an exchange that does not hold this session's slot
    #[error("exchange does not hold the in-flight slot of this session")]
    Stale,
}

/// Tag for the `ExchangeError` variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Application,
    Protocol,
    Busy,
    Stale,
}

impl ExchangeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExchangeError::Transport(_) => ErrorKind::Transport,
            ExchangeError::Application { .. } => ErrorKind::Application,
            ExchangeError::Protocol(_) => ErrorKind::Protocol,
            ExchangeError::Busy => ErrorKind::Busy,
            ExchangeError::Stale => ErrorKind::Stale,
        }
    }

    /// Text safe to show to the user. Never includes the underlying detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExchangeError::Busy => BUSY_MESSAGE,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}

/// Invalid client configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid endpoint '{0}': expected an http:// or https:// URL")]
    InvalidEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_message_never_leaks_detail() {
        let errors = vec![
            ExchangeError::Transport("connection refused".to_string()),
            ExchangeError::Application {
                status: 500,
                detail: json!({"detail": "boom"}),
            },
            ExchangeError::Protocol("missing field `output`".to_string()),
            ExchangeError::Stale,
        ];

        for error in errors {
            assert_eq!(error.user_message(), GENERIC_ERROR_MESSAGE);
            assert!(!error.user_message().contains("boom"));
        }
    }

    #[test]
    fn test_display_keeps_detail_for_logs() {
        let error = ExchangeError::Application {
            status: 500,
            detail: json!({"detail": "boom"}),
        };
        let text = error.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_kind() {
        assert_eq!(ExchangeError::Busy.kind(), ErrorKind::Busy);
        assert_eq!(ExchangeError::Busy.user_message(), BUSY_MESSAGE);
        assert_eq!(
            ExchangeError::Protocol(String::new()).kind(),
            ErrorKind::Protocol
        );
    }
}
