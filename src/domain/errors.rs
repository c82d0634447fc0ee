use thiserror::Error;

/// Errors surfaced by the local account store.
///
/// All of these are local validation failures handled synchronously at the
/// user action that triggered them; none are fatal and none are retried.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("an account with this email already exists")]
    DuplicateEmail,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("account storage failed")]
    Storage(#[from] anyhow::Error),
}

/// Errors surfaced by the market data client.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("market data request failed: {reason}")]
    Transport { reason: String },

    #[error("could not parse market data response: {reason}")]
    InvalidResponse { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_messages_are_user_presentable() {
        assert_eq!(
            AuthError::DuplicateEmail.to_string(),
            "an account with this email already exists"
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid email or password"
        );
    }

    #[test]
    fn transport_error_carries_reason() {
        let err = MarketDataError::Transport {
            reason: "status 429 Too Many Requests".to_string(),
        };
        assert!(err.to_string().contains("429"));
    }
}
