//! Access tokens for the live feed
//!
//! Obtaining tokens (the OAuth consent flow) happens outside this crate; the
//! sources only ask whether a token is currently available.

use saleslens_domain::LiveFeedConfig;

/// Supplies the bearer token of the signed-in session.
pub trait AccessTokenProvider: Send + Sync {
    /// `None` when no session is signed in.
    fn access_token(&self) -> Option<String>;
}

/// Provider holding a pre-issued token.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self { token: (!token.trim().is_empty()).then_some(token) }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn from_config(config: &LiveFeedConfig) -> Self {
        config.access_token.as_deref().map_or_else(Self::signed_out, Self::new)
    }
}

impl AccessTokenProvider for StaticTokenProvider {
    fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_means_signed_out() {
        assert!(StaticTokenProvider::new("  ").access_token().is_none());
        assert!(StaticTokenProvider::from_config(&LiveFeedConfig::default())
            .access_token()
            .is_none());
        assert_eq!(StaticTokenProvider::new("ya29").access_token().as_deref(), Some("ya29"));
    }
}
