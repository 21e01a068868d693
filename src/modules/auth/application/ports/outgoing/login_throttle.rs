use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginThrottleError {
    #[error("Login throttle is not configured")]
    NotConfigured,

    #[error("Login throttle error: {0}")]
    Backend(String),
}

/// Counts failed sign-in attempts per account within a rolling window.
#[async_trait]
pub trait LoginThrottle: Send + Sync {
    async fn is_blocked(&self, account: &str) -> Result<bool, LoginThrottleError>;

    /// Returns the number of failures recorded in the current window.
    async fn record_failure(&self, account: &str) -> Result<u32, LoginThrottleError>;

    async fn reset(&self, account: &str) -> Result<(), LoginThrottleError>;
}
