use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};

use std::sync::Arc;

use crate::auth::application::ports::outgoing::login_throttle::{
    LoginThrottle, LoginThrottleError,
};
use crate::auth::application::services::token_hasher::hash_token;

/// Fixed-window failure counter.
///
/// ```text
/// auth:login_failures:{sha256(email)} -> <count>   (TTL = window)
/// ```
/// The TTL is set when the first failure of a window is recorded, so the
/// window starts at the first failure and is not extended by later ones.
/// An account is blocked once it has more than `max_attempts` failures in
/// the window.
#[derive(Clone)]
pub struct RedisLoginThrottle {
    pool: Option<Arc<Pool>>,
    max_attempts: u32,
    window_secs: u64,
}

impl RedisLoginThrottle {
    pub fn new(pool: Option<Arc<Pool>>, max_attempts: u32, window_secs: u64) -> Self {
        Self {
            pool,
            max_attempts: max_attempts.max(1),
            window_secs: window_secs.max(1),
        }
    }

    fn exceeds_limit(&self, failures: u32) -> bool {
        failures > self.max_attempts
    }

    fn failures_key(account: &str) -> String {
        format!("auth:login_failures:{}", hash_token(account))
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, LoginThrottleError> {
        let pool = self.pool.as_ref().ok_or(LoginThrottleError::NotConfigured)?;
        pool.get()
            .await
            .map_err(|e| LoginThrottleError::Backend(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl LoginThrottle for RedisLoginThrottle {
    async fn is_blocked(&self, account: &str) -> Result<bool, LoginThrottleError> {
        let mut conn = self.get_conn().await?;

        let failures: Option<u32> = conn
            .get(Self::failures_key(account))
            .await
            .map_err(|e| LoginThrottleError::Backend(e.to_string()))?;

        Ok(self.exceeds_limit(failures.unwrap_or(0)))
    }

    async fn record_failure(&self, account: &str) -> Result<u32, LoginThrottleError> {
        let key = Self::failures_key(account);
        let mut conn = self.get_conn().await?;

        let failures: u32 = conn
            .incr(&key, 1)
            .await
            .map_err(|e| LoginThrottleError::Backend(e.to_string()))?;

        if failures == 1 {
            conn.expire::<_, ()>(&key, self.window_secs as i64)
                .await
                .map_err(|e| LoginThrottleError::Backend(e.to_string()))?;
        }

        Ok(failures)
    }

    async fn reset(&self, account: &str) -> Result<(), LoginThrottleError> {
        let mut conn = self.get_conn().await?;

        conn.del::<_, ()>(Self::failures_key(account))
            .await
            .map_err(|e| LoginThrottleError::Backend(e.to_string()))
    }
}
