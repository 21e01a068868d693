pub mod login_throttle;
pub mod password_hasher;
pub mod session_store;
pub mod token_provider;

pub use login_throttle::{LoginThrottle, LoginThrottleError};
pub use password_hasher::{HashError, PasswordHasher};
pub use session_store::{SessionStore, SessionStoreError};
pub use token_provider::{IssuedSession, SessionClaims, TokenError, TokenProvider};
