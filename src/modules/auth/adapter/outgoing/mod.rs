pub mod jwt;
pub mod login_throttle_redis;
pub mod security;
pub mod session_store_redis;
