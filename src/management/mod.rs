mod auth;

pub use auth::EXPIRY_MARGIN_SECS;
pub use auth::TokenCache;
pub use auth::TokenManager;
pub use auth::is_expired;
pub use auth::is_expired_at;
