//! Folio Application - Session and data-access logic
//!
//! This crate holds the token-authenticated session client, the auth
//! state lifecycle built on top of it, and the typed portfolio data
//! services. It depends on ports (traits) only; concrete HTTP and
//! storage adapters live in `folio-infrastructure`.

pub mod auth;
pub mod error;
pub mod portfolio;
pub mod ports;
pub mod session;

pub use auth::AuthManager;
pub use error::{ApiError, ApiResult};
pub use portfolio::PortfolioService;
pub use ports::{
    HttpTransport, MemoryTokenStorage, SessionExpiredHandler, StorageError, TokenStorage,
    TransportError,
};
pub use session::{CURRENT_USER_PATH, REFRESH_PATH, SessionClient, SessionContext};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
pub(crate) mod test_support;
