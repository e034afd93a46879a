//! Folio Infrastructure - Concrete adapters
//!
//! Implementations of the application-layer ports: a reqwest-backed
//! HTTP transport, file-based session persistence, and a logging
//! session-expired handler.

pub mod http;
pub mod navigation;
pub mod persistence;

pub use http::ReqwestTransport;
pub use navigation::LoggingRedirectHandler;
pub use persistence::FileSessionStorage;
