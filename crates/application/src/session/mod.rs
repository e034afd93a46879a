//! Token-authenticated session handling.
//!
//! This module provides:
//! - `SessionContext`: owned, process-wide session state (in-memory
//!   bearer plus write-through persistence)
//! - `SessionClient`: the HTTP wrapper that attaches the bearer and
//!   transparently recovers from token expiry

mod client;
mod context;

pub use client::{CURRENT_USER_PATH, REFRESH_PATH, SessionClient};
pub use context::SessionContext;
