//! Folio Domain - Core business types
//!
//! This crate defines the domain model for the Folio portfolio client.
//! All types here are pure Rust with no I/O dependencies.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod portfolio;
pub mod session;
pub mod timeline;

pub use api::{ApiRequest, ApiResponse, HttpMethod};
pub use auth::{AuthState, LoadStatus, SessionTokens, UserProfile};
pub use config::ClientConfig;
pub use error::{DomainError, DomainResult};
pub use portfolio::{
    DefiKpis, PortfolioOverview, ProtocolPosition, TimelineRange, TimelineSnapshot, WalletSummary,
};
pub use session::StoredSession;
pub use timeline::{TimelinePoint, TimelineSeries};
