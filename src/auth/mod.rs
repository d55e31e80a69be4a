//! Authentication module for user accounts and session tokens.
//!
//! This module provides password hashing, JWT issuance and verification,
//! the bearer-token middleware that protects `/api` routes, and the
//! signup/signin HTTP handlers.

pub mod handlers;
pub mod middleware;
pub mod password;
pub mod token;

// Re-exports for convenience
pub use handlers::*;
pub use middleware::*;
pub use password::*;
pub use token::*;
