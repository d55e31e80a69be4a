//! API Error Module
//!
//! This module defines the error types used by HTTP handlers and the auth
//! middleware, along with their conversion to HTTP responses.
//!
//! # Module Structure
//!
//! - **`types`** - Error type definitions and status code mapping
//! - **`conversion`** - `IntoResponse` implementation

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
