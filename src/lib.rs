//! Changelog API - Main Library
//!
//! A minimal authenticated REST API for the changelog service. It provides
//! user signup and signin backed by bcrypt-hashed passwords, stateless JWT
//! session tokens, and a protected `/api` surface for the product, update,
//! and updatepoint resource families.
//!
//! # Module Structure
//!
//! - **`auth`** - Password hashing, JWT token service, auth middleware,
//!   and the signup/signin handlers
//! - **`db`** - User persistence via sqlx (SQLite)
//! - **`error`** - API error taxonomy and HTTP response conversion
//! - **`routes`** - Router assembly and resource route handlers
//! - **`server`** - Configuration, application state, and server setup
//!
//! # Usage
//!
//! ```rust,no_run
//! use changelog_api::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Authentication: password hashing, tokens, middleware, handlers
pub mod auth;

/// User persistence
pub mod db;

/// API error types
pub mod error;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;
