//! Route configuration.
//!
//! - **`router`** - Top-level router assembly and global layers
//! - **`resources`** - Product/update/updatepoint resource routes
//! - **`context`** - Per-request context attachment

pub mod context;
pub mod resources;
pub mod router;

pub use router::create_router;
