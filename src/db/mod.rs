//! User persistence via sqlx.

pub mod users;

pub use users::*;
