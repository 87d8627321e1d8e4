//! Shared types for admast CLI output serialization.
//!
//! These types represent the JSON structure returned by admast CLI commands
//! and can be used by any tool that needs to parse admast output.
//!
//! # Features
//!
//! - `sqlx`: Enables `sqlx::FromRow` derive for database integration.

pub mod display_id;
pub mod face;
pub mod media_item;
pub mod route;
pub mod workspace;

pub use display_id::*;
pub use face::*;
pub use media_item::*;
pub use route::*;
pub use workspace::*;
