pub mod display_id;
pub mod face_service;
pub mod media_item_service;
pub mod retry;
pub mod route_service;
pub mod seed;
pub mod workspace_service;

pub use display_id::*;
pub use face_service::*;
pub use media_item_service::*;
pub use route_service::*;
pub use workspace_service::*;

use crate::error::{AdmastError, Result};

/// Serialize an image-URL list for storage. An empty list is stored as
/// NULL, matching an absent list.
pub(crate) fn encode_images(images: &[String]) -> Result<Option<String>> {
    if images.is_empty() {
        Ok(None)
    } else {
        Ok(Some(serde_json::to_string(images)?))
    }
}

/// Rewrite a unique-constraint violation into a conflict error with a
/// message the caller can act on; other errors pass through.
pub(crate) fn conflict_on_unique(err: AdmastError, message: impl Into<String>) -> AdmastError {
    match &err {
        AdmastError::Database(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            AdmastError::Conflict(message.into())
        }
        _ => err,
    }
}
