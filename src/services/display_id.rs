//! Workspace-scoped display-id generation.
//!
//! Media items are addressed by a human-readable id (`BB-1`, `SP-2`)
//! unique within their (workspace, category) scope. The next id is derived
//! from the highest existing id in the scope rather than a dedicated
//! counter, so concurrent generation for the same scope can collide; the
//! in-transaction re-check below and the caller's retry loop
//! (`media_item_service::create_media_item`) handle that.

use sqlx::SqlitePool;
use tracing::{debug, error};

use crate::db;
use crate::error::{AdmastError, Result};
use crate::models::{MediaType, format_display_id, parse_display_id};

/// Produce the next display id for a media item in the given workspace and
/// category. Read-only: the caller inserts the row with the returned id.
///
/// Fails with `WorkspaceNotFound` when the workspace does not exist and
/// with `CorruptDisplayId` when a stored id in the scope does not parse —
/// a malformed id means the scan can no longer tell where the sequence
/// ends, and restarting at 1 would hand out duplicates.
pub async fn generate_scoped_id(
    pool: &SqlitePool,
    workspace_id: i64,
    media_type: MediaType,
) -> Result<String> {
    debug!(
        "generating display id for {} in workspace {}",
        media_type, workspace_id
    );

    db::workspaces::get(pool, workspace_id)
        .await?
        .ok_or(AdmastError::WorkspaceNotFound(workspace_id))?;

    let prefix = media_type.prefix();

    // Scan and re-check run in one transaction so the derived sequence
    // number is consistent with the rows visible to this connection.
    let mut tx = pool.begin().await?;

    let top =
        db::media_items::top_display_id(&mut *tx, workspace_id, media_type.as_str(), prefix)
            .await?;

    let mut next_number = match top {
        None => {
            // The prefix is deterministic from the category, so a scope
            // with rows but none matching the prefix scan holds malformed
            // ids; starting a fresh sequence at 1 would sit duplicates
            // next to the corrupted ones.
            if let Some(stray) =
                db::media_items::top_display_id_in_scope(&mut *tx, workspace_id, media_type.as_str())
                    .await?
            {
                error!(
                    "display id '{}' in workspace {} does not carry the {} prefix",
                    stray, workspace_id, prefix
                );
                return Err(AdmastError::CorruptDisplayId(stray));
            }
            1
        }
        Some(display_id) => match parse_display_id(&display_id) {
            Ok((_, number)) => number + 1,
            Err(parse_err) => {
                error!(
                    "malformed display id '{}' in workspace {}: {}",
                    display_id, workspace_id, parse_err
                );
                return Err(AdmastError::CorruptDisplayId(display_id));
            }
        },
    };

    let mut candidate = format_display_id(prefix, next_number);

    // The scan orders display ids as text, so past -9 the top row can name
    // a number that is already taken (BB-9 sorts above BB-10). One extra
    // increment covers that; residual races are the caller's retry problem.
    if db::media_items::find_by_display_id(&mut *tx, workspace_id, &candidate)
        .await?
        .is_some()
    {
        next_number += 1;
        candidate = format_display_id(prefix, next_number);
        debug!("display id taken, using alternative {}", candidate);
    }

    tx.commit().await?;

    debug!(
        "generated display id {} for {} in workspace {}",
        candidate, media_type, workspace_id
    );
    Ok(candidate)
}
