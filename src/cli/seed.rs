use std::path::Path;

use sqlx::SqlitePool;

use crate::error::Result;
use crate::services;

/// Handle the seed command
pub async fn seed(pool: &SqlitePool, file: &Path) -> Result<()> {
    let summary = services::seed::load(pool, file).await?;
    println!(
        "Seeded {} workspace(s) and {} media item(s) from {}",
        summary.workspaces,
        summary.media_items,
        file.display()
    );
    Ok(())
}
