//! Fixture loading: replaces the store contents with the workspaces and
//! media items described in a JSON file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::error::Result;
use crate::models::*;
use crate::services::media_item_service;

/// Seed fixture: workspaces carry explicit ids so media items can refer
/// to them; display ids are generated in fixture order.
#[derive(Debug, Deserialize)]
pub struct SeedData {
    pub workspaces: Vec<SeedWorkspace>,
    #[serde(default)]
    pub media_items: Vec<CreateMediaItem>,
}

#[derive(Debug, Deserialize)]
pub struct SeedWorkspace {
    pub id: i64,
    #[serde(flatten)]
    pub workspace: CreateWorkspace,
}

#[derive(Debug)]
pub struct SeedSummary {
    pub workspaces: usize,
    pub media_items: usize,
}

/// Load a fixture file, clearing existing rows first (children before
/// parents). A fixture that fails to parse seeds nothing.
pub async fn load(pool: &SqlitePool, path: &Path) -> Result<SeedSummary> {
    let raw = fs::read_to_string(path)?;
    let data: SeedData = serde_json::from_str(&raw)?;

    info!(
        "seeding {} workspace(s) and {} media item(s) from {}",
        data.workspaces.len(),
        data.media_items.len(),
        path.display()
    );

    clear(pool).await?;

    let now = chrono::Utc::now().to_rfc3339();
    for entry in &data.workspaces {
        db::workspaces::create_with_id(pool, entry.id, &entry.workspace, &now).await?;
    }

    for item in &data.media_items {
        media_item_service::create_media_item(pool, item.clone()).await?;
    }

    info!("seed complete");
    Ok(SeedSummary {
        workspaces: data.workspaces.len(),
        media_items: data.media_items.len(),
    })
}

async fn clear(pool: &SqlitePool) -> Result<()> {
    db::routes::delete_all(pool).await?;
    db::faces::delete_all(pool).await?;
    db::media_items::delete_all(pool).await?;
    db::workspaces::delete_all(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::{create_pool, run_migrations};
    use crate::error::AdmastError;
    use tempfile::tempdir;

    const FIXTURE: &str = r#"{
        "workspaces": [
            { "id": 1, "name": "Acme Outdoor", "email": "ops@acme.example" },
            { "id": 2, "name": "Skyline Media" }
        ],
        "media_items": [
            {
                "workspace_id": 1,
                "media_type": "BILLBOARD",
                "name": "Harbour View",
                "faces": [
                    { "face_number": 1, "images": ["https://cdn.example/a.jpg"] }
                ]
            },
            {
                "workspace_id": 1,
                "media_type": "STREET_POLE",
                "name": "High Street",
                "routes": [
                    { "route_name": "Broadway", "number_of_street_poles": 6 }
                ]
            },
            {
                "workspace_id": 2,
                "media_type": "BILLBOARD",
                "name": "Airport Road"
            }
        ]
    }"#;

    async fn setup_test_db() -> (SqlitePool, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (pool, temp_dir)
    }

    fn write_fixture(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("fixture.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_fixture() {
        let (pool, temp) = setup_test_db().await;
        let path = write_fixture(temp.path(), FIXTURE);

        let summary = load(&pool, &path).await.unwrap();
        assert_eq!(summary.workspaces, 2);
        assert_eq!(summary.media_items, 3);

        let items = db::media_items::list_by_workspace(&pool, 1).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].display_id, "BB-1");
        assert_eq!(items[1].display_id, "SP-1");

        // Display-id sequences are per workspace
        let items = db::media_items::list_by_workspace(&pool, 2).await.unwrap();
        assert_eq!(items[0].display_id, "BB-1");

        let faces = db::faces::list_by_media_item(&pool, items[0].id).await;
        assert!(faces.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_replaces_existing_rows() {
        let (pool, temp) = setup_test_db().await;
        let path = write_fixture(temp.path(), FIXTURE);

        load(&pool, &path).await.unwrap();
        load(&pool, &path).await.unwrap();

        let workspaces = db::workspaces::list(&pool).await.unwrap();
        assert_eq!(workspaces.len(), 2);
        let items = db::media_items::list_by_workspace(&pool, 1).await.unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_fixture_is_error() {
        let (pool, temp) = setup_test_db().await;
        let path = write_fixture(temp.path(), "{ not json");

        let err = load(&pool, &path).await.unwrap_err();
        assert!(matches!(err, AdmastError::Json(_)));
    }

    #[tokio::test]
    async fn test_fixture_with_unknown_workspace_is_error() {
        let (pool, temp) = setup_test_db().await;
        let path = write_fixture(
            temp.path(),
            r#"{
                "workspaces": [{ "id": 1, "name": "Acme" }],
                "media_items": [
                    { "workspace_id": 9, "media_type": "BILLBOARD", "name": "Stray" }
                ]
            }"#,
        );

        let err = load(&pool, &path).await.unwrap_err();
        assert!(matches!(err, AdmastError::WorkspaceNotFound(9)));
    }
}
