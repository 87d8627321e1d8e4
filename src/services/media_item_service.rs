use std::time::Duration;

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::db;
use crate::error::{AdmastError, Result};
use crate::models::*;
use crate::services::retry::{self, Attempt, RetryOutcome, RetryPolicy};
use crate::services::{conflict_on_unique, display_id, encode_images};

/// Attempt budget for display-id generation. The generator derives the
/// next id from a max-scan, so two concurrent creators in the same scope
/// can draw the same candidate; each retry re-runs the scan.
const DISPLAY_ID_RETRY: RetryPolicy = RetryPolicy::new(3, Duration::from_millis(25));

/// Create a media item in a workspace.
///
/// The display id is generated through the bounded retry loop, then the
/// item and any supplied children matching its category are inserted in a
/// single transaction. Children for the wrong category are dropped with a
/// warning.
pub async fn create_media_item(pool: &SqlitePool, input: CreateMediaItem) -> Result<MediaItem> {
    validate_name(&input.name)?;
    validate_coordinates(input.latitude, input.longitude)?;

    db::workspaces::get(pool, input.workspace_id)
        .await?
        .ok_or(AdmastError::WorkspaceNotFound(input.workspace_id))?;

    let (faces, routes) = partition_children(&input)?;

    let display_id = next_display_id(pool, input.workspace_id, input.media_type).await?;

    info!(
        "creating {} '{}' with display id {} in workspace {}",
        input.media_type, input.name, display_id, input.workspace_id
    );

    let now = chrono::Utc::now().to_rfc3339();
    let mut tx = pool.begin().await?;

    let item_id = db::media_items::create(&mut *tx, &input, &display_id, &now)
        .await
        .map_err(|e| {
            conflict_on_unique(
                e,
                format!(
                    "display id {} already exists in workspace {}",
                    display_id, input.workspace_id
                ),
            )
        })?;

    for face in &faces {
        let images = encode_images(&face.images)?;
        db::faces::create(&mut *tx, item_id, face, images.as_deref(), &now)
            .await
            .map_err(|e| {
                conflict_on_unique(
                    e,
                    format!("face number {} supplied more than once", face.face_number),
                )
            })?;
    }

    for route in &routes {
        let images = encode_images(&route.images)?;
        db::routes::create(&mut *tx, item_id, route, images.as_deref(), &now)
            .await
            .map_err(|e| {
                conflict_on_unique(
                    e,
                    format!("route '{}' supplied more than once", route.route_name),
                )
            })?;
    }

    tx.commit().await?;

    get_media_item(pool, item_id).await
}

/// Run the generator until it yields an id no other creator has claimed,
/// up to the attempt budget.
async fn next_display_id(
    pool: &SqlitePool,
    workspace_id: i64,
    media_type: MediaType,
) -> Result<String> {
    let outcome = retry::run(DISPLAY_ID_RETRY, |attempt| async move {
        let candidate = display_id::generate_scoped_id(pool, workspace_id, media_type).await?;
        debug!("display id candidate {} (attempt {})", candidate, attempt);

        // Independent re-check: a row committed after the generator's
        // transaction took its snapshot would collide on insert.
        match db::media_items::find_by_display_id(pool, workspace_id, &candidate).await? {
            Some(_) => {
                warn!(
                    "display id {} already taken in workspace {}, retrying",
                    candidate, workspace_id
                );
                Ok::<_, AdmastError>(Attempt::Again)
            }
            None => Ok(Attempt::Ready(candidate)),
        }
    })
    .await?;

    match outcome {
        RetryOutcome::Success { value, .. } => Ok(value),
        RetryOutcome::Exhausted { attempts } => Err(AdmastError::DisplayIdExhausted {
            workspace_id,
            attempts,
        }),
    }
}

/// Validate supplied children against the item category. Children for the
/// wrong category are dropped with a warning rather than rejected, so bulk
/// imports with sloppy payloads still land.
fn partition_children(input: &CreateMediaItem) -> Result<(Vec<NewFace>, Vec<NewRoute>)> {
    match input.media_type {
        MediaType::Billboard => {
            if !input.routes.is_empty() {
                warn!(
                    "ignoring {} route(s) supplied for billboard '{}'",
                    input.routes.len(),
                    input.name
                );
            }
            for face in &input.faces {
                super::face_service::validate_new_face(face)?;
            }
            Ok((input.faces.clone(), Vec::new()))
        }
        MediaType::StreetPole => {
            if !input.faces.is_empty() {
                warn!(
                    "ignoring {} face(s) supplied for street pole '{}'",
                    input.faces.len(),
                    input.name
                );
            }
            for route in &input.routes {
                super::route_service::validate_new_route(route)?;
            }
            Ok((Vec::new(), input.routes.clone()))
        }
    }
}

/// Get a media item by id
pub async fn get_media_item(pool: &SqlitePool, id: i64) -> Result<MediaItem> {
    db::media_items::get(pool, id)
        .await?
        .ok_or(AdmastError::MediaItemNotFound(id))
}

/// List the media items of a workspace
pub async fn list_media_items(pool: &SqlitePool, workspace_id: i64) -> Result<Vec<MediaItem>> {
    db::workspaces::get(pool, workspace_id)
        .await?
        .ok_or(AdmastError::WorkspaceNotFound(workspace_id))?;

    db::media_items::list_by_workspace(pool, workspace_id).await
}

/// Update a media item's scalar fields. Category and display id never
/// change.
pub async fn update_media_item(
    pool: &SqlitePool,
    id: i64,
    updates: UpdateMediaItem,
) -> Result<MediaItem> {
    let mut item = get_media_item(pool, id).await?;

    if let Some(name) = &updates.name {
        validate_name(name)?;
    }
    validate_coordinates(updates.latitude, updates.longitude)?;

    if let Some(name) = updates.name {
        item.name = name;
    }
    if let Some(format) = updates.format {
        item.format = Some(format);
    }
    if let Some(location) = updates.location {
        item.location = Some(location);
    }
    if let Some(latitude) = updates.latitude {
        item.latitude = Some(latitude);
    }
    if let Some(longitude) = updates.longitude {
        item.longitude = Some(longitude);
    }
    if let Some(landmark) = updates.closest_landmark {
        item.closest_landmark = Some(landmark);
    }
    if let Some(availability) = updates.availability {
        item.availability = Some(availability);
    }

    db::media_items::update(pool, &item).await?;
    get_media_item(pool, id).await
}

/// Delete a media item and its children. Children go first, in the same
/// transaction, so a failure never leaves orphans.
pub async fn delete_media_item(pool: &SqlitePool, id: i64) -> Result<()> {
    let item = get_media_item(pool, id).await?;

    let mut tx = pool.begin().await?;
    let faces = db::faces::delete_by_media_item(&mut *tx, id).await?;
    let routes = db::routes::delete_by_media_item(&mut *tx, id).await?;
    db::media_items::delete(&mut *tx, id).await?;
    tx.commit().await?;

    info!(
        "deleted media item {} ({}) with {} face(s) and {} route(s)",
        id, item.display_id, faces, routes
    );
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AdmastError::InvalidArgument(
            "media item name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<()> {
    if let Some(lat) = latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        return Err(AdmastError::InvalidArgument(format!(
            "latitude {} out of range (-90..=90)",
            lat
        )));
    }
    if let Some(lon) = longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        return Err(AdmastError::InvalidArgument(format!(
            "longitude {} out of range (-180..=180)",
            lon
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::{create_pool, run_migrations};
    use tempfile::tempdir;

    async fn setup_test_db() -> (SqlitePool, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (pool, temp_dir)
    }

    async fn seed_workspace(pool: &SqlitePool) -> i64 {
        let input = CreateWorkspace {
            name: "Acme Outdoor".to_string(),
            ..Default::default()
        };
        db::workspaces::create(pool, &input, "2026-01-01T00:00:00Z")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_display_ids() {
        let (pool, _temp) = setup_test_db().await;
        let ws = seed_workspace(&pool).await;

        let first = create_media_item(
            &pool,
            CreateMediaItem::new(ws, MediaType::Billboard, "Airport Road North"),
        )
        .await
        .unwrap();
        assert_eq!(first.display_id, "BB-1");
        assert_eq!(first.media_type, "BILLBOARD");

        let second = create_media_item(
            &pool,
            CreateMediaItem::new(ws, MediaType::Billboard, "Airport Road South"),
        )
        .await
        .unwrap();
        assert_eq!(second.display_id, "BB-2");

        // Street poles run their own sequence
        let pole = create_media_item(
            &pool,
            CreateMediaItem::new(ws, MediaType::StreetPole, "High Street"),
        )
        .await
        .unwrap();
        assert_eq!(pole.display_id, "SP-1");
    }

    #[tokio::test]
    async fn test_create_persists_scalar_fields() {
        let (pool, _temp) = setup_test_db().await;
        let ws = seed_workspace(&pool).await;

        let mut input = CreateMediaItem::new(ws, MediaType::Billboard, "Harbour View");
        input.format = Some("48-sheet".to_string());
        input.latitude = Some(6.4551);
        input.longitude = Some(3.3942);
        input.closest_landmark = Some("Marina bridge".to_string());

        let item = create_media_item(&pool, input).await.unwrap();
        assert_eq!(item.format.as_deref(), Some("48-sheet"));
        assert_eq!(item.latitude, Some(6.4551));
        assert_eq!(item.closest_landmark.as_deref(), Some("Marina bridge"));
    }

    #[tokio::test]
    async fn test_create_with_matching_children() {
        let (pool, _temp) = setup_test_db().await;
        let ws = seed_workspace(&pool).await;

        let mut input = CreateMediaItem::new(ws, MediaType::Billboard, "Harbour View");
        input.faces = vec![
            NewFace {
                face_number: 1,
                images: vec!["https://cdn.example/a.jpg".to_string()],
                ..Default::default()
            },
            NewFace {
                face_number: 2,
                rent: Some(1500.0),
                ..Default::default()
            },
        ];

        let item = create_media_item(&pool, input).await.unwrap();
        let faces = db::faces::list_by_media_item(&pool, item.id).await.unwrap();
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].face_number, 1);
        assert_eq!(faces[0].image_urls().unwrap().len(), 1);
        assert_eq!(faces[1].rent, Some(1500.0));
    }

    #[tokio::test]
    async fn test_create_drops_wrong_category_children() {
        let (pool, _temp) = setup_test_db().await;
        let ws = seed_workspace(&pool).await;

        let mut input = CreateMediaItem::new(ws, MediaType::Billboard, "Harbour View");
        input.routes = vec![NewRoute {
            route_name: "Main St".to_string(),
            ..Default::default()
        }];

        let item = create_media_item(&pool, input).await.unwrap();
        let routes = db::routes::list_by_media_item(&pool, item.id)
            .await
            .unwrap();
        assert!(routes.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_child_is_conflict() {
        let (pool, _temp) = setup_test_db().await;
        let ws = seed_workspace(&pool).await;

        let mut input = CreateMediaItem::new(ws, MediaType::Billboard, "Harbour View");
        input.faces = vec![
            NewFace {
                face_number: 1,
                ..Default::default()
            },
            NewFace {
                face_number: 1,
                ..Default::default()
            },
        ];

        let err = create_media_item(&pool, input).await.unwrap_err();
        assert!(matches!(err, AdmastError::Conflict(_)));

        // The transaction rolled back: no half-created item remains.
        let items = db::media_items::list_by_workspace(&pool, ws).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_create_missing_workspace() {
        let (pool, _temp) = setup_test_db().await;

        let err = create_media_item(
            &pool,
            CreateMediaItem::new(42, MediaType::Billboard, "Nowhere"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AdmastError::WorkspaceNotFound(42)));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let (pool, _temp) = setup_test_db().await;
        let ws = seed_workspace(&pool).await;

        let err = create_media_item(&pool, CreateMediaItem::new(ws, MediaType::Billboard, "  "))
            .await
            .unwrap_err();
        assert!(matches!(err, AdmastError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_coordinates() {
        let (pool, _temp) = setup_test_db().await;
        let ws = seed_workspace(&pool).await;

        let mut input = CreateMediaItem::new(ws, MediaType::Billboard, "Harbour View");
        input.latitude = Some(123.0);

        let err = create_media_item(&pool, input).await.unwrap_err();
        assert!(matches!(err, AdmastError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let (pool, _temp) = setup_test_db().await;
        let ws = seed_workspace(&pool).await;

        let mut input = CreateMediaItem::new(ws, MediaType::Billboard, "Harbour View");
        input.location = Some("Marina".to_string());
        let item = create_media_item(&pool, input).await.unwrap();

        let updated = update_media_item(
            &pool,
            item.id,
            UpdateMediaItem {
                name: Some("Harbour View East".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "Harbour View East");
        assert_eq!(updated.location.as_deref(), Some("Marina"));
        assert_eq!(updated.display_id, "BB-1");
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let (pool, _temp) = setup_test_db().await;

        let err = update_media_item(&pool, 9, UpdateMediaItem::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AdmastError::MediaItemNotFound(9)));
    }

    #[tokio::test]
    async fn test_delete_removes_children() {
        let (pool, _temp) = setup_test_db().await;
        let ws = seed_workspace(&pool).await;

        let mut input = CreateMediaItem::new(ws, MediaType::StreetPole, "High Street");
        input.routes = vec![NewRoute {
            route_name: "Main St".to_string(),
            number_of_street_poles: Some(12),
            ..Default::default()
        }];
        let item = create_media_item(&pool, input).await.unwrap();

        delete_media_item(&pool, item.id).await.unwrap();

        assert!(db::media_items::get(&pool, item.id).await.unwrap().is_none());
        let routes = db::routes::list_by_media_item(&pool, item.id)
            .await
            .unwrap();
        assert!(routes.is_empty());
    }

    #[tokio::test]
    async fn test_list_requires_existing_workspace() {
        let (pool, _temp) = setup_test_db().await;

        let err = list_media_items(&pool, 5).await.unwrap_err();
        assert!(matches!(err, AdmastError::WorkspaceNotFound(5)));
    }
}
