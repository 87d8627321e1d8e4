use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db;
use crate::error::{AdmastError, Result};
use crate::models::*;
use crate::services::{conflict_on_unique, encode_images};

/// List the faces of a billboard, ordered by face number.
pub async fn list_faces(pool: &SqlitePool, media_item_id: i64) -> Result<Vec<StaticMediaFace>> {
    let item = db::media_items::get(pool, media_item_id)
        .await?
        .ok_or(AdmastError::MediaItemNotFound(media_item_id))?;

    if !item.is_billboard() {
        warn!(
            "listing faces of non-billboard media item {} ({})",
            media_item_id, item.media_type
        );
    }

    db::faces::list_by_media_item(pool, media_item_id).await
}

/// Get a face by id
pub async fn get_face(pool: &SqlitePool, id: i64) -> Result<StaticMediaFace> {
    db::faces::get(pool, id)
        .await?
        .ok_or(AdmastError::FaceNotFound(id))
}

/// Create a face on an existing billboard
pub async fn create_face(pool: &SqlitePool, input: CreateStaticMediaFace) -> Result<StaticMediaFace> {
    let item = db::media_items::get(pool, input.media_item_id)
        .await?
        .ok_or(AdmastError::MediaItemNotFound(input.media_item_id))?;

    if !item.is_billboard() {
        return Err(AdmastError::InvalidArgument(format!(
            "media item {} is a {}; static media faces belong to billboards",
            item.id, item.media_type
        )));
    }

    let face = NewFace {
        face_number: input.face_number,
        description: input.description,
        availability: input.availability,
        images: input.images,
        rent: input.rent,
    };
    validate_new_face(&face)?;

    if db::faces::find_by_number(pool, input.media_item_id, face.face_number)
        .await?
        .is_some()
    {
        return Err(AdmastError::Conflict(format!(
            "face number {} already exists on media item {}",
            face.face_number, input.media_item_id
        )));
    }

    let images = encode_images(&face.images)?;
    let now = chrono::Utc::now().to_rfc3339();
    let id = db::faces::create(pool, input.media_item_id, &face, images.as_deref(), &now)
        .await
        .map_err(|e| {
            conflict_on_unique(
                e,
                format!(
                    "face number {} already exists on media item {}",
                    face.face_number, input.media_item_id
                ),
            )
        })?;

    info!(
        "created face #{} on media item {}",
        face.face_number, input.media_item_id
    );
    get_face(pool, id).await
}

/// Update a face. Renumbering checks uniqueness against the parent's
/// other faces.
pub async fn update_face(
    pool: &SqlitePool,
    id: i64,
    updates: UpdateStaticMediaFace,
) -> Result<StaticMediaFace> {
    let mut face = get_face(pool, id).await?;

    if let Some(number) = updates.face_number {
        if number <= 0 {
            return Err(AdmastError::InvalidArgument(
                "face number must be positive".to_string(),
            ));
        }
        if number != face.face_number {
            let conflict = db::faces::find_by_number(pool, face.media_item_id, number).await?;
            if conflict.is_some_and(|other| other.id != id) {
                return Err(AdmastError::Conflict(format!(
                    "face number {} already exists on media item {}",
                    number, face.media_item_id
                )));
            }
        }
        face.face_number = number;
    }

    if let Some(rent) = updates.rent {
        if rent < 0.0 {
            return Err(AdmastError::InvalidArgument(
                "rent amount cannot be negative".to_string(),
            ));
        }
        face.rent = Some(rent);
    }

    if let Some(description) = updates.description {
        face.description = Some(description);
    }
    if let Some(availability) = updates.availability {
        face.availability = Some(availability);
    }
    if let Some(images) = updates.images {
        face.images = encode_images(&images)?;
    }

    db::faces::update(pool, &face).await?;
    get_face(pool, id).await
}

/// Delete a face by id
pub async fn delete_face(pool: &SqlitePool, id: i64) -> Result<()> {
    let face = get_face(pool, id).await?;
    db::faces::delete(pool, id).await?;
    info!(
        "deleted face {} (#{} on media item {})",
        id, face.face_number, face.media_item_id
    );
    Ok(())
}

pub(crate) fn validate_new_face(face: &NewFace) -> Result<()> {
    if face.face_number <= 0 {
        return Err(AdmastError::InvalidArgument(
            "face number must be positive".to_string(),
        ));
    }
    if let Some(rent) = face.rent
        && rent < 0.0
    {
        return Err(AdmastError::InvalidArgument(
            "rent amount cannot be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::{create_pool, run_migrations};
    use crate::services::media_item_service::create_media_item;
    use tempfile::tempdir;

    async fn setup_test_db() -> (SqlitePool, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (pool, temp_dir)
    }

    async fn seed_item(pool: &SqlitePool, media_type: MediaType) -> MediaItem {
        let ws = db::workspaces::create(
            pool,
            &CreateWorkspace {
                name: "Acme Outdoor".to_string(),
                ..Default::default()
            },
            "2026-01-01T00:00:00Z",
        )
        .await
        .unwrap();
        create_media_item(pool, CreateMediaItem::new(ws, media_type, "Harbour View"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_faces() {
        let (pool, _temp) = setup_test_db().await;
        let item = seed_item(&pool, MediaType::Billboard).await;

        create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 2,
                ..Default::default()
            },
        )
        .await
        .unwrap();
        create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 1,
                rent: Some(900.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let faces = list_faces(&pool, item.id).await.unwrap();
        assert_eq!(faces.len(), 2);
        // Ordered by face number
        assert_eq!(faces[0].face_number, 1);
        assert_eq!(faces[1].face_number, 2);
    }

    #[tokio::test]
    async fn test_create_face_on_street_pole_is_rejected() {
        let (pool, _temp) = setup_test_db().await;
        let item = seed_item(&pool, MediaType::StreetPole).await;

        let err = create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 1,
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AdmastError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_duplicate_face_number_is_conflict() {
        let (pool, _temp) = setup_test_db().await;
        let item = seed_item(&pool, MediaType::Billboard).await;

        create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 1,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let err = create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 1,
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AdmastError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_face_rejects_bad_numbers() {
        let (pool, _temp) = setup_test_db().await;
        let item = seed_item(&pool, MediaType::Billboard).await;

        let err = create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 0,
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AdmastError::InvalidArgument(_)));

        let err = create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 1,
                rent: Some(-5.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AdmastError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_renumber_to_taken_number_is_conflict() {
        let (pool, _temp) = setup_test_db().await;
        let item = seed_item(&pool, MediaType::Billboard).await;

        create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 1,
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let second = create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 2,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let err = update_face(
            &pool,
            second.id,
            UpdateStaticMediaFace {
                face_number: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AdmastError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_replaces_images() {
        let (pool, _temp) = setup_test_db().await;
        let item = seed_item(&pool, MediaType::Billboard).await;

        let face = create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 1,
                images: vec!["https://cdn.example/old.jpg".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let updated = update_face(
            &pool,
            face.id,
            UpdateStaticMediaFace {
                images: Some(vec![
                    "https://cdn.example/a.jpg".to_string(),
                    "https://cdn.example/b.jpg".to_string(),
                ]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.image_urls().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_face() {
        let (pool, _temp) = setup_test_db().await;
        let item = seed_item(&pool, MediaType::Billboard).await;

        let face = create_face(
            &pool,
            CreateStaticMediaFace {
                media_item_id: item.id,
                face_number: 1,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        delete_face(&pool, face.id).await.unwrap();
        let err = get_face(&pool, face.id).await.unwrap_err();
        assert!(matches!(err, AdmastError::FaceNotFound(_)));
    }
}
