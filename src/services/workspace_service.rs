use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::error::{AdmastError, Result};
use crate::models::*;

/// Create a new workspace
pub async fn create_workspace(pool: &SqlitePool, input: CreateWorkspace) -> Result<Workspace> {
    validate_name(&input.name)?;
    validate_email(input.email.as_deref())?;

    let now = chrono::Utc::now().to_rfc3339();
    let id = db::workspaces::create(pool, &input, &now).await?;

    info!("created workspace {} '{}'", id, input.name);
    get_workspace(pool, id).await
}

/// Get a workspace by id
pub async fn get_workspace(pool: &SqlitePool, id: i64) -> Result<Workspace> {
    db::workspaces::get(pool, id)
        .await?
        .ok_or(AdmastError::WorkspaceNotFound(id))
}

/// List all workspaces
pub async fn list_workspaces(pool: &SqlitePool) -> Result<Vec<Workspace>> {
    db::workspaces::list(pool).await
}

/// Update a workspace
pub async fn update_workspace(
    pool: &SqlitePool,
    id: i64,
    updates: UpdateWorkspace,
) -> Result<Workspace> {
    let mut workspace = get_workspace(pool, id).await?;

    if let Some(name) = &updates.name {
        validate_name(name)?;
    }
    validate_email(updates.email.as_deref())?;

    // Nothing to change: hand back the stored row untouched
    if updates.name.is_none()
        && updates.email.is_none()
        && updates.address.is_none()
        && updates.location.is_none()
    {
        return Ok(workspace);
    }

    if let Some(name) = updates.name {
        workspace.name = name;
    }
    if let Some(email) = updates.email {
        workspace.email = Some(email);
    }
    if let Some(address) = updates.address {
        workspace.address = Some(address);
    }
    if let Some(location) = updates.location {
        workspace.location = Some(location);
    }

    db::workspaces::update(pool, &workspace).await?;
    get_workspace(pool, id).await
}

/// Delete a workspace. Refused while it still owns media items, so a
/// tenant can never lose inventory to a stray delete.
pub async fn delete_workspace(pool: &SqlitePool, id: i64) -> Result<()> {
    get_workspace(pool, id).await?;

    let count = db::media_items::count_by_workspace(pool, id).await?;
    if count > 0 {
        return Err(AdmastError::WorkspaceNotEmpty { id, count });
    }

    db::workspaces::delete(pool, id).await?;
    info!("deleted workspace {}", id);
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AdmastError::InvalidArgument(
            "workspace name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Light shape check: something before the @, a domain with a dot, no
/// whitespace. Full RFC validation is out of scope for a CLI.
fn validate_email(email: Option<&str>) -> Result<()> {
    let Some(email) = email else { return Ok(()) };
    if email.trim().is_empty() {
        return Ok(());
    }

    let mut parts = email.split('@');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        _ => false,
    };

    if !valid {
        return Err(AdmastError::InvalidArgument(format!(
            "invalid email format: {}",
            email
        )));
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

    #[tokio::test]
    async fn test_create_and_get_workspace() {
        let (pool, _temp) = setup_test_db().await;

        let workspace = create_workspace(
            &pool,
            CreateWorkspace {
                name: "Acme Outdoor".to_string(),
                email: Some("ops@acme.example".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let fetched = get_workspace(&pool, workspace.id).await.unwrap();
        assert_eq!(fetched.name, "Acme Outdoor");
        assert_eq!(fetched.email.as_deref(), Some("ops@acme.example"));
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let (pool, _temp) = setup_test_db().await;

        let first = create_workspace(
            &pool,
            CreateWorkspace {
                name: "First".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let second = create_workspace(
            &pool,
            CreateWorkspace {
                name: "Second".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(second.id, first.id + 1);

        let all = list_workspaces(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let (pool, _temp) = setup_test_db().await;

        let err = create_workspace(
            &pool,
            CreateWorkspace {
                name: "   ".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AdmastError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_email() {
        let (pool, _temp) = setup_test_db().await;

        for bad in ["nope", "a@b", "a @b.com", "@x.com", "a@.com"] {
            let err = create_workspace(
                &pool,
                CreateWorkspace {
                    name: "Acme".to_string(),
                    email: Some(bad.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
            assert!(
                matches!(err, AdmastError::InvalidArgument(_)),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let (pool, _temp) = setup_test_db().await;

        let workspace = create_workspace(
            &pool,
            CreateWorkspace {
                name: "Acme Outdoor".to_string(),
                location: Some("Lagos".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let updated = update_workspace(
            &pool,
            workspace.id,
            UpdateWorkspace {
                name: Some("Acme OOH".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Acme OOH");
        assert_eq!(updated.location.as_deref(), Some("Lagos"));
    }

    #[tokio::test]
    async fn test_update_missing_workspace() {
        let (pool, _temp) = setup_test_db().await;

        let err = update_workspace(&pool, 77, UpdateWorkspace::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AdmastError::WorkspaceNotFound(77)));
    }

    #[tokio::test]
    async fn test_delete_refused_while_items_remain() {
        let (pool, _temp) = setup_test_db().await;

        let workspace = create_workspace(
            &pool,
            CreateWorkspace {
                name: "Acme Outdoor".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let item = create_media_item(
            &pool,
            CreateMediaItem::new(workspace.id, MediaType::Billboard, "Harbour View"),
        )
        .await
        .unwrap();

        let err = delete_workspace(&pool, workspace.id).await.unwrap_err();
        assert!(matches!(
            err,
            AdmastError::WorkspaceNotEmpty { count: 1, .. }
        ));

        // After the item goes, the workspace can go too.
        crate::services::media_item_service::delete_media_item(&pool, item.id)
            .await
            .unwrap();
        delete_workspace(&pool, workspace.id).await.unwrap();

        let err = get_workspace(&pool, workspace.id).await.unwrap_err();
        assert!(matches!(err, AdmastError::WorkspaceNotFound(_)));
    }
}
