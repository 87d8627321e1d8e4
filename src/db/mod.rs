pub mod connection;

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::*;

/// Database operations for workspaces
pub mod workspaces {
    use super::*;

    pub async fn create(pool: &SqlitePool, input: &CreateWorkspace, now: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO workspaces (name, email, address, location, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.address)
        .bind(&input.location)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Insert a workspace under a caller-chosen id. Used by seeding.
    pub async fn create_with_id(
        pool: &SqlitePool,
        id: i64,
        input: &CreateWorkspace,
        now: &str,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO workspaces (id, name, email, address, location, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.address)
        .bind(&input.location)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Workspace>> {
        let workspace = sqlx::query_as::<_, Workspace>("SELECT * FROM workspaces WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(workspace)
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Workspace>> {
        let workspaces = sqlx::query_as::<_, Workspace>("SELECT * FROM workspaces ORDER BY id ASC")
            .fetch_all(pool)
            .await?;
        Ok(workspaces)
    }

    pub async fn update(pool: &SqlitePool, workspace: &Workspace) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE workspaces
            SET name = ?, email = ?, address = ?, location = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&workspace.name)
        .bind(&workspace.email)
        .bind(&workspace.address)
        .bind(&workspace.location)
        .bind(chrono::Utc::now().to_rfc3339())
        .bind(workspace.id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM workspaces WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn delete_all(pool: &SqlitePool) -> Result<()> {
        sqlx::query("DELETE FROM workspaces").execute(pool).await?;
        Ok(())
    }
}

/// Database operations for media items
pub mod media_items {
    use super::*;

    pub async fn create<'a, E>(
        executor: E,
        input: &CreateMediaItem,
        display_id: &str,
        now: &str,
    ) -> Result<i64>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO media_items (workspace_id, media_type, display_id, name, format,
                location, latitude, longitude, closest_landmark, availability,
                created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(input.workspace_id)
        .bind(input.media_type.as_str())
        .bind(display_id)
        .bind(&input.name)
        .bind(&input.format)
        .bind(&input.location)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(&input.closest_landmark)
        .bind(&input.availability)
        .bind(now)
        .bind(now)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<MediaItem>> {
        let item = sqlx::query_as::<_, MediaItem>("SELECT * FROM media_items WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(item)
    }

    pub async fn list_by_workspace(pool: &SqlitePool, workspace_id: i64) -> Result<Vec<MediaItem>> {
        let items = sqlx::query_as::<_, MediaItem>(
            "SELECT * FROM media_items WHERE workspace_id = ? ORDER BY id ASC",
        )
        .bind(workspace_id)
        .fetch_all(pool)
        .await?;
        Ok(items)
    }

    pub async fn count_by_workspace(pool: &SqlitePool, workspace_id: i64) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM media_items WHERE workspace_id = ?",
        )
        .bind(workspace_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Highest display id in a (workspace, category) scope, by descending
    /// display-id order, restricted to ids carrying the scope's prefix.
    pub async fn top_display_id<'a, E>(
        executor: E,
        workspace_id: i64,
        media_type: &str,
        prefix: &str,
    ) -> Result<Option<String>>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let display_id = sqlx::query_scalar::<_, String>(
            r#"
            SELECT display_id FROM media_items
            WHERE workspace_id = ? AND media_type = ? AND display_id LIKE ?
            ORDER BY display_id DESC
            LIMIT 1
            "#,
        )
        .bind(workspace_id)
        .bind(media_type)
        .bind(format!("{}-%", prefix))
        .fetch_optional(executor)
        .await?;
        Ok(display_id)
    }

    /// Highest display id in a (workspace, category) scope regardless of
    /// prefix. Used to distinguish an empty scope from one whose stored
    /// ids do not carry the expected prefix.
    pub async fn top_display_id_in_scope<'a, E>(
        executor: E,
        workspace_id: i64,
        media_type: &str,
    ) -> Result<Option<String>>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let display_id = sqlx::query_scalar::<_, String>(
            r#"
            SELECT display_id FROM media_items
            WHERE workspace_id = ? AND media_type = ?
            ORDER BY display_id DESC
            LIMIT 1
            "#,
        )
        .bind(workspace_id)
        .bind(media_type)
        .fetch_optional(executor)
        .await?;
        Ok(display_id)
    }

    pub async fn find_by_display_id<'a, E>(
        executor: E,
        workspace_id: i64,
        display_id: &str,
    ) -> Result<Option<MediaItem>>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let item = sqlx::query_as::<_, MediaItem>(
            "SELECT * FROM media_items WHERE workspace_id = ? AND display_id = ?",
        )
        .bind(workspace_id)
        .bind(display_id)
        .fetch_optional(executor)
        .await?;
        Ok(item)
    }

    pub async fn update(pool: &SqlitePool, item: &MediaItem) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE media_items
            SET name = ?, format = ?, location = ?, latitude = ?, longitude = ?,
                closest_landmark = ?, availability = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&item.name)
        .bind(&item.format)
        .bind(&item.location)
        .bind(item.latitude)
        .bind(item.longitude)
        .bind(&item.closest_landmark)
        .bind(&item.availability)
        .bind(chrono::Utc::now().to_rfc3339())
        .bind(item.id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn delete<'a, E>(executor: E, id: i64) -> Result<()>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        sqlx::query("DELETE FROM media_items WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn delete_all(pool: &SqlitePool) -> Result<()> {
        sqlx::query("DELETE FROM media_items").execute(pool).await?;
        Ok(())
    }
}

/// Database operations for static media faces
pub mod faces {
    use super::*;

    pub async fn create<'a, E>(
        executor: E,
        media_item_id: i64,
        face: &NewFace,
        images: Option<&str>,
        now: &str,
    ) -> Result<i64>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO static_media_faces (media_item_id, face_number, description,
                availability, images, rent, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(media_item_id)
        .bind(face.face_number)
        .bind(&face.description)
        .bind(&face.availability)
        .bind(images)
        .bind(face.rent)
        .bind(now)
        .bind(now)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<StaticMediaFace>> {
        let face =
            sqlx::query_as::<_, StaticMediaFace>("SELECT * FROM static_media_faces WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(face)
    }

    pub async fn list_by_media_item(
        pool: &SqlitePool,
        media_item_id: i64,
    ) -> Result<Vec<StaticMediaFace>> {
        let faces = sqlx::query_as::<_, StaticMediaFace>(
            "SELECT * FROM static_media_faces WHERE media_item_id = ? ORDER BY face_number ASC",
        )
        .bind(media_item_id)
        .fetch_all(pool)
        .await?;
        Ok(faces)
    }

    pub async fn find_by_number(
        pool: &SqlitePool,
        media_item_id: i64,
        face_number: i64,
    ) -> Result<Option<StaticMediaFace>> {
        let face = sqlx::query_as::<_, StaticMediaFace>(
            "SELECT * FROM static_media_faces WHERE media_item_id = ? AND face_number = ?",
        )
        .bind(media_item_id)
        .bind(face_number)
        .fetch_optional(pool)
        .await?;
        Ok(face)
    }

    pub async fn update(pool: &SqlitePool, face: &StaticMediaFace) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE static_media_faces
            SET face_number = ?, description = ?, availability = ?, images = ?,
                rent = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(face.face_number)
        .bind(&face.description)
        .bind(&face.availability)
        .bind(&face.images)
        .bind(face.rent)
        .bind(chrono::Utc::now().to_rfc3339())
        .bind(face.id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM static_media_faces WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn delete_by_media_item<'a, E>(
        executor: E,
        media_item_id: i64,
    ) -> Result<u64>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM static_media_faces WHERE media_item_id = ?")
            .bind(media_item_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_all(pool: &SqlitePool) -> Result<()> {
        sqlx::query("DELETE FROM static_media_faces")
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// Database operations for routes
pub mod routes {
    use super::*;

    pub async fn create<'a, E>(
        executor: E,
        media_item_id: i64,
        route: &NewRoute,
        images: Option<&str>,
        now: &str,
    ) -> Result<i64>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO routes (media_item_id, route_name, side_route, description,
                number_of_street_poles, price_per_street_pole, images, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(media_item_id)
        .bind(&route.route_name)
        .bind(&route.side_route)
        .bind(&route.description)
        .bind(route.number_of_street_poles)
        .bind(route.price_per_street_pole)
        .bind(images)
        .bind(now)
        .bind(now)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Route>> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(route)
    }

    pub async fn list_by_media_item(pool: &SqlitePool, media_item_id: i64) -> Result<Vec<Route>> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes WHERE media_item_id = ? ORDER BY route_name ASC",
        )
        .bind(media_item_id)
        .fetch_all(pool)
        .await?;
        Ok(routes)
    }

    pub async fn find_by_name(
        pool: &SqlitePool,
        media_item_id: i64,
        route_name: &str,
    ) -> Result<Option<Route>> {
        let route = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes WHERE media_item_id = ? AND route_name = ?",
        )
        .bind(media_item_id)
        .bind(route_name)
        .fetch_optional(pool)
        .await?;
        Ok(route)
    }

    pub async fn update(pool: &SqlitePool, route: &Route) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE routes
            SET route_name = ?, side_route = ?, description = ?, number_of_street_poles = ?,
                price_per_street_pole = ?, images = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&route.route_name)
        .bind(&route.side_route)
        .bind(&route.description)
        .bind(route.number_of_street_poles)
        .bind(route.price_per_street_pole)
        .bind(&route.images)
        .bind(chrono::Utc::now().to_rfc3339())
        .bind(route.id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM routes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn delete_by_media_item<'a, E>(
        executor: E,
        media_item_id: i64,
    ) -> Result<u64>
    where
        E: Executor<'a, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM routes WHERE media_item_id = ?")
            .bind(media_item_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_all(pool: &SqlitePool) -> Result<()> {
        sqlx::query("DELETE FROM routes").execute(pool).await?;
        Ok(())
    }
}
