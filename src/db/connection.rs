use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::error::Result;

/// Create a connection pool for the SQLite database
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    let url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

/// The database schema
const SCHEMA: &str = r#"
PRAGMA foreign_keys = ON;

-- Workspaces table (campaign tenants)
CREATE TABLE IF NOT EXISTS workspaces (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT,
    address TEXT,
    location TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Media items table (billboards and street poles)
CREATE TABLE IF NOT EXISTS media_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    workspace_id INTEGER NOT NULL REFERENCES workspaces(id),
    media_type TEXT NOT NULL,
    display_id TEXT NOT NULL,
    name TEXT NOT NULL,
    format TEXT,
    location TEXT,
    latitude REAL,
    longitude REAL,
    closest_landmark TEXT,
    availability TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE(workspace_id, display_id)
);

CREATE INDEX IF NOT EXISTS idx_media_items_workspace ON media_items(workspace_id);
CREATE INDEX IF NOT EXISTS idx_media_items_scope ON media_items(workspace_id, media_type, display_id);

-- Static media faces (billboard children)
CREATE TABLE IF NOT EXISTS static_media_faces (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    media_item_id INTEGER NOT NULL REFERENCES media_items(id),
    face_number INTEGER NOT NULL,
    description TEXT,
    availability TEXT,
    images TEXT,
    rent REAL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE(media_item_id, face_number)
);

CREATE INDEX IF NOT EXISTS idx_faces_media_item ON static_media_faces(media_item_id);

-- Routes (street-pole children)
CREATE TABLE IF NOT EXISTS routes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    media_item_id INTEGER NOT NULL REFERENCES media_items(id),
    route_name TEXT NOT NULL,
    side_route TEXT,
    description TEXT,
    number_of_street_poles INTEGER,
    price_per_street_pole REAL,
    images TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE(media_item_id, route_name)
);

CREATE INDEX IF NOT EXISTS idx_routes_media_item ON routes(media_item_id);
"#;
