use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sqlx::SqlitePool;
use tracing::debug;

use crate::db::connection::{create_pool, run_migrations};
use crate::error::{AdmastError, Result};

/// The name of the store directory
pub const STORE_DIR: &str = ".admast";
/// The name of the database file
pub const DB_FILE: &str = "admast.db";
/// Environment variable for store path override
pub const HOME_ENV: &str = "ADMAST_HOME";

/// How this store was resolved
#[derive(Debug, Clone)]
pub enum StoreMode {
    /// Explicit override (--home flag or ADMAST_HOME)
    Override,
    /// Local .admast/ directory in the project tree
    Local,
    /// Default store under the user's home directory
    Default,
}

impl StoreMode {
    pub fn label(&self) -> &str {
        match self {
            StoreMode::Override => "override",
            StoreMode::Local => "local",
            StoreMode::Default => "default",
        }
    }
}

/// Handle on an admast store: a `.admast/` directory holding the SQLite
/// database. Constructed once at startup and passed down; the pool it
/// opens is closed explicitly before the process exits.
#[derive(Debug)]
pub struct Store {
    /// Directory containing `.admast/`
    pub root: PathBuf,
    /// Path to the `.admast/` directory
    pub store_dir: PathBuf,
    /// Path to the database file
    pub db_path: PathBuf,
    /// How this store was resolved
    pub mode: StoreMode,
}

impl Store {
    fn at(root: PathBuf, mode: StoreMode) -> Self {
        let store_dir = root.join(STORE_DIR);
        let db_path = store_dir.join(DB_FILE);
        Self {
            root,
            store_dir,
            db_path,
            mode,
        }
    }

    /// Resolve the store:
    /// 1. explicit override (--home / ADMAST_HOME) -> must exist
    /// 2. walk up from cwd looking for .admast/, stopping before $HOME
    /// 3. default ~/.admast, when it exists
    pub fn find(override_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = override_path {
            if path.join(STORE_DIR).is_dir() {
                return Ok(Self::at(path.to_path_buf(), StoreMode::Override));
            }
            // The override may point at the .admast directory itself
            if path.join(DB_FILE).exists() {
                return Ok(Self {
                    root: path.to_path_buf(),
                    store_dir: path.to_path_buf(),
                    db_path: path.join(DB_FILE),
                    mode: StoreMode::Override,
                });
            }
            return Err(AdmastError::StoreNotFound(path.display().to_string()));
        }

        let cwd = env::current_dir()?;
        let home_dir = dirs::home_dir();

        // Walk up from cwd; stop before $HOME so ~/.admast stays the
        // default store rather than a "local" one.
        let mut current = cwd.as_path();
        loop {
            if let Some(ref home) = home_dir
                && current == home.as_path()
            {
                break;
            }
            if current.join(STORE_DIR).is_dir() {
                debug!("using local store at {}", current.display());
                return Ok(Self::at(current.to_path_buf(), StoreMode::Local));
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        if let Some(home) = home_dir {
            if home.join(STORE_DIR).is_dir() {
                return Ok(Self::at(home, StoreMode::Default));
            }
            return Err(AdmastError::StoreNotFound(
                home.join(STORE_DIR).display().to_string(),
            ));
        }

        Err(AdmastError::StoreNotFound(STORE_DIR.to_string()))
    }

    /// Create the store directory (idempotent) and return a handle on it.
    /// With no explicit path the store is created under the user's home
    /// directory.
    pub fn init(path: Option<&Path>) -> Result<Self> {
        let (root, mode) = match path {
            Some(p) => (p.to_path_buf(), StoreMode::Override),
            None => {
                let home = dirs::home_dir()
                    .ok_or_else(|| AdmastError::StoreNotFound(STORE_DIR.to_string()))?;
                (home, StoreMode::Default)
            }
        };

        let store = Self::at(root, mode);
        fs::create_dir_all(&store.store_dir)?;
        Ok(store)
    }

    /// Open the database pool and bring the schema up to date.
    pub async fn open(&self) -> Result<SqlitePool> {
        let pool = create_pool(&self.db_path).await?;
        run_migrations(&pool).await?;
        Ok(pool)
    }
}
