use thiserror::Error;

/// Exit codes shared by every admast command
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const NOT_FOUND: i32 = 3;
    pub const CONFLICT: i32 = 4;
    pub const INTERNAL: i32 = 1;
}

#[derive(Error, Debug)]
pub enum AdmastError {
    #[error("Store not found at {0}. Run 'admast init' first.")]
    StoreNotFound(String),

    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(i64),

    #[error("Media item not found: {0}")]
    MediaItemNotFound(i64),

    #[error("Static media face not found: {0}")]
    FaceNotFound(i64),

    #[error("Route not found: {0}")]
    RouteNotFound(i64),

    #[error("Workspace {id} still owns {count} media item(s); delete them first")]
    WorkspaceNotEmpty { id: i64, count: i64 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(
        "Could not generate a unique display id in workspace {workspace_id} after {attempts} attempt(s)"
    )]
    DisplayIdExhausted { workspace_id: i64, attempts: u32 },

    #[error("Stored display id '{0}' does not match '<PREFIX>-<n>'")]
    CorruptDisplayId(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdmastError {
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors (bad arguments, invalid input)
            AdmastError::InvalidArgument(_) => exit_codes::USER_ERROR,

            // Not found errors
            AdmastError::StoreNotFound(_)
            | AdmastError::WorkspaceNotFound(_)
            | AdmastError::MediaItemNotFound(_)
            | AdmastError::FaceNotFound(_)
            | AdmastError::RouteNotFound(_) => exit_codes::NOT_FOUND,

            // Conflict errors (uniqueness, referential guards)
            AdmastError::Conflict(_)
            | AdmastError::WorkspaceNotEmpty { .. }
            | AdmastError::DisplayIdExhausted { .. } => exit_codes::CONFLICT,

            // Internal errors (infrastructure or data integrity)
            AdmastError::CorruptDisplayId(_)
            | AdmastError::Database(_)
            | AdmastError::Json(_)
            | AdmastError::Yaml(_)
            | AdmastError::Io(_) => exit_codes::INTERNAL,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdmastError>;
