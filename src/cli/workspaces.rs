use sqlx::SqlitePool;

use crate::cli::args::{WorkspaceAction, WorkspacesAction};
use crate::error::Result;
use crate::models::*;
use crate::output::{self, OutputFormat};
use crate::services;

/// Handle the workspaces command (list or create)
pub async fn workspaces(
    pool: &SqlitePool,
    action: Option<WorkspacesAction>,
    format: OutputFormat,
) -> Result<()> {
    match action {
        None => {
            let list = services::list_workspaces(pool).await?;
            println!("{}", output::format_workspaces(&list, format));
        }
        Some(WorkspacesAction::Create {
            name,
            email,
            address,
            location,
        }) => {
            let workspace = services::create_workspace(
                pool,
                CreateWorkspace {
                    name,
                    email,
                    address,
                    location,
                },
            )
            .await?;
            println!("{}", output::format_workspace(&workspace, format));
        }
    }
    Ok(())
}

/// Handle the workspace command (show, update, delete, items)
pub async fn workspace(
    pool: &SqlitePool,
    id: i64,
    action: Option<WorkspaceAction>,
    format: OutputFormat,
) -> Result<()> {
    match action {
        None => {
            let workspace = services::get_workspace(pool, id).await?;
            println!("{}", output::format_workspace(&workspace, format));
        }

        Some(WorkspaceAction::Update {
            name,
            email,
            address,
            location,
        }) => {
            let workspace = services::update_workspace(
                pool,
                id,
                UpdateWorkspace {
                    name,
                    email,
                    address,
                    location,
                },
            )
            .await?;
            println!("{}", output::format_workspace(&workspace, format));
        }

        Some(WorkspaceAction::Delete) => {
            services::delete_workspace(pool, id).await?;
            println!("Deleted workspace {}", id);
        }

        Some(WorkspaceAction::Items) => {
            let items = services::list_media_items(pool, id).await?;
            println!("{}", output::format_media_items(&items, format));
        }
    }
    Ok(())
}
