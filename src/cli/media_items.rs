use sqlx::SqlitePool;

use crate::cli::args::{ItemAction, ItemsAction};
use crate::error::{AdmastError, Result};
use crate::models::*;
use crate::output::{self, OutputFormat};
use crate::services;

/// Handle the items command (list or create within a workspace)
pub async fn items(
    pool: &SqlitePool,
    workspace_id: i64,
    action: Option<ItemsAction>,
    format: OutputFormat,
) -> Result<()> {
    match action {
        None => {
            let list = services::list_media_items(pool, workspace_id).await?;
            println!("{}", output::format_media_items(&list, format));
        }
        Some(ItemsAction::Create {
            media_type,
            name,
            format: item_format,
            location,
            latitude,
            longitude,
            landmark,
            availability,
        }) => {
            let media_type = media_type.parse::<MediaType>().map_err(|_| {
                AdmastError::InvalidArgument(format!(
                    "unknown media type '{}' (expected billboard or street-pole)",
                    media_type
                ))
            })?;

            let mut input = CreateMediaItem::new(workspace_id, media_type, name);
            input.format = item_format;
            input.location = location;
            input.latitude = latitude;
            input.longitude = longitude;
            input.closest_landmark = landmark;
            input.availability = availability;

            let item = services::create_media_item(pool, input).await?;
            println!("{}", output::format_media_item(&item, format));
        }
    }
    Ok(())
}

/// Handle the item command (show, update, delete, children)
pub async fn item(
    pool: &SqlitePool,
    id: i64,
    action: Option<ItemAction>,
    format: OutputFormat,
) -> Result<()> {
    match action {
        None => {
            let item = services::get_media_item(pool, id).await?;
            println!("{}", output::format_media_item(&item, format));
        }

        Some(ItemAction::Update {
            name,
            format: item_format,
            location,
            latitude,
            longitude,
            landmark,
            availability,
        }) => {
            let item = services::update_media_item(
                pool,
                id,
                UpdateMediaItem {
                    name,
                    format: item_format,
                    location,
                    latitude,
                    longitude,
                    closest_landmark: landmark,
                    availability,
                },
            )
            .await?;
            println!("{}", output::format_media_item(&item, format));
        }

        Some(ItemAction::Delete) => {
            services::delete_media_item(pool, id).await?;
            println!("Deleted media item {}", id);
        }

        Some(ItemAction::Faces { action }) => {
            crate::cli::faces::faces(pool, id, action, format).await?;
        }

        Some(ItemAction::Routes { action }) => {
            crate::cli::routes::routes(pool, id, action, format).await?;
        }
    }
    Ok(())
}
