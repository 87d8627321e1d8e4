use sqlx::SqlitePool;

use crate::cli::args::{FaceAction, FacesAction};
use crate::error::Result;
use crate::models::*;
use crate::output::{self, OutputFormat};
use crate::services;

/// Handle the faces subcommand of a media item (list or create)
pub async fn faces(
    pool: &SqlitePool,
    media_item_id: i64,
    action: Option<FacesAction>,
    format: OutputFormat,
) -> Result<()> {
    match action {
        None => {
            let list = services::list_faces(pool, media_item_id).await?;
            println!("{}", output::format_faces(&list, format));
        }
        Some(FacesAction::Create {
            number,
            description,
            availability,
            images,
            rent,
        }) => {
            let face = services::create_face(
                pool,
                CreateStaticMediaFace {
                    media_item_id,
                    face_number: number,
                    description,
                    availability,
                    images,
                    rent,
                },
            )
            .await?;
            println!("{}", output::format_face(&face, format));
        }
    }
    Ok(())
}

/// Handle the face command (update or delete)
pub async fn face(
    pool: &SqlitePool,
    id: i64,
    action: FaceAction,
    format: OutputFormat,
) -> Result<()> {
    match action {
        FaceAction::Update {
            number,
            description,
            availability,
            images,
            rent,
        } => {
            let face = services::update_face(
                pool,
                id,
                UpdateStaticMediaFace {
                    face_number: number,
                    description,
                    availability,
                    images,
                    rent,
                },
            )
            .await?;
            println!("{}", output::format_face(&face, format));
        }

        FaceAction::Delete => {
            services::delete_face(pool, id).await?;
            println!("Deleted face {}", id);
        }
    }
    Ok(())
}
