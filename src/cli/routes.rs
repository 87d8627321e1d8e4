use sqlx::SqlitePool;

use crate::cli::args::{RouteAction, RoutesAction};
use crate::error::Result;
use crate::models::*;
use crate::output::{self, OutputFormat};
use crate::services;

/// Handle the routes subcommand of a media item (list or create)
pub async fn routes(
    pool: &SqlitePool,
    media_item_id: i64,
    action: Option<RoutesAction>,
    format: OutputFormat,
) -> Result<()> {
    match action {
        None => {
            let list = services::list_routes(pool, media_item_id).await?;
            println!("{}", output::format_routes(&list, format));
        }
        Some(RoutesAction::Create {
            name,
            side,
            description,
            poles,
            price,
            images,
        }) => {
            let route = services::create_route(
                pool,
                CreateRoute {
                    media_item_id,
                    route_name: name,
                    side_route: side,
                    description,
                    number_of_street_poles: poles,
                    price_per_street_pole: price,
                    images,
                },
            )
            .await?;
            println!("{}", output::format_route(&route, format));
        }
    }
    Ok(())
}

/// Handle the route command (update or delete)
pub async fn route(
    pool: &SqlitePool,
    id: i64,
    action: RouteAction,
    format: OutputFormat,
) -> Result<()> {
    match action {
        RouteAction::Update {
            name,
            side,
            description,
            poles,
            price,
            images,
        } => {
            let route = services::update_route(
                pool,
                id,
                UpdateRoute {
                    route_name: name,
                    side_route: side,
                    description,
                    number_of_street_poles: poles,
                    price_per_street_pole: price,
                    images,
                },
            )
            .await?;
            println!("{}", output::format_route(&route, format));
        }

        RouteAction::Delete => {
            services::delete_route(pool, id).await?;
            println!("Deleted route {}", id);
        }
    }
    Ok(())
}
