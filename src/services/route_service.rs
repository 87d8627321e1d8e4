use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db;
use crate::error::{AdmastError, Result};
use crate::models::*;
use crate::services::{conflict_on_unique, encode_images};

/// List the routes of a street pole, ordered by name.
pub async fn list_routes(pool: &SqlitePool, media_item_id: i64) -> Result<Vec<Route>> {
    let item = db::media_items::get(pool, media_item_id)
        .await?
        .ok_or(AdmastError::MediaItemNotFound(media_item_id))?;

    if !item.is_street_pole() {
        warn!(
            "listing routes of non-street-pole media item {} ({})",
            media_item_id, item.media_type
        );
    }

    db::routes::list_by_media_item(pool, media_item_id).await
}

/// Get a route by id
pub async fn get_route(pool: &SqlitePool, id: i64) -> Result<Route> {
    db::routes::get(pool, id)
        .await?
        .ok_or(AdmastError::RouteNotFound(id))
}

/// Create a route on an existing street pole
pub async fn create_route(pool: &SqlitePool, input: CreateRoute) -> Result<Route> {
    let item = db::media_items::get(pool, input.media_item_id)
        .await?
        .ok_or(AdmastError::MediaItemNotFound(input.media_item_id))?;

    if !item.is_street_pole() {
        return Err(AdmastError::InvalidArgument(format!(
            "media item {} is a {}; routes belong to street poles",
            item.id, item.media_type
        )));
    }

    let route = NewRoute {
        route_name: input.route_name,
        side_route: input.side_route,
        description: input.description,
        number_of_street_poles: input.number_of_street_poles,
        price_per_street_pole: input.price_per_street_pole,
        images: input.images,
    };
    validate_new_route(&route)?;

    if db::routes::find_by_name(pool, input.media_item_id, &route.route_name)
        .await?
        .is_some()
    {
        return Err(AdmastError::Conflict(format!(
            "route '{}' already exists on media item {}",
            route.route_name, input.media_item_id
        )));
    }

    let images = encode_images(&route.images)?;
    let now = chrono::Utc::now().to_rfc3339();
    let id = db::routes::create(pool, input.media_item_id, &route, images.as_deref(), &now)
        .await
        .map_err(|e| {
            conflict_on_unique(
                e,
                format!(
                    "route '{}' already exists on media item {}",
                    route.route_name, input.media_item_id
                ),
            )
        })?;

    info!(
        "created route '{}' on media item {}",
        route.route_name, input.media_item_id
    );
    get_route(pool, id).await
}

/// Update a route. Renaming checks uniqueness against the parent's other
/// routes.
pub async fn update_route(pool: &SqlitePool, id: i64, updates: UpdateRoute) -> Result<Route> {
    let mut route = get_route(pool, id).await?;

    if let Some(name) = updates.route_name {
        if name.trim().is_empty() {
            return Err(AdmastError::InvalidArgument(
                "route name cannot be empty".to_string(),
            ));
        }
        if name != route.route_name {
            let conflict = db::routes::find_by_name(pool, route.media_item_id, &name).await?;
            if conflict.is_some_and(|other| other.id != id) {
                return Err(AdmastError::Conflict(format!(
                    "route '{}' already exists on media item {}",
                    name, route.media_item_id
                )));
            }
        }
        route.route_name = name;
    }

    if let Some(poles) = updates.number_of_street_poles {
        if poles <= 0 {
            return Err(AdmastError::InvalidArgument(
                "number of street poles must be positive".to_string(),
            ));
        }
        route.number_of_street_poles = Some(poles);
    }

    if let Some(price) = updates.price_per_street_pole {
        if price < 0.0 {
            return Err(AdmastError::InvalidArgument(
                "price per street pole cannot be negative".to_string(),
            ));
        }
        route.price_per_street_pole = Some(price);
    }

    if let Some(side) = updates.side_route {
        route.side_route = Some(side);
    }
    if let Some(description) = updates.description {
        route.description = Some(description);
    }
    if let Some(images) = updates.images {
        route.images = encode_images(&images)?;
    }

    db::routes::update(pool, &route).await?;
    get_route(pool, id).await
}

/// Delete a route by id
pub async fn delete_route(pool: &SqlitePool, id: i64) -> Result<()> {
    let route = get_route(pool, id).await?;
    db::routes::delete(pool, id).await?;
    info!(
        "deleted route {} ('{}' on media item {})",
        id, route.route_name, route.media_item_id
    );
    Ok(())
}

pub(crate) fn validate_new_route(route: &NewRoute) -> Result<()> {
    if route.route_name.trim().is_empty() {
        return Err(AdmastError::InvalidArgument(
            "route name cannot be empty".to_string(),
        ));
    }
    if let Some(poles) = route.number_of_street_poles
        && poles <= 0
    {
        return Err(AdmastError::InvalidArgument(
            "number of street poles must be positive".to_string(),
        ));
    }
    if let Some(price) = route.price_per_street_pole
        && price < 0.0
    {
        return Err(AdmastError::InvalidArgument(
            "price per street pole cannot be negative".to_string(),
        ));
    }
    Ok(())
}
