use serde::{Deserialize, Serialize};

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// A named grouping of street poles along a street-pole media item, as
/// returned by admast CLI JSON output. `route_name` is unique within the
/// parent media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct Route {
    pub id: i64,
    pub media_item_id: i64,
    pub route_name: String,
    #[serde(default)]
    pub side_route: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_of_street_poles: Option<i64>,
    #[serde(default)]
    pub price_per_street_pole: Option<f64>,
    /// JSON array of image URLs
    #[serde(default)]
    pub images: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Route {
    /// Decode the stored image-URL array. A stored value that is not a
    /// JSON string array is a data-integrity error, not an empty list.
    pub fn image_urls(&self) -> Result<Vec<String>, serde_json::Error> {
        match &self.images {
            Some(raw) => serde_json::from_str(raw),
            None => Ok(Vec::new()),
        }
    }
}

/// Route payload without a parent reference, used when creating routes
/// inline with a new street pole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRoute {
    pub route_name: String,
    #[serde(default)]
    pub side_route: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_of_street_poles: Option<i64>,
    #[serde(default)]
    pub price_per_street_pole: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Input for creating a route on an existing street pole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRoute {
    pub media_item_id: i64,
    pub route_name: String,
    #[serde(default)]
    pub side_route: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_of_street_poles: Option<i64>,
    #[serde(default)]
    pub price_per_street_pole: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update for a route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoute {
    #[serde(default)]
    pub route_name: Option<String>,
    #[serde(default)]
    pub side_route: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_of_street_poles: Option<i64>,
    #[serde(default)]
    pub price_per_street_pole: Option<f64>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}
