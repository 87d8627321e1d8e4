use serde::{Deserialize, Serialize};

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

use crate::display_id::{BILLBOARD_PREFIX, STREET_POLE_PREFIX};

/// Media item category. Fixed at creation; it decides which child entities
/// the item may own (static media faces for billboards, routes for street
/// poles) and the display-id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Billboard,
    StreetPole,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Billboard => "BILLBOARD",
            MediaType::StreetPole => "STREET_POLE",
        }
    }

    /// Display-id prefix for this category: `BB` or `SP`.
    pub fn prefix(&self) -> &'static str {
        match self {
            MediaType::Billboard => BILLBOARD_PREFIX,
            MediaType::StreetPole => STREET_POLE_PREFIX,
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "billboard" => Ok(MediaType::Billboard),
            "street_pole" | "streetpole" => Ok(MediaType::StreetPole),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Media item as returned by admast CLI JSON output.
///
/// A physical advertising location owned by exactly one workspace. The
/// `display_id` is unique within (workspace_id, media_type).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct MediaItem {
    pub id: i64,
    pub workspace_id: i64,
    pub media_type: String,
    pub display_id: String,
    pub name: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub closest_landmark: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl MediaItem {
    pub fn is_billboard(&self) -> bool {
        self.media_type == MediaType::Billboard.as_str()
    }

    pub fn is_street_pole(&self) -> bool {
        self.media_type == MediaType::StreetPole.as_str()
    }
}

/// Input for creating a media item. Children that do not match the
/// category are ignored by the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMediaItem {
    pub workspace_id: i64,
    pub media_type: MediaType,
    pub name: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub closest_landmark: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub faces: Vec<crate::face::NewFace>,
    #[serde(default)]
    pub routes: Vec<crate::route::NewRoute>,
}

impl CreateMediaItem {
    pub fn new(workspace_id: i64, media_type: MediaType, name: impl Into<String>) -> Self {
        Self {
            workspace_id,
            media_type,
            name: name.into(),
            format: None,
            location: None,
            latitude: None,
            longitude: None,
            closest_landmark: None,
            availability: None,
            faces: Vec::new(),
            routes: Vec::new(),
        }
    }
}

/// Partial update for a media item. Category and display id are immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMediaItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub closest_landmark: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}
