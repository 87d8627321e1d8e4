use serde::{Deserialize, Serialize};

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// One advertisable face of a billboard, as returned by admast CLI JSON
/// output. `face_number` is unique within the parent media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct StaticMediaFace {
    pub id: i64,
    pub media_item_id: i64,
    pub face_number: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    /// JSON array of image URLs
    #[serde(default)]
    pub images: Option<String>,
    #[serde(default)]
    pub rent: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

impl StaticMediaFace {
    /// Decode the stored image-URL array. A stored value that is not a
    /// JSON string array is a data-integrity error, not an empty list.
    pub fn image_urls(&self) -> Result<Vec<String>, serde_json::Error> {
        match &self.images {
            Some(raw) => serde_json::from_str(raw),
            None => Ok(Vec::new()),
        }
    }
}

/// Face payload without a parent reference, used when creating faces
/// inline with a new billboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFace {
    pub face_number: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rent: Option<f64>,
}

/// Input for creating a face on an existing billboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateStaticMediaFace {
    pub media_item_id: i64,
    pub face_number: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rent: Option<f64>,
}

/// Partial update for a face.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStaticMediaFace {
    #[serde(default)]
    pub face_number: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub rent: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_face(images: Option<&str>) -> StaticMediaFace {
        StaticMediaFace {
            id: 1,
            media_item_id: 1,
            face_number: 1,
            description: None,
            availability: None,
            images: images.map(|s| s.to_string()),
            rent: None,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_image_urls_absent() {
        assert_eq!(make_face(None).image_urls().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_image_urls_decodes_array() {
        let face = make_face(Some(r#"["https://cdn.example/a.jpg","https://cdn.example/b.jpg"]"#));
        let urls = face.image_urls().unwrap();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], "https://cdn.example/a.jpg");
    }

    #[test]
    fn test_image_urls_malformed_is_error() {
        assert!(make_face(Some("not json")).image_urls().is_err());
        assert!(make_face(Some(r#"{"url":"x"}"#)).image_urls().is_err());
    }
}
