use tabled::{Table, Tabled};

use crate::models::*;

#[derive(Tabled)]
struct WorkspaceRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Workspace> for WorkspaceRow {
    fn from(w: &Workspace) -> Self {
        Self {
            id: w.id,
            name: truncate(&w.name, 30),
            email: w.email.clone().unwrap_or_else(|| "-".to_string()),
            location: w.location.clone().unwrap_or_else(|| "-".to_string()),
            created: format_date(&w.created_at),
        }
    }
}

pub fn format_workspace(workspace: &Workspace) -> String {
    let mut output = String::new();
    output.push_str(&format!("Workspace: {}\n", workspace.name));
    output.push_str(&format!("  ID:       {}\n", workspace.id));
    output.push_str(&format!(
        "  Email:    {}\n",
        workspace.email.as_deref().unwrap_or("-")
    ));
    if let Some(address) = &workspace.address {
        output.push_str(&format!("  Address:  {}\n", address));
    }
    if let Some(location) = &workspace.location {
        output.push_str(&format!("  Location: {}\n", location));
    }
    output.push_str(&format!("  Created:  {}\n", workspace.created_at));
    output.push_str(&format!("  Updated:  {}\n", workspace.updated_at));
    output
}

pub fn format_workspaces(workspaces: &[Workspace]) -> String {
    if workspaces.is_empty() {
        return "No workspaces found.\n".to_string();
    }
    let rows: Vec<WorkspaceRow> = workspaces.iter().map(WorkspaceRow::from).collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct MediaItemRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Display")]
    display_id: String,
    #[tabled(rename = "Type")]
    media_type: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Availability")]
    availability: String,
}

impl From<&MediaItem> for MediaItemRow {
    fn from(m: &MediaItem) -> Self {
        Self {
            id: m.id,
            display_id: m.display_id.clone(),
            media_type: m.media_type.clone(),
            name: truncate(&m.name, 40),
            location: m.location.clone().unwrap_or_else(|| "-".to_string()),
            availability: m.availability.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn format_media_item(item: &MediaItem) -> String {
    let mut output = String::new();
    output.push_str(&format!("Media item: {} ({})\n", item.name, item.display_id));
    output.push_str(&format!("  ID:           {}\n", item.id));
    output.push_str(&format!("  Workspace:    {}\n", item.workspace_id));
    output.push_str(&format!("  Type:         {}\n", item.media_type));
    if let Some(format) = &item.format {
        output.push_str(&format!("  Format:       {}\n", format));
    }
    if let Some(location) = &item.location {
        output.push_str(&format!("  Location:     {}\n", location));
    }
    if let (Some(lat), Some(lon)) = (item.latitude, item.longitude) {
        output.push_str(&format!("  Coordinates:  {}, {}\n", lat, lon));
    }
    if let Some(landmark) = &item.closest_landmark {
        output.push_str(&format!("  Landmark:     {}\n", landmark));
    }
    if let Some(availability) = &item.availability {
        output.push_str(&format!("  Availability: {}\n", availability));
    }
    output.push_str(&format!("  Created:      {}\n", item.created_at));
    output.push_str(&format!("  Updated:      {}\n", item.updated_at));
    output
}

pub fn format_media_items(items: &[MediaItem]) -> String {
    if items.is_empty() {
        return "No media items found.\n".to_string();
    }
    let rows: Vec<MediaItemRow> = items.iter().map(MediaItemRow::from).collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct FaceRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Face")]
    face_number: i64,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Availability")]
    availability: String,
    #[tabled(rename = "Rent")]
    rent: String,
}

impl From<&StaticMediaFace> for FaceRow {
    fn from(f: &StaticMediaFace) -> Self {
        Self {
            id: f.id,
            face_number: f.face_number,
            description: f
                .description
                .as_deref()
                .map(|d| truncate(d, 40))
                .unwrap_or_else(|| "-".to_string()),
            availability: f.availability.clone().unwrap_or_else(|| "-".to_string()),
            rent: f.rent.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn format_face(face: &StaticMediaFace) -> String {
    let mut output = String::new();
    output.push_str(&format!("Face #{}\n", face.face_number));
    output.push_str(&format!("  ID:           {}\n", face.id));
    output.push_str(&format!("  Media item:   {}\n", face.media_item_id));
    if let Some(description) = &face.description {
        output.push_str(&format!("  Description:  {}\n", description));
    }
    if let Some(availability) = &face.availability {
        output.push_str(&format!("  Availability: {}\n", availability));
    }
    if let Some(rent) = face.rent {
        output.push_str(&format!("  Rent:         {}\n", rent));
    }
    if let Ok(urls) = face.image_urls()
        && !urls.is_empty()
    {
        output.push_str(&format!("  Images:       {}\n", urls.join(", ")));
    }
    output
}

pub fn format_faces(faces: &[StaticMediaFace]) -> String {
    if faces.is_empty() {
        return "No static media faces found.\n".to_string();
    }
    let rows: Vec<FaceRow> = faces.iter().map(FaceRow::from).collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Route")]
    route_name: String,
    #[tabled(rename = "Side")]
    side_route: String,
    #[tabled(rename = "Poles")]
    poles: String,
    #[tabled(rename = "Price/pole")]
    price: String,
}

impl From<&Route> for RouteRow {
    fn from(r: &Route) -> Self {
        Self {
            id: r.id,
            route_name: truncate(&r.route_name, 30),
            side_route: r.side_route.clone().unwrap_or_else(|| "-".to_string()),
            poles: r
                .number_of_street_poles
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            price: r
                .price_per_street_pole
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn format_route(route: &Route) -> String {
    let mut output = String::new();
    output.push_str(&format!("Route: {}\n", route.route_name));
    output.push_str(&format!("  ID:         {}\n", route.id));
    output.push_str(&format!("  Media item: {}\n", route.media_item_id));
    if let Some(side) = &route.side_route {
        output.push_str(&format!("  Side:       {}\n", side));
    }
    if let Some(description) = &route.description {
        output.push_str(&format!("  Description: {}\n", description));
    }
    if let Some(poles) = route.number_of_street_poles {
        output.push_str(&format!("  Poles:      {}\n", poles));
    }
    if let Some(price) = route.price_per_street_pole {
        output.push_str(&format!("  Price/pole: {}\n", price));
    }
    if let Ok(urls) = route.image_urls()
        && !urls.is_empty()
    {
        output.push_str(&format!("  Images:     {}\n", urls.join(", ")));
    }
    output
}

pub fn format_routes(routes: &[Route]) -> String {
    if routes.is_empty() {
        return "No routes found.\n".to_string();
    }
    let rows: Vec<RouteRow> = routes.iter().map(RouteRow::from).collect();
    Table::new(rows).to_string()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", prefix)
    }
}

/// Show only the date part of an RFC 3339 timestamp
fn format_date(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        let long = truncate("a very long media item name", 10);
        assert_eq!(long.chars().count(), 10);
        assert!(long.ends_with('…'));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-01T12:30:00Z"), "2026-03-01");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }
}
