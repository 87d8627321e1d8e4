use crate::models::*;

pub fn format_workspace(workspace: &Workspace) -> String {
    serde_json::to_string_pretty(workspace).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_workspaces(workspaces: &[Workspace]) -> String {
    serde_json::to_string_pretty(workspaces).unwrap_or_else(|_| "[]".to_string())
}

pub fn format_media_item(item: &MediaItem) -> String {
    serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_media_items(items: &[MediaItem]) -> String {
    serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
}

pub fn format_face(face: &StaticMediaFace) -> String {
    serde_json::to_string_pretty(face).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_faces(faces: &[StaticMediaFace]) -> String {
    serde_json::to_string_pretty(faces).unwrap_or_else(|_| "[]".to_string())
}

pub fn format_route(route: &Route) -> String {
    serde_json::to_string_pretty(route).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_routes(routes: &[Route]) -> String {
    serde_json::to_string_pretty(routes).unwrap_or_else(|_| "[]".to_string())
}
