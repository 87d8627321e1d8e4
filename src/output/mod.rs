pub mod json;
pub mod table;

use crate::models::*;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

fn to_yaml<T: serde::Serialize>(value: &T) -> String {
    serde_yaml::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_workspace(workspace: &Workspace, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => table::format_workspace(workspace),
        OutputFormat::Json => json::format_workspace(workspace),
        OutputFormat::Yaml => to_yaml(workspace),
    }
}

pub fn format_workspaces(workspaces: &[Workspace], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => table::format_workspaces(workspaces),
        OutputFormat::Json => json::format_workspaces(workspaces),
        OutputFormat::Yaml => to_yaml(&workspaces),
    }
}

pub fn format_media_item(item: &MediaItem, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => table::format_media_item(item),
        OutputFormat::Json => json::format_media_item(item),
        OutputFormat::Yaml => to_yaml(item),
    }
}

pub fn format_media_items(items: &[MediaItem], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => table::format_media_items(items),
        OutputFormat::Json => json::format_media_items(items),
        OutputFormat::Yaml => to_yaml(&items),
    }
}

pub fn format_face(face: &StaticMediaFace, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => table::format_face(face),
        OutputFormat::Json => json::format_face(face),
        OutputFormat::Yaml => to_yaml(face),
    }
}

pub fn format_faces(faces: &[StaticMediaFace], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => table::format_faces(faces),
        OutputFormat::Json => json::format_faces(faces),
        OutputFormat::Yaml => to_yaml(&faces),
    }
}

pub fn format_route(route: &Route, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => table::format_route(route),
        OutputFormat::Json => json::format_route(route),
        OutputFormat::Yaml => to_yaml(route),
    }
}

pub fn format_routes(routes: &[Route], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => table::format_routes(routes),
        OutputFormat::Json => json::format_routes(routes),
        OutputFormat::Yaml => to_yaml(&routes),
    }
}
