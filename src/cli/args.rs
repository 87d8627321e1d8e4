use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// admast - A CLI inventory hub for out-of-home advertising
#[derive(Parser)]
#[command(name = "admast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: CliOutputFormat,

    /// JSON output (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Store path override
    #[arg(long, global = true, env = "ADMAST_HOME")]
    pub home: Option<PathBuf>,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format.into()
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum CliOutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new store
    Init,

    /// List all workspaces or create a new one
    Workspaces {
        #[command(subcommand)]
        action: Option<WorkspacesAction>,
    },

    /// Work with a specific workspace
    Workspace {
        /// Workspace ID
        id: i64,

        #[command(subcommand)]
        action: Option<WorkspaceAction>,
    },

    /// List the media items of a workspace or create a new one
    Items {
        /// Workspace ID
        workspace_id: i64,

        #[command(subcommand)]
        action: Option<ItemsAction>,
    },

    /// Work with a specific media item
    Item {
        /// Media item ID
        id: i64,

        #[command(subcommand)]
        action: Option<ItemAction>,
    },

    /// Work with a specific static media face
    Face {
        /// Face ID
        id: i64,

        #[command(subcommand)]
        action: FaceAction,
    },

    /// Work with a specific route
    Route {
        /// Route ID
        id: i64,

        #[command(subcommand)]
        action: RouteAction,
    },

    /// Replace the store contents with a JSON fixture
    Seed {
        /// Path to the fixture file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum WorkspacesAction {
    /// Create a new workspace
    Create {
        /// Workspace name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Postal address
        #[arg(long)]
        address: Option<String>,

        /// Location label
        #[arg(long)]
        location: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum WorkspaceAction {
    /// Update workspace fields
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        location: Option<String>,
    },

    /// Delete the workspace (must own no media items)
    Delete,

    /// List the workspace's media items
    Items,
}

#[derive(Subcommand)]
pub enum ItemsAction {
    /// Create a new media item in the workspace
    Create {
        /// Category: billboard or street-pole
        #[arg(long = "type")]
        media_type: String,

        /// Media item name
        #[arg(long)]
        name: String,

        /// Physical format (e.g. 48-sheet)
        #[arg(long)]
        format: Option<String>,

        /// Location description
        #[arg(long)]
        location: Option<String>,

        /// Latitude in decimal degrees
        #[arg(long)]
        latitude: Option<f64>,

        /// Longitude in decimal degrees
        #[arg(long)]
        longitude: Option<f64>,

        /// Closest landmark
        #[arg(long)]
        landmark: Option<String>,

        /// Availability label
        #[arg(long)]
        availability: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ItemAction {
    /// Update media item fields (category and display id are fixed)
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        format: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        latitude: Option<f64>,

        #[arg(long)]
        longitude: Option<f64>,

        #[arg(long)]
        landmark: Option<String>,

        #[arg(long)]
        availability: Option<String>,
    },

    /// Delete the media item and its faces/routes
    Delete,

    /// List the item's static media faces or create one
    Faces {
        #[command(subcommand)]
        action: Option<FacesAction>,
    },

    /// List the item's routes or create one
    Routes {
        #[command(subcommand)]
        action: Option<RoutesAction>,
    },
}

#[derive(Subcommand)]
pub enum FacesAction {
    /// Create a face on this billboard
    Create {
        /// Face number (unique within the billboard)
        #[arg(long)]
        number: i64,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        availability: Option<String>,

        /// Image URL (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,

        #[arg(long)]
        rent: Option<f64>,
    },
}

#[derive(Subcommand)]
pub enum RoutesAction {
    /// Create a route on this street pole
    Create {
        /// Route name (unique within the street pole)
        #[arg(long)]
        name: String,

        #[arg(long)]
        side: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Number of street poles along the route
        #[arg(long)]
        poles: Option<i64>,

        /// Price per street pole
        #[arg(long)]
        price: Option<f64>,

        /// Image URL (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum FaceAction {
    /// Update face fields
    Update {
        #[arg(long)]
        number: Option<i64>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        availability: Option<String>,

        /// Replace the image URL list (repeatable)
        #[arg(long = "image")]
        images: Option<Vec<String>>,

        #[arg(long)]
        rent: Option<f64>,
    },

    /// Delete the face
    Delete,
}

#[derive(Subcommand)]
pub enum RouteAction {
    /// Update route fields
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        side: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        poles: Option<i64>,

        #[arg(long)]
        price: Option<f64>,

        /// Replace the image URL list (repeatable)
        #[arg(long = "image")]
        images: Option<Vec<String>>,
    },

    /// Delete the route
    Delete,
}
