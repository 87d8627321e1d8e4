// Re-export all types from admast-types
pub use admast_types::*;
