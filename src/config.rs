//! Serializable sheet descriptions.
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Describes a [`crate::sheet::TileSheet`] without holding its texture.
///
/// In RON:
///
/// ```text
/// (
///     texture: "dungeon",
///     cell_width: 16,
///     cell_height: 16,
/// )
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SheetDefinition {
    /// Name of the texture in the asset registry.
    pub texture: String,
    /// Width of a cell, in pixels.
    pub cell_width: i32,
    /// Height of a cell, in pixels.
    pub cell_height: i32,
}

impl SheetDefinition {
    /// Create a definition for cells of `cell_width` by `cell_height` pixels of `texture`.
    pub fn new(texture: impl Into<String>, cell_width: i32, cell_height: i32) -> Self {
        Self {
            texture: texture.into(),
            cell_width,
            cell_height,
        }
    }

    /// Parses a definition from RON text.
    pub fn from_ron(s: &str) -> Result<Self> {
        Ok(ron::from_str(s)?)
    }
}
