//! Module for [`Region`]s, i.e. rectangular views into a [`Texture`].
use std::{fmt, sync::Arc};

use crate::texture::Texture;

/// Anything the host engine can render as a textured quad.
///
/// Sheet cells are drawables, so they can be handed to sprites and animation frames directly.
pub trait Drawable {
    /// Width of the drawn area, in pixels.
    fn width(&self) -> f32;
    /// Height of the drawn area, in pixels.
    fn height(&self) -> f32;
    /// The area's position on its texture, normalized to the texture size.
    fn tex_coords(&self) -> TextureCoordinates;
}

/// Texture coordinates of a region.
///
/// The coordinates are normalized to a value between 0.0 and 1.0 for regions inside the texture:
///
/// * X axis: 0.0 is the left side and 1.0 is the right side.
/// * Y axis: 0.0 is the top and 1.0 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureCoordinates {
    /// Normalized left x coordinate
    pub left: f32,
    /// Normalized right x coordinate
    pub right: f32,
    /// Normalized top y coordinate
    pub top: f32,
    /// Normalized bottom y coordinate
    pub bottom: f32,
}

/// A rectangle within a texture, in source pixel coordinates.
///
/// The point (0, 0) represents the top left pixel of the texture. A region keeps a shared
/// handle to its texture, so cloning one is cheap and never copies pixel data.
///
/// Regions are not clipped: a rectangle may lie partially or entirely outside its texture.
pub struct Region<T> {
    texture: Arc<T>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl<T> Region<T> {
    /// Creates a new region of `texture` with its top left corner at (`x`, `y`).
    pub fn new(texture: Arc<T>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            texture,
            x,
            y,
            width,
            height,
        }
    }

    /// The texture this region points into.
    pub fn texture(&self) -> &Arc<T> {
        &self.texture
    }

    /// Horizontal pixel position of the left edge.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical pixel position of the top edge.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns the `(x, y)` pixel position of the top left corner.
    pub fn origin(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Returns the `(width, height)` of the region, in pixels.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl<T: Texture> Drawable for Region<T> {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn tex_coords(&self) -> TextureCoordinates {
        let texture_width = self.texture.width();
        let texture_height = self.texture.height();
        TextureCoordinates {
            left: self.x / texture_width,
            right: (self.x + self.width) / texture_width,
            top: self.y / texture_height,
            bottom: (self.y + self.height) / texture_height,
        }
    }
}

// Manual impls so that `T` needs to be neither `Clone` nor `Debug`.
impl<T> Clone for Region<T> {
    fn clone(&self) -> Self {
        Self {
            texture: Arc::clone(&self.texture),
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

impl<T> PartialEq for Region<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.texture, &other.texture)
            && self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
    }
}

impl<T> fmt::Debug for Region<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
