//! Module describing the source images a [`crate::sheet::TileSheet`] is cut from.
//!
//! The sheet never decodes or draws pixels itself. All it needs from a texture is its size,
//! which is what the [`Texture`] trait exposes. Enabling the `images` feature implements it
//! for the in-memory image types of the [`image`](https://docs.rs/image) crate.
#[cfg(feature = "images")]
mod images;
#[cfg(feature = "images")]
pub use images::*;

/// A read-only image with a size in pixels.
///
/// Dimensions are real-valued to match how engines usually report texture sizes.
/// Sheets only ever read them.
pub trait Texture {
    /// Width of the texture, in pixels.
    fn width(&self) -> f32;
    /// Height of the texture, in pixels.
    fn height(&self) -> f32;
}
