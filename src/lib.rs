//! # `tilesheet`
//!
//! `tilesheet` slices a texture into a grid of fixed size cells for tilemaps and sprite animations.
//!
//! A [`TileSheet`](sheet::TileSheet) computes the pixel [`Region`](region::Region) of each cell
//! by index on first use and caches it. Textures are shared, never owned exclusively, and may be
//! looked up by name through an [`AssetRegistry`](assets::AssetRegistry). Decoding and drawing
//! are left to the host engine; the `images` feature adds support for the `image` crate.
pub mod assets;
pub mod config;
pub mod error;
pub mod region;
pub mod sheet;
pub mod texture;
pub(crate) mod units;
