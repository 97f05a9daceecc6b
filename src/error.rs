//! Error types returned when building a [`crate::sheet::TileSheet`].
use thiserror::Error;

/// Errors raised while resolving or describing a sheet.
///
/// Cell lookups never fail; only the constructors that go through an
/// [`AssetRegistry`](crate::assets::AssetRegistry) or parse a
/// [`SheetDefinition`](crate::config::SheetDefinition) return these.
#[derive(Debug, Error)]
pub enum Error {
    /// No texture is registered under the given name.
    #[error("no texture registered under `{0}`")]
    ResourceNotFound(String),
    /// A sheet definition could not be parsed.
    #[error("malformed sheet definition: {0}")]
    Definition(#[from] ron::error::SpannedError),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
