//! Module for looking up textures by name.
use std::{collections::HashMap, sync::Arc};

use crate::error::{Error, Result};

/// A name to texture lookup, typically backed by the host engine's asset loader.
pub trait AssetRegistry {
    /// The texture type handed out by this registry.
    type Texture;

    /// Resolves `name` to a shared handle to its texture.
    ///
    /// Fails with [`Error::ResourceNotFound`] when nothing is registered under `name`.
    fn resolve(&self, name: &str) -> Result<Arc<Self::Texture>>;
}

/// An in-memory registry of already loaded textures, keyed by name.
#[derive(Debug)]
pub struct Assets<T> {
    textures: HashMap<String, Arc<T>>,
}

impl<T> Default for Assets<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Assets<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Registers `texture` under `name`, replacing any previous entry.
    /// Returns the shared handle now stored in the registry.
    pub fn insert(&mut self, name: impl Into<String>, texture: T) -> Arc<T> {
        let texture = Arc::new(texture);
        self.insert_shared(name, Arc::clone(&texture));
        texture
    }

    /// Registers an already shared texture handle under `name`.
    pub fn insert_shared(&mut self, name: impl Into<String>, texture: Arc<T>) {
        let name = name.into();
        if self.textures.insert(name.clone(), texture).is_some() {
            log::debug!("replaced texture `{name}`");
        }
    }

    /// Get a texture by its name.
    pub fn get(&self, name: &str) -> Option<&Arc<T>> {
        self.textures.get(name)
    }

    /// Checks whether a texture is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    /// The number of registered textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns `true` if no texture is registered.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl<T> AssetRegistry for Assets<T> {
    type Texture = T;

    fn resolve(&self, name: &str) -> Result<Arc<T>> {
        self.get(name)
            .cloned()
            .ok_or_else(|| Error::ResourceNotFound(name.to_owned()))
    }
}
