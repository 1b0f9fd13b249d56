use crate::assets::bmp;
use crate::error::AssetError;
use crate::texture::Texture;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An append-only, content-addressed cache of decoded textures, keyed by
/// the path they were loaded from.
///
/// Unlike a size-bounded LRU, entries are never evicted: a model viewer
/// loads a bounded set of textures once at startup, so load order (not
/// recency) is the only policy that matters here.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<PathBuf, Texture>,
}

impl TextureCache {
    pub fn new() -> TextureCache {
        TextureCache::default()
    }

    /// Returns the texture at `path`, decoding and inserting it on first
    /// access. The returned reference borrows from the cache itself, so a
    /// texture lives exactly as long as the cache that loaded it.
    pub fn get_or_load(&mut self, path: &Path) -> Result<&Texture, AssetError> {
        if !self.entries.contains_key(path) {
            log::debug!("loading texture {}", path.display());
            let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let texture = bmp::decode(path, &bytes)?;
            self.entries.insert(path.to_path_buf(), texture);
        }
        Ok(self.entries.get(path).expect("just inserted"))
    }

    pub fn get(&self, path: &Path) -> Option<&Texture> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
