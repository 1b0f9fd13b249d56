pub mod bmp;
pub mod cache;
pub mod mtl;
pub mod obj;

pub use cache::TextureCache;

use crate::error::AssetError;
use crate::model::Model;
use std::path::Path;

/// Loads an OBJ model from disk, resolving its `mtllib` relative to the
/// OBJ's containing folder. Texture files referenced by the model's draw
/// calls are not loaded here; pass each draw call's `texture_path` to a
/// [`TextureCache`] when it's time to render.
pub fn load_model(path: &Path) -> Result<Model, AssetError> {
    log::debug!("loading model {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut read_text = |p: &Path| -> Result<String, AssetError> {
        std::fs::read_to_string(p).map_err(|source| AssetError::Io { path: p.to_path_buf(), source })
    };

    obj::parse(path, &text, &mut read_text)
}
