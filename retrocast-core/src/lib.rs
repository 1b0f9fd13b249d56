//! CPU-only triangle rasterizer core: math kernel, perspective projection,
//! an edge-tracing scanline rasterizer, and an OBJ/MTL/BMP asset loader.
//!
//! This crate draws nothing to a window; [`Renderer::present`] hands back a
//! raw RGB byte buffer for a host shell to blit.

pub mod assets;
pub mod error;
pub mod math;
pub mod model;
pub mod projection;
pub mod renderer;
pub mod scene;
pub mod texture;

pub use error::AssetError;
pub use model::{DrawCall, Model};
pub use renderer::Renderer;
pub use texture::Texture;
