use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors from loading a model, material, or texture off disk.
///
/// Rasterizer-stage failures (off-screen vertices, degenerate triangles,
/// texture coordinates out of range) are never fatal and never surface an
/// error type; they are silently skipped by the caller.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: not a BMP file (bad magic)")]
    BmpBadMagic { path: PathBuf },

    #[error("{path}: unsupported BMP bit depth {bpp} (only 24-bit is supported)")]
    BmpUnsupportedDepth { path: PathBuf, bpp: u16 },

    #[error("{path}: BMP pixel data truncated, expected {expected} bytes, found {found}")]
    BmpTruncated {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("{path}:{line}: malformed OBJ directive: {text}")]
    ObjMalformed {
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error("{path}:{line}: face references out-of-range {kind} index {index}")]
    ObjIndexOutOfRange {
        path: PathBuf,
        line: usize,
        kind: &'static str,
        index: i64,
    },

    #[error("{path}: material '{name}' referenced by usemtl but not defined")]
    MaterialNotFound { path: PathBuf, name: String },

    #[error("{path}: material '{name}' has no map_Kd texture")]
    MaterialMissingTexture { path: PathBuf, name: String },

    #[error("{path}:{line}: malformed MTL directive: {text}")]
    MtlMalformed {
        path: PathBuf,
        line: usize,
        text: String,
    },
}
