use retrocast_core::assets::bmp;
use retrocast_core::error::AssetError;
use std::path::Path;

/// Builds a minimal, unpadded 24-bit BMP byte buffer: a 2x1 image, one red
/// pixel and one green pixel, stored BGR as a real Windows BMP would.
fn two_pixel_bmp() -> Vec<u8> {
    let mut bytes = vec![0u8; 54];
    bytes[0] = 0x42; // 'B'
    bytes[1] = 0x4D; // 'M'
    bytes[10..14].copy_from_slice(&54u32.to_le_bytes());
    bytes[18..22].copy_from_slice(&2i32.to_le_bytes());
    bytes[22..26].copy_from_slice(&1i32.to_le_bytes());
    bytes[28..30].copy_from_slice(&24u16.to_le_bytes());

    // red pixel (B,G,R) then green pixel
    bytes.extend_from_slice(&[0, 0, 255]);
    bytes.extend_from_slice(&[0, 255, 0]);
    bytes
}

#[test]
fn decodes_dimensions_and_raw_pixel_bytes() {
    let bytes = two_pixel_bmp();
    let texture = bmp::decode(Path::new("two.bmp"), &bytes).expect("decodes");
    assert_eq!(texture.width, 2);
    assert_eq!(texture.height, 1);
}

#[test]
fn rejects_bad_magic() {
    let mut bytes = two_pixel_bmp();
    bytes[0] = 0;
    let err = bmp::decode(Path::new("bad.bmp"), &bytes).unwrap_err();
    assert!(matches!(err, AssetError::BmpBadMagic { .. }));
}

#[test]
fn rejects_unsupported_bit_depth() {
    let mut bytes = two_pixel_bmp();
    bytes[28..30].copy_from_slice(&32u16.to_le_bytes());
    let err = bmp::decode(Path::new("32bit.bmp"), &bytes).unwrap_err();
    assert!(matches!(err, AssetError::BmpUnsupportedDepth { bpp: 32, .. }));
}

#[test]
fn rejects_truncated_pixel_data() {
    let mut bytes = two_pixel_bmp();
    bytes.truncate(55);
    let err = bmp::decode(Path::new("short.bmp"), &bytes).unwrap_err();
    assert!(matches!(err, AssetError::BmpTruncated { .. }));
}
