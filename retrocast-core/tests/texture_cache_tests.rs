use retrocast_core::assets::TextureCache;
use std::io::Write;

fn write_one_pixel_bmp(path: &std::path::Path) {
    let mut bytes = vec![0u8; 54];
    bytes[0] = 0x42;
    bytes[1] = 0x4D;
    bytes[10..14].copy_from_slice(&54u32.to_le_bytes());
    bytes[18..22].copy_from_slice(&1i32.to_le_bytes());
    bytes[22..26].copy_from_slice(&1i32.to_le_bytes());
    bytes[28..30].copy_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&[10, 20, 30]);

    let mut file = std::fs::File::create(path).expect("create fixture");
    file.write_all(&bytes).expect("write fixture");
}

#[test]
fn repeated_lookups_return_the_same_decoded_texture_without_reloading() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("swatch.bmp");
    write_one_pixel_bmp(&path);

    let mut cache = TextureCache::new();
    assert_eq!(cache.len(), 0);

    let first = cache.get_or_load(&path).expect("loads").width;
    assert_eq!(cache.len(), 1);

    // Removing the backing file proves the second lookup is served from the
    // cache rather than re-reading disk.
    std::fs::remove_file(&path).expect("remove fixture");

    let second = cache.get_or_load(&path).expect("still cached").width;
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
}

#[test]
fn distinct_paths_are_cached_as_distinct_entries() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a.bmp");
    let b = dir.path().join("b.bmp");
    write_one_pixel_bmp(&a);
    write_one_pixel_bmp(&b);

    let mut cache = TextureCache::new();
    cache.get_or_load(&a).expect("loads a");
    cache.get_or_load(&b).expect("loads b");
    assert_eq!(cache.len(), 2);
}
