use retrocast_core::assets::obj;
use retrocast_core::error::AssetError;
use std::path::Path;

fn no_mtllib(_: &Path) -> Result<String, AssetError> {
    panic!("this fixture has no mtllib directive")
}

#[test]
fn shared_position_with_different_texcoord_is_a_distinct_vertex() {
    let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
vt 0 0
vt 1 1
vn 0 0 1
f 1/1/1 2/1/1 3/1/1
f 1/1/1 2/2/1 4/1/1
";

    let mut read_text = no_mtllib;
    let model = obj::parse(Path::new("shared.obj"), text, &mut read_text).expect("parses");

    // Triples: (1,1,1) (2,1,1) (3,1,1) (1,1,1)-dup (2,2,1) (4,1,1) -> 5 unique.
    assert_eq!(model.vertices.len(), 5);
    assert_eq!(model.triangle_count(), 2);
}

#[test]
fn usemtl_spans_close_on_the_next_usemtl_and_at_end_of_file() {
    let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
vn 0 0 1
vt 0 0
mtllib materials.mtl
usemtl first
f 1/1/1 2/1/1 3/1/1
usemtl second
f 1/1/1 3/1/1 4/1/1
";

    let mut read_text = |_: &Path| -> Result<String, AssetError> {
        Ok("newmtl first\nmap_Kd a.bmp\nnewmtl second\nmap_Kd b.bmp\n".to_string())
    };

    let model = obj::parse(Path::new("dir/model.obj"), text, &mut read_text).expect("parses");

    assert_eq!(model.draw_calls.len(), 2);
    assert_eq!(model.draw_calls[0].triangle_start, 0);
    assert_eq!(model.draw_calls[0].triangle_count, 1);
    assert_eq!(model.draw_calls[1].triangle_start, 1);
    assert_eq!(model.draw_calls[1].triangle_count, 1);
    assert_eq!(model.draw_calls[0].texture_path.as_deref(), Some(Path::new("dir/a.bmp")));
    assert_eq!(model.draw_calls[1].texture_path.as_deref(), Some(Path::new("dir/b.bmp")));
}

#[test]
fn usemtl_referencing_unknown_material_is_a_load_error() {
    let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
vt 0 0
mtllib materials.mtl
usemtl missing
f 1/1/1 2/1/1 3/1/1
";
    let mut read_text = |_: &Path| -> Result<String, AssetError> { Ok(String::new()) };

    let err = obj::parse(Path::new("model.obj"), text, &mut read_text).unwrap_err();
    assert!(matches!(err, AssetError::MaterialNotFound { .. }));
}

#[test]
fn face_vertex_missing_components_inherit_the_previous_field() {
    let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
vn 0 0 1
vn 0 0 1
f 1 2 3
";
    let mut read_text = no_mtllib;
    let model = obj::parse(Path::new("bare.obj"), text, &mut read_text).expect("parses");

    // A bare "2" (no slash) should resolve its texcoord and normal index to
    // 2 as well, not fall back to index 1.
    assert_eq!(model.vertices.len(), 3);
    assert_eq!(model.texcoords.len(), 3);
    assert_eq!(model.normals.len(), 3);
}
