use crate::assets::mtl;
use crate::error::AssetError;
use crate::math::{Vec2, Vec3};
use crate::model::{DrawCall, Model};
use std::collections::HashMap;
use std::path::Path;

/// Parses a Wavefront OBJ file into a [`Model`], resolving any referenced
/// material library and deduplicating (position, texcoord, normal) triples
/// into the model's unique vertex table.
///
/// `read_text` is used both for the OBJ itself and, recursively, for the
/// `mtllib` it references, so tests can drive this with in-memory strings.
pub fn parse(
    path: &Path,
    text: &str,
    read_text: &mut dyn FnMut(&Path) -> Result<String, AssetError>,
) -> Result<Model, AssetError> {
    let containing_folder = path.parent().unwrap_or_else(|| Path::new(""));

    let mut raw_positions: Vec<Vec3> = Vec::new();
    let mut raw_texcoords: Vec<Vec2> = Vec::new();
    let mut raw_normals: Vec<Vec3> = Vec::new();

    let mut model = Model::default();
    let mut unique_index: HashMap<(i64, i64, i64), u32> = HashMap::new();

    let mut materials: Vec<mtl::Material> = Vec::new();
    let mut open_draw_call: Option<(String, usize)> = None;

    for (line_number, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let directive = match fields.next() {
            Some(d) => d,
            None => continue,
        };
        let rest: Vec<&str> = fields.collect();

        let malformed = || AssetError::ObjMalformed {
            path: path.to_path_buf(),
            line: line_number + 1,
            text: raw_line.to_string(),
        };

        match directive {
            "v" => raw_positions.push(parse_vec3(&rest).ok_or_else(malformed)?),
            "vt" => raw_texcoords.push(parse_vec2(&rest).ok_or_else(malformed)?),
            "vn" => raw_normals.push(parse_vec3(&rest).ok_or_else(malformed)?),
            "mtllib" => {
                let file_name = rest.first().ok_or_else(malformed)?;
                let mtl_path = containing_folder.join(file_name);
                let mtl_text = read_text(&mtl_path)?;
                materials = mtl::parse(&mtl_path, &mtl_text)?;
            }
            "usemtl" => {
                let name = rest.first().ok_or_else(malformed)?.to_string();
                close_draw_call(&mut model, &mut open_draw_call, path)?;
                let texture_path = resolve_material_texture(&materials, &name, path)?;
                model.draw_calls.push(DrawCall {
                    triangle_start: model.triangle_count(),
                    triangle_count: 0,
                    texture_path: Some(texture_path),
                });
                open_draw_call = Some((name, model.triangle_count()));
            }
            "f" => {
                if rest.len() != 3 {
                    return Err(malformed());
                }
                for token in &rest {
                    let triple = parse_face_vertex(token).ok_or_else(malformed)?;
                    let index = resolve_vertex(
                        triple,
                        &raw_positions,
                        &raw_texcoords,
                        &raw_normals,
                        &mut unique_index,
                        &mut model,
                        path,
                        line_number + 1,
                    )?;
                    model.triangles.push(index);
                }
            }
            _ => {}
        }
    }

    close_draw_call(&mut model, &mut open_draw_call, path)?;

    Ok(model)
}

fn close_draw_call(
    model: &mut Model,
    open_draw_call: &mut Option<(String, usize)>,
    _path: &Path,
) -> Result<(), AssetError> {
    if let Some((_, start)) = open_draw_call.take() {
        if let Some(last) = model.draw_calls.last_mut() {
            last.triangle_count = model.triangle_count() - start;
        }
    }
    Ok(())
}

fn resolve_material_texture(
    materials: &[mtl::Material],
    name: &str,
    path: &Path,
) -> Result<std::path::PathBuf, AssetError> {
    let material = materials
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| AssetError::MaterialNotFound {
            path: path.to_path_buf(),
            name: name.to_string(),
        })?;
    material
        .texture_path
        .clone()
        .ok_or_else(|| AssetError::MaterialMissingTexture {
            path: path.to_path_buf(),
            name: name.to_string(),
        })
}

#[allow(clippy::too_many_arguments)]
fn resolve_vertex(
    triple: (i64, i64, i64),
    raw_positions: &[Vec3],
    raw_texcoords: &[Vec2],
    raw_normals: &[Vec3],
    unique_index: &mut HashMap<(i64, i64, i64), u32>,
    model: &mut Model,
    path: &Path,
    line: usize,
) -> Result<u32, AssetError> {
    if let Some(&index) = unique_index.get(&triple) {
        return Ok(index);
    }

    let (pos_idx, tex_idx, norm_idx) = triple;
    let position = *indexed(raw_positions, pos_idx, "position", path, line)?;
    let texcoord = *indexed(raw_texcoords, tex_idx, "texcoord", path, line)?;
    let normal = *indexed(raw_normals, norm_idx, "normal", path, line)?;

    let new_index = model.vertices.len() as u32;
    model.vertices.push(position);
    model.texcoords.push(texcoord);
    model.normals.push(normal);
    unique_index.insert(triple, new_index);
    Ok(new_index)
}

fn indexed<'a, T>(
    items: &'a [T],
    one_based: i64,
    kind: &'static str,
    path: &Path,
    line: usize,
) -> Result<&'a T, AssetError> {
    if one_based < 1 {
        return Err(AssetError::ObjIndexOutOfRange { path: path.to_path_buf(), line, kind, index: one_based });
    }
    items
        .get(one_based as usize - 1)
        .ok_or(AssetError::ObjIndexOutOfRange { path: path.to_path_buf(), line, kind, index: one_based })
}

fn parse_vec3(fields: &[&str]) -> Option<Vec3> {
    if fields.len() < 3 {
        return None;
    }
    Some(Vec3::new(
        fields[0].parse().ok()?,
        fields[1].parse().ok()?,
        fields[2].parse().ok()?,
    ))
}

fn parse_vec2(fields: &[&str]) -> Option<Vec2> {
    if fields.len() < 2 {
        return None;
    }
    Some(Vec2::new(fields[0].parse().ok()?, fields[1].parse().ok()?))
}

/// Parses one `pos[/tex[/norm]]` face-vertex token. A component absent from
/// the token inherits the value of the previous component parsed within the
/// same token, matching the reference loader's cascading fallback.
fn parse_face_vertex(token: &str) -> Option<(i64, i64, i64)> {
    let mut parts = token.split('/');
    let pos: i64 = parts.next()?.parse().ok()?;

    let tex = match parts.next() {
        Some(s) if !s.is_empty() => s.parse().ok()?,
        _ => pos,
    };

    let norm = match parts.next() {
        Some(s) if !s.is_empty() => s.parse().ok()?,
        _ => tex,
    };

    Some((pos, tex, norm))
}
