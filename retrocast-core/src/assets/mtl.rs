use crate::error::AssetError;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct Material {
    pub name: String,
    pub texture_path: Option<PathBuf>,
}

/// Parses a Wavefront MTL file, keeping only the directives this loader
/// cares about (`newmtl`, `map_Kd`); everything else is ignored.
pub fn parse(path: &Path, text: &str) -> Result<Vec<Material>, AssetError> {
    let containing_folder = path.parent().unwrap_or_else(|| Path::new(""));
    let mut materials = Vec::new();

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

        match directive {
            "newmtl" => {
                let name = fields.next().ok_or_else(|| AssetError::MtlMalformed {
                    path: path.to_path_buf(),
                    line: line_number + 1,
                    text: raw_line.to_string(),
                })?;
                materials.push(Material { name: name.to_string(), texture_path: None });
            }
            "map_Kd" => {
                let file_name = fields.next().ok_or_else(|| AssetError::MtlMalformed {
                    path: path.to_path_buf(),
                    line: line_number + 1,
                    text: raw_line.to_string(),
                })?;
                if let Some(current) = materials.last_mut() {
                    current.texture_path = Some(containing_folder.join(file_name));
                }
            }
            _ => {}
        }
    }

    Ok(materials)
}
