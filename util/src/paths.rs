use crate::config;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Web-facing prefix under which teaching-material uploads are served.
pub const TEACHING_MATERIALS_PREFIX: &str = "/Uploads/TeachingMaterials";

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Ensure the parent directory of a *file path* exists (no-op if none).
pub fn ensure_parent_dir<P: AsRef<Path>>(file_path: P) -> io::Result<()> {
    if let Some(parent) = file_path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Global storage root (absolute), from `config::upload_storage_root()`.
/// If relative in env, resolve against current_dir().
pub fn storage_root() -> PathBuf {
    let root = config::upload_storage_root();
    let p = PathBuf::from(root);
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Teaching-material directory: {STORAGE_ROOT}/Uploads/TeachingMaterials
pub fn teaching_materials_dir() -> PathBuf {
    storage_root().join("Uploads").join("TeachingMaterials")
}

/// Build a path to a stored teaching-material file (does not create).
pub fn teaching_material_path(filename: &str) -> PathBuf {
    teaching_materials_dir().join(filename)
}

/// Stored filename for a course's teaching material:
/// `course_{course_id}_{token}.{ext}` — the token keeps concurrent uploads
/// from colliding.
pub fn teaching_material_filename(course_id: i64, token: &str, extension: &str) -> String {
    format!("course_{course_id}_{token}.{extension}")
}

/// Web-relative path recorded on the course row for a stored filename.
pub fn teaching_material_web_path(filename: &str) -> String {
    format!("{TEACHING_MATERIALS_PREFIX}/{filename}")
}

/// Resolve a recorded web-relative path back to the on-disk location.
///
/// Returns `None` for paths that do not point under the teaching-material
/// prefix, so stale or foreign values can never escape the storage root.
pub fn resolve_web_path(web_path: &str) -> Option<PathBuf> {
    let filename = web_path
        .strip_prefix(TEACHING_MATERIALS_PREFIX)?
        .trim_start_matches('/');
    if filename.is_empty() || filename.contains('/') || filename.contains("..") {
        return None;
    }
    Some(teaching_material_path(filename))
}
