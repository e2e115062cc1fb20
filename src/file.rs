// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::FeedError;

/// Replace `path` with `contents`. Goes through a sibling temp file and a
/// rename, so a failed write leaves any previous feed untouched.
pub fn write_feed(path: &Path, contents: &str) -> Result<PathBuf, FeedError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let tmp = temp_sibling(path);
    if let Err(e) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(FeedError::io(&tmp, e));
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        FeedError::io(path, e)
    })?;

    logf!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!("feed"));
    path.with_file_name(join!(".", &name, ".tmp"))
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), FeedError> {
    if dir.exists() && !dir.is_dir() {
        let msg = format!("Path exists but is not a directory: {}", dir.display());
        return Err(FeedError::io(dir, std::io::Error::other(msg)));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| FeedError::io(dir, e))?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
