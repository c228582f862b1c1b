use std::fs;
use std::path::{Path, PathBuf};

use spdlog::{debug, info};

use crate::error::{ManageError, Result};
use crate::front_matter::INDEX_FILE_NAME;

#[derive(Debug, Clone, PartialEq)]
pub struct PostLocation {
    pub post_dir: PathBuf,
    pub post_file: PathBuf,
}

/// Checks that `path` is a post inside `content_root` and finds its index file.
///
/// `path` may be the post directory or the post file itself. Nothing is
/// modified yet.
pub fn publish_post(content_root: &Path, path: &Path, keep_date: bool) -> Result<PostLocation> {
    let path_str = path.display().to_string();

    if !path.exists() {
        return Err(ManageError::NotFound(path_str));
    }

    // Symlinks and `..` are resolved on both sides before comparing
    let resolved = fs::canonicalize(path).map_err(|e| ManageError::io(path, e))?;
    let root = match fs::canonicalize(content_root) {
        Ok(root) => root,
        Err(e) => {
            debug!("Content dir {} is not accessible: {}", content_root.display(), e);
            return Err(ManageError::InvalidPath(path_str));
        }
    };

    if !resolved.starts_with(&root) {
        return Err(ManageError::InvalidPath(path_str));
    }

    let location = if resolved.is_dir() {
        PostLocation {
            post_file: resolved.join(INDEX_FILE_NAME),
            post_dir: resolved,
        }
    } else {
        let post_dir = resolved.parent().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
        PostLocation {
            post_dir,
            post_file: resolved,
        }
    };

    debug!("Post dir={} file={} keep_date={}", location.post_dir.display(), location.post_file.display(), keep_date);
    // TODO: drop `draft = true` and set the date to today unless keep_date is set
    info!("Nothing to change in {}, publishing is not implemented yet", location.post_file.display());

    Ok(location)
}
