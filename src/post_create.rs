use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use spdlog::{debug, info, warn};

use crate::error::{ManageError, Result};
use crate::front_matter::{render_front_matter, INDEX_FILE_NAME};
use crate::slug::validate_slug;

pub fn post_folder_name(slug: &str, date: &NaiveDate) -> String {
    format!("{}-{}", date.format("%Y-%m-%d"), slug)
}

/// Starts a new post under `content_root` and returns its folder.
///
/// Example: slug `hello-world` on 2024-01-15 creates
/// `<content_root>/2024-01-15-hello-world/index.md`
pub fn new_post(content_root: &Path, slug: &str, date: NaiveDate) -> Result<PathBuf> {
    validate_slug(slug)?;

    let folder = content_root.join(post_folder_name(slug, &date));
    if fs::symlink_metadata(&folder).is_ok() {
        return Err(ManageError::AlreadyExists(folder));
    }

    fs::create_dir_all(content_root).map_err(|e| ManageError::io(content_root, e))?;
    claim_folder(&folder)?;
    debug!("Created directory {}", folder.display());

    write_post_file(&folder, &render_front_matter(slug))?;
    info!("Started post {} in {}", slug, folder.display());

    Ok(folder)
}

/// Non-recursive create of `folder`. When another creator got there first
/// (after the existence check) the filesystem answers AlreadyExists.
fn claim_folder(folder: &Path) -> Result<()> {
    match create_post_dir(folder) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(ManageError::AlreadyExists(folder.to_path_buf())),
        Err(e) => Err(ManageError::io(folder, e)),
    }
}

#[cfg(unix)]
fn create_post_dir(folder: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().mode(0o755).create(folder)
}

#[cfg(not(unix))]
fn create_post_dir(folder: &Path) -> io::Result<()> {
    fs::create_dir(folder)
}

/// Writes the index file, removing `folder` again if that fails.
/// `folder` must have been created by the caller.
fn write_post_file(folder: &Path, content: &str) -> Result<()> {
    let file_path = folder.join(INDEX_FILE_NAME);
    if let Err(e) = fs::write(&file_path, content) {
        warn!("Error writing {}: {}. Removing {}", file_path.display(), e, folder.display());
        if let Err(rm_err) = fs::remove_dir_all(folder) {
            warn!("Could not remove {}: {}", folder.display(), rm_err);
        }
        return Err(ManageError::io(file_path, e));
    }
    Ok(())
}
