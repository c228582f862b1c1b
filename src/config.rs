use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ManageError, Result};

pub const CFG_FILE_NAME: &str = "manage.toml";
pub const DEFAULT_CONTENT_DIR: &str = "content";
const CFG_DIR_NAME: &str = "blog-manage";

#[derive(Deserialize, Default, Debug)]
pub struct Paths {
    pub content_dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: LogLevel::Warn,
            log_to_console: true,
            location: None,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Directory holding the posts, made absolute.
    /// `cli_dir` (from the command line) wins over the configured one.
    pub fn content_root(&self, cli_dir: Option<&Path>) -> Result<PathBuf> {
        let dir = match (cli_dir, &self.paths.content_dir) {
            (Some(dir), _) => dir.to_path_buf(),
            (None, Some(dir)) => dir.clone(),
            (None, None) => PathBuf::from(DEFAULT_CONTENT_DIR),
        };

        let dir = parse_path(&dir)?;
        if dir.is_absolute() {
            return Ok(dir);
        }
        let cur_dir = env::current_dir().map_err(|e| ManageError::io(".", e))?;
        Ok(cur_dir.join(dir))
    }
}

/// Expands `${exe_dir}` and `${cur_dir}` at the start of a path
fn parse_path(path: &Path) -> Result<PathBuf> {
    let (var, base) = if path.starts_with("${exe_dir}") {
        let exe = env::current_exe().map_err(|e| ManageError::io(path, e))?;
        let exe_dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        ("${exe_dir}", exe_dir)
    } else if path.starts_with("${cur_dir}") {
        ("${cur_dir}", env::current_dir().map_err(|e| ManageError::io(path, e))?)
    } else {
        return Ok(path.to_path_buf());
    };

    // starts_with matched a whole component, so strip_prefix cannot fail
    let rest = path.strip_prefix(var).unwrap_or(path);
    Ok(base.join(rest))
}

pub fn read_config(cfg_path: &Path) -> Result<Config> {
    let cfg_content = fs::read_to_string(cfg_path).map_err(|e| {
        ManageError::Config(format!("Error opening configuration file {}: {}", cfg_path.display(), e))
    })?;

    toml::from_str::<Config>(&cfg_content).map_err(|e| {
        ManageError::Config(format!("Error parsing configuration file {}: {}", cfg_path.display(), e))
    })
}

fn find_config_path() -> Option<PathBuf> {
    if let Ok(cur_dir) = env::current_dir() {
        let path = cur_dir.join(CFG_FILE_NAME);
        if path.is_file() {
            return Some(path);
        }
    }

    let path = dirs::config_dir()?.join(CFG_DIR_NAME).join(CFG_FILE_NAME);
    if path.is_file() {
        return Some(path);
    }

    None
}

/// Reads `cfg_path` if given, otherwise the first config found in the
/// current dir or the user config dir. No config at all means defaults.
pub fn open_config(cfg_path: Option<&Path>) -> Result<Config> {
    match cfg_path {
        Some(path) => read_config(path),
        None => match find_config_path() {
            Some(path) => read_config(&path),
            None => Ok(Config::default()),
        },
    }
}
