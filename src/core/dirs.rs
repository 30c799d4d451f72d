//! Working directory, home directory and config file discovery.

use crate::core::error::{RainbowPathError, Result};
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "rainbowpath";
const CONFIG_FILE_NAME: &str = "rainbowpath.conf";
const SYSTEM_CONFIG_DIR: &str = "/etc/xdg";

pub fn get_working_directory() -> Result<PathBuf> {
    std::env::current_dir().map_err(RainbowPathError::WorkingDirectory)
}

pub fn get_home_directory() -> Result<PathBuf> {
    dirs::home_dir().ok_or(RainbowPathError::HomeDirectoryNotFound)
}

/// Raw bytes of a path, unchanged even when they are not valid UTF-8
#[cfg(unix)]
pub fn path_bytes(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
pub fn path_bytes(path: &Path) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}

/// Replace a leading home directory with `~`
pub fn compact_path(path: &[u8], home: &[u8]) -> Vec<u8> {
    match path.strip_prefix(home) {
        Some(rest) if !home.is_empty() && (rest.is_empty() || rest[0] == b'/') => {
            let mut compacted = Vec::with_capacity(rest.len() + 1);
            compacted.push(b'~');
            compacted.extend_from_slice(rest);
            compacted
        }
        _ => path.to_vec(),
    }
}

/// Drop every leading `/`
pub fn strip_leading(path: &[u8]) -> &[u8] {
    let start = path
        .iter()
        .position(|&byte| byte != b'/')
        .unwrap_or(path.len());
    &path[start..]
}

/// Non-empty environment variable
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Config file locations in lookup order
pub fn config_candidates(
    home: Option<&Path>,
    xdg_config_home: Option<&str>,
    xdg_config_dirs: Option<&str>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(home) = home {
        candidates.push(home.join(format!(".{CONFIG_FILE_NAME}")));
    }

    match (xdg_config_home, home) {
        (Some(config_home), _) => candidates.push(
            Path::new(config_home)
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        ),
        (None, Some(home)) => candidates.push(
            home.join(".config")
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        ),
        (None, None) => {}
    }

    if let Some(dirs) = xdg_config_dirs {
        candidates.extend(
            dirs.split(':')
                .filter(|dir| !dir.is_empty())
                .map(|dir| Path::new(dir).join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)),
        );
    }

    candidates.push(
        Path::new(SYSTEM_CONFIG_DIR)
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME),
    );
    candidates
}

/// First existing config file, if any
pub fn find_config_file() -> Option<PathBuf> {
    let home = dirs::home_dir();
    let xdg_config_home = env_value("XDG_CONFIG_HOME");
    let xdg_config_dirs = env_value("XDG_CONFIG_DIRS");
    config_candidates(
        home.as_deref(),
        xdg_config_home.as_deref(),
        xdg_config_dirs.as_deref(),
    )
    .into_iter()
    .find(|candidate| candidate.is_file())
}
