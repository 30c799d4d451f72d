//! Isolated environment management
//!
//! Every test runs the binary with its own home directory and XDG locations so
//! a config file on the developer machine never leaks into the results.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Temporary home directory. The TempDir must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct Sandbox {
    pub temp_dir: TempDir,
    pub home: PathBuf,
}

impl Sandbox {
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Write `~/.rainbowpath.conf`
    pub fn write_home_config(&self, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.home.join(".rainbowpath.conf");
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `$XDG_CONFIG_HOME/rainbowpath/rainbowpath.conf`
    pub fn write_xdg_config(&self, content: &str) -> anyhow::Result<PathBuf> {
        let dir = self.xdg_config_home().join("rainbowpath");
        fs::create_dir_all(&dir)?;
        let path = dir.join("rainbowpath.conf");
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Create a directory below the home directory
    pub fn create_dir(&self, relative: &str) -> anyhow::Result<PathBuf> {
        let path = self.home.join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Create a directory whose name is arbitrary bytes, not necessarily UTF-8
    #[cfg(unix)]
    pub fn create_raw_dir(&self, name: &[u8]) -> anyhow::Result<PathBuf> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        let path = self.home.join(OsStr::from_bytes(name));
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    pub fn xdg_config_home(&self) -> PathBuf {
        self.home.join(".config")
    }

    /// The binary with a 256 color terminal and the sandboxed environment
    pub fn command(&self) -> anyhow::Result<Command> {
        self.command_with_term("xterm-256color")
    }

    pub fn command_with_term(&self, term: &str) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("rainbowpath")?;
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.xdg_config_home())
            .env("XDG_CONFIG_DIRS", self.home.join("xdg-dirs"))
            .env("TERM", term)
            .env_remove("COLORTERM")
            .env_remove("RUST_LOG")
            .current_dir(&self.home);
        Ok(cmd)
    }
}

/// Sets up an empty sandboxed home directory
pub fn setup_sandbox() -> anyhow::Result<Sandbox> {
    let temp_dir = TempDir::new()?;
    let home = temp_dir.path().canonicalize()?;
    Ok(Sandbox { temp_dir, home })
}
