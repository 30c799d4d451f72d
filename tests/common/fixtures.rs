//! Predefined config files and expected escape sequences

#![allow(dead_code)]

use super::sandbox::*;

/// Two color path palette with a single separator style
pub const TWO_COLOR_CONFIG: &str = "\
# two alternating colors
palette = \"fg=1;fg=2\"
separator-palette = \"fg=7\"
";

/// Scenario: home config with compaction enabled
pub fn create_compact_home() -> anyhow::Result<Sandbox> {
    let sandbox = setup_sandbox()?;
    sandbox.write_home_config("compact = true\n")?;
    sandbox.create_dir("projects")?;
    Ok(sandbox)
}

/// Text wrapped in an extended foreground color and a reset
pub fn fg256(color: u8, text: &str) -> String {
    format!("\x1b[38;5;{color}m{text}\x1b[0m")
}

/// Raw bytes wrapped in an extended foreground color and a reset
pub fn fg256_bytes(color: u8, text: &[u8]) -> Vec<u8> {
    let mut styled = format!("\x1b[38;5;{color}m").into_bytes();
    styled.extend_from_slice(text);
    styled.extend_from_slice(b"\x1b[0m");
    styled
}

/// Text wrapped in a basic foreground color and a reset
pub fn fg8(color: u8, text: &str) -> String {
    format!("\x1b[3{color}m{text}\x1b[0m")
}
