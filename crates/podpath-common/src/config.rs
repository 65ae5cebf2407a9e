//! Driver configuration model.

use serde::{Deserialize, Serialize};

/// Knobs that shape how the driver provisions host directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Accept payloads whose identity fields are missing or empty.
    ///
    /// Empty segments then vanish during path joining, so distinct pods
    /// can share a host directory. Off by default.
    pub allow_empty_segments: bool,
    /// Permission bits for created directories, before umask.
    pub dir_mode: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            allow_empty_segments: false,
            dir_mode: crate::constants::DEFAULT_DIR_MODE,
        }
    }
}

/// Parses an octal permission string such as `"0755"` or `"755"`.
///
/// # Errors
///
/// Returns [`crate::error::PodPathError::Config`] if the value is not
/// octal or sets bits outside `0o7777`.
pub fn parse_dir_mode(raw: &str) -> crate::error::Result<u32> {
    let digits = raw.trim().trim_start_matches("0o");
    match u32::from_str_radix(digits, 8) {
        Ok(mode) if mode <= 0o7777 => Ok(mode),
        _ => Err(crate::error::PodPathError::Config {
            message: format!("invalid directory mode {raw:?}"),
        }),
    }
}
