use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Text written in place of an icon when rendering is unavailable
pub fn placeholder_contents(size: u32) -> String {
    format!("# Placeholder icon {}x{}\n", size, size)
}

/// Write the placeholder for `size` to `path`.
///
/// The file keeps the `.png` name of the icon it stands in for even though
/// its content is plain text.
pub fn write_placeholder(path: &Path, size: u32) -> Result<()> {
    fs::write(path, placeholder_contents(size))
        .with_context(|| format!("Failed to write placeholder {}", path.display()))
}
