// src/file/mod.rs
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

use crate::state::LoadedFile;

/// Read a plain-text file into a UTF-8 string for analysis. The file
/// dialog already filters to .txt, but paths can arrive by other routes.
pub fn load_text_file(path: &Path) -> Result<LoadedFile> {
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);
    if !is_txt {
        return Err(anyhow!("Not a .txt file: {}", path.display()));
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(LoadedFile { name, contents })
}
