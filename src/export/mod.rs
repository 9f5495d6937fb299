// src/export/mod.rs
use anyhow::{Context, Result};
use std::path::Path;

use crate::state::session::Session;

/// Write the session's records to a CSV report: one row per analysis,
/// header from the record fields.
pub fn write_csv(session: &Session, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for record in session.records() {
        writer.serialize(record)?;
    }

    writer.flush().context("Failed to write CSV export")?;
    Ok(())
}
