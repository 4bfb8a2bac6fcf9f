//! # File I/O Module
//!
//! Reads and writes the three JSON documents the engine works with:
//! - **Job files** (`.cut.json`): a [`Project`] with its units and results
//! - **Settings files**: a shop's [`CuttingSettings`]
//! - **Price tables**: a [`PriceTable`] for cost estimates
//!
//! Saves are atomic: the document is written to a `.tmp` sibling, synced to
//! disk, then renamed over the target, so an interrupted save never leaves a
//! half-written file. Job files carry a schema version that is checked on load.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cutlist_core::file_io::{load_project, save_project};
//! use cutlist_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Nour Kitchens", "K-118");
//! let path = Path::new("k118.cut.json");
//!
//! save_project(&project, path)?;
//! let loaded = load_project(path)?;
//! assert_eq!(loaded.meta.job_id, "K-118");
//! # Ok::<(), cutlist_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::{CalcError, CalcResult};
use crate::pricing::PriceTable;
use crate::project::{Project, SCHEMA_VERSION};
use crate::settings::CuttingSettings;

/// Save a project with atomic write semantics.
///
/// The save process:
/// 1. Serialize project to JSON
/// 2. Write to a temporary file (`.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename the temporary file over `path`
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    write_json_atomic(project, path)?;
    info!(path = %path.display(), units = project.unit_count(), "project saved");
    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let project: Project = read_json(path)?;
    validate_version(&project.meta.version)?;
    project.settings.validate()?;

    info!(path = %path.display(), units = project.unit_count(), "project loaded");
    Ok(project)
}

/// Save shop settings (atomic, like projects)
pub fn save_settings(settings: &CuttingSettings, path: &Path) -> CalcResult<()> {
    settings.validate()?;
    write_json_atomic(settings, path)?;
    info!(path = %path.display(), "settings saved");
    Ok(())
}

/// Load shop settings. Missing fields take their defaults; the result is
/// validated before it is returned.
pub fn load_settings(path: &Path) -> CalcResult<CuttingSettings> {
    let settings: CuttingSettings = read_json(path)?;
    settings.validate()?;
    debug!(path = %path.display(), method = ?settings.assembly_method, "settings loaded");
    Ok(settings)
}

/// Load and validate a price table
pub fn load_prices(path: &Path) -> CalcResult<PriceTable> {
    let table: PriceTable = read_json(path)?;
    table.validate()?;
    debug!(path = %path.display(), prices = table.prices.len(), "price table loaded");
    Ok(table)
}

/// Temporary sibling used during an atomic save
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(CalcError::serialization)?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // In 0.x a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
