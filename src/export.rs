//! Snapshot file saving.

use crate::config::ExportConfig;
use crate::draw::SurfaceError;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Where and under which name snapshots are written.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save snapshots to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: "inkboard_%Y-%m-%d_%H%M%S".to_string(),
            format: "png".to_string(),
        }
    }
}

impl FileSaveConfig {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.save_directory),
            filename_template: config.filename_template.clone(),
            format: config.format.clone(),
        }
    }
}

pub(crate) fn default_save_directory() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Inkboard")
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path to the directory.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, SurfaceError> {
    if !directory.exists() {
        log::info!("Creating snapshot directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded image bytes into the configured directory.
///
/// Returns the path of the written file.
pub fn save_snapshot(image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, SurfaceError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let filename = generate_filename(&config.filename_template, &config.format);
    let file_path = directory.join(&filename);
    write_snapshot(image_data, &file_path)?;
    Ok(file_path)
}

/// Write encoded image bytes to an explicit path, user read/write only.
pub fn write_snapshot(image_data: &[u8], path: &Path) -> Result<(), SurfaceError> {
    log::debug!(
        "Writing snapshot to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );

    fs::write(path, image_data)?;

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
