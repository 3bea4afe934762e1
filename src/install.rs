use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::paths;
use crate::ui;

/// Outcome of one installation attempt.
#[derive(Debug)]
pub struct InstallResult {
    pub succeeded: bool,
    pub target_path: PathBuf,
    pub warnings: Vec<String>,
}

/// Classified installation failures.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("template not found at {0}")]
    TemplateMissing(PathBuf),
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InstallError {
    /// Maps a filesystem error raised while writing under `target_dir`.
    pub fn from_io(err: io::Error, target_dir: &Path) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            InstallError::PermissionDenied(target_dir.to_path_buf())
        } else {
            InstallError::Io(err)
        }
    }
}

/// Checks whether a SKILL.md is already installed in the target directory.
pub fn existing_install(target_dir: &Path) -> bool {
    paths::target_file(target_dir).exists()
}

/// Copies the bundled template into the target directory.
///
/// The overwrite decision belongs to the caller; an existing file is replaced
/// unconditionally. Failures are reported here and folded into the result.
pub fn install(template_path: &Path, target_dir: &Path) -> InstallResult {
    let target_path = paths::target_file(target_dir);

    match try_install(template_path, target_dir) {
        Ok(()) => InstallResult {
            succeeded: true,
            target_path,
            warnings: Vec::new(),
        },
        Err(err) => {
            report_failure(&err);
            InstallResult {
                succeeded: false,
                target_path,
                warnings: Vec::new(),
            }
        }
    }
}

/// Performs the copy, classifying failures into `InstallError` kinds.
///
/// Directory creation is idempotent and the copy is a single file, so a
/// failed attempt leaves nothing to clean up.
pub fn try_install(template_path: &Path, target_dir: &Path) -> Result<(), InstallError> {
    if !template_path.exists() {
        return Err(InstallError::TemplateMissing(template_path.to_path_buf()));
    }

    std::fs::create_dir_all(target_dir).map_err(|err| InstallError::from_io(err, target_dir))?;
    std::fs::copy(template_path, paths::target_file(target_dir))
        .map_err(|err| InstallError::from_io(err, target_dir))?;

    Ok(())
}

fn report_failure(err: &InstallError) {
    match err {
        InstallError::TemplateMissing(path) => {
            ui::error(&format!("Error: template not found at {}", path.display()));
            ui::error("This is likely a packaging issue. Please reinstall the package.");
        }
        InstallError::PermissionDenied(dir) => {
            eprintln!();
            ui::error(&format!("Permission denied: {}", dir.display()));
            ui::error("Try one of the following:");
            ui::error("  sudo sdlc-autopilot");
            ui::error(&format!(
                "  Check ownership: ls -la {}",
                dir.parent().unwrap_or(dir).display()
            ));
            ui::error("  Or install into the project instead: sdlc-autopilot --project");
        }
        InstallError::Io(err) => {
            eprintln!();
            ui::error(&format!("Failed to install SKILL.md: {}", err));
        }
    }
}
