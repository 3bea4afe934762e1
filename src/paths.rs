use std::path::{Path, PathBuf};

const CLAUDE_DIR: &str = ".claude";
const SKILLS_SUBDIR: &str = "skills";
const SKILL_NAME: &str = "sdlc-autopilot";
const TEMPLATES_DIR: &str = "templates";

pub const SKILL_FILE: &str = "SKILL.md";

/// Returns the directory the skill installs into.
///
/// Project installs land under the working directory, global installs under
/// the home directory. Both inputs are passed in so resolution stays a pure
/// function.
pub fn target_dir(project: bool, home: &Path, cwd: &Path) -> PathBuf {
    let base = if project { cwd } else { home };
    base.join(CLAUDE_DIR).join(SKILLS_SUBDIR).join(SKILL_NAME)
}

/// Returns the bundled template location.
///
/// The package ships `templates/` one level above the directory holding the
/// binary, so the template is resolved relative to the executable path.
pub fn template_path(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    exe_dir
        .join("..")
        .join(TEMPLATES_DIR)
        .join(SKILLS_SUBDIR)
        .join(SKILL_NAME)
        .join(SKILL_FILE)
}

/// Returns the installed skill file path inside a target directory.
pub fn target_file(target_dir: &Path) -> PathBuf {
    target_dir.join(SKILL_FILE)
}
