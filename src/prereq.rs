use std::path::Path;

/// Checks for the optional cc-sdd companion tooling and returns advisory
/// warnings. Purely informational; the result never affects the install
/// outcome.
pub fn check_prerequisites(cwd: &Path) -> Vec<String> {
    let marker = cwd
        .join(".claude")
        .join("commands")
        .join("kiro")
        .join("spec-init.md");
    if marker.exists() {
        return Vec::new();
    }

    vec![
        [
            "cc-sdd not detected in this project.",
            "SDLC Autopilot works best with cc-sdd (Kiro-style specs for Claude Code).",
            "Install it with:  npx cc-sdd@latest --claude",
            "More info: https://github.com/gotalab/cc-sdd",
        ]
        .join("\n"),
    ]
}
