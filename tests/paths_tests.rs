use std::path::Path;

use sdlc_autopilot::paths::{target_dir, target_file, template_path};

#[test]
fn resolves_global_target_under_home() {
    let dir = target_dir(false, Path::new("/home/dev"), Path::new("/work/project"));
    assert_eq!(dir, Path::new("/home/dev/.claude/skills/sdlc-autopilot"));
}

#[test]
fn resolves_project_target_under_cwd() {
    let dir = target_dir(true, Path::new("/home/dev"), Path::new("/work/project"));
    assert_eq!(dir, Path::new("/work/project/.claude/skills/sdlc-autopilot"));
}

#[test]
fn names_the_skill_file() {
    let file = target_file(Path::new("/tmp/skills/sdlc-autopilot"));
    assert_eq!(file, Path::new("/tmp/skills/sdlc-autopilot/SKILL.md"));
}

#[test]
fn locates_the_template_next_to_the_binary() {
    let template = template_path(Path::new("/opt/sdlc-autopilot/bin/sdlc-autopilot"));
    assert_eq!(
        template,
        Path::new("/opt/sdlc-autopilot/bin/../templates/skills/sdlc-autopilot/SKILL.md")
    );
}
