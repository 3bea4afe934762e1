use std::fs;

use sdlc_autopilot::prereq::check_prerequisites;

#[test]
fn warns_when_cc_sdd_is_missing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let warnings = check_prerequisites(tmp.path());
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("cc-sdd not detected"));
    assert!(warnings[0].contains("npx cc-sdd@latest --claude"));
}

#[test]
fn stays_quiet_when_the_marker_is_present() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let marker_dir = tmp.path().join(".claude").join("commands").join("kiro");
    fs::create_dir_all(&marker_dir).expect("mkdir");
    fs::write(marker_dir.join("spec-init.md"), "# spec-init").expect("write");

    assert!(check_prerequisites(tmp.path()).is_empty());
}
