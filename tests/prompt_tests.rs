use std::io::Cursor;

use sdlc_autopilot::prompt::{is_affirmative, read_answer};

#[test]
fn accepts_yes_in_any_case() {
    assert!(is_affirmative("y"));
    assert!(is_affirmative("Y"));
    assert!(is_affirmative("yes"));
    assert!(is_affirmative("YES"));
    assert!(is_affirmative("  yes \n"));
}

#[test]
fn declines_everything_else() {
    assert!(!is_affirmative(""));
    assert!(!is_affirmative("\n"));
    assert!(!is_affirmative("n"));
    assert!(!is_affirmative("no"));
    assert!(!is_affirmative("yep"));
    assert!(!is_affirmative("y e s"));
}

#[test]
fn reads_a_single_line() {
    let mut input = Cursor::new("yes\nleftover\n");
    let answer = read_answer(&mut input).expect("read");
    assert_eq!(answer, "yes\n");
}

#[test]
fn closed_stream_reads_as_a_decline() {
    let mut input = Cursor::new("");
    let answer = read_answer(&mut input).expect("read");
    assert!(answer.is_empty());
    assert!(!is_affirmative(&answer));
}
