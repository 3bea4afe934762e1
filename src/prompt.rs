use std::io::{self, BufRead, Write};
use std::path::Path;

/// Asks the operator whether an existing skill file should be replaced.
///
/// Blocks until one line arrives on stdin. The stdin lock lives only for the
/// duration of the read, so the handle is released on every return path; a
/// closed stream counts as a decline.
pub fn confirm_overwrite(target_path: &Path) -> io::Result<bool> {
    println!();
    println!(
        "SKILL.md already exists at {}",
        console::style(target_path.display()).bold()
    );
    print!("Overwrite? [y/N] ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let answer = read_answer(&mut stdin.lock())?;
    Ok(is_affirmative(&answer))
}

/// Reads a single line, returned verbatim. A closed stream reads as empty.
pub fn read_answer(input: &mut impl BufRead) -> io::Result<String> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer)
}

/// Accepts `y`/`yes` in any case; everything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
