use std::process::ExitCode;

fn main() -> ExitCode {
    match sdlc_autopilot::run() {
        Ok(code) => code,
        Err(err) => {
            sdlc_autopilot::ui::error(&format!("Unexpected error: {}", err));
            ExitCode::FAILURE
        }
    }
}
