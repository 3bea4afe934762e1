pub mod cli;
mod error;
pub mod install;
pub mod paths;
pub mod prereq;
pub mod prompt;
pub mod ui;

pub use error::{AutopilotError, Result};

use std::path::Path;
use std::process::ExitCode;

use crate::install::InstallResult;

/// Runs the installer and returns the process exit code.
///
/// Exactly one of help, version, dry-run, or install executes per
/// invocation, checked in that order.
pub fn run() -> Result<ExitCode> {
    let options = match cli::parse() {
        Ok(options) => options,
        Err(code) => return Ok(code),
    };

    if options.help {
        cli::print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if options.version {
        println!("sdlc-autopilot v{}", cli::version());
        return Ok(ExitCode::SUCCESS);
    }

    let home = dirs::home_dir()
        .ok_or_else(|| AutopilotError::Message("cannot determine home directory".to_string()))?;
    let cwd = std::env::current_dir()?;
    let exe = std::env::current_exe()?;

    let target_dir = paths::target_dir(options.project, &home, &cwd);
    let template_path = paths::template_path(&exe);
    let target_file = paths::target_file(&target_dir);

    if options.dry_run {
        print_dry_run(&template_path, &target_dir, &target_file, &cwd);
        return Ok(ExitCode::SUCCESS);
    }

    if install::existing_install(&target_dir) && !options.yes {
        let confirmed = prompt::confirm_overwrite(&target_file)?;
        if !confirmed {
            ui::info("Installation cancelled.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let mut result = install::install(&template_path, &target_dir);
    result.warnings.extend(prereq::check_prerequisites(&cwd));
    print_result(&result);

    Ok(if result.succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints the preview report without touching the filesystem.
fn print_dry_run(template_path: &Path, target_dir: &Path, target_file: &Path, cwd: &Path) {
    ui::heading("Dry run: no files will be written.");
    println!();
    ui::info(&format!("Template source : {}", template_path.display()));
    ui::info(&format!("Target directory: {}", target_dir.display()));
    ui::info(&format!("Target file     : {}", target_file.display()));

    println!();
    if install::existing_install(target_dir) {
        ui::info("Note: SKILL.md already exists at the target path and would be overwritten.");
    } else {
        ui::info("SKILL.md does not yet exist at the target path. It would be created.");
    }

    let warnings = prereq::check_prerequisites(cwd);
    if !warnings.is_empty() {
        println!();
        for warning in &warnings {
            ui::warn(&format!("Warning: {}", warning));
        }
    }
}

fn print_result(result: &InstallResult) {
    if result.succeeded {
        println!();
        ui::success(&format!(
            "Installed SKILL.md to {}",
            result.target_path.display()
        ));
    }

    if !result.warnings.is_empty() {
        println!();
        for warning in &result.warnings {
            ui::warn(&format!("Warning: {}", warning));
        }
    }

    if result.succeeded {
        println!();
        ui::info("You're all set! Say \"SDLC\" in Claude Code to start.");
    }
}
