use std::process::ExitCode;

use clap::Parser;

use crate::ui;

/// CLI flags.
///
/// The built-in help/version flags are disabled so the orchestrator owns the
/// help -> version -> dry-run -> install priority order and the exit codes.
#[derive(Parser, Debug, Clone, Copy)]
#[command(
    name = "sdlc-autopilot",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Options {
    #[arg(long = "project")]
    pub project: bool,
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
    #[arg(long = "dry-run")]
    pub dry_run: bool,
    #[arg(short = 'v', long = "version")]
    pub version: bool,
    #[arg(short = 'h', long = "help")]
    pub help: bool,
}

/// Parses argv, or reports the failure and yields the exit code.
///
/// Unrecognized flags fail here, before any filesystem access.
pub fn parse() -> Result<Options, ExitCode> {
    match Options::try_parse() {
        Ok(options) => Ok(options),
        Err(err) => {
            err.print().ok();
            eprintln!("Run \"sdlc-autopilot --help\" for usage information.");
            Err(ExitCode::FAILURE)
        }
    }
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn print_help() {
    ui::heading(&format!("sdlc-autopilot v{}", version()));
    println!("Install the SDLC Autopilot skill for Claude Code.\n");
    ui::info("Usage: sdlc-autopilot [options]\n");
    ui::heading("Options");
    ui::list_item("--project      Install into the current project (.claude/skills/sdlc-autopilot/)");
    ui::info("                 instead of the global location (~/.claude/skills/sdlc-autopilot/)");
    ui::list_item("--yes, -y      Skip confirmation prompts (overwrite without asking)");
    ui::list_item("--dry-run      Show what would be installed without writing any files");
    ui::list_item("--version, -v  Print version and exit");
    ui::list_item("--help, -h     Show this help message and exit");
    println!();
    ui::heading("Examples");
    ui::list_item("sdlc-autopilot              Install globally (recommended)");
    ui::list_item("sdlc-autopilot --project    Install into current project only");
    ui::list_item("sdlc-autopilot --dry-run    Preview installation without writing");
    ui::list_item("sdlc-autopilot -y           Install globally, overwrite if exists");
}
