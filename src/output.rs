//! Console output
//!
//! User-facing lines go to stdout with a colored status icon. Structured
//! logs are separate and go through `tracing`.

use crossterm::{
    ExecutableCommand,
    style::{Color, Print, Stylize, style},
};
use std::io::stdout;

/// CLI theme colors
pub struct CliTheme;

impl CliTheme {
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const HINT: Color = Color::DarkGrey;
    pub const ACCENT: Color = Color::Cyan;
}

/// Print the scan start banner
pub fn print_scan_start(folder: &str) {
    let _ = stdout().execute(Print(style("→ ").with(CliTheme::ACCENT)));
    let _ = stdout().execute(Print(format!(
        "Scanning folder {} for JPG, JPEG, TIFF, and PNG files...\n",
        style(folder).bold()
    )));
}

/// Print a per-file result line
pub fn print_result(status_icon: &str, status_color: Color, file_name: &str, message: &str) {
    let _ = stdout().execute(Print("  "));
    let _ = stdout().execute(Print(style(status_icon).with(status_color).bold()));
    let _ = stdout().execute(Print(" "));
    let _ = stdout().execute(Print(style(file_name).italic()));
    let _ = stdout().execute(Print(" "));
    let _ = stdout().execute(Print(style(message).with(CliTheme::HINT)));
    let _ = stdout().execute(Print("\n"));
}

/// Print a file that was moved
pub fn print_moved(file_name: &str, subfolder: &str) {
    print_result("✓", CliTheme::SUCCESS, file_name, &format!("moved to {}", subfolder));
}

/// Print a file that would be moved in dry-run mode
pub fn print_would_move(file_name: &str, subfolder: &str) {
    print_result("~", CliTheme::ACCENT, file_name, &format!("would move to {}", subfolder));
}

/// Print a file without an EXIF creation date
pub fn print_no_timestamp(file_name: &str) {
    print_result("⊘", CliTheme::WARNING, file_name, "No EXIF creation date/time");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    let _ = stdout().execute(Print(style("⚠ ").with(CliTheme::WARNING).bold()));
    let _ = stdout().execute(Print(format!("{}\n", msg)));
}

/// Print an error message
pub fn print_error(msg: &str) {
    let _ = stdout().execute(Print(style("✗ ").with(CliTheme::ERROR).bold()));
    let _ = stdout().execute(Print(format!("{}\n", msg)));
}

/// Print the final summary line
pub fn print_summary(found: usize, actioned: usize, dry_run: bool) {
    let verb = if dry_run { "would be moved" } else { "were moved" };
    let _ = stdout().execute(Print(style("Scan complete! ").bold()));
    let _ = stdout().execute(Print(style(found.to_string()).with(CliTheme::ACCENT).bold()));
    let _ = stdout().execute(Print(" image files found, "));
    let _ = stdout().execute(Print(style(actioned.to_string()).with(CliTheme::SUCCESS).bold()));
    let _ = stdout().execute(Print(format!(
        " had a valid timestamp and {} into sub-folders.\n",
        verb
    )));
}
