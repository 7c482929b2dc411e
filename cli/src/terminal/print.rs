use std::io::{self, Write};

use arubacheck_core::report::Report;
use arubacheck_core::threshold::Severity;
use colored::*;
use tracing::trace;

/// Writes the check result to `out` and returns the exit code to leave with.
/// A result that cannot be written is `UNKNOWN`, whatever it said.
pub fn emit<W: Write>(report: &Report, out: &mut W) -> u8 {
    match write_report(report, out) {
        Ok(()) => {
            trace!("{} {}", severity_tag(report.severity()), "result written".dimmed());
            report.exit_code()
        }
        Err(err) => {
            error(&format!("cannot write check result: {err}"));
            Severity::Unknown.exit_code()
        }
    }
}

/// stdout is the only thing the monitoring framework reads.
pub fn stdout(report: &Report) -> u8 {
    emit(report, &mut io::stdout().lock())
}

fn write_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out, "{report}")?;
    out.flush()
}

/// Problems outside the check itself are shown to a human on stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", severity_tag(Severity::Unknown), message.trim_end());
}

fn severity_tag(severity: Severity) -> ColoredString {
    let tag: String = format!("[{severity}]");
    match severity {
        Severity::Ok => tag.green().bold(),
        Severity::Warning => tag.yellow().bold(),
        Severity::Critical => tag.red().bold(),
        Severity::Unknown => tag.magenta().bold(),
    }
}
