mod commands;
mod terminal;

use std::process::ExitCode;

use arubacheck_core::report::Report;
use arubacheck_core::threshold::Severity;
use clap::Parser;
use clap::error::ErrorKind;
use commands::CommandLine;
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands: CommandLine = match CommandLine::try_parse() {
        Ok(commands) => commands,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    err.print()?;
                    Ok(ExitCode::SUCCESS)
                }
                _ => {
                    print::error(&err.render().to_string());
                    Ok(ExitCode::from(Severity::Unknown.exit_code()))
                }
            };
        }
    };

    logging::init(commands.global.verbose);

    let report: Report = commands::run(&commands);
    Ok(ExitCode::from(print::stdout(&report)))
}
