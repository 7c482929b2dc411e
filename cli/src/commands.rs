pub mod ap;
pub mod aps;

use std::time::Duration;

use arubacheck_common::config::{
    Config, ConfigError, DEFAULT_COMMUNITY, DEFAULT_PORT, DEFAULT_TIMEOUT, SessionConfig,
    SnmpVersion, Threshold, Thresholds,
};
use arubacheck_core::profile::{self, DEFAULT_PROFILE, Profile};
use arubacheck_core::report::Report;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "check_aruba")]
#[command(about = "Monitoring check for Aruba access points over SNMP.")]
#[command(disable_version_flag = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Controller or AP to query
    #[arg(short = 'H', long, global = true, default_value = "localhost")]
    pub hostname: String,

    #[arg(short, long, global = true, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(
        short = 'C',
        long,
        global = true,
        env = "ARUBA_SNMP_COMMUNITY",
        default_value = DEFAULT_COMMUNITY
    )]
    pub snmp_community: String,

    /// 1 or 2c
    #[arg(short = 'V', long, global = true, default_value = "1")]
    pub snmp_version: SnmpVersion,

    /// Seconds to wait for each SNMP response
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Column map to poll with (instant, wlsx)
    #[arg(short = 'P', long, global = true, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    #[arg(long, global = true, default_value_t = 80.0)]
    pub warning_cpu_threshold: f64,

    #[arg(long, global = true, default_value_t = 95.0)]
    pub critical_cpu_threshold: f64,

    /// Compared against the percentage of free memory
    #[arg(long, global = true, default_value_t = 80.0)]
    pub warning_memory_threshold: f64,

    #[arg(long, global = true, default_value_t = 95.0)]
    pub critical_memory_threshold: f64,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every AP known to a virtual controller
    Aps,
    /// Check one AP and its radio interfaces
    Ap {
        /// Address of the AP to check (defaults to the hostname)
        #[arg(short = 'A', long)]
        ap_address: Option<String>,

        #[arg(long, default_value_t = 80.0)]
        warning_radio_usage_threshold: f64,

        #[arg(long, default_value_t = 95.0)]
        critical_radio_usage_threshold: f64,
    },
}

impl CommandLine {
    /// Folds the parsed arguments into one immutable [`Config`].
    pub fn config(&self) -> Result<Config, ConfigError> {
        let args: &GlobalArgs = &self.global;

        let radio_usage: Threshold = match &self.command {
            Commands::Ap {
                warning_radio_usage_threshold,
                critical_radio_usage_threshold,
                ..
            } => Threshold::new(
                "radio usage",
                *warning_radio_usage_threshold,
                *critical_radio_usage_threshold,
            )?,
            Commands::Aps => Threshold::default(),
        };

        let thresholds = Thresholds {
            cpu: Threshold::new("CPU", args.warning_cpu_threshold, args.critical_cpu_threshold)?,
            memory: Threshold::new(
                "memory",
                args.warning_memory_threshold,
                args.critical_memory_threshold,
            )?,
            radio_usage,
        };

        let session = SessionConfig {
            hostname: args.hostname.clone(),
            port: args.port,
            community: args.snmp_community.clone(),
            version: args.snmp_version,
            timeout: Duration::from_secs(args.timeout),
        };

        Ok(Config {
            session,
            profile: args.profile.clone(),
            thresholds,
        })
    }
}

/// Runs the selected check. Anything that stops it early becomes an `UNKNOWN` report.
pub fn run(commands: &CommandLine) -> Report {
    let cfg: Config = match commands.config() {
        Ok(cfg) => cfg,
        Err(err) => return Report::unknown(err.to_string()),
    };

    let profile: &'static Profile = match profile::resolve(&cfg.profile) {
        Ok(profile) => profile,
        Err(err) => return Report::unknown(err.to_string()),
    };
    debug!("Using profile '{}' ({})", profile.name, profile.description);

    match &commands.command {
        Commands::Aps => aps::run(&cfg, profile),
        Commands::Ap { ap_address, .. } => {
            let address: &str = ap_address.as_deref().unwrap_or(&cfg.session.hostname);
            ap::run(&cfg, profile, address)
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
