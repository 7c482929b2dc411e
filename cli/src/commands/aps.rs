use arubacheck_common::config::Config;
use arubacheck_core::check::{self, aps};
use arubacheck_core::profile::Profile;
use arubacheck_core::report::Report;
use arubacheck_protocols::snmp::SnmpSession;
use tracing::info;

pub fn run(cfg: &Config, profile: &Profile) -> Report {
    info!("Polling all APs through {}", cfg.session.agent_address());

    match SnmpSession::open(&cfg.session) {
        Ok(mut session) => aps::run(&mut session, profile, &cfg.thresholds),
        Err(err) => check::unknown(err.into(), aps::UNREACHABLE),
    }
}
