use arubacheck_common::config::Config;
use arubacheck_core::check::{self, ap};
use arubacheck_core::profile::Profile;
use arubacheck_core::report::Report;
use arubacheck_protocols::snmp::SnmpSession;
use tracing::info;

pub fn run(cfg: &Config, profile: &Profile, address: &str) -> Report {
    info!("Polling AP {address} through {}", cfg.session.agent_address());

    match SnmpSession::open(&cfg.session) {
        Ok(mut session) => ap::run(&mut session, profile, &cfg.thresholds, address),
        Err(err) => check::unknown(err.into(), ap::UNREACHABLE),
    }
}
