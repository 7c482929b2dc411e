//! One poll of a controller or of a single access point.

use arubacheck_common::record::Record;
use arubacheck_common::transport::Transport;
use tracing::debug;

use crate::derived::with_memory_usage;
use crate::error::ProbeError;
use crate::profile::Profile;
use crate::reconstruct::Reconstructor;

/// A single AP and the radio interfaces that belong to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSnapshot {
    pub device: Record,
    pub radios: Vec<Record>,
}

/// Every AP known to the controller, each with `mem_usage` filled in.
pub fn poll_devices<T>(transport: &mut T, profile: &Profile) -> Result<Vec<Record>, ProbeError>
where
    T: Transport + ?Sized,
{
    let devices: Vec<Record> =
        Reconstructor::new(transport).reconstruct(&profile.device, profile.device_key)?;
    Ok(devices.into_iter().map(with_memory_usage).collect())
}

/// The AP whose key value reads as `address`, with `mem_usage` filled in.
///
/// The device key column is walked alone first to find the AP's row suffix;
/// only that row is then reconstructed.
pub fn find_device<T>(transport: &mut T, profile: &Profile, address: &str) -> Result<Record, ProbeError>
where
    T: Transport + ?Sized,
{
    let device: Record = Reconstructor::new(transport).reconstruct_one(
        &profile.device,
        profile.device_key,
        address,
    )?;
    debug!("Matched {address} to row {}", device.suffix());
    Ok(with_memory_usage(device))
}

/// Radio rows below `device`'s suffix. Other APs' radios cost no point-queries.
pub fn poll_radios<T>(
    transport: &mut T,
    profile: &Profile,
    device: &Record,
) -> Result<Vec<Record>, ProbeError>
where
    T: Transport + ?Sized,
{
    let radio_prefix: String = format!("{}.", device.suffix());
    Reconstructor::new(transport).reconstruct_where(&profile.radio, profile.radio_key, |suffix| {
        suffix.starts_with(&radio_prefix)
    })
}

#[cfg(test)]
mod tests {
    use arubacheck_common::transport::memory::MemoryTransport;

    use super::*;
    use crate::derived::MEM_USAGE;
    use crate::profile::INSTANT;

    const AP_IP: &str = "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.3";
    const AP_FREE: &str = "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.8";
    const AP_TOTAL: &str = "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.10";
    const RADIO_INDEX: &str = "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.2";

    fn fixture() -> MemoryTransport {
        MemoryTransport::new()
            .with(&format!("{AP_IP}.0.11.134.0.0.1"), "10.0.0.1")
            .with(&format!("{AP_FREE}.0.11.134.0.0.1"), 250i64)
            .with(&format!("{AP_TOTAL}.0.11.134.0.0.1"), 1000i64)
            .with(&format!("{AP_IP}.0.11.134.0.0.11"), "10.0.0.11")
            .with(&format!("{RADIO_INDEX}.0.11.134.0.0.1.1"), 1i64)
            .with(&format!("{RADIO_INDEX}.0.11.134.0.0.11.1"), 1i64)
            .with(&format!("{RADIO_INDEX}.0.11.134.0.0.11.2"), 2i64)
    }

    #[test]
    fn every_device_gets_mem_usage() {
        let devices = poll_devices(&mut fixture(), &INSTANT).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].number(MEM_USAGE), Some(25.0));
        assert_eq!(devices[1].number(MEM_USAGE), Some(0.0));
    }

    #[test]
    fn radios_stop_at_the_suffix_boundary() {
        let mut agent = fixture();

        let device = find_device(&mut agent, &INSTANT, "10.0.0.1").unwrap();
        assert_eq!(device.suffix(), ".0.11.134.0.0.1");
        assert_eq!(device.number(MEM_USAGE), Some(25.0));
        let radios = poll_radios(&mut agent, &INSTANT, &device).unwrap();
        assert_eq!(radios.len(), 1);
        assert_eq!(radios[0].suffix(), ".0.11.134.0.0.1.1");

        let device = find_device(&mut agent, &INSTANT, "10.0.0.11").unwrap();
        assert_eq!(poll_radios(&mut agent, &INSTANT, &device).unwrap().len(), 2);
    }
}
