//! # SNMP Session
//!
//! A blocking SNMP v1/v2c session over [`snmp2::SyncSession`].
//!
//! Walks use `GETNEXT` on v1 and `GETBULK` on v2c. Both `noSuchName` (v1 error
//! status) and `noSuchObject`/`noSuchInstance` (v2c exceptions) surface as
//! [`TransportError::NoSuchName`]; a receive failure after the socket timeout
//! surfaces as [`TransportError::Timeout`].

use snmp2::{Oid, SyncSession, Value};
use tracing::{debug, trace};

use arubacheck_common::config::{SessionConfig, SnmpVersion};
use arubacheck_common::transport::{
    RawValue, Transport, TransportError, Varbind, is_below, parse_address,
};

const STARTING_REQUEST_ID: i32 = 0;
const BULK_MAX_REPETITIONS: u32 = 10;
const ERROR_STATUS_NO_ERROR: u32 = 0;
const ERROR_STATUS_NO_SUCH_NAME: u32 = 2;

pub struct SnmpSession {
    session: SyncSession,
    version: SnmpVersion,
}

/// One step of a walk: what followed the cursor, and whether the view ended.
struct Batch {
    varbinds: Vec<Varbind>,
    exhausted: bool,
}

impl SnmpSession {
    pub fn open(cfg: &SessionConfig) -> Result<Self, TransportError> {
        let target: String = cfg.agent_address();
        let community: &[u8] = cfg.community.as_bytes();
        let timeout = Some(cfg.timeout);

        let session = match cfg.version {
            SnmpVersion::V1 => {
                SyncSession::new_v1(target.as_str(), community, timeout, STARTING_REQUEST_ID)
            }
            SnmpVersion::V2c => {
                SyncSession::new_v2c(target.as_str(), community, timeout, STARTING_REQUEST_ID)
            }
        }
        .map_err(|e| TransportError::Session {
            target: target.clone(),
            reason: e.to_string(),
        })?;

        debug!("Opened SNMP {:?} session to {target}", cfg.version);
        Ok(Self {
            session,
            version: cfg.version,
        })
    }

    fn next_batch(&mut self, cursor: &Oid<'_>) -> Result<Batch, TransportError> {
        let mut pdu = match self.version {
            SnmpVersion::V1 => self.session.getnext(cursor),
            SnmpVersion::V2c => self.session.getbulk(&[cursor], 0, BULK_MAX_REPETITIONS),
        }
        .map_err(map_error)?;

        // v1 agents signal the end of the MIB view with noSuchName.
        if pdu.error_status == ERROR_STATUS_NO_SUCH_NAME {
            return Ok(Batch {
                varbinds: Vec::new(),
                exhausted: true,
            });
        }
        check_error_status(pdu.error_status, &cursor.to_id_string())?;

        let mut batch = Batch {
            varbinds: Vec::new(),
            exhausted: false,
        };
        for (oid, value) in pdu.varbinds.by_ref() {
            if matches!(value, Value::EndOfMibView) {
                batch.exhausted = true;
                break;
            }
            batch
                .varbinds
                .push(Varbind::new(oid.to_id_string(), to_raw(value)));
        }
        Ok(batch)
    }
}

impl Transport for SnmpSession {
    fn walk(&mut self, prefix: &str) -> Result<Vec<Varbind>, TransportError> {
        trace!("WALK {prefix}");
        let mut cursor: String = prefix.to_string();
        let mut found: Vec<Varbind> = Vec::new();

        loop {
            let oid: Oid<'static> = to_oid(&cursor)?;
            let batch: Batch = self.next_batch(&oid)?;
            let received: usize = batch.varbinds.len();

            for varbind in batch.varbinds {
                if !is_below(&varbind.address, prefix) {
                    debug!("Walked {} values below {prefix}", found.len());
                    return Ok(found);
                }
                if varbind.address == cursor {
                    return Err(TransportError::Protocol(format!(
                        "agent returned non-increasing address {cursor}"
                    )));
                }
                cursor = varbind.address.clone();
                found.push(varbind);
            }

            if batch.exhausted || received == 0 {
                break;
            }
        }

        debug!("Walked {} values below {prefix}", found.len());
        Ok(found)
    }

    fn get(&mut self, address: &str) -> Result<RawValue, TransportError> {
        trace!("GET {address}");
        let oid: Oid<'static> = to_oid(address)?;
        let mut pdu = self.session.get(&oid).map_err(map_error)?;

        if pdu.error_status == ERROR_STATUS_NO_SUCH_NAME {
            return Err(TransportError::NoSuchName(address.to_string()));
        }
        check_error_status(pdu.error_status, address)?;

        match pdu.varbinds.next() {
            Some((_, Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView)) => {
                Err(TransportError::NoSuchName(address.to_string()))
            }
            Some((_, value)) => Ok(to_raw(value)),
            None => Err(TransportError::Protocol(format!(
                "empty response for {address}"
            ))),
        }
    }
}

fn check_error_status(error_status: u32, address: &str) -> Result<(), TransportError> {
    match error_status {
        ERROR_STATUS_NO_ERROR => Ok(()),
        status => Err(TransportError::Protocol(format!(
            "agent returned error status {status} for {address}"
        ))),
    }
}

fn map_error(error: snmp2::Error) -> TransportError {
    match error {
        snmp2::Error::Receive => TransportError::Timeout,
        other => TransportError::Protocol(format!("{other:?}")),
    }
}

fn to_oid(address: &str) -> Result<Oid<'static>, TransportError> {
    let arcs: Vec<u64> = parse_address(address)?;
    Oid::from(&arcs).map_err(|_| TransportError::InvalidAddress(address.to_string()))
}

fn to_raw(value: Value<'_>) -> RawValue {
    match value {
        Value::Integer(n) => RawValue::Integer(n),
        Value::Boolean(b) => RawValue::Integer(i64::from(b)),
        Value::OctetString(bytes) | Value::Opaque(bytes) => RawValue::OctetString(bytes.to_vec()),
        Value::Counter32(n) | Value::Unsigned32(n) => RawValue::Unsigned(u64::from(n)),
        Value::Counter64(n) => RawValue::Unsigned(n),
        Value::Timeticks(ticks) => RawValue::Timeticks(ticks),
        Value::IpAddress(octets) => RawValue::IpAddress(octets),
        Value::ObjectIdentifier(oid) => RawValue::ObjectId(oid.to_id_string()),
        _ => RawValue::Null,
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
