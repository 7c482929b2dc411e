//! Concrete device-management sessions implementing
//! [`arubacheck_common::transport::Transport`].

pub mod snmp;
