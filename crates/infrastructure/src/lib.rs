//! Simsam DNS Infrastructure Layer
//!
//! Adapters for the application ports: the zone-file reader, the UDP
//! forwarder, the request handler and the UDP listener.
pub mod dns;
pub mod zone;
