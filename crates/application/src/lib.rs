//! Simsam DNS Application Layer
//!
//! The resolution core: the read-only record index built from the zone, the
//! per-question lookup/forward decision and the reply assembly policy.
//! Everything that touches files or sockets sits behind the traits in
//! [`ports`].
pub mod ports;
pub mod services;
pub mod use_cases;
