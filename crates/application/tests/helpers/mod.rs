#![allow(dead_code)]

pub mod builders;
pub mod mock_forwarder;
pub mod mock_zone_source;

pub use builders::{a_record, index_of, mx_record, name};
pub use mock_forwarder::MockForwarder;
pub use mock_zone_source::MockZoneSource;
