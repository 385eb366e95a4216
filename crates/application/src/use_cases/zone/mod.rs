mod load_zone;

pub use load_zone::{record_lookup_key, LoadZoneUseCase};
