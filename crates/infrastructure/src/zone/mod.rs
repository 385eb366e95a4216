pub mod zone_file;

pub use zone_file::ZoneFileSource;
