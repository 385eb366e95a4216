use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    #[serde(default = "default_zone_path")]
    pub path: String,

    /// Origin applied to relative owner names when the file has no `$ORIGIN`.
    #[serde(default)]
    pub origin: Option<String>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            path: default_zone_path(),
            origin: None,
        }
    }
}

fn default_zone_path() -> String {
    "./zone.txt".to_string()
}
