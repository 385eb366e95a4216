//! Master-file (RFC 1035 zone text) reader.

use hickory_proto::rr::{Name, Record};
use hickory_proto::serialize::txt::Parser;
use simsam_dns_application::ports::ZoneSource;
use simsam_dns_domain::DomainError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// TTL given to records when the file has no `$TTL` directive and the record
/// carries none itself.
pub const DEFAULT_TTL: u32 = 3600;

/// Zone read from a file on disk.
///
/// `$ORIGIN`, `$TTL`, relative names, blank-owner continuation lines,
/// parentheses and comments are handled by the hickory text parser. Without a
/// configured origin or `$ORIGIN` the root is used, so fully-qualified owners
/// load as written. RRSIGs are not served and are dropped.
pub struct ZoneFileSource {
    path: PathBuf,
    origin: Option<Name>,
}

impl ZoneFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            origin: None,
        }
    }

    /// Origin used for relative names until the file sets its own `$ORIGIN`.
    pub fn with_origin(mut self, origin: &str) -> Result<Self, DomainError> {
        let name = Name::from_ascii(origin).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid zone origin '{}': {}", origin, e))
        })?;
        self.origin = Some(name);
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ZoneSource for ZoneFileSource {
    fn records(&self) -> Result<Vec<Record>, DomainError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::ZoneLoad(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), bytes = contents.len(), "Zone file read");

        parse_zone_text(&contents, Some(&self.path), self.origin.clone())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse zone text into its records. Any syntax error fails the whole zone.
pub fn parse_zone_text(
    contents: &str,
    path: Option<&Path>,
    origin: Option<Name>,
) -> Result<Vec<Record>, DomainError> {
    let location = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<inline>".to_string());

    let origin = origin.unwrap_or_else(Name::root);
    let text = if has_ttl_directive(contents) {
        contents.to_string()
    } else {
        format!("$TTL {}\n{}", DEFAULT_TTL, contents)
    };

    let (_origin, record_sets) = Parser::new(text, path.map(Path::to_path_buf), Some(origin))
        .parse()
        .map_err(|e| DomainError::ZoneLoad(format!("{}: {}", location, e)))?;

    Ok(record_sets
        .values()
        .flat_map(|set| set.records_without_rrsigs().cloned())
        .collect())
}

fn has_ttl_directive(contents: &str) -> bool {
    contents.lines().any(|line| {
        line.trim_start()
            .get(..4)
            .is_some_and(|directive| directive.eq_ignore_ascii_case("$TTL"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_ttl_directive() {
        assert!(has_ttl_directive("$TTL 60\nhost.test. IN A 10.0.0.1\n"));
        assert!(has_ttl_directive("; zone\n  $ttl 1h\n"));
        assert!(!has_ttl_directive("host.test. 60 IN A 10.0.0.1\n"));
    }
}
