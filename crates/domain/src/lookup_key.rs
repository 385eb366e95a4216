use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// Case-folded `(owner name, record type)` key, rendered as `owner:TYPE`.
///
/// Records and queries go through the same constructor, so a zone entry for
/// `WWW.Example.com.` and a question for `www.example.COM.` meet on
/// `www.example.com.:A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LookupKey(Arc<str>);

impl LookupKey {
    pub fn new(owner: &str, record_type: RecordType) -> Self {
        Self(Arc::from(format!("{}:{}", owner.to_ascii_lowercase(), record_type)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
