use hickory_proto::rr::Record;
use rustc_hash::FxHashMap;
use simsam_dns_domain::LookupKey;

/// Records of the zone grouped by [`LookupKey`].
///
/// Filled once by the zone loader and then shared behind an `Arc`; nothing on
/// the query path can mutate it, so concurrent readers need no locking. A
/// live reload would have to build a fresh index and swap the `Arc` whole.
///
/// Every stored sequence is non-empty and keeps insertion order. A miss is
/// key absence.
#[derive(Debug, Clone)]
pub struct RecordIndex<R = Record> {
    entries: FxHashMap<LookupKey, Vec<R>>,
    record_count: usize,
}

impl<R> RecordIndex<R> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            record_count: 0,
        }
    }

    /// Appends `record` to the sequence for `key`, creating it if absent.
    pub fn put(&mut self, key: LookupKey, record: R) {
        self.entries.entry(key).or_default().push(record);
        self.record_count += 1;
    }

    pub fn get(&self, key: &LookupKey) -> Option<&[R]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &LookupKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of records across all keys.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R> Default for RecordIndex<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FromIterator<(LookupKey, R)> for RecordIndex<R> {
    fn from_iter<I: IntoIterator<Item = (LookupKey, R)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (key, record) in iter {
            index.put(key, record);
        }
        index
    }
}
