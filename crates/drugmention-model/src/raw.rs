//! Untyped row shapes at the edges of the pipeline.

use indexmap::IndexMap;

/// One input row as read from a landing-zone file.
///
/// Keys are field names in the order the source file lists them; a `None`
/// value means the field was present in the schema but carried no value (a
/// short CSV row or a JSON `null`).
pub type RawRow = IndexMap<String, Option<String>>;

/// One persisted record as read back from a JSON snapshot.
pub type SnapshotRecord = serde_json::Map<String, serde_json::Value>;

/// Build a [`RawRow`] from string pairs. Handy for fixtures.
pub fn raw_row<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> RawRow {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), Some(value.to_string())))
        .collect()
}
