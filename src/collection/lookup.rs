use crate::core::{Record, Value};
use std::collections::BTreeMap;

/// True when every element of `wanted` occurs in `origin`.
pub fn includes_all<T: PartialEq>(origin: &[T], wanted: &[T]) -> bool {
    wanted.iter().all(|item| origin.contains(item))
}

/// Position of the first record whose `key` field equals `value`.
pub fn find_index(records: &[Record], key: &str, value: &Value) -> Option<usize> {
    records.iter().position(|record| record.get(key) == Some(value))
}

/// First record whose `key` field equals `value`.
pub fn find<'a>(records: &'a [Record], key: &str, value: &Value) -> Option<&'a Record> {
    find_index(records, key, value).map(|index| &records[index])
}

/// Index records by the display text of their `key` field.
///
/// Later records overwrite earlier ones with the same key; records without
/// the field are skipped.
pub fn index_by(records: &[Record], key: &str) -> BTreeMap<String, Record> {
    records
        .iter()
        .filter_map(|record| Some((record.get(key)?.to_string(), record.clone())))
        .collect()
}

/// Flatten a keyed map back into records, storing each map key under `key`.
///
/// A record that already has a `key` field keeps its own value.
pub fn entries_to_records(map: &BTreeMap<String, Record>, key: &str) -> Vec<Record> {
    map.iter()
        .map(|(name, record)| {
            let mut out = Record::new().with(key, name.as_str());
            out.merge(record);
            out
        })
        .collect()
}
