use crate::core::value::whole_float;
use crate::core::{Record, Result, Value};
use serde::Serialize;
use std::collections::HashMap;

/// Elements sharing one canonical key, in their original relative order
#[derive(Debug, Serialize)]
pub struct Group<'a, T> {
    /// Canonical JSON of the computed key
    pub key: String,
    pub items: Vec<&'a T>,
}

/// Canonical JSON text for a key; object fields come out sorted, so two keys
/// match iff they are structurally equal. Whole floats are written as
/// integers, so `1.0` and `1` share a key.
pub fn canonical_key<K: Serialize + ?Sized>(key: &K) -> Result<String> {
    let mut json = serde_json::to_value(key)?;
    normalize_numbers(&mut json);
    Ok(json.to_string())
}

fn normalize_numbers(json: &mut serde_json::Value) {
    match json {
        serde_json::Value::Number(n) => {
            let whole = n.is_f64().then(|| n.as_f64()).flatten().and_then(whole_float);
            if let Some(whole) = whole {
                *json = serde_json::Value::from(whole);
            }
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        serde_json::Value::Object(fields) => fields.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

/// Group `items` by the canonical serialization of `key_fn(item)`.
///
/// Groups appear in the order their first element appears.
///
/// ```
/// use rankshift::collection::group_by;
///
/// let groups = group_by(&[1, 2, 3, 4, 5], |n| n % 2 == 0)?;
/// assert_eq!(groups[0].key, "false");
/// assert_eq!(groups[0].items, vec![&1, &3, &5]);
/// # Ok::<(), rankshift::RankError>(())
/// ```
pub fn group_by<'a, T, K, F>(items: &'a [T], mut key_fn: F) -> Result<Vec<Group<'a, T>>>
where
    K: Serialize,
    F: FnMut(&T) -> K,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group<'a, T>> = Vec::new();

    for item in items {
        let key = canonical_key(&key_fn(item))?;
        match slots.get(&key) {
            Some(&slot) => groups[slot].items.push(item),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(Group { key, items: vec![item] });
            }
        }
    }

    Ok(groups)
}

/// Group records by one field; a missing field groups under `null`.
pub fn group_by_field<'a>(records: &'a [Record], field: &str) -> Result<Vec<Group<'a, Record>>> {
    group_by(records, |record| record.get(field).cloned().unwrap_or(Value::Null))
}
