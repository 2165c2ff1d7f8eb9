use std::collections::HashSet;
use std::hash::Hash;

/// Remove duplicates, keeping the first occurrence of each element.
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Remove elements whose derived key was already seen, keeping the first.
pub fn unique_by<T, K, F>(items: &[T], mut key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(key_fn(*item)))
        .cloned()
        .collect()
}
