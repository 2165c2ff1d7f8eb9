use crate::core::Record;

/// N-ary cartesian product of record sets.
///
/// Every output record merges one record from each set, left to right; a
/// field present in several inputs takes the value from the later set.
/// The last set varies fastest. Any empty set makes the product empty, and
/// no sets at all yields a single empty record.
pub fn cartesian_product(sets: &[Vec<Record>]) -> Vec<Record> {
    sets.iter().fold(vec![Record::new()], |partials, set| {
        let mut next = Vec::with_capacity(partials.len() * set.len());
        for partial in &partials {
            for record in set {
                let mut merged = partial.clone();
                merged.merge(record);
                next.push(merged);
            }
        }
        next
    })
}
