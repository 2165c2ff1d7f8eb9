// ============================================================================
// src/collection/sort.rs - Multi-key record comparator
// ============================================================================
//
// Features:
// - Comparator composition: keys are tried left to right, first non-equal wins
// - Stable sort (records that compare equal keep their relative order)
// - SQL-style NULL handling (NULLS LAST for ASC, NULLS FIRST for DESC);
//   a missing field counts as NULL
// - Type mismatches are reported instead of silently ordered
//
// ============================================================================

use crate::core::{RankError, Record, Result, Value};
use std::cmp::Ordering;

// ============================================================================
// NULL HANDLING STRATEGY
// ============================================================================

/// Strategy for handling NULL values during sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    /// NULL values appear first
    NullsFirst,
    /// NULL values appear last
    NullsLast,
}

impl NullOrdering {
    /// - ASC (descending=false) → NULLS LAST
    /// - DESC (descending=true) → NULLS FIRST
    pub fn default_for_direction(descending: bool) -> Self {
        if descending {
            Self::NullsFirst
        } else {
            Self::NullsLast
        }
    }
}

// ============================================================================
// SORT KEY - Single field ordering
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Field to sort by
    pub field: String,
    /// Sort direction: false=ASC, true=DESC
    pub descending: bool,
    /// NULL handling strategy
    pub null_ordering: NullOrdering,
}

impl SortKey {
    /// Create a new sort key with default NULL ordering
    pub fn new(field: impl Into<String>, descending: bool) -> Self {
        Self {
            field: field.into(),
            descending,
            null_ordering: NullOrdering::default_for_direction(descending),
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }

    /// Override the NULL ordering
    pub fn with_null_ordering(mut self, null_ordering: NullOrdering) -> Self {
        self.null_ordering = null_ordering;
        self
    }

    /// Build a key from a field and a direction word (`asc` / `desc`, any case).
    pub fn from_pair(field: &str, direction: &str) -> Result<Self> {
        if field.is_empty() {
            return Err(RankError::InvalidSortKey("empty field name".to_string()));
        }
        match direction.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::asc(field)),
            "desc" => Ok(Self::desc(field)),
            other => Err(RankError::InvalidSortKey(format!(
                "unknown direction '{}' for field '{}'",
                other, field
            ))),
        }
    }

    /// Parse `field` or `field:asc` / `field:desc`.
    pub fn parse(spec: &str) -> Result<Self> {
        match spec.split_once(':') {
            Some((field, direction)) => Self::from_pair(field.trim(), direction.trim()),
            None => Self::from_pair(spec.trim(), "asc"),
        }
    }
}

// ============================================================================
// RECORD COMPARATOR - Compares two records based on sort keys
// ============================================================================

/// Comparator for sorting records based on multiple sort keys
#[derive(Debug, Clone)]
pub struct RecordComparator {
    sort_keys: Vec<SortKey>,
}

impl RecordComparator {
    pub fn new(sort_keys: Vec<SortKey>) -> Self {
        Self { sort_keys }
    }

    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// Compare two records according to the sort keys
    pub fn compare(&self, left: &Record, right: &Record) -> Result<Ordering> {
        for sort_key in &self.sort_keys {
            let ordering = Self::compare_by_key(left, right, sort_key)?;

            // Equal on this key: fall through to the next one
            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }

        Ok(Ordering::Equal)
    }

    fn compare_by_key(left: &Record, right: &Record, key: &SortKey) -> Result<Ordering> {
        let value1 = left.get(&key.field).unwrap_or(&Value::Null);
        let value2 = right.get(&key.field).unwrap_or(&Value::Null);

        Self::compare_values(value1, value2, key)
    }

    /// Compare two values according to sort direction and NULL handling
    fn compare_values(value1: &Value, value2: &Value, key: &SortKey) -> Result<Ordering> {
        let ordering = match (value1.is_null(), value2.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => match key.null_ordering {
                NullOrdering::NullsFirst => Ordering::Less,
                NullOrdering::NullsLast => Ordering::Greater,
            },
            (false, true) => match key.null_ordering {
                NullOrdering::NullsFirst => Ordering::Greater,
                NullOrdering::NullsLast => Ordering::Less,
            },
            (false, false) => value1.compare(value2)?,
        };

        // NULL placement is absolute; direction only flips non-NULL comparisons
        if key.descending && !value1.is_null() && !value2.is_null() {
            Ok(ordering.reverse())
        } else {
            Ok(ordering)
        }
    }

    /// Stable-sort `records` in place.
    ///
    /// The first comparison error is returned after the sort finishes; the
    /// order of the slice is unspecified in that case.
    pub fn sort(&self, records: &mut [Record]) -> Result<()> {
        if records.is_empty() || self.sort_keys.is_empty() {
            return Ok(());
        }

        let mut sort_error: Option<RankError> = None;
        records.sort_by(|left, right| match self.compare(left, right) {
            Ok(ordering) => ordering,
            Err(err) => {
                sort_error.get_or_insert(err);
                Ordering::Equal
            }
        });

        match sort_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Compose a comparator from `(field, direction)` pairs.
///
/// ```
/// use rankshift::{record, collection::comparator_all};
///
/// let mut rows = vec![
///     record! { "time" => 2, "id" => 1 },
///     record! { "time" => 1, "id" => 1 },
///     record! { "time" => 2, "id" => 9 },
/// ];
/// comparator_all(&[("time", "asc"), ("id", "desc")])?.sort(&mut rows)?;
/// assert_eq!(rows[1].get("id"), Some(&9.into()));
/// # Ok::<(), rankshift::RankError>(())
/// ```
pub fn comparator_all(pairs: &[(&str, &str)]) -> Result<RecordComparator> {
    let sort_keys = pairs
        .iter()
        .map(|(field, direction)| SortKey::from_pair(field, direction))
        .collect::<Result<Vec<_>>>()?;
    Ok(RecordComparator::new(sort_keys))
}

/// Stable-sort records by the given keys.
pub fn sort_records(records: &mut [Record], sort_keys: &[SortKey]) -> Result<()> {
    RecordComparator::new(sort_keys.to_vec()).sort(records)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn values(records: &[Record], field: &str) -> Vec<Value> {
        records
            .iter()
            .map(|r| r.get(field).cloned().unwrap_or(Value::Null))
            .collect()
    }

    #[test]
    fn test_null_ordering_defaults() {
        assert_eq!(NullOrdering::default_for_direction(false), NullOrdering::NullsLast);
        assert_eq!(NullOrdering::default_for_direction(true), NullOrdering::NullsFirst);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("age").unwrap(), SortKey::asc("age"));
        assert_eq!(SortKey::parse("age:DESC").unwrap(), SortKey::desc("age"));
        assert!(matches!(
            SortKey::parse("age:sideways"),
            Err(RankError::InvalidSortKey(_))
        ));
        assert!(SortKey::parse(":asc").is_err());
    }

    #[test]
    fn test_compare_integers_descending() {
        let comparator = RecordComparator::new(vec![SortKey::desc("value")]);
        let row1 = Record::new().with("value", 1);
        let row2 = Record::new().with("value", 2);

        assert_eq!(comparator.compare(&row1, &row2).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_multi_key_tie_break() {
        let comparator = comparator_all(&[("category", "asc"), ("value", "desc")]).unwrap();
        let row1 = Record::new().with("category", "A").with("value", 1);
        let row2 = Record::new().with("category", "A").with("value", 2);
        let row3 = Record::new().with("category", "B").with("value", 9);

        assert_eq!(comparator.compare(&row1, &row2).unwrap(), Ordering::Greater);
        assert_eq!(comparator.compare(&row2, &row3).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_sort_with_nulls_and_missing() {
        let mut rows = vec![
            Record::new().with("value", 2),
            Record::new().with("value", Value::Null),
            Record::new(),
            Record::new().with("value", 1),
        ];

        sort_records(&mut rows, &[SortKey::asc("value")]).unwrap();
        assert_eq!(
            values(&rows, "value"),
            vec![Value::Integer(1), Value::Integer(2), Value::Null, Value::Null]
        );

        sort_records(&mut rows, &[SortKey::desc("value")]).unwrap();
        assert_eq!(
            values(&rows, "value"),
            vec![Value::Null, Value::Null, Value::Integer(2), Value::Integer(1)]
        );
    }

    #[test]
    fn test_custom_null_ordering() {
        let mut rows = vec![Record::new().with("value", 1), Record::new()];
        let key = SortKey::asc("value").with_null_ordering(NullOrdering::NullsFirst);

        sort_records(&mut rows, &[key]).unwrap();
        assert!(rows[0].get("value").is_none());
    }

    #[test]
    fn test_sort_is_stable() {
        let mut rows: Vec<Record> = (0..6)
            .map(|i| Record::new().with("group", i % 2).with("seq", i))
            .collect();

        sort_records(&mut rows, &[SortKey::asc("group")]).unwrap();
        assert_eq!(
            values(&rows, "seq"),
            [0, 2, 4, 1, 3, 5].into_iter().map(Value::Integer).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_sort_reports_type_mismatch() {
        let mut rows = vec![Record::new().with("value", 1), Record::new().with("value", "x")];
        let err = sort_records(&mut rows, &[SortKey::asc("value")]).unwrap_err();
        assert!(matches!(err, RankError::TypeMismatch(_)));
    }

    #[test]
    fn test_empty_rows() {
        let mut rows: Vec<Record> = vec![];
        assert!(sort_records(&mut rows, &[SortKey::asc("value")]).is_ok());
    }
}
