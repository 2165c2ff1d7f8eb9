use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use crate::core::{RankError, Result};

/// Dynamically typed scalar stored in a record field.
///
/// Serializes untagged, so a record round-trips through plain JSON
/// (`null`, numbers, strings, booleans).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl Value {
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        match (self, other) {
            // ========================================
            // NULL handling: NULL is "greater" than all values (NULL LAST)
            // ========================================
            (Value::Null, Value::Null) => Ok(Ordering::Equal),
            (Value::Null, _) => Ok(Ordering::Greater),
            (_, Value::Null) => Ok(Ordering::Less),

            // ========================================
            // Same type comparisons
            // ========================================
            (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),

            (Value::Float(a), Value::Float(b)) => Ok(compare_floats(*a, *b)),

            (Value::Text(a), Value::Text(b)) => Ok(a.cmp(b)),

            (Value::Boolean(a), Value::Boolean(b)) => Ok(a.cmp(b)),

            // ========================================
            // Mixed numeric types (implicit coercion)
            // ========================================
            (Value::Integer(a), Value::Float(b)) => Ok(compare_mixed(*a, *b)),

            (Value::Float(a), Value::Integer(b)) => Ok(compare_mixed(*b, *a).reverse()),

            // ========================================
            // Type mismatches - ERROR
            // ========================================
            _ => Err(RankError::TypeMismatch(format!(
                "Cannot compare incompatible types: {} and {}",
                self.type_name(),
                other.type_name()
            ))),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Text(_) => "TEXT",
            Self::Boolean(_) => "BOOLEAN",
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Float(f) => {
                if f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns `Null` when the value equals `expect`, otherwise the value itself.
    pub fn null_if(self, expect: &Value) -> Value {
        if &self == expect { Value::Null } else { self }
    }

    /// True for `Null` and the empty string.
    pub fn is_empty_as_string(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// NaN is equal to NaN and greater than every other number.
fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Integer against float without rounding the integer: whole floats in
/// `i64` range compare as integers.
fn compare_mixed(i: i64, f: f64) -> Ordering {
    match whole_float(f) {
        Some(whole) => i.cmp(&whole),
        None => compare_floats(i as f64, f),
    }
}

/// The exact `i64` a float holds, if it is whole and in range.
pub(crate) fn whole_float(f: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    (f.is_finite() && f.fract() == 0.0 && f >= -LIMIT && f < LIMIT).then(|| f as i64)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(i), Self::Float(f)) | (Self::Float(f), Self::Integer(i)) => {
                whole_float(*f) == Some(*i)
            }
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Same order as [`Value::compare`]; incompatible types are unordered.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Null => 0u8.hash(state),
            Self::Integer(i) => {
                1u8.hash(state);
                i.hash(state);
            }
            // Whole floats hash like the integer they equal.
            Self::Float(f) => match whole_float(*f) {
                Some(whole) => {
                    1u8.hash(state);
                    whole.hash(state);
                }
                None if f.is_nan() => 2u8.hash(state),
                None => {
                    2u8.hash(state);
                    f.to_bits().hash(state);
                }
            },
            Self::Text(s) => {
                3u8.hash(state);
                s.hash(state);
            }
            Self::Boolean(b) => {
                4u8.hash(state);
                b.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() {
                    if *fl > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else {
                    write!(f, "{}", fl)
                }
            }
            Self::Text(s) => write!(f, "{}", s),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Integer(42), Value::Integer(42));
        assert_eq!(Value::Float(3.14), Value::Float(3.14));
        assert_eq!(Value::Integer(3), Value::Float(3.0));
        assert_ne!(Value::Integer(1), Value::Integer(2));
        assert_ne!(Value::Integer(1), Value::Text("1".into()));
    }

    #[test]
    fn test_value_ordering() {
        assert!(Value::Integer(1) < Value::Integer(2));
        assert!(Value::Text("a".into()) < Value::Text("b".into()));
        assert!(Value::Integer(0) < Value::Null);
        assert!(Value::Float(2.5) > Value::Integer(2));
        assert_eq!(Value::Text("a".into()).partial_cmp(&Value::Integer(1)), None);
    }

    #[test]
    fn test_float_equality_is_exact() {
        assert_ne!(Value::Float(0.1 + 0.2), Value::Float(0.3));
        assert_ne!(Value::Integer(0), Value::Float(1e-20));
        assert_eq!(Value::Float(-0.0), Value::Integer(0));
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_large_integer_does_not_round_into_float() {
        let big = 1i64 << 53;
        assert_ne!(Value::Integer(big + 1), Value::Float(big as f64));
        assert_eq!(
            Value::Integer(big + 1).compare(&Value::Float(big as f64)).unwrap(),
            Ordering::Greater
        );
        assert_eq!(Value::Integer(big), Value::Float(big as f64));
    }

    #[test]
    fn test_compare_mixed_numeric() {
        assert_eq!(
            Value::Integer(2).compare(&Value::Float(2.5)).unwrap(),
            Ordering::Less
        );
        assert_eq!(
            Value::Float(f64::NAN).compare(&Value::Integer(7)).unwrap(),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_incompatible_types() {
        let err = Value::Text("x".into()).compare(&Value::Integer(1)).unwrap_err();
        assert!(matches!(err, RankError::TypeMismatch(_)));
    }

    #[test]
    fn test_whole_float_hashes_like_integer() {
        use std::collections::HashSet;

        let set: HashSet<Value> = [Value::Integer(5), Value::Float(5.0)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_null_if() {
        assert_eq!(Value::from("").null_if(&Value::from("")), Value::Null);
        assert_eq!(Value::from(3).null_if(&Value::from(0)), Value::Integer(3));
    }

    #[test]
    fn test_is_empty_as_string() {
        assert!(Value::Null.is_empty_as_string());
        assert!(Value::from("").is_empty_as_string());
        assert!(!Value::from(" ").is_empty_as_string());
        assert!(!Value::Integer(0).is_empty_as_string());
    }

    #[test]
    fn test_untagged_serde() {
        let values: Vec<Value> = serde_json::from_str(r#"[null, 3, 2.5, "x", true]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Integer(3),
                Value::Float(2.5),
                Value::Text("x".into()),
                Value::Boolean(true),
            ]
        );
        assert!(matches!(values[1], Value::Integer(3)));
    }
}
