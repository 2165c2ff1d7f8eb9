use std::fmt::Display;

/// Insert thousands separators into the integer part; the fraction is kept as is.
///
/// ```
/// use rankshift::text::format_number;
///
/// assert_eq!(format_number(1234567.891), "1,234,567.891");
/// assert_eq!(format_number("-1000"), "-1,000");
/// ```
pub fn format_number(number: impl Display) -> String {
    let text = number.to_string();
    let (int_part, fraction) = match text.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (text.as_str(), None),
    };

    let grouped = group_thousands(int_part);
    match fraction {
        Some(fraction) if !fraction.is_empty() => format!("{}.{}", grouped, fraction),
        _ => grouped,
    }
}

/// Separators go into the trailing run of digits only, so a sign (or any
/// other prefix) is carried through untouched.
fn group_thousands(int_part: &str) -> String {
    let digits_start = int_part
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)
        .unwrap_or(int_part.len());
    let (prefix, digits) = int_part.split_at(digits_start);

    let mut out = String::with_capacity(int_part.len() + digits.len() / 3);
    out.push_str(prefix);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `prefix + s + suffix`, or an empty string when `s` is absent or empty.
pub fn wrap_if_has_length(s: Option<&str>, prefix: &str, suffix: &str) -> String {
    match s {
        Some(s) if !s.is_empty() => format!("{}{}{}", prefix, s, suffix),
        _ => String::new(),
    }
}

/// `prefix + n + suffix`, or `zero_text` when `n` is zero.
pub fn wrap_if_not_zero<N>(n: N, prefix: &str, suffix: &str, zero_text: &str) -> String
where
    N: Display + PartialEq + Default,
{
    if n == N::default() {
        return zero_text.to_string();
    }
    format!("{}{}{}", prefix, n, suffix)
}

/// Join the non-empty parts with `separator`.
pub fn join_if_has_length<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    parts
        .iter()
        .filter_map(|s| {
            let s: &str = s.as_ref();
            (!s.is_empty()).then_some(s)
        })
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(123456), "123,456");
        assert_eq!(format_number("1234.5"), "1,234.5");
        assert_eq!(format_number("-9876543"), "-9,876,543");
    }

    #[test]
    fn test_wrap_if_has_length() {
        assert_eq!(wrap_if_has_length(Some(""), "(", ")"), "");
        assert_eq!(wrap_if_has_length(None, "(", ")"), "");
        assert_eq!(wrap_if_has_length(Some("1"), "(", ")"), "(1)");
    }

    #[test]
    fn test_wrap_if_not_zero() {
        assert_eq!(wrap_if_not_zero(0, "done ", " items", "nothing"), "nothing");
        assert_eq!(wrap_if_not_zero(3, "done ", " items", "nothing"), "done 3 items");
        assert_eq!(wrap_if_not_zero(0.0, "", "", "zero"), "zero");
    }

    #[test]
    fn test_join_if_has_length() {
        assert_eq!(join_if_has_length(&["a", "", "b"], ","), "a,b");
        assert_eq!(join_if_has_length::<String>(&[], ","), "");
    }
}
