use serde::Deserialize;

// numeric form and query parameters arrive as strings; only an unsigned
// digit string counts as a number
pub fn digits_to_i64(value: &str) -> Option<i64> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Some(value.parse().unwrap_or(i64::MAX))
    } else {
        None
    }
}

// anything that is not a digit string falls back to the first page
#[derive(Debug, Deserialize)]
#[serde(from = "String")]
pub struct Page(pub i64);

impl Default for Page {
    fn default() -> Self {
        Page(1)
    }
}

impl From<String> for Page {
    fn from(value: String) -> Self {
        digits_to_i64(&value).map(Page).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_strings_parse() {
        assert_eq!(digits_to_i64("42"), Some(42));
        assert_eq!(digits_to_i64("0"), Some(0));
    }

    #[test]
    fn signed_and_garbage_values_do_not_parse() {
        assert_eq!(digits_to_i64(""), None);
        assert_eq!(digits_to_i64("-1"), None);
        assert_eq!(digits_to_i64("2.5"), None);
        assert_eq!(digits_to_i64("two"), None);
    }

    #[test]
    fn oversized_digit_strings_saturate() {
        assert_eq!(digits_to_i64("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn page_falls_back_to_one() {
        assert_eq!(Page::from("7".to_owned()).0, 7);
        assert_eq!(Page::from("abc".to_owned()).0, 1);
        assert_eq!(Page::from("-3".to_owned()).0, 1);
        // "0" is a digit string, so it parses and later fails the range check
        assert_eq!(Page::from("0".to_owned()).0, 0);
    }
}
