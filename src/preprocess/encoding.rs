//! Label encoding for the categorical target column.
//!
//! Codes are assigned in sorted order of the distinct category strings, so
//! `["sun", "rain", "fog"]` becomes `fog=0, rain=1, sun=2` no matter which
//! order the rows arrive in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bijection from target category to a dense integer code `0..K-1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMapping {
    codes: BTreeMap<String, u32>,
    classes: Vec<String>,
}

impl LabelMapping {
    /// Build the mapping from every observed value (duplicates allowed).
    pub fn fit<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes: Vec<String> = values.into_iter().map(str::to_owned).collect();
        classes.sort_unstable();
        classes.dedup();

        let codes = classes
            .iter()
            .zip(0u32..)
            .map(|(class, code)| (class.clone(), code))
            .collect();

        Self { codes, classes }
    }

    pub fn encode(&self, class: &str) -> Option<u32> {
        self.codes.get(class).copied()
    }

    pub fn decode(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }

    /// Categories in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// `(category, code)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.codes.iter().map(|(class, code)| (class.as_str(), *code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_sorted_order() {
        let mapping = LabelMapping::fit(["sun", "rain", "fog", "rain", "sun"]);
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.encode("fog"), Some(0));
        assert_eq!(mapping.encode("rain"), Some(1));
        assert_eq!(mapping.encode("sun"), Some(2));
        assert_eq!(mapping.encode("snow"), None);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let mapping = LabelMapping::fit(["drizzle", "rain", "sun", "snow", "fog"]);
        for class in mapping.classes() {
            let code = mapping.encode(class);
            assert!(code.is_some());
            assert_eq!(code.and_then(|c| mapping.decode(c)), Some(class.as_str()));
        }
        assert_eq!(mapping.decode(5), None);
    }

    #[test]
    fn test_iter_yields_dense_codes() {
        let mapping = LabelMapping::fit(["b", "a", "c"]);
        let pairs: Vec<_> = mapping.iter().collect();
        assert_eq!(pairs, vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let mapping = LabelMapping::fit(["rain", "Rain"]);
        assert_eq!(mapping.encode("Rain"), Some(0));
        assert_eq!(mapping.encode("rain"), Some(1));
    }
}
