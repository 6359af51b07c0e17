//! Per-member visibility
//!
//! Resolution order:
//! 1. exact whitelist match → [`Visibility::NameAndValue`]
//! 2. blacklist fragment contained in the name → [`Visibility::Skip`]
//! 3. otherwise → [`Visibility::NameOnly`]
//!
//! The whitelist always wins over the blacklist.

use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// No field, no port, no recursion
    Skip,
    /// Scalars show their name; composites are traversed; containers are
    /// summarized
    NameOnly,
    /// Scalars show `name: value`; containers are expanded
    NameAndValue,
}

#[derive(Debug, Clone, Default)]
pub struct VisitPolicy {
    whitelist: FxHashSet<String>,
    blacklist: Vec<String>,
}

impl VisitPolicy {
    pub fn new<W, B>(whitelist: W, blacklist: B) -> Self
    where
        W: IntoIterator<Item = String>,
        B: IntoIterator<Item = String>,
    {
        VisitPolicy {
            whitelist: whitelist.into_iter().collect(),
            // An empty fragment would match every name
            blacklist: blacklist.into_iter().filter(|f| !f.is_empty()).collect(),
        }
    }

    pub fn classify(&self, name: &str) -> Visibility {
        if self.whitelist.contains(name) {
            Visibility::NameAndValue
        } else if self.blacklist.iter().any(|fragment| name.contains(fragment.as_str())) {
            Visibility::Skip
        } else {
            Visibility::NameOnly
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(whitelist: &[&str], blacklist: &[&str]) -> VisitPolicy {
        VisitPolicy::new(
            whitelist.iter().map(|s| s.to_string()),
            blacklist.iter().map(|s| s.to_string()),
        )
    }

    #[test]
    fn test_default_is_name_only() {
        assert_eq!(policy(&[], &[]).classify("value"), Visibility::NameOnly);
    }

    #[test]
    fn test_blacklist_is_substring_match() {
        let p = policy(&[], &["_len"]);
        assert_eq!(p.classify("buffer_len"), Visibility::Skip);
        assert_eq!(p.classify("length"), Visibility::NameOnly);
    }

    #[test]
    fn test_whitelist_is_exact_match() {
        let p = policy(&["value"], &[]);
        assert_eq!(p.classify("value"), Visibility::NameAndValue);
        assert_eq!(p.classify("values"), Visibility::NameOnly);
    }

    #[test]
    fn test_whitelist_beats_blacklist() {
        let p = policy(&["secret_key"], &["secret"]);
        assert_eq!(p.classify("secret_key"), Visibility::NameAndValue);
        assert_eq!(p.classify("secret_salt"), Visibility::Skip);
    }

    #[test]
    fn test_empty_fragment_is_ignored() {
        assert_eq!(policy(&[], &[""]).classify("x"), Visibility::NameOnly);
    }
}
