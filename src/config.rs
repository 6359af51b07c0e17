//! Walker configuration
//!
//! [`Config`] is a plain builder: start from [`Config::default`] and chain the
//! setters. Defaults come from [`crate::constants`].

use crate::constants::{DEFAULT_BLACKLIST, DEFAULT_MAX_DEPTH};
use crate::graph::policy::VisitPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    whitelist: Vec<String>,
    blacklist: Vec<String>,
    default_blacklist: bool,
    expand_containers: bool,
    max_depth: Option<usize>,
    max_nodes: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            whitelist: Vec::new(),
            blacklist: Vec::new(),
            default_blacklist: true,
            expand_containers: false,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_nodes: None,
        }
    }
}

impl Config {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact member names whose values are shown (scalars) or expanded
    /// (containers). Whitelisted names are never blacklisted.
    pub fn whitelist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist.extend(names.into_iter().map(Into::into));
        self
    }

    /// Member-name fragments to hide, on top of the default blacklist
    pub fn blacklist<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist.extend(fragments.into_iter().map(Into::into));
        self
    }

    /// If *false*, only the explicit blacklist applies
    pub fn default_blacklist(mut self, enabled: bool) -> Self {
        self.default_blacklist = enabled;
        self
    }

    /// If *true*, every container that is not skipped is expanded instead of
    /// being summarized by its element count
    pub fn expand_containers(mut self, enabled: bool) -> Self {
        self.expand_containers = enabled;
        self
    }

    /// Nesting ceiling; `None` removes it
    pub fn max_depth(mut self, limit: Option<usize>) -> Self {
        self.max_depth = limit;
        self
    }

    /// Ceiling on the number of nodes; `None` removes it
    pub fn max_nodes(mut self, limit: Option<usize>) -> Self {
        self.max_nodes = limit;
        self
    }

    pub fn depth_limit(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn node_limit(&self) -> Option<usize> {
        self.max_nodes
    }

    pub fn expands_containers(&self) -> bool {
        self.expand_containers
    }

    /// Build the visit policy for one session
    pub fn policy(&self) -> VisitPolicy {
        let defaults: &[&str] = if self.default_blacklist {
            DEFAULT_BLACKLIST
        } else {
            &[]
        };
        VisitPolicy::new(
            self.whitelist.iter().cloned(),
            defaults
                .iter()
                .map(|s| s.to_string())
                .chain(self.blacklist.iter().cloned()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::policy::Visibility;

    #[test]
    fn test_default_blacklist_can_be_disabled() {
        let with_defaults = Config::new().policy();
        assert_eq!(with_defaults.classify("inner__field"), Visibility::Skip);

        let without = Config::new().default_blacklist(false).policy();
        assert_eq!(without.classify("inner__field"), Visibility::NameOnly);
    }

    #[test]
    fn test_setters_accumulate() {
        let config = Config::new()
            .whitelist(["a"])
            .whitelist(vec![String::from("b")])
            .blacklist(["secret"]);
        let policy = config.policy();
        assert_eq!(policy.classify("a"), Visibility::NameAndValue);
        assert_eq!(policy.classify("b"), Visibility::NameAndValue);
        assert_eq!(policy.classify("my_secret"), Visibility::Skip);
    }
}
