use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered list of substrings; a path key is kept when it contains any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathWhitelist {
    patterns: Vec<String>,
}

impl PathWhitelist {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn first_match(&self, key: &str) -> Option<&str> {
        self.patterns
            .iter()
            .map(String::as_str)
            .find(|pattern| key.contains(*pattern))
    }

    pub fn matches(&self, key: &str) -> bool {
        self.first_match(key).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathFilterOutcome {
    pub retained: Map<String, Value>,
    pub dropped: Vec<String>,
}

pub fn filter_paths(paths: Map<String, Value>, whitelist: &PathWhitelist) -> PathFilterOutcome {
    let mut outcome = PathFilterOutcome::default();
    for (key, item) in paths {
        if whitelist.matches(key.as_str()) {
            outcome.retained.insert(key, item);
        } else {
            outcome.dropped.push(key);
        }
    }
    outcome
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
