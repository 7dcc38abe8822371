use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PointerSegment {
    Key(String),
    Index(usize),
}

/// Location inside a JSON document, rendered in URI fragment form
/// (`#/paths/~1api~1v1~1pods/get`), which is also the shape of `$ref` targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JsonPointer {
    segments: Vec<PointerSegment>,
}

impl JsonPointer {
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    pub fn from_segments(segments: Vec<PointerSegment>) -> Self {
        Self { segments }
    }

    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: keys
                .into_iter()
                .map(|key| PointerSegment::Key(key.into()))
                .collect(),
        }
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PointerSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PointerSegment::Index(index));
    }

    pub fn child_key(&self, key: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push_key(key);
        child
    }

    pub fn child_index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.push_index(index);
        child
    }

    /// Returns the key segments when every segment is a key. Parsed pointers
    /// never carry index segments, so this is the usual way to inspect a `$ref`.
    pub fn keys(&self) -> Option<Vec<&str>> {
        self.segments
            .iter()
            .map(|segment| match segment {
                PointerSegment::Key(key) => Some(key.as_str()),
                PointerSegment::Index(_) => None,
            })
            .collect()
    }
}

impl Default for JsonPointer {
    fn default() -> Self {
        Self::root()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum JsonPointerParseError {
    #[error("json pointer must be empty or start with '/' (optionally after '#')")]
    MissingLeadingSlash,
    #[error("invalid escape sequence in segment `{0}`")]
    InvalidEscape(String),
}

impl std::str::FromStr for JsonPointer {
    type Err = JsonPointerParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let body = input.strip_prefix('#').unwrap_or(input);
        if body.is_empty() {
            return Ok(JsonPointer::root());
        }
        let Some(rest) = body.strip_prefix('/') else {
            return Err(JsonPointerParseError::MissingLeadingSlash);
        };

        let mut segments = Vec::new();
        for raw in rest.split('/') {
            segments.push(PointerSegment::Key(unescape_segment(raw)?));
        }
        Ok(JsonPointer::from_segments(segments))
    }
}

fn unescape_segment(raw: &str) -> Result<String, JsonPointerParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return Err(JsonPointerParseError::InvalidEscape(raw.to_string())),
        }
    }
    Ok(out)
}

fn escape_segment(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

impl Display for JsonPointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#")?;
        for segment in &self.segments {
            match segment {
                PointerSegment::Key(key) => write!(f, "/{}", escape_segment(key))?,
                PointerSegment::Index(index) => write!(f, "/{index}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_pointer_test.rs"]
mod tests;
