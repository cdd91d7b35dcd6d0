use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::matcher::{has_wildcard, match_chars, ANY_RUN};

/// A subscription pattern compiled for repeated matching.
///
/// Dispatchers test the same pattern against many event names, so the
/// pattern is split into characters once, with runs of `*` collapsed. A
/// pattern without wildcards is matched by plain string equality.
///
/// Serializes as the original pattern string.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Pattern {
    source: String,
    chars: Vec<char>,
    literal: bool,
}

impl Pattern {
    /// Compile a pattern. Never fails; any string is a valid pattern.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let literal = !has_wildcard(&source);

        let mut chars: Vec<char> = Vec::with_capacity(source.len());
        if !literal {
            for c in source.chars() {
                if c == ANY_RUN && chars.last() == Some(&ANY_RUN) {
                    continue;
                }
                chars.push(c);
            }
        }

        Self {
            source,
            chars,
            literal,
        }
    }

    /// Returns `true` if `name` is matched in full by this pattern.
    pub fn matches(&self, name: &str) -> bool {
        if self.literal {
            return self.source == name;
        }
        if self.chars == [ANY_RUN] {
            return true;
        }
        let name: Vec<char> = name.chars().collect();
        match_chars(&self.chars, &name)
    }

    /// Returns `true` if the pattern contains no wildcard characters.
    pub fn is_literal(&self) -> bool {
        self.literal
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl std::hash::Hash for Pattern {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}
