use crate::util::trim_trailing_slashes;
use indexmap::IndexSet;
use regex_automata::meta::{BuildError, Regex};
use std::time::{Duration, Instant};
use thiserror::Error;

const WILDCARD: &str = "*";

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;

/// Normalized `allowed_origins` field: either the wildcard sentinel or a
/// finite, insertion-ordered set of `scheme://host[:port]` entries.
#[derive(Clone, Debug)]
pub enum AllowedOrigins {
    Any,
    List(IndexSet<String>),
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::List(IndexSet::new())
    }
}

impl AllowedOrigins {
    /// Normalizes raw origin entries into their final matchable form.
    ///
    /// A literal `*` anywhere in the input collapses the whole field to
    /// [`AllowedOrigins::Any`]. Otherwise every entry is stripped of trailing
    /// slashes and, when it carries no scheme, expanded into both the
    /// `http://` and `https://` forms; entries starting with `//` keep their
    /// authority and gain both schemes. Input order is preserved.
    pub fn normalize<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut origins = IndexSet::new();

        for value in values {
            let value = value.as_ref();
            if value == WILDCARD {
                return Self::Any;
            }

            let origin = trim_trailing_slashes(value);
            if let Some(suffix) = origin.strip_prefix("//") {
                origins.insert(format!("http://{suffix}"));
                origins.insert(format!("https://{suffix}"));
            } else if !origin.starts_with("http") {
                origins.insert(format!("http://{origin}"));
                origins.insert(format!("https://{origin}"));
            } else {
                origins.insert(origin.to_owned());
            }
        }

        Self::List(origins)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Exact membership test against the normalized set. Always true for the
    /// wildcard sentinel.
    pub fn contains(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(origins) => origins.contains(origin),
        }
    }

    /// The sole entry when the set is finite and holds exactly one origin.
    pub fn single(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::List(origins) if origins.len() == 1 => origins.first().map(String::as_str),
            Self::List(_) => None,
        }
    }
}

/// A compiled `allowed_origin_patterns` entry. The source pattern is wrapped
/// in `^(?:…)$` so matching is always full-string, never substring search.
#[derive(Clone, Debug)]
pub struct OriginPattern {
    source: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > PATTERN_COMPILE_BUDGET {
            return Err(PatternError::Timeout {
                elapsed,
                budget: PATTERN_COMPILE_BUDGET,
            });
        }

        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.regex.is_match(origin.as_bytes())
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Reasons an `allowed_origin_patterns` entry is rejected at configuration
/// time rather than evaluated per request.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern took {elapsed:?}, exceeding the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
