use crate::util::normalize_lower;
use indexmap::IndexSet;

/// Normalized `allowed_headers` field: the wildcard sentinel or an ordered
/// set of lower-cased header-name tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    Any,
    List(IndexSet<String>),
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::List(IndexSet::new())
    }
}

impl AllowedHeaders {
    /// Lower-cases every entry; a literal `*` anywhere collapses the field to
    /// [`AllowedHeaders::Any`].
    pub fn normalize<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut headers = IndexSet::new();

        for value in values {
            let value = value.as_ref();
            if value == "*" {
                return Self::Any;
            }
            headers.insert(normalize_lower(value));
        }

        Self::List(headers)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Checks an `Access-Control-Request-Headers` value: every comma-separated
    /// token, trimmed and lower-cased, must be allow-listed. An empty value
    /// passes, and the check is skipped entirely for the wildcard sentinel.
    pub fn allows_all(&self, requested: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(headers) => requested
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .all(|token| headers.contains(normalize_lower(token).as_str())),
        }
    }

    /// Comma-joined header line for the finite case.
    pub fn join(&self) -> Option<String> {
        match self {
            Self::Any => None,
            Self::List(headers) => Some(
                headers
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
