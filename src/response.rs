use crate::constants::header;
use indexmap::IndexMap;

/// Write-only facade over an outbound HTTP response.
///
/// Implemented by the host framework's response type; the engine mutates the
/// response exclusively through these three operations.
pub trait ResponseSink {
    fn set_header(&mut self, name: &str, value: &str);

    fn get_header(&self, name: &str) -> Option<&str>;

    fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }
}

/// Appends a token to the response's `Vary` header, creating the header when
/// absent and skipping tokens already listed. Token comparison is
/// case-sensitive; the engine only ever passes canonical header names.
pub fn add_vary_token<S: ResponseSink + ?Sized>(response: &mut S, token: &str) {
    let existing = response.get_header(header::VARY).map(str::to_owned);

    match existing {
        None => response.set_header(header::VARY, token),
        Some(value) => {
            if !value.split(", ").any(|entry| entry == token) {
                let appended = format!("{value}, {token}");
                response.set_header(header::VARY, &appended);
            }
        }
    }
}

/// Insertion-ordered header map implementing [`ResponseSink`], for hosts that
/// collect the engine's mutations before applying them to a concrete
/// response, and for tests.
#[derive(Clone, Debug, Default)]
pub struct HeaderBuffer {
    headers: IndexMap<String, String>,
}

impl HeaderBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl ResponseSink for HeaderBuffer {
    fn set_header(&mut self, name: &str, value: &str) {
        // Replacing through the original key keeps the first-seen name case
        // and the header's position in the map.
        if let Some(existing) = self
            .headers
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned()
        {
            self.headers.insert(existing, value.to_owned());
        } else {
            self.headers.insert(name.to_owned(), value.to_owned());
        }
    }

    fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
