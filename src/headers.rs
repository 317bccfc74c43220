use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::constants::header;

/// Response headers produced by the gate, in insertion order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &str, value: impl Into<String>) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name.to_string(), value.into());
        }
    }

    /// Merge one or more tokens into the `Vary` header, deduplicating
    /// case-insensitively so repeated builders never stack `Origin, Origin`.
    pub(crate) fn add_vary(&mut self, value: impl Into<String>) {
        let incoming = value.into();
        for token in incoming.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match self.headers.entry(header::VARY.to_string()) {
                Entry::Occupied(mut slot) => {
                    let existing = slot.get_mut();
                    let present = existing
                        .split(',')
                        .map(str::trim)
                        .any(|entry| entry.eq_ignore_ascii_case(token));
                    if !present {
                        existing.push_str(", ");
                        existing.push_str(token);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(token.to_string());
                }
            }
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            if name.eq_ignore_ascii_case(header::VARY) {
                self.add_vary(value);
            } else {
                self.headers.insert(name, value);
            }
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
