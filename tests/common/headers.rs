#![allow(dead_code)]

use cors_policy_rs::constants::header;
use cors_policy_rs::{HeaderBuffer, ResponseSink};
use std::collections::HashSet;

pub fn header_value<'a>(response: &'a HeaderBuffer, name: &str) -> Option<&'a str> {
    response.get_header(name)
}

pub fn has_header(response: &HeaderBuffer, name: &str) -> bool {
    response.has_header(name)
}

pub fn vary_tokens(response: &HeaderBuffer) -> HashSet<String> {
    response
        .get_header(header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect::<HashSet<_>>()
        })
        .unwrap_or_default()
}

/// Names of every `Access-Control-*` header present on the response.
pub fn access_control_headers(response: &HeaderBuffer) -> Vec<String> {
    response
        .iter()
        .filter(|(name, _)| name.to_ascii_lowercase().starts_with("access-control-"))
        .map(|(name, _)| name.to_string())
        .collect()
}
