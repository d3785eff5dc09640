#![allow(dead_code)]

use super::headers::{access_control_headers, header_value, vary_tokens};
use cors_policy_rs::HeaderBuffer;

pub fn assert_header_eq(response: &HeaderBuffer, name: &str, expected: &str) {
    assert_eq!(
        header_value(response, name),
        Some(expected),
        "unexpected value for `{name}`"
    );
}

pub fn assert_vary_eq<const N: usize>(response: &HeaderBuffer, expected: [&str; N]) {
    let expected = expected
        .iter()
        .map(|token| token.to_string())
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(vary_tokens(response), expected);
}

pub fn assert_vary_is_empty(response: &HeaderBuffer) {
    assert!(
        vary_tokens(response).is_empty(),
        "expected no Vary tokens, got {:?}",
        vary_tokens(response)
    );
}

pub fn assert_no_cors_headers(response: &HeaderBuffer) {
    let present = access_control_headers(response);
    assert!(
        present.is_empty(),
        "expected no Access-Control-* headers, got {present:?}"
    );
}
