use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::{AllowedOrigins, OriginPattern, PatternError};
use thiserror::Error;

/// Raw administrator-supplied policy, mirroring the configuration mapping the
/// host loads (`allowed_origins`, `allowed_origin_patterns`, and so on).
/// Passed to [`PolicyConfig::new`], which normalizes the input exactly once.
#[derive(Clone, Debug, Default)]
pub struct CorsOptions {
    /// Origin allow-list; `"*"` anywhere collapses the field to the wildcard.
    pub allowed_origins: Vec<String>,
    /// Regex source strings, matched full-string against the normalized
    /// origin when the exact allow-list misses.
    pub allowed_origin_patterns: Vec<String>,
    /// Method allow-list; `"*"` collapses to the wildcard.
    pub allowed_methods: Vec<String>,
    /// Request-header allow-list; `"*"` collapses to the wildcard.
    pub allowed_headers: Vec<String>,
    /// Header names exposed on actual responses, verbatim case.
    pub exposed_headers: Vec<String>,
    pub supports_credentials: bool,
    /// Preflight cache lifetime in seconds. `None` suppresses the header;
    /// `Some(0)` emits `Access-Control-Max-Age: 0`.
    pub max_age: Option<u32>,
    /// When true, a request whose `Origin` equals its own scheme and host is
    /// still treated as a CORS request instead of being passed through.
    pub treat_same_host_as_cors: bool,
}

/// Immutable, normalized CORS policy. Built once per process from
/// [`CorsOptions`] and shared by reference across concurrent evaluations;
/// request-time matching never re-normalizes.
#[derive(Clone, Debug)]
pub struct PolicyConfig {
    allowed_origins: AllowedOrigins,
    allowed_origin_patterns: Vec<OriginPattern>,
    allowed_methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    exposed_headers: ExposedHeaders,
    supports_credentials: bool,
    max_age: Option<u32>,
    treat_same_host_as_cors: bool,
    methods_line: String,
    headers_line: String,
    exposed_line: String,
}

impl PolicyConfig {
    /// Validates and normalizes the raw options. Malformed origin patterns
    /// fail here, never at request evaluation time.
    pub fn new(options: CorsOptions) -> Result<Self, ConfigError> {
        let allowed_origins = AllowedOrigins::normalize(&options.allowed_origins);

        let allowed_origin_patterns = options
            .allowed_origin_patterns
            .iter()
            .map(|pattern| {
                OriginPattern::compile(pattern).map_err(|source| {
                    ConfigError::InvalidOriginPattern {
                        pattern: pattern.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let allowed_methods = AllowedMethods::normalize(&options.allowed_methods);
        let allowed_headers = AllowedHeaders::normalize(&options.allowed_headers);
        let exposed_headers = ExposedHeaders::normalize(options.exposed_headers);

        let methods_line = allowed_methods.join().unwrap_or_default();
        let headers_line = allowed_headers.join().unwrap_or_default();
        let exposed_line = exposed_headers.join();

        Ok(Self {
            allowed_origins,
            allowed_origin_patterns,
            allowed_methods,
            allowed_headers,
            exposed_headers,
            supports_credentials: options.supports_credentials,
            max_age: options.max_age,
            treat_same_host_as_cors: options.treat_same_host_as_cors,
            methods_line,
            headers_line,
            exposed_line,
        })
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    pub fn allowed_origin_patterns(&self) -> &[OriginPattern] {
        &self.allowed_origin_patterns
    }

    pub fn allowed_methods(&self) -> &AllowedMethods {
        &self.allowed_methods
    }

    pub fn allowed_headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> &ExposedHeaders {
        &self.exposed_headers
    }

    pub fn supports_credentials(&self) -> bool {
        self.supports_credentials
    }

    pub fn max_age(&self) -> Option<u32> {
        self.max_age
    }

    pub fn treat_same_host_as_cors(&self) -> bool {
        self.treat_same_host_as_cors
    }

    /// True iff the origin set is finite with exactly one entry and no
    /// patterns are configured. Patterns can match more than the literal set,
    /// which makes the single-origin fast path unsafe.
    pub fn is_single_origin_allowed(&self) -> bool {
        self.allowed_origin_patterns.is_empty() && self.allowed_origins.single().is_some()
    }

    /// The sole allowed origin, present only when
    /// [`is_single_origin_allowed`](Self::is_single_origin_allowed) holds.
    pub fn first_allowed_origin(&self) -> Option<&str> {
        if self.allowed_origin_patterns.is_empty() {
            self.allowed_origins.single()
        } else {
            None
        }
    }

    /// Comma-joined method list, empty for the wildcard.
    pub fn methods_line(&self) -> &str {
        &self.methods_line
    }

    /// Comma-joined lower-cased header list, empty for the wildcard.
    pub fn headers_line(&self) -> &str {
        &self.headers_line
    }

    /// `", "`-joined exposed-header list.
    pub fn exposed_line(&self) -> &str {
        &self.exposed_line
    }
}

/// Configuration errors surfaced at [`PolicyConfig`] construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid origin pattern `{pattern}`")]
    InvalidOriginPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
