use crate::config::PolicyConfig;
use crate::constants::{header, method};
use crate::request::RequestView;
use crate::response::{ResponseSink, add_vary_token};
use crate::result::PreflightOutcome;
use crate::util::{normalize_upper, trim_trailing_slashes};

/// Stateless evaluator binding a shared [`PolicyConfig`] to per-request
/// classification, matching, and response-header synthesis.
#[derive(Clone, Copy, Debug)]
pub struct PolicyEngine<'a> {
    config: &'a PolicyConfig,
}

impl<'a> PolicyEngine<'a> {
    pub fn new(config: &'a PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a PolicyConfig {
        self.config
    }

    pub fn has_origin<R: RequestView + ?Sized>(&self, request: &R) -> bool {
        request.origin().is_some_and(|origin| !origin.is_empty())
    }

    /// The request's `Origin` value with trailing slashes trimmed, or the
    /// empty string when the header is absent.
    pub fn origin_of<'r, R: RequestView + ?Sized>(&self, request: &'r R) -> &'r str {
        trim_trailing_slashes(request.origin().unwrap_or(""))
    }

    /// Compares the request's origin against its own `scheme://host`.
    pub fn is_same_host<R: RequestView + ?Sized>(&self, request: &R) -> bool {
        let own = format!("{}://{}", request.scheme(), request.host());
        self.origin_of(request) == own
    }

    /// A request is a CORS request when it carries an `Origin` header that
    /// differs from its own host. Same-host requests can be pulled back into
    /// CORS handling via `treat_same_host_as_cors`.
    pub fn is_cors_request<R: RequestView + ?Sized>(&self, request: &R) -> bool {
        self.has_origin(request)
            && (self.config.treat_same_host_as_cors() || !self.is_same_host(request))
    }

    /// True for CORS `OPTIONS` requests carrying
    /// `Access-Control-Request-Method`. A bare `OPTIONS` without it is not a
    /// preflight and belongs to normal routing.
    pub fn is_preflight_request<R: RequestView + ?Sized>(&self, request: &R) -> bool {
        self.is_cors_request(request)
            && request.method().eq_ignore_ascii_case(method::OPTIONS)
            && request
                .header(header::ACCESS_CONTROL_REQUEST_METHOD)
                .is_some_and(|value| !value.is_empty())
    }

    /// Wildcard passes unconditionally; otherwise the normalized origin must
    /// match the exact set, then the configured patterns in order.
    pub fn is_origin_allowed<R: RequestView + ?Sized>(&self, request: &R) -> bool {
        if self.config.allowed_origins().is_any() {
            return true;
        }
        if !self.has_origin(request) {
            return false;
        }

        let origin = self.origin_of(request);
        if self.config.allowed_origins().contains(origin) {
            return true;
        }

        self.config
            .allowed_origin_patterns()
            .iter()
            .any(|pattern| pattern.matches(origin))
    }

    /// Compares the upper-cased `Access-Control-Request-Method` value against
    /// the configured set; an absent header is treated as the empty string.
    pub fn is_method_allowed<R: RequestView + ?Sized>(&self, request: &R) -> bool {
        let requested = request
            .header(header::ACCESS_CONTROL_REQUEST_METHOD)
            .unwrap_or("");
        self.config.allowed_methods().allows(requested)
    }

    fn are_request_headers_allowed<R: RequestView + ?Sized>(&self, request: &R) -> bool {
        let requested = request
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .unwrap_or("");
        self.config.allowed_headers().allows_all(requested)
    }

    /// Evaluates a preflight request, writing the full header set to
    /// `response` when allowed. Rejections leave the response untouched; the
    /// outcome carries the status to send either way, and the caller must not
    /// forward the request to application logic.
    pub fn handle_preflight<R, S>(&self, request: &R, response: &mut S) -> PreflightOutcome
    where
        R: RequestView + ?Sized,
        S: ResponseSink + ?Sized,
    {
        if !self.is_origin_allowed(request) {
            return PreflightOutcome::OriginNotAllowed;
        }
        if !self.is_method_allowed(request) {
            return PreflightOutcome::MethodNotAllowed;
        }
        if !self.are_request_headers_allowed(request) {
            return PreflightOutcome::HeaderNotAllowed;
        }

        self.apply_allow_origin(response, request);
        self.apply_credentials(response);
        self.apply_allow_methods(response, request);
        self.apply_allow_headers(response, request);
        self.apply_max_age(response);

        PreflightOutcome::Allowed
    }

    /// Decorates an actual response after the downstream handler ran. When
    /// the origin step sets no allow-origin header, the response passes
    /// through unchanged apart from any `Vary` accumulation; the browser
    /// enforces the block client-side.
    pub fn decorate_response<S, R>(&self, response: &mut S, request: &R)
    where
        S: ResponseSink + ?Sized,
        R: RequestView + ?Sized,
    {
        if !self.apply_allow_origin(response, request) {
            return;
        }

        self.apply_credentials(response);
        self.apply_expose_headers(response);
    }

    /// Three-branch allow-origin rule shared by both entry points. Returns
    /// whether an `Access-Control-Allow-Origin` header was set.
    ///
    /// Wildcard without credentials emits a cacheable literal `*`; a single
    /// configured origin is emitted as-is; every other shape is dynamic and
    /// echoes the request's origin when allowed, appending `Origin` to `Vary`
    /// regardless of the outcome.
    fn apply_allow_origin<S, R>(&self, response: &mut S, request: &R) -> bool
    where
        S: ResponseSink + ?Sized,
        R: RequestView + ?Sized,
    {
        if self.config.allowed_origins().is_any() && !self.config.supports_credentials() {
            response.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            return true;
        }

        if let Some(origin) = self.config.first_allowed_origin() {
            response.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            return true;
        }

        let allowed = self.is_cors_request(request) && self.is_origin_allowed(request);
        if allowed {
            let origin = self.origin_of(request);
            response.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        add_vary_token(response, header::ORIGIN);

        allowed
    }

    fn apply_credentials<S: ResponseSink + ?Sized>(&self, response: &mut S) {
        if self.config.supports_credentials() {
            response.set_header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    fn apply_allow_methods<S, R>(&self, response: &mut S, request: &R)
    where
        S: ResponseSink + ?Sized,
        R: RequestView + ?Sized,
    {
        if self.config.allowed_methods().is_any() {
            add_vary_token(response, header::ACCESS_CONTROL_REQUEST_METHOD);
            if let Some(requested) = request.header(header::ACCESS_CONTROL_REQUEST_METHOD)
                && !requested.is_empty()
            {
                let echoed = normalize_upper(requested);
                response.set_header(header::ACCESS_CONTROL_ALLOW_METHODS, &echoed);
            }
        } else if !self.config.methods_line().is_empty() {
            response.set_header(header::ACCESS_CONTROL_ALLOW_METHODS, self.config.methods_line());
        }
    }

    fn apply_allow_headers<S, R>(&self, response: &mut S, request: &R)
    where
        S: ResponseSink + ?Sized,
        R: RequestView + ?Sized,
    {
        if self.config.allowed_headers().is_any() {
            add_vary_token(response, header::ACCESS_CONTROL_REQUEST_HEADERS);
            if let Some(requested) = request.header(header::ACCESS_CONTROL_REQUEST_HEADERS)
                && !requested.is_empty()
            {
                response.set_header(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
            }
        } else if !self.config.headers_line().is_empty() {
            response.set_header(header::ACCESS_CONTROL_ALLOW_HEADERS, self.config.headers_line());
        }
    }

    fn apply_max_age<S: ResponseSink + ?Sized>(&self, response: &mut S) {
        if let Some(seconds) = self.config.max_age() {
            response.set_header(header::ACCESS_CONTROL_MAX_AGE, &seconds.to_string());
        }
    }

    /// Restricts the configured exposed headers to those actually present on
    /// the response, preserving configured order; the header is omitted when
    /// the intersection is empty.
    fn apply_expose_headers<S: ResponseSink + ?Sized>(&self, response: &mut S) {
        let exposed = self.config.exposed_headers();
        if exposed.is_empty() {
            return;
        }

        let present = exposed
            .iter()
            .filter(|name| response.has_header(name))
            .collect::<Vec<_>>();
        if present.is_empty() {
            return;
        }

        let value = present.join(", ");
        response.set_header(header::ACCESS_CONTROL_EXPOSE_HEADERS, &value);
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
