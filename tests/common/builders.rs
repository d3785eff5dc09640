#![allow(dead_code)]

use cors_policy_rs::constants::{header, method};
use cors_policy_rs::{
    CorsOptions, HeaderBuffer, PolicyConfig, PolicyEngine, PreflightOutcome, RequestView,
};

#[derive(Default)]
pub struct PolicyBuilder {
    options: CorsOptions,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_origins = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn origin_patterns<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_origin_patterns = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn methods<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_methods = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_headers = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn exposed_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.supports_credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u32) -> Self {
        self.options.max_age = Some(seconds);
        self
    }

    pub fn treat_same_host_as_cors(mut self, enabled: bool) -> Self {
        self.options.treat_same_host_as_cors = enabled;
        self
    }

    pub fn build(self) -> PolicyConfig {
        PolicyConfig::new(self.options).expect("valid CORS configuration")
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

/// Minimal [`RequestView`] implementation for driving the engine in tests.
#[derive(Clone, Debug)]
pub struct TestRequest {
    method: String,
    origin: Option<String>,
    scheme: String,
    host: String,
    headers: Vec<(String, String)>,
}

impl TestRequest {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.into(),
            origin: None,
            scheme: "https".into(),
            host: "api.example.com".into(),
            headers: Vec::new(),
        }
    }

    pub fn origin(mut self, origin: &str) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.into();
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn request_method(self, value: &str) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD, value)
    }

    pub fn request_headers(self, value: &str) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS, value)
    }
}

impl RequestView for TestRequest {
    fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    fn method(&self) -> &str {
        &self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn host(&self) -> &str {
        &self.host
    }
}

/// A cross-origin `GET` from the default test origin.
pub fn simple_request() -> TestRequest {
    TestRequest::new(method::GET).origin("https://app.example.com")
}

/// A preflight probe for `POST` from the default test origin.
pub fn preflight_request() -> TestRequest {
    TestRequest::new(method::OPTIONS)
        .origin("https://app.example.com")
        .request_method(method::POST)
}

pub fn run_preflight(config: &PolicyConfig, request: &TestRequest) -> (PreflightOutcome, HeaderBuffer) {
    let engine = PolicyEngine::new(config);
    let mut response = HeaderBuffer::new();
    let outcome = engine.handle_preflight(request, &mut response);
    (outcome, response)
}

pub fn run_decorate(config: &PolicyConfig, request: &TestRequest) -> HeaderBuffer {
    decorate_existing(config, request, HeaderBuffer::new())
}

pub fn decorate_existing(
    config: &PolicyConfig,
    request: &TestRequest,
    mut response: HeaderBuffer,
) -> HeaderBuffer {
    let engine = PolicyEngine::new(config);
    engine.decorate_response(&mut response, request);
    response
}
