pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod config;
mod engine;
mod exposed_headers;
mod origin;
mod request;
mod response;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsOptions, PolicyConfig};
pub use engine::PolicyEngine;
pub use exposed_headers::ExposedHeaders;
pub use origin::{AllowedOrigins, OriginPattern, PatternError};
pub use request::RequestView;
pub use response::{HeaderBuffer, ResponseSink, add_vary_token};
pub use result::PreflightOutcome;
