/// Read-only view of an inbound HTTP request.
///
/// Implemented by the host framework's request type; the engine only ever
/// reads already-parsed header strings through it.
pub trait RequestView {
    /// Raw `Origin` header value, when present.
    fn origin(&self) -> Option<&str>;

    /// HTTP method token of the request itself.
    fn method(&self) -> &str;

    /// Arbitrary request header lookup by canonical name.
    fn header(&self, name: &str) -> Option<&str>;

    /// Scheme of the request's own transport (`http` or `https`).
    fn scheme(&self) -> &str;

    /// Host (and optional port) the request was addressed to.
    fn host(&self) -> &str;
}
