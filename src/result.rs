/// Outcome of a preflight evaluation, mapped directly onto the status the
/// host should send. A rejecting outcome leaves the response free of CORS
/// headers; an allowing one means the preflight response is complete and must
/// not be forwarded to application routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreflightOutcome {
    Allowed,
    OriginNotAllowed,
    MethodNotAllowed,
    HeaderNotAllowed,
}

impl PreflightOutcome {
    pub fn status(self) -> u16 {
        match self {
            Self::Allowed => 204,
            Self::OriginNotAllowed | Self::HeaderNotAllowed => 403,
            Self::MethodNotAllowed => 405,
        }
    }

    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}
