//! Executor types
//!
//! [`RawResponse`] is the boundary between the transport and response
//! classification: the terminal state of one page request, whatever that
//! state turned out to be.

/// Terminal transport-level state of one page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Page number the request was issued for
    pub page: u64,
    /// HTTP status code, or 0 when no response was received
    pub status: u16,
    /// Raw response body (empty when no response was received)
    pub body: String,
    /// Whether the request exceeded the transport timeout
    pub timed_out: bool,
    /// Transport error message when no HTTP response arrived
    pub transport_error: Option<String>,
}

impl RawResponse {
    /// A response with an HTTP status and body
    pub fn http(page: u64, status: u16, body: impl Into<String>) -> Self {
        Self {
            page,
            status,
            body: body.into(),
            timed_out: false,
            transport_error: None,
        }
    }

    /// A request that exceeded the transport timeout
    pub fn timed_out(page: u64) -> Self {
        Self {
            page,
            status: 0,
            body: String::new(),
            timed_out: true,
            transport_error: None,
        }
    }

    /// A request that failed before any HTTP response arrived
    pub fn no_response(page: u64, message: impl Into<String>) -> Self {
        Self {
            page,
            status: 0,
            body: String::new(),
            timed_out: false,
            transport_error: Some(message.into()),
        }
    }

    /// Whether the status indicates success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = RawResponse::http(1, 200, "[]");
        assert!(ok.is_success());
        assert!(!ok.timed_out);

        let timeout = RawResponse::timed_out(2);
        assert!(timeout.timed_out);
        assert_eq!(timeout.status, 0);

        let dead = RawResponse::no_response(3, "connection refused");
        assert_eq!(dead.status, 0);
        assert_eq!(dead.transport_error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_is_success_bounds() {
        assert!(RawResponse::http(1, 299, "").is_success());
        assert!(!RawResponse::http(1, 300, "").is_success());
        assert!(!RawResponse::http(1, 199, "").is_success());
        assert!(!RawResponse::no_response(1, "dns").is_success());
    }
}
