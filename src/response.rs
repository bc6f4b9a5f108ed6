use crate::header::Header;
use bytes::Bytes;

/// A finished response, ready to hand to whatever writes the wire format.
/// Immutable once built; the adapter producing it owns the only copy of
/// its header sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    status: u16,
    reason: String,
    headers: Vec<Header>,
    body: Bytes,
}

impl Response {
    pub fn new(
        status: u16,
        reason: impl Into<String>,
        headers: Vec<Header>,
        body: impl Into<Bytes>,
    ) -> Response {
        Response {
            status,
            reason: reason.into(),
            headers,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// The capability a handler return value needs in order to be sent back
/// to a client.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{IntoResponse, Response};
    use crate::header::Header;
    use bytes::Bytes;

    #[test]
    fn test_response_accessors() {
        let response = Response::new(
            204,
            "No Content",
            vec![Header::new("X-Trace", "abc")],
            Bytes::new(),
        );

        assert_eq!(response.status(), 204);
        assert_eq!(response.reason(), "No Content");
        assert_eq!(response.headers().len(), 1);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_response_into_response_is_identity() {
        let response = Response::new(200, "OK", vec![], "x".as_bytes().to_vec());
        assert_eq!(response.clone().into_response(), response);
    }
}
