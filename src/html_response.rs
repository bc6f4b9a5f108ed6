use crate::errors::Error;
use crate::header::Header;
use crate::html::HtmlEncodable;
use crate::response::{IntoResponse, Response};
use crate::status::{reason_phrase, StatusCode};
use paste::paste;

const CONTENT_TYPE_NAME: &str = "Content-Type";
const CONTENT_TYPE_VALUE: &str = "text/html; charset=utf-8";

macro_rules! status_shortcut {
    ($(
        $(#[$docs:meta])*
        ($name:ident);
    )*) => {
        $(
            paste! {
                $(#[$docs])*
                pub fn [<$name:lower>](body: B) -> HtmlResponse<B> {
                    HtmlResponse::with_status(StatusCode::$name.as_u16(), body)
                }
            }
        )*
    };
}

/// A response whose body is a blob of HTML. Converting it appends a
/// `Content-Type: text/html; charset=utf-8` header and resolves the
/// reason phrase for the status code.
#[derive(Clone, Debug, PartialEq)]
pub struct HtmlResponse<B> {
    status: u16,
    headers: Vec<Header>,
    body: B,
}

impl<B: HtmlEncodable> HtmlResponse<B> {
    /// Status 200 and no extra headers.
    pub fn new(body: B) -> HtmlResponse<B> {
        HtmlResponse::with_headers(200, Vec::new(), body)
    }

    /// No extra headers. The status is passed through unchecked; an
    /// out-of-range integer is the caller's to answer for.
    pub fn with_status(status: u16, body: B) -> HtmlResponse<B> {
        HtmlResponse::with_headers(status, Vec::new(), body)
    }

    pub fn with_headers(
        status: u16,
        headers: Vec<Header>,
        body: B,
    ) -> HtmlResponse<B> {
        HtmlResponse {
            status,
            headers,
            body,
        }
    }

    pub fn builder() -> HtmlResponseBuilder<B> {
        HtmlResponseBuilder::new()
    }

    status_shortcut! {
        (OK);
        (CREATED);
        (ACCEPTED);
        (NO_CONTENT);
        (MOVED_PERMANENTLY);
        (FOUND);
        (SEE_OTHER);
        (BAD_REQUEST);
        (UNAUTHORIZED);
        (FORBIDDEN);
        (NOT_FOUND);
        (METHOD_NOT_ALLOWED);
        (CONFLICT);
        (UNPROCESSABLE_ENTITY);
        (TOO_MANY_REQUESTS);
        (INTERNAL_SERVER_ERROR);
        (SERVICE_UNAVAILABLE);
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn body(&self) -> &B {
        &self.body
    }
}

impl<B: HtmlEncodable> IntoResponse for HtmlResponse<B> {
    fn into_response(self) -> Response {
        let HtmlResponse {
            status,
            mut headers,
            body,
        } = self;

        // Appended unconditionally. A caller-supplied Content-Type stays
        // in place and the two ride along side by side.
        headers.push(Header::new(CONTENT_TYPE_NAME, CONTENT_TYPE_VALUE));

        let html = body.to_html();
        Response::new(status, reason_phrase(status), headers, html.into_bytes())
    }
}

/// Piece-wise construction of an [HtmlResponse]. Unlike the constructors,
/// which default what is not given, the builder insists that a header
/// sequence and a body were actually supplied.
#[derive(Debug)]
pub struct HtmlResponseBuilder<B> {
    status: u16,
    headers: Option<Vec<Header>>,
    body: Option<B>,
}

impl<B: HtmlEncodable> HtmlResponseBuilder<B> {
    pub fn new() -> HtmlResponseBuilder<B> {
        HtmlResponseBuilder {
            status: 200,
            headers: None,
            body: None,
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn headers(mut self, headers: Vec<Header>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn header(mut self, header: impl Into<Header>) -> Self {
        self.headers.get_or_insert_with(Vec::new).push(header.into());
        self
    }

    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Result<HtmlResponse<B>, Error> {
        let headers = self.headers.ok_or(Error::MissingHeaders)?;
        let body = self.body.ok_or(Error::MissingBody)?;

        Ok(HtmlResponse::with_headers(self.status, headers, body))
    }
}

impl<B: HtmlEncodable> Default for HtmlResponseBuilder<B> {
    fn default() -> Self {
        HtmlResponseBuilder::new()
    }
}
