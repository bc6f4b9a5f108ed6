use std::borrow::Cow;
use std::fmt;

/// Anything that can render itself as an HTML string. That is the whole
/// contract; escaping and well-formedness are the implementor's business.
pub trait HtmlEncodable {
    fn to_html(&self) -> String;
}

/// A blob of already-rendered HTML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub fn new(html: impl Into<String>) -> Html {
        Html(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl HtmlEncodable for Html {
    fn to_html(&self) -> String {
        self.0.clone()
    }
}

impl HtmlEncodable for String {
    fn to_html(&self) -> String {
        self.clone()
    }
}

impl HtmlEncodable for &str {
    fn to_html(&self) -> String {
        (*self).to_string()
    }
}

impl HtmlEncodable for Cow<'_, str> {
    fn to_html(&self) -> String {
        self.clone().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{Html, HtmlEncodable};
    use std::borrow::Cow;

    #[test]
    fn test_html_renders_verbatim() {
        let html = Html::new("<p>hello</p>");
        assert_eq!(html.as_str(), "<p>hello</p>");
        assert_eq!(html.to_html(), "<p>hello</p>");
        assert_eq!(html.to_string(), "<p>hello</p>");
    }

    #[test]
    fn test_plain_strings_are_encodable() {
        assert_eq!("<br>".to_html(), "<br>");
        assert_eq!(String::from("<br>").to_html(), "<br>");
        assert_eq!(Cow::Borrowed("<br>").to_html(), "<br>");
    }
}
