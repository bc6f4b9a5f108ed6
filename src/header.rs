use std::fmt;

/// A single header field. Responses carry headers as an ordered
/// `Vec<Header>`; duplicate names are allowed and kept side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    name: String,
    value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Header {
        Header {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Header {
    fn from((name, value): (N, V)) -> Header {
        Header::new(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::Header;

    #[test]
    fn test_header_display_is_field_line() {
        let header = Header::new("X-Trace", "abc");
        assert_eq!(header.to_string(), "X-Trace: abc");
    }

    #[test]
    fn test_header_from_pair() {
        let header = Header::from(("Cache-Control", "no-store"));
        assert_eq!(header.name(), "Cache-Control");
        assert_eq!(header.value(), "no-store");
    }
}
