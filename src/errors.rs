use std::fmt;

macro_rules! errors {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $phrase:expr);
        )+
    ) => {
        #[derive(Clone, Debug)]
        pub enum Error {
            $(
                $(#[$docs])*
                $name,
            )+
        }

        impl Error {
            fn desc(&self) -> &'static str {
                match &*self {
                    $(
                        Error::$name => $phrase,
                    )+
                }
            }
        }

        impl fmt::Display for Error {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.desc())
            }
        }

        impl std::error::Error for Error {}
    };
}

errors! {
    /// The builder was finished without a header sequence.
    (MissingHeaders, "A header sequence is required, even if empty");
    /// The builder was finished without a body.
    (MissingBody, "An html-encodable body is required");
}
