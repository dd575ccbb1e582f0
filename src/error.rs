use failure::{Backtrace, Context, Fail};
use std::fmt;

/// The specific kind of error that can occur.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
    /// No usable credentials were supplied at construction.
    #[fail(display = "configuration error: {}", _0)]
    Configuration(String),
    /// The platform reported an error body; carries the server-supplied
    /// message.
    #[fail(display = "{}", _0)]
    Api(String),
    /// The platform rate limit was exceeded. Carries the HTTP status for
    /// future use; no call path produces this today.
    #[fail(display = "rate limit exceeded (http status {})", _0)]
    RateLimit(u16),
    /// A transport-level failure.
    #[fail(display = "http error: {}", _0)]
    Http(String),
    /// A serialization / deserialization error
    #[fail(display = "serialization error: {}", _0)]
    Serde(String),
}

/// An error that can occur while interacting with the Revere API
#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        self.inner.get_context()
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Context::new(kind),
        }
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(inner: Context<ErrorKind>) -> Error {
        Error { inner }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        Error {
            inner: Context::new(ErrorKind::Http(err.to_string())),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error {
            inner: Context::new(ErrorKind::Serde(err.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message() {
        let err: Error = ErrorKind::Api("list not found".to_string()).into();
        assert_eq!(err.to_string(), "list not found");
        assert_eq!(err.kind(), &ErrorKind::Api("list not found".to_string()));
    }

    #[test]
    fn test_configuration_error_display() {
        let err: Error = ErrorKind::Configuration("no key".to_string()).into();
        assert_eq!(err.to_string(), "configuration error: no key");
    }
}
