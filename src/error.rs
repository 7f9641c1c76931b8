use std::error;
use std::fmt;
use std::io;
use std::result;

#[derive(Debug)]
pub enum Error {
    IndexOutOfBounds { index: usize, len: usize },
    InvalidRange { left: usize, right: usize },
    InvalidConfig(&'static str),
    IOError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {} is out of bounds for length {}", index, len)
            },
            Error::InvalidRange { left, right } => {
                write!(f, "invalid range [{}, {}]: left bound exceeds right bound", left, right)
            },
            Error::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            Error::IOError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_display() {
        let err = Error::IndexOutOfBounds { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 is out of bounds for length 3");

        let err = Error::InvalidRange { left: 4, right: 2 };
        assert_eq!(err.to_string(), "invalid range [4, 2]: left bound exceeds right bound");
    }

    #[test]
    fn test_io_source() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, "closed"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "closed");
        assert!(Error::InvalidConfig("zero").source().is_none());
    }
}
