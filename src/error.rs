//! Error types surfaced by parsing.
//!
//! Each variant maps to a distinct cause, so a caller can tell a malformed
//! container type apart from bad user input.

use thiserror::Error;

/// Errors that can occur while filling an options container.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The container type itself is malformed. Never caused by user input.
    #[error("invalid options definition: {0}")]
    Configuration(String),

    /// The supplied arguments are malformed.
    #[error("{0}")]
    Usage(String),

    /// An accessor disagreed with the kind its option was declared with.
    #[error("internal error when parsing options: {0}")]
    Internal(String),
}

#[cfg(test)]
struct _AssertErrorIsSendSync
where
    Error: Send + Sync;

impl Error {
    #[cold]
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    #[cold]
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    #[cold]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error was caused by the user's arguments.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Process exit status for this error.
    ///
    /// Usage errors use 2, the conventional status for bad invocations.
    /// The others borrow `EX_CONFIG` and `EX_SOFTWARE` from `sysexits.h`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Configuration(_) => 78,
            Self::Internal(_) => 70,
        }
    }
}

/// Convenience alias for results with [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let codes = [
            Error::usage("u").exit_code(),
            Error::configuration("c").exit_code(),
            Error::internal("i").exit_code(),
        ];
        assert!(codes.iter().all(|&c| c != 0 && u8::try_from(c).is_ok()));
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }

    #[test]
    fn display() {
        assert_eq!(Error::usage("value expected for option -x").to_string(), "value expected for option -x");
        assert_eq!(
            Error::configuration("bad").to_string(),
            "invalid options definition: bad"
        );
        assert!(Error::usage("x").is_usage());
        assert!(!Error::internal("x").is_usage());
    }
}
