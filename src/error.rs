use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Classification of a parse failure.
///
/// Each kind maps onto the process-style status returned by
/// [`Error::code`]. `InvalidValue` is kept apart from `UnrecognizedOption`
/// so callers can tell the two messages apart, but both report `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required flag, option or positional was never set.
    MissingRequired,
    /// An option expected a value and the command line ran out.
    MissingValue,
    /// Unknown option, a value attached to a flag, or a surplus positional.
    UnrecognizedOption,
    /// An enumerated option got a value outside of its choices.
    InvalidValue,
}

impl ErrorKind {
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::MissingRequired => 1,
            ErrorKind::MissingValue => 2,
            ErrorKind::UnrecognizedOption | ErrorKind::InvalidValue => 3,
        }
    }
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) msg: String,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Status code of this failure, see [`ErrorKind::code`].
    pub fn code(&self) -> i32 {
        self.kind.code()
    }
}

/// Why a registration call was refused.
///
/// A refused registration leaves the parser exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("`{name}` is already registered")]
    DuplicateName { name: String },

    #[error("short alias `-{short}` is already registered")]
    DuplicateShort { short: char },

    #[error("cannot register more than {max} {kind}")]
    Capacity { kind: &'static str, max: usize },

    #[error("enum option `--{name}` has no choices")]
    EmptyChoices { name: String },

    #[error("default index {default} of `--{name}` is out of range for {len} choices")]
    DefaultOutOfRange { name: String, default: usize, len: usize },
}
