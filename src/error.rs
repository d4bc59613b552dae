use thiserror::Error;

/// Failures that stop the tool before the interactive session starts.
#[derive(Error, Debug)]
pub enum TodoTableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    InvalidPath(String),
}

/// Malformed operator input. Reported as a single line; the session carries on
/// with its record collection untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("wrong command")]
    UnknownCommand,

    #[error("wrong parameter, use parameters 'importance', 'user' or 'date'")]
    InvalidSortKey,

    #[error("Please, write parameter in correct format yyyy[-mm-dd] with correct values")]
    InvalidDate,
}
