use super::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("input must be a Query object: {0}")]
    Validation(String),
    #[error("the queue is empty")]
    Empty,
    #[error("query timed out after {0:?}")]
    Timeout(Duration),
    #[error("default query queue is not installed")]
    NotInstalled,
    #[error("default query queue is already installed")]
    AlreadyInstalled,
}
