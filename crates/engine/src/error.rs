use thiserror::Error;

use crate::core::CoreError;
use crate::term::TermError;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Term(#[from] TermError),
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        ViewerError::Term(TermError::Io(e))
    }
}

impl ViewerError {
    pub fn is_unsupported_platform(&self) -> bool {
        matches!(self, ViewerError::Term(TermError::UnsupportedPlatform(_)))
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
