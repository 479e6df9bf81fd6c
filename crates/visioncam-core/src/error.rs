//! Session errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No image has been uploaded yet")]
    Empty,
}
