//! Provides the error type used
//! throughout this crate.

use thiserror::Error;

/// The error type used
/// throughout this crate
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EspalierError {
    #[error("Node reference {0} is out of bound")]
    ReferenceOutOfBound(usize),
    #[error("Cursor is not positioned on a node")]
    CursorUnset,
}
