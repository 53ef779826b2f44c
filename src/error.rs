//! Error type for metadata operations

use thiserror::Error;

use crate::model::ColumnRef;

/// Errors raised by label accessors and the metadata codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    #[error("invalid column: {0} does not exist in the table")]
    ColumnNotFound(ColumnRef),

    #[error("malformed metadata document: {0}")]
    MalformedDocument(String),
}
