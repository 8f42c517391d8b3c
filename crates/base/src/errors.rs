use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

use crate::entities::OrderId;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StoreOperation {
    Add,
    Get,
    GetAll,
    Put,
    Delete,
    IndexLookup,
}

impl Display for StoreOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            StoreOperation::Add => write!(f, "add"),
            StoreOperation::Get => write!(f, "get"),
            StoreOperation::GetAll => write!(f, "getAll"),
            StoreOperation::Put => write!(f, "put"),
            StoreOperation::Delete => write!(f, "delete"),
            StoreOperation::IndexLookup => write!(f, "index lookup"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("order store at {path:?} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: BoxedError,
    },

    #[error("order store {operation} request failed: {source}")]
    Operation {
        operation: StoreOperation,
        #[source]
        source: BoxedError,
    },

    #[error("an order with an id {0} is not found")]
    NotFound(OrderId),
}

impl StoreError {
    pub fn unavailable<P: Into<PathBuf>, E: Into<BoxedError>>(path: P, source: E) -> Self {
        StoreError::Unavailable {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn operation<E: Into<BoxedError>>(operation: StoreOperation, source: E) -> Self {
        StoreError::Operation {
            operation,
            source: source.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
