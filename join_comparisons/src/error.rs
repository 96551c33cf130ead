use std::{io, path::PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::records::CustomerName;

/// Failures reading customers or generating orders. All of them abort the load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read customers from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read customers line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected `name, birth date`")]
    MissingField { line: usize },

    #[error("line {line}: `{value}` is not a date")]
    InvalidDate { line: usize, value: String },

    #[error("cannot generate orders without any customers")]
    NoCustomers,
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no customer named `{0}`")]
    UnknownCustomer(CustomerName),

    #[error("customer `{0}` appears more than once")]
    DuplicateCustomer(CustomerName),

    #[error("amount {0} has more than two decimal places")]
    Amount(Decimal),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Query(#[from] QueryError),
}
