use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Raised by catalog lookups and product switches. The source of truth
    /// is the static product table; nothing is mutated on this path.
    #[error("unknown product: {0}")]
    UnknownProduct(String),
}
