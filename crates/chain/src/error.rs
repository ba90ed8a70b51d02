use thiserror::Error;


/// Returned by the checked stepping methods when the iterator already
/// stands at the chain boundary it was asked to cross.
///
/// The iterator is left untouched in that case, so callers may keep using
/// it after probing a boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("chain iterator is exhausted")]
pub struct Exhausted;
