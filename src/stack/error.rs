use thiserror::Error as ThisError;

/// Returned by [`Stack::pop`](super::Stack::pop) when there is nothing to pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[error("stack is empty")]
pub struct EmptyStackError;
