mod stack;
pub use stack::{EmptyStackError, Iter, Stack};
