mod node;
use node::Node;

mod error;
pub use error::EmptyStackError;

use std::fmt;
use std::rc::Rc;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// A LIFO stack of strings backed by a singly linked list of immutable nodes.
///
/// Cloning a stack is cheap: both copies share the same chain, and since nodes
/// are never mutated, pushing to or popping from one copy leaves the other
/// untouched.
#[derive(Default, Clone)]
pub struct Stack {
    top: Option<Rc<Node>>,
}

impl Stack {
    pub fn new() -> Self {
        Self { top: None }
    }

    /// Build a stack by pushing each value in order, the last value ends up on top.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut stack = Self::new();

        for value in values {
            stack.push(value);
        }

        stack
    }

    pub fn push(&mut self, value: impl Into<String>) {
        let value = value.into();

        trace!("action: push, value {:?}", value);

        let previous = self.top.take();
        self.top = Some(Rc::new(Node::new(value, previous)));
    }

    pub fn pop(&mut self) -> Result<String, EmptyStackError> {
        let node = match self.top.take() {
            Some(node) => node,
            None => {
                info!("pop: empty stack");

                return Err(EmptyStackError);
            }
        };

        // a node still referenced by another stack has to stay intact
        let (value, previous) = match Rc::try_unwrap(node) {
            Ok(node) => node.into_parts(),
            Err(shared) => (shared.value().to_owned(), shared.previous().cloned()),
        };

        trace!("action: pop, value {:?}", value);

        self.top = previous;

        Ok(value)
    }

    /// The top value, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<&str> {
        self.top.as_deref().map(Node::value)
    }

    /// Number of values on the stack.
    ///
    /// This walks the whole chain, there is no cached counter.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Values from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.top.as_deref(),
        }
    }

    /// Push the values of `other` onto `self`, keeping their order.
    ///
    /// Afterwards the top of `other` is the top of `self`; `other` is not modified.
    pub fn merge(&mut self, other: &Stack) {
        let values: Vec<&str> = other.iter().collect();

        trace!("action: merge, {} values", values.len());

        for value in values.into_iter().rev() {
            self.push(value);
        }
    }

    /// Build a new stack by merging each of `stacks` in order into an empty one.
    ///
    /// The first stack ends up at the bottom, the top of the last one on top.
    pub fn concat<'a>(stacks: impl IntoIterator<Item = &'a Stack>) -> Stack {
        trace!("action: concat");

        let mut result = Stack::new();

        for stack in stacks {
            result.merge(stack);
        }

        result
    }
}

impl Drop for Stack {
    fn drop(&mut self) {
        // unlink iteratively so long chains don't blow the call stack
        let mut link = self.top.take();

        while let Some(node) = link {
            match Rc::try_unwrap(node) {
                Ok(node) => link = node.into_parts().1,
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S: Into<String>> FromIterator<S> for Stack {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a stack's values, top first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.previous().map(Rc::as_ref);
            node.value()
        })
    }
}
