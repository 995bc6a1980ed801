use std::rc::Rc;

/// One immutable link in a stack's chain.
///
/// A node never changes after construction, so a chain suffix can be shared
/// between several stacks through `Rc`.
#[derive(Debug)]
pub struct Node {
    value: String,
    previous: Option<Rc<Node>>,
}

impl Node {
    pub fn new(value: String, previous: Option<Rc<Node>>) -> Self {
        Self { value, previous }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The node beneath this one, `None` at the bottom of the stack.
    pub fn previous(&self) -> Option<&Rc<Node>> {
        self.previous.as_ref()
    }

    pub fn into_parts(self) -> (String, Option<Rc<Node>>) {
        (self.value, self.previous)
    }
}
