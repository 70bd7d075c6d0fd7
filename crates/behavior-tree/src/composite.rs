//! Composite behavior nodes.
//!
//! [`Selector`] is the priority stack: children are tried top to bottom and
//! the first one that succeeds wins. [`Sequence`] is its AND counterpart.

use crate::{Behavior, Node, Status};

/// Runs children in order until one fails.
///
/// - a `Failure` child stops the sequence, which returns `Failure`
/// - if every child succeeds the sequence returns `Success`
/// - an empty sequence succeeds
pub struct Sequence<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Sequence<'n, C> {
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Priority stack: runs children in order until one succeeds.
///
/// Children below the one that fired are never evaluated, so their
/// preconditions cost nothing on ticks where a higher priority applies.
/// An empty selector fails; a stack with nothing in it never fires.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Behavior, Leaf, Selector, Status};
///
/// let mut stack: Selector<'_, Vec<&str>> = Selector::default();
/// stack.push(Box::new(Leaf::new(|_: &mut Vec<&str>| Status::Failure)));
/// stack.push(Box::new(Leaf::new(|log: &mut Vec<&str>| {
///     log.push("fired");
///     Status::Success
/// })));
///
/// let mut log = Vec::new();
/// assert_eq!(stack.tick(&mut log), Status::Success);
/// assert_eq!(log, ["fired"]);
/// ```
pub struct Selector<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Selector<'n, C> {
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        Self { children }
    }

    /// Appends a child with the lowest priority so far.
    pub fn push(&mut self, child: Node<'n, C>) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Default for Selector<'_, C> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
        }
    }
}

impl<C> Behavior<C> for Selector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
