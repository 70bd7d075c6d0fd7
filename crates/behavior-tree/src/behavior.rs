//! Core behavior trait.
//!
//! [`Behavior`] is generic over a context type `C` (the blackboard) so nodes
//! can read the tick's snapshot and record the command they choose.

use crate::Status;

/// A node that can be evaluated against a context.
pub trait Behavior<C> {
    /// Evaluate this node.
    ///
    /// Returns `Status::Success` when the node fired (or its condition held)
    /// and `Status::Failure` otherwise.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Owned, type-erased node borrowing for at most `'n`.
pub type Node<'n, C> = Box<dyn Behavior<C> + 'n>;

impl<C, B> Behavior<C> for Box<B>
where
    B: Behavior<C> + ?Sized,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

/// Lifts a closure into a node.
///
/// Useful for one-off conditions that do not deserve a named type.
pub struct Leaf<F> {
    f: F,
}

impl<F> Leaf<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<C, F> Behavior<C> for Leaf<F>
where
    F: Fn(&mut C) -> Status,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.f)(ctx)
    }
}
