//! Shorthand constructors for assembling trees.
//!
//! `selector(vec![...])` instead of `Box::new(Selector::new(vec![...]))`.

use crate::{Behavior, Branch, Guard, Inverter, Leaf, Node, Selector, Sequence, Status};

#[inline]
pub fn sequence<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn inverter<'n, C: 'n>(child: Node<'n, C>) -> Node<'n, C> {
    Box::new(Inverter::new(child))
}

#[inline]
pub fn guard<'n, C: 'n>(condition: Node<'n, C>, child: Node<'n, C>) -> Node<'n, C> {
    Box::new(Guard::new(condition, child))
}

#[inline]
pub fn branch<'n, C: 'n>(
    condition: Node<'n, C>,
    then: Node<'n, C>,
    otherwise: Node<'n, C>,
) -> Node<'n, C> {
    Box::new(Branch::new(condition, then, otherwise))
}

/// Boxes a closure as a node.
#[inline]
pub fn leaf<'n, C: 'n, F>(f: F) -> Node<'n, C>
where
    F: Fn(&mut C) -> Status + 'n,
{
    Box::new(Leaf::new(f))
}

/// Boxes any concrete node.
#[inline]
pub fn node<'n, C: 'n, B>(behavior: B) -> Node<'n, C>
where
    B: Behavior<C> + 'n,
{
    Box::new(behavior)
}
