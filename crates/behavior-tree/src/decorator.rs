//! Decorator behavior nodes.
//!
//! Decorators wrap child behaviors and gate or reshape their result.

use crate::{Behavior, Node, Status};

/// Logical NOT over a condition node.
pub struct Inverter<'n, C> {
    child: Node<'n, C>,
}

impl<'n, C> Inverter<'n, C> {
    pub fn new(child: Node<'n, C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Runs `child` only while `condition` holds.
///
/// Returns `Failure` without touching the child when the condition fails,
/// which lets a [`crate::Selector`] fall through to the next entry.
pub struct Guard<'n, C> {
    condition: Node<'n, C>,
    child: Node<'n, C>,
}

impl<'n, C> Guard<'n, C> {
    pub fn new(condition: Node<'n, C>, child: Node<'n, C>) -> Self {
        Self { condition, child }
    }
}

impl<C> Behavior<C> for Guard<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if self.condition.tick(ctx).is_failure() {
            return Status::Failure;
        }
        self.child.tick(ctx)
    }
}

/// Exclusive if/else.
///
/// Exactly one of the two arms is evaluated. Unlike a selector, a failing
/// `then` arm does **not** fall through to `otherwise`.
pub struct Branch<'n, C> {
    condition: Node<'n, C>,
    then: Node<'n, C>,
    otherwise: Node<'n, C>,
}

impl<'n, C> Branch<'n, C> {
    pub fn new(condition: Node<'n, C>, then: Node<'n, C>, otherwise: Node<'n, C>) -> Self {
        Self {
            condition,
            then,
            otherwise,
        }
    }
}

impl<C> Behavior<C> for Branch<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if self.condition.tick(ctx).is_success() {
            self.then.tick(ctx)
        } else {
            self.otherwise.tick(ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Leaf;

    fn is_positive() -> Node<'static, i32> {
        Box::new(Leaf::new(|v: &mut i32| Status::from_bool(*v > 0)))
    }

    fn add(delta: i32, status: Status) -> Node<'static, i32> {
        Box::new(Leaf::new(move |v: &mut i32| {
            *v += delta;
            status
        }))
    }

    #[test]
    fn inverter_flips_condition() {
        let not_positive = Inverter::new(is_positive());
        assert_eq!(not_positive.tick(&mut 10), Status::Failure);
        assert_eq!(not_positive.tick(&mut -10), Status::Success);
    }

    #[test]
    fn guard_skips_child_when_condition_fails() {
        let guard = Guard::new(is_positive(), add(100, Status::Success));

        let mut value = -1;
        assert_eq!(guard.tick(&mut value), Status::Failure);
        assert_eq!(value, -1);

        let mut value = 1;
        assert_eq!(guard.tick(&mut value), Status::Success);
        assert_eq!(value, 101);
    }

    #[test]
    fn branch_takes_exactly_one_arm() {
        let branch = Branch::new(
            is_positive(),
            add(10, Status::Failure),
            add(-10, Status::Success),
        );

        // then-arm failing must not fall through to otherwise
        let mut value = 1;
        assert_eq!(branch.tick(&mut value), Status::Failure);
        assert_eq!(value, 11);

        let mut value = 0;
        assert_eq!(branch.tick(&mut value), Status::Success);
        assert_eq!(value, -10);
    }
}
