//! Engagement tree assembled from reusable patterns.
//!
//! ```text
//! selector
//! ├─ StanceOverride
//! └─ branch HasHostiles
//!    ├─ selector
//!    │  ├─ shoot_units_in_range
//!    │  ├─ shoot_structures_in_range
//!    │  └─ retreat_or_stutter
//!    └─ travel_to_target
//! ```
//!
//! The hostile branch is exclusive: with any hostile nearby the unit never
//! travels, and without one it never engages.

pub mod patterns;

use behavior_tree::Node;
use behavior_tree::builder::{branch, node, selector};

use super::ManeuverContext;
use super::nodes::{HasHostiles, StanceOverride};

pub fn engagement<'n, 'a: 'n>() -> Node<'n, ManeuverContext<'a>> {
    selector(vec![
        node(StanceOverride),
        branch(
            node(HasHostiles),
            selector(vec![
                patterns::shoot_units_in_range(),
                patterns::shoot_structures_in_range(),
                patterns::retreat_or_stutter(),
            ]),
            patterns::travel_to_target(),
        ),
    ])
}
