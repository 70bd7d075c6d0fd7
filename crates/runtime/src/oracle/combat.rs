//! Focus-fire policy and weapon range geometry.
use game_core::{Capabilities, HostileSnapshot, TargetPriorityOracle, Unit, WeaponRangeOracle};

/// Focuses enemy units over structures, then the lowest health, then the
/// lowest tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeakestFirst;

impl TargetPriorityOracle for WeakestFirst {
    fn pick(&self, candidates: &[HostileSnapshot]) -> Option<HostileSnapshot> {
        candidates.iter().copied().min_by(|a, b| {
            a.is_structure
                .cmp(&b.is_structure)
                .then(a.health_percentage.total_cmp(&b.health_percentage))
                .then(a.tag.cmp(&b.tag))
        })
    }
}

/// Edge-to-edge range check: a target is in range when the gap between the
/// two footprints does not exceed the attacker's weapon range.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeometricWeaponRange;

impl GeometricWeaponRange {
    pub fn reaches(unit: &Unit, target: &HostileSnapshot) -> bool {
        if target.is_flying && unit.can(Capabilities::GROUND_ONLY) {
            return false;
        }
        let reach = unit.radius + target.radius + unit.weapon_range;
        unit.position.distance_squared(target.position) <= reach * reach
    }
}

impl WeaponRangeOracle for GeometricWeaponRange {
    fn in_weapon_range(&self, unit: &Unit, candidates: &[HostileSnapshot]) -> Vec<HostileSnapshot> {
        candidates
            .iter()
            .filter(|target| Self::reaches(unit, target))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Point, UnitTag, UnitTypeId};

    use super::*;

    #[test]
    fn units_preferred_over_structures() {
        let pylon = HostileSnapshot::new(UnitTag(1), UnitTypeId::Pylon, Point::ORIGIN).with_health(0.1);
        let zealot = HostileSnapshot::new(UnitTag(2), UnitTypeId::Zealot, Point::ORIGIN);
        assert_eq!(WeakestFirst.pick(&[pylon, zealot]), Some(zealot));
    }

    #[test]
    fn weakest_then_lowest_tag() {
        let a = HostileSnapshot::new(UnitTag(4), UnitTypeId::Marine, Point::ORIGIN).with_health(0.5);
        let b = HostileSnapshot::new(UnitTag(3), UnitTypeId::Marine, Point::ORIGIN).with_health(0.5);
        let c = HostileSnapshot::new(UnitTag(9), UnitTypeId::Marine, Point::ORIGIN).with_health(0.7);
        assert_eq!(WeakestFirst.pick(&[c, a, b]).map(|h| h.tag), Some(UnitTag(3)));
        assert_eq!(WeakestFirst.pick(&[]), None);
    }

    #[test]
    fn range_counts_both_radii() {
        // Roach: range 4, radius 0.5; target radius 0.5 -> reach 5.
        let roach = Unit::new(UnitTag(1), UnitTypeId::Roach, Point::ORIGIN);
        let edge = HostileSnapshot::new(UnitTag(2), UnitTypeId::Marine, Point::new(5.0, 0.0));
        let beyond = HostileSnapshot::new(UnitTag(3), UnitTypeId::Marine, Point::new(5.1, 0.0));
        let hits = GeometricWeaponRange.in_weapon_range(&roach, &[edge, beyond]);
        assert_eq!(hits, vec![edge]);
    }

    #[test]
    fn ground_only_cannot_hit_air() {
        let roach = Unit::new(UnitTag(1), UnitTypeId::Roach, Point::ORIGIN);
        let stalker = Unit::new(UnitTag(2), UnitTypeId::Stalker, Point::ORIGIN);
        let overlord =
            HostileSnapshot::new(UnitTag(3), UnitTypeId::Overlord, Point::new(1.0, 0.0)).flying();
        assert!(!GeometricWeaponRange::reaches(&roach, &overlord));
        assert!(GeometricWeaponRange::reaches(&stalker, &overlord));
    }
}
