//! Turns the army composition into production requests.
use std::collections::BTreeMap;

use game_core::{
    ArmyComposition, EconomySnapshot, Point, ProductionRequest, SetupError, TacticsConfig, Unit,
    UnitTypeId,
};
use tracing::debug;

/// Requests units whose share of army supply is not above target, in
/// priority order, plus supply when headroom runs low.
#[derive(Clone, Debug)]
pub struct ProductionAllocator {
    composition: ArmyComposition,
    supply_buffer: u32,
}

impl ProductionAllocator {
    const SHARE_TOLERANCE: f32 = 1e-4;

    /// # Errors
    ///
    /// Returns the composition's validation error when its proportions are
    /// out of range or do not sum to one.
    pub fn new(composition: ArmyComposition, supply_buffer: u32) -> Result<Self, SetupError> {
        composition.validate()?;
        Ok(Self {
            composition,
            supply_buffer,
        })
    }

    pub fn composition(&self) -> &ArmyComposition {
        &self.composition
    }

    /// Requests for this tick. `army` is the current combat force; `base`
    /// is where new supply providers go.
    pub fn plan<'u>(
        &self,
        economy: &EconomySnapshot,
        army: impl IntoIterator<Item = &'u Unit>,
        base: Point,
    ) -> Vec<ProductionRequest> {
        let mut requests = Vec::new();

        if self.needs_supply(economy) {
            requests.push(ProductionRequest::Supply { near: base });
        }

        if economy.supply_used >= TacticsConfig::MAX_SUPPLY {
            return requests;
        }

        let mut supply_by_type: BTreeMap<UnitTypeId, f32> = BTreeMap::new();
        for unit in army {
            *supply_by_type.entry(unit.unit_type).or_default() += unit.supply_cost;
        }
        let total: f32 = supply_by_type.values().sum();

        let headroom = economy.supply_left() as f32;
        for (unit_type, entry) in self.composition.by_priority() {
            let share = if total > 0.0 {
                supply_by_type.get(&unit_type).copied().unwrap_or_default() / total
            } else {
                0.0
            };
            if share > entry.proportion + Self::SHARE_TOLERANCE {
                continue;
            }
            if unit_type.supply_cost() > headroom {
                debug!(%unit_type, headroom, "supply blocked");
                continue;
            }
            requests.push(ProductionRequest::Train {
                unit_type,
                count: 1,
            });
        }
        requests
    }

    fn needs_supply(&self, economy: &EconomySnapshot) -> bool {
        economy.build_order_complete
            && economy.supply_cap < TacticsConfig::MAX_SUPPLY
            && economy.supply_left() + economy.supply_pending < self.supply_buffer
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Race, UnitTag};

    use super::*;

    fn economy(used: u32, cap: u32) -> EconomySnapshot {
        EconomySnapshot {
            minerals: 500,
            vespene: 200,
            supply_used: used,
            supply_cap: cap,
            build_order_complete: true,
            ..Default::default()
        }
    }

    fn no_army() -> Vec<Unit> {
        Vec::new()
    }

    fn army(unit_type: UnitTypeId, count: u64) -> Vec<Unit> {
        (0..count)
            .map(|i| Unit::new(UnitTag(100 + i), unit_type, Point::ORIGIN))
            .collect()
    }

    #[test]
    fn single_unit_composition_keeps_training() {
        let allocator =
            ProductionAllocator::new(ArmyComposition::default_for(Race::Zerg), 4).unwrap();
        let requests = allocator.plan(&economy(20, 36), &army(UnitTypeId::Roach, 5), Point::ORIGIN);
        assert_eq!(
            requests,
            vec![ProductionRequest::Train {
                unit_type: UnitTypeId::Roach,
                count: 1
            }]
        );
    }

    #[test]
    fn over_represented_type_is_skipped() {
        let comp = ArmyComposition::new()
            .with(UnitTypeId::Roach, 0.5, 0)
            .with(UnitTypeId::Hydralisk, 0.5, 1);
        let allocator = ProductionAllocator::new(comp, 4).unwrap();
        let requests = allocator.plan(&economy(20, 36), &army(UnitTypeId::Roach, 3), Point::ORIGIN);
        assert_eq!(
            requests,
            vec![ProductionRequest::Train {
                unit_type: UnitTypeId::Hydralisk,
                count: 1
            }]
        );
    }

    #[test]
    fn requests_follow_priority() {
        let comp = ArmyComposition::new()
            .with(UnitTypeId::Stalker, 0.4, 1)
            .with(UnitTypeId::Zealot, 0.6, 0);
        let allocator = ProductionAllocator::new(comp, 4).unwrap();
        let requests = allocator.plan(&economy(20, 36), &no_army(), Point::ORIGIN);
        let order: Vec<_> = requests
            .iter()
            .filter_map(|r| match r {
                ProductionRequest::Train { unit_type, .. } => Some(*unit_type),
                ProductionRequest::Supply { .. } => None,
            })
            .collect();
        assert_eq!(order, vec![UnitTypeId::Zealot, UnitTypeId::Stalker]);
    }

    #[test]
    fn low_headroom_requests_supply_first() {
        let allocator =
            ProductionAllocator::new(ArmyComposition::default_for(Race::Terran), 4).unwrap();
        let base = Point::new(5.0, 5.0);
        let requests = allocator.plan(&economy(20, 22), &no_army(), base);
        assert_eq!(requests[0], ProductionRequest::Supply { near: base });
    }

    #[test]
    fn pending_supply_counts_as_headroom() {
        let allocator =
            ProductionAllocator::new(ArmyComposition::default_for(Race::Terran), 4).unwrap();
        let economy = EconomySnapshot {
            supply_pending: 8,
            ..economy(20, 22)
        };
        assert!(
            !allocator
                .plan(&economy, &no_army(), Point::ORIGIN)
                .iter()
                .any(|r| matches!(r, ProductionRequest::Supply { .. }))
        );
    }

    #[test]
    fn no_supply_before_build_order_completes() {
        let allocator =
            ProductionAllocator::new(ArmyComposition::default_for(Race::Terran), 4).unwrap();
        let economy = EconomySnapshot {
            build_order_complete: false,
            ..economy(20, 22)
        };
        assert!(
            !allocator
                .plan(&economy, &no_army(), Point::ORIGIN)
                .iter()
                .any(|r| matches!(r, ProductionRequest::Supply { .. }))
        );
    }

    #[test]
    fn maxed_out_trains_nothing() {
        let allocator =
            ProductionAllocator::new(ArmyComposition::default_for(Race::Protoss), 4).unwrap();
        assert!(
            allocator
                .plan(&economy(200, 200), &no_army(), Point::ORIGIN)
                .is_empty()
        );
    }

    #[test]
    fn supply_blocked_type_is_skipped() {
        let allocator =
            ProductionAllocator::new(ArmyComposition::default_for(Race::Protoss), 0).unwrap();
        assert!(
            allocator
                .plan(&economy(21, 22), &no_army(), Point::ORIGIN)
                .is_empty()
        );
    }

    #[test]
    fn invalid_composition_is_rejected() {
        let comp = ArmyComposition::new().with(UnitTypeId::Marine, 0.4, 0);
        assert!(ProductionAllocator::new(comp, 4).is_err());
    }
}
