//! Race-specific economy chores run every tick.
//!
//! Each task is keyed on unit and structure types rather than the player's
//! race: a Terran session simply never sees a Nexus.
use game_core::{
    AbilityId, CommandSink, EconomySnapshot, MineralField, OwnStructure, TacticsConfig, Unit,
    UnitAction, UnitTag, UnitTypeId, UpgradeId,
};
use tracing::{debug, info, warn};

use crate::api::TickInput;

/// Runs the chores and remembers when Burrow research was last ordered.
#[derive(Clone, Debug, Default)]
pub struct MacroTasks {
    burrow_ordered_at: Option<u64>,
}

impl MacroTasks {
    /// Ticks to wait for the engine to report an ordered research before
    /// ordering it again.
    pub const BURROW_REORDER_TICKS: u64 = 16;

    pub fn new() -> Self {
        Self::default()
    }

    /// Submits this tick's chores and returns how many commands were sent.
    pub fn run(&mut self, input: &TickInput, sink: &mut dyn CommandSink) -> usize {
        let mut commands = Vec::new();
        commands.extend(chrono_boost(&input.structures));
        commands.extend(calldown_mules(&input.structures, &input.mineral_fields));
        commands.extend(lower_depots(&input.structures));
        let burrow = self.research_burrow(input.iteration, &input.economy, &input.structures);
        if let Some(order) = burrow {
            commands.push(order);
        }
        commands.extend(inject_larva(&input.units, &input.structures));

        for &(tag, action) in &commands {
            debug!(%tag, ?action, "macro");
            sink.submit(tag, action);
        }
        commands.len()
    }

    /// The engine's upgrade status is the only lasting gate: an order that
    /// never shows up as pending is issued again once the window expires.
    fn research_burrow(
        &mut self,
        iteration: u64,
        economy: &EconomySnapshot,
        structures: &[OwnStructure],
    ) -> Option<(UnitTag, UnitAction)> {
        if economy.burrow.is_started() {
            self.burrow_ordered_at = None;
            return None;
        }
        let awaiting_report = self
            .burrow_ordered_at
            .is_some_and(|at| iteration < at.saturating_add(Self::BURROW_REORDER_TICKS));
        if awaiting_report || !economy.build_order_complete {
            return None;
        }
        if !economy.can_afford(
            TacticsConfig::BURROW_COST_MINERALS,
            TacticsConfig::BURROW_COST_VESPENE,
        ) {
            return None;
        }
        let hatchery = structures.iter().find(|s| {
            matches!(
                s.unit_type,
                UnitTypeId::Hatchery | UnitTypeId::Lair | UnitTypeId::Hive
            ) && s.is_idle
                && s.is_complete()
        })?;

        if self.burrow_ordered_at.is_some() {
            warn!(tag = %hatchery.tag, "burrow research never reported; ordering again");
        } else {
            info!(tag = %hatchery.tag, "researching burrow");
        }
        self.burrow_ordered_at = Some(iteration);
        Some((
            hatchery.tag,
            UnitAction::Research {
                upgrade: UpgradeId::Burrow,
            },
        ))
    }
}

/// Nexuses with enough energy boost the first busy, finished gateway.
fn chrono_boost(structures: &[OwnStructure]) -> Vec<(UnitTag, UnitAction)> {
    let Some(gateway) = structures
        .iter()
        .find(|s| s.unit_type == UnitTypeId::Gateway && s.is_complete() && !s.is_idle)
    else {
        return Vec::new();
    };
    structures
        .iter()
        .filter(|s| s.unit_type == UnitTypeId::Nexus && s.energy >= TacticsConfig::CHRONO_ENERGY)
        .map(|nexus| {
            (
                nexus.tag,
                UnitAction::ability_on_unit(AbilityId::ChronoBoost, gateway.tag),
            )
        })
        .collect()
}

/// Orbital commands with enough energy drop a MULE on the richest nearby patch.
fn calldown_mules(
    structures: &[OwnStructure],
    fields: &[MineralField],
) -> Vec<(UnitTag, UnitAction)> {
    structures
        .iter()
        .filter(|s| s.unit_type == UnitTypeId::OrbitalCommand && s.energy >= TacticsConfig::MULE_ENERGY)
        .filter_map(|orbital| {
            let richest = fields
                .iter()
                .filter(|f| f.position.distance(orbital.position) < TacticsConfig::MULE_SEARCH_RADIUS)
                .reduce(|best, f| if f.contents > best.contents { f } else { best })?;
            Some((
                orbital.tag,
                UnitAction::ability_on_unit(AbilityId::CalldownMule, richest.tag),
            ))
        })
        .collect()
}

/// Raised supply depots are lowered.
fn lower_depots(structures: &[OwnStructure]) -> Vec<(UnitTag, UnitAction)> {
    structures
        .iter()
        .filter(|s| s.unit_type == UnitTypeId::SupplyDepot && s.is_complete())
        .map(|depot| (depot.tag, UnitAction::ability(AbilityId::LowerSupplyDepot)))
        .collect()
}

/// Queens with enough energy inject the first town hall.
fn inject_larva(units: &[Unit], structures: &[OwnStructure]) -> Vec<(UnitTag, UnitAction)> {
    let Some(townhall) = structures.iter().find(|s| s.unit_type.is_townhall()) else {
        return Vec::new();
    };
    units
        .iter()
        .filter(|u| u.unit_type == UnitTypeId::Queen && u.energy >= TacticsConfig::INJECT_ENERGY)
        .map(|queen| {
            (
                queen.tag,
                UnitAction::ability_on_unit(AbilityId::InjectLarva, townhall.tag),
            )
        })
        .collect()
}
