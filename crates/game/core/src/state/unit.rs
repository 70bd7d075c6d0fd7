use bitflags::bitflags;

use super::{Point, UnitTag};

/// Playable races.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::Display, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Race {
    Terran,
    Protoss,
    Zerg,
}

/// Defensive posture of a stance-capable unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stance {
    #[default]
    Surfaced,
    Burrowed,
}

bitflags! {
    /// What a unit can do, independent of which race fields it.
    ///
    /// The engagement evaluator branches on these flags only, so synthetic
    /// combinations can be exercised without a matching real unit type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Capabilities: u8 {
        /// Can toggle the burrowed stance.
        const BURROW         = 1 << 0;
        /// Survives on shields and disengages when they run low.
        const SHIELD_RETREAT = 1 << 1;
        /// Weapons cannot target air units.
        const GROUND_ONLY    = 1 << 2;
    }
}

/// Unit and structure types the core distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::Display, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitTypeId {
    // Terran
    Scv,
    Mule,
    Marine,
    Marauder,
    Reaper,
    SiegeTank,
    CommandCenter,
    OrbitalCommand,
    SupplyDepot,
    SupplyDepotLowered,
    Barracks,
    Refinery,

    // Protoss
    Probe,
    Zealot,
    Stalker,
    Adept,
    Nexus,
    Pylon,
    Gateway,
    WarpGate,
    Assimilator,
    CyberneticsCore,

    // Zerg
    Drone,
    Overlord,
    Queen,
    Zergling,
    Baneling,
    Roach,
    Ravager,
    Hydralisk,
    Hatchery,
    Lair,
    Hive,
    SpawningPool,
    RoachWarren,
    Extractor,
    Egg,
    Larva,
    CreepTumor,
    CreepTumorBurrowed,
    CreepTumorQueen,

    // Neutral
    MineralField,
}

impl UnitTypeId {
    pub fn race(self) -> Option<Race> {
        use UnitTypeId::*;
        match self {
            Scv | Mule | Marine | Marauder | Reaper | SiegeTank | CommandCenter
            | OrbitalCommand | SupplyDepot | SupplyDepotLowered | Barracks | Refinery => {
                Some(Race::Terran)
            }
            Probe | Zealot | Stalker | Adept | Nexus | Pylon | Gateway | WarpGate
            | Assimilator | CyberneticsCore => Some(Race::Protoss),
            Drone | Overlord | Queen | Zergling | Baneling | Roach | Ravager | Hydralisk
            | Hatchery | Lair | Hive | SpawningPool | RoachWarren | Extractor | Egg | Larva
            | CreepTumor | CreepTumorBurrowed | CreepTumorQueen => Some(Race::Zerg),
            MineralField => None,
        }
    }

    pub fn is_worker(self) -> bool {
        matches!(self, UnitTypeId::Scv | UnitTypeId::Probe | UnitTypeId::Drone)
    }

    /// Support units that never join the army.
    pub fn is_auxiliary(self) -> bool {
        matches!(
            self,
            UnitTypeId::Queen | UnitTypeId::Mule | UnitTypeId::Overlord
        )
    }

    pub fn is_structure(self) -> bool {
        use UnitTypeId::*;
        matches!(
            self,
            CommandCenter
                | OrbitalCommand
                | SupplyDepot
                | SupplyDepotLowered
                | Barracks
                | Refinery
                | Nexus
                | Pylon
                | Gateway
                | WarpGate
                | Assimilator
                | CyberneticsCore
                | Hatchery
                | Lair
                | Hive
                | SpawningPool
                | RoachWarren
                | Extractor
                | CreepTumor
                | CreepTumorBurrowed
                | CreepTumorQueen
        )
    }

    pub fn is_townhall(self) -> bool {
        use UnitTypeId::*;
        matches!(
            self,
            CommandCenter | OrbitalCommand | Nexus | Hatchery | Lair | Hive
        )
    }

    /// Hostile types that are never worth engaging.
    pub fn is_nuisance(self) -> bool {
        use UnitTypeId::*;
        matches!(
            self,
            Egg | Larva | CreepTumor | CreepTumorBurrowed | CreepTumorQueen | Mule
        )
    }

    pub fn supply_cost(self) -> f32 {
        use UnitTypeId::*;
        match self {
            Scv | Probe | Drone | Marine | Reaper => 1.0,
            Zergling | Baneling => 0.5,
            Marauder | Zealot | Stalker | Adept | Queen | Roach | Hydralisk => 2.0,
            SiegeTank | Ravager => 3.0,
            _ => 0.0,
        }
    }

    /// Ground weapon range before upgrades.
    pub fn base_weapon_range(self) -> f32 {
        use UnitTypeId::*;
        match self {
            Marine | Reaper | Hydralisk | Queen => 5.0,
            Marauder | Stalker | Ravager => 6.0,
            SiegeTank => 7.0,
            Adept | Roach => 4.0,
            Zealot | Zergling | Scv | Probe | Drone => 0.1,
            Baneling => 0.25,
            _ => 0.0,
        }
    }

    pub fn capabilities(self) -> Capabilities {
        use UnitTypeId::*;
        match self {
            Zergling | Baneling | Roach => Capabilities::BURROW | Capabilities::GROUND_ONLY,
            Hydralisk => Capabilities::BURROW,
            Ravager | Marauder | Reaper | SiegeTank => Capabilities::GROUND_ONLY,
            Zealot | Adept => Capabilities::SHIELD_RETREAT | Capabilities::GROUND_ONLY,
            Stalker => Capabilities::SHIELD_RETREAT,
            _ => Capabilities::empty(),
        }
    }
}

/// One friendly unit as reported by the engine this tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    pub tag: UnitTag,
    pub unit_type: UnitTypeId,
    pub position: Point,
    pub radius: f32,
    /// Current health divided by maximum health, 0.0 to 1.0.
    pub health_percentage: f32,
    /// Current shield divided by maximum shield; 0.0 for shieldless units.
    pub shield_percentage: f32,
    pub energy: f32,
    /// Stance the engine reports, which may lag a command issued last tick.
    pub stance: Stance,
    /// Weapon is off cooldown.
    pub weapon_ready: bool,
    pub weapon_range: f32,
    pub supply_cost: f32,
    pub capabilities: Capabilities,
}

impl Unit {
    pub const DEFAULT_RADIUS: f32 = 0.5;

    /// Creates a healthy, surfaced unit with the type's default stats.
    pub fn new(tag: UnitTag, unit_type: UnitTypeId, position: Point) -> Self {
        let shield_percentage = if unit_type.race() == Some(Race::Protoss) {
            1.0
        } else {
            0.0
        };
        Self {
            tag,
            unit_type,
            position,
            radius: Self::DEFAULT_RADIUS,
            health_percentage: 1.0,
            shield_percentage,
            energy: 0.0,
            stance: Stance::Surfaced,
            weapon_ready: true,
            weapon_range: unit_type.base_weapon_range(),
            supply_cost: unit_type.supply_cost(),
            capabilities: unit_type.capabilities(),
        }
    }

    pub fn with_health(mut self, health_percentage: f32) -> Self {
        self.health_percentage = health_percentage;
        self
    }

    pub fn with_shield(mut self, shield_percentage: f32) -> Self {
        self.shield_percentage = shield_percentage;
        self
    }

    pub fn with_energy(mut self, energy: f32) -> Self {
        self.energy = energy;
        self
    }

    pub fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }

    pub fn with_weapon_ready(mut self, weapon_ready: bool) -> Self {
        self.weapon_ready = weapon_ready;
        self
    }

    pub fn with_weapon_range(mut self, weapon_range: f32) -> Self {
        self.weapon_range = weapon_range;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn can(&self, capability: Capabilities) -> bool {
        self.capabilities.contains(capability)
    }

    /// Workers, auxiliary support units, structures, and larva-stage
    /// nuisances never join the army.
    pub fn is_combat_eligible(&self) -> bool {
        let t = self.unit_type;
        !t.is_worker() && !t.is_auxiliary() && !t.is_structure() && !t.is_nuisance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roach_burrows_and_fights_ground() {
        let roach = Unit::new(UnitTag(1), UnitTypeId::Roach, Point::ORIGIN);
        assert!(roach.can(Capabilities::BURROW));
        assert!(roach.can(Capabilities::GROUND_ONLY));
        assert!(!roach.can(Capabilities::SHIELD_RETREAT));
        assert_eq!(roach.supply_cost, 2.0);
        assert_eq!(roach.shield_percentage, 0.0);
    }

    #[test]
    fn stalker_starts_with_full_shields() {
        let stalker = Unit::new(UnitTag(2), UnitTypeId::Stalker, Point::ORIGIN);
        assert!(stalker.can(Capabilities::SHIELD_RETREAT));
        assert_eq!(stalker.shield_percentage, 1.0);
    }

    #[test]
    fn workers_and_support_are_not_combat_eligible() {
        for unit_type in [
            UnitTypeId::Scv,
            UnitTypeId::Probe,
            UnitTypeId::Drone,
            UnitTypeId::Queen,
            UnitTypeId::Mule,
            UnitTypeId::Overlord,
        ] {
            let unit = Unit::new(UnitTag(3), unit_type, Point::ORIGIN);
            assert!(!unit.is_combat_eligible(), "{unit_type} should be exempt");
        }
        let marine = Unit::new(UnitTag(4), UnitTypeId::Marine, Point::ORIGIN);
        assert!(marine.is_combat_eligible());
    }

    #[test]
    fn nuisance_types_cover_ignore_list() {
        assert!(UnitTypeId::Egg.is_nuisance());
        assert!(UnitTypeId::Larva.is_nuisance());
        assert!(UnitTypeId::CreepTumorBurrowed.is_nuisance());
        assert!(UnitTypeId::Mule.is_nuisance());
        assert!(!UnitTypeId::Zergling.is_nuisance());
    }

    #[test]
    fn type_names_parse_case_insensitively() {
        assert_eq!("roach".parse::<UnitTypeId>(), Ok(UnitTypeId::Roach));
        assert_eq!("ZERG".parse::<Race>(), Ok(Race::Zerg));
        assert_eq!(UnitTypeId::SiegeTank.to_string(), "SiegeTank");
    }
}
