//! Replay scenario loader.
//!
//! A scenario fixes the race and map and lists one [`Frame`] per tick. Each
//! frame is a full snapshot: units that disappear between frames are treated
//! as lost by the replayer.

use std::path::Path;

use game_core::{
    ArmyComposition, CostGrid, EconomySnapshot, HostileSnapshot, MapInfo, MineralField,
    OwnStructure, Point, Race, Stance, Unit, UnitTag, UnitTypeId,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

fn full() -> f32 {
    1.0
}

fn yes() -> bool {
    true
}

/// A friendly unit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub tag: u64,
    pub unit_type: UnitTypeId,
    pub position: Point,
    #[serde(default = "full")]
    pub health: f32,
    /// Overrides the race default (full for Protoss, none otherwise).
    #[serde(default)]
    pub shield: Option<f32>,
    #[serde(default)]
    pub energy: f32,
    #[serde(default)]
    pub stance: Stance,
    #[serde(default = "yes")]
    pub weapon_ready: bool,
}

impl UnitSpec {
    pub fn to_unit(&self) -> Unit {
        let unit = Unit::new(UnitTag(self.tag), self.unit_type, self.position)
            .with_health(self.health)
            .with_energy(self.energy)
            .with_stance(self.stance)
            .with_weapon_ready(self.weapon_ready);
        match self.shield {
            Some(shield) => unit.with_shield(shield),
            None => unit,
        }
    }
}

/// A hostile entry. `memory` marks a last-known position that is not
/// currently visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileSpec {
    pub tag: u64,
    pub unit_type: UnitTypeId,
    pub position: Point,
    #[serde(default = "full")]
    pub health: f32,
    #[serde(default)]
    pub memory: bool,
    #[serde(default)]
    pub flying: bool,
}

impl HostileSpec {
    pub fn to_snapshot(&self) -> HostileSnapshot {
        let mut hostile = HostileSnapshot::new(UnitTag(self.tag), self.unit_type, self.position)
            .with_health(self.health);
        if self.memory {
            hostile = hostile.memory();
        }
        if self.flying {
            hostile = hostile.flying();
        }
        hostile
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureSpec {
    pub tag: u64,
    pub unit_type: UnitTypeId,
    pub position: Point,
    #[serde(default)]
    pub energy: f32,
    #[serde(default = "full")]
    pub build_progress: f32,
    #[serde(default = "yes")]
    pub idle: bool,
}

impl StructureSpec {
    pub fn to_structure(&self) -> OwnStructure {
        let structure = OwnStructure::new(UnitTag(self.tag), self.unit_type, self.position)
            .with_energy(self.energy)
            .with_build_progress(self.build_progress);
        if self.idle { structure } else { structure.busy() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MineralSpec {
    pub tag: u64,
    pub position: Point,
    pub contents: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluenceSpec {
    pub center: Point,
    pub radius: f32,
    pub weight: f32,
}

/// Ground cost field: blocked cells plus threat influence circles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub blocked: Vec<(u32, u32)>,
    #[serde(default)]
    pub influence: Vec<InfluenceSpec>,
}

impl GridSpec {
    pub fn build(&self) -> CostGrid {
        let mut grid = CostGrid::new(self.width, self.height);
        for &(x, y) in &self.blocked {
            grid.block(x, y);
        }
        for spot in &self.influence {
            grid.add_influence(spot.center, spot.radius, spot.weight);
        }
        grid
    }
}

/// Everything the engine would report on one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub game_time: f32,
    #[serde(default)]
    pub units: Vec<UnitSpec>,
    #[serde(default)]
    pub structures: Vec<StructureSpec>,
    #[serde(default)]
    pub hostiles: Vec<HostileSpec>,
    /// Last known enemy structure positions.
    #[serde(default)]
    pub enemy_structures: Vec<Point>,
    #[serde(default)]
    pub mineral_fields: Vec<MineralSpec>,
    #[serde(default)]
    pub economy: EconomySnapshot,
    /// Friendly sight circles (center, radius).
    #[serde(default)]
    pub sight: Vec<(Point, f32)>,
    #[serde(default)]
    pub reveal_all: bool,
}

impl Frame {
    pub fn units(&self) -> Vec<Unit> {
        self.units.iter().map(UnitSpec::to_unit).collect()
    }

    pub fn structures(&self) -> Vec<OwnStructure> {
        self.structures.iter().map(StructureSpec::to_structure).collect()
    }

    pub fn hostiles(&self) -> Vec<HostileSnapshot> {
        self.hostiles.iter().map(HostileSpec::to_snapshot).collect()
    }

    pub fn mineral_fields(&self) -> Vec<MineralField> {
        self.mineral_fields
            .iter()
            .map(|m| MineralField {
                tag: UnitTag(m.tag),
                position: m.position,
                contents: m.contents,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub race: Race,
    pub map: MapInfo,
    /// Replaces the race's default composition when present.
    #[serde(default)]
    pub composition: Option<ArmyComposition>,
    #[serde(default)]
    pub grid: Option<GridSpec>,
    pub frames: Vec<Frame>,
}

impl Scenario {
    pub fn composition(&self) -> ArmyComposition {
        self.composition
            .clone()
            .unwrap_or_else(|| ArmyComposition::default_for(self.race))
    }

    pub fn cost_grid(&self) -> Option<CostGrid> {
        self.grid.as_ref().map(GridSpec::build)
    }
}

/// Loader for replay scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a scenario and checks its frames are in time order.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if scenario.frames.is_empty() {
            anyhow::bail!("Scenario has no frames");
        }
        for (index, pair) in scenario.frames.windows(2).enumerate() {
            if pair[1].game_time < pair[0].game_time {
                anyhow::bail!(
                    "Frame {} goes back in time ({} < {})",
                    index + 1,
                    pair[1].game_time,
                    pair[0].game_time
                );
            }
        }
        if let Some(composition) = &scenario.composition {
            composition
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid scenario composition: {}", e))?;
        }

        debug!(
            race = %scenario.race,
            frames = scenario.frames.len(),
            "scenario parsed"
        );
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SKIRMISH: &str = r#"
(
    race: Zerg,
    map: (
        player_start: (x: 10.0, y: 10.0),
        enemy_starts: [(x: 90.0, y: 90.0)],
        expansions: [(x: 30.0, y: 70.0), (x: 70.0, y: 30.0)],
    ),
    grid: Some((
        width: 100,
        height: 100,
        blocked: [(50, 50)],
        influence: [(center: (x: 80.0, y: 80.0), radius: 6.0, weight: 10.0)],
    )),
    frames: [
        (
            game_time: 60.0,
            units: [
                (tag: 1, unit_type: Roach, position: (x: 20.0, y: 20.0)),
                (tag: 2, unit_type: Roach, position: (x: 21.0, y: 20.0), health: 0.2),
            ],
            hostiles: [
                (tag: 100, unit_type: Marine, position: (x: 24.0, y: 20.0)),
                (tag: 101, unit_type: Overlord, position: (x: 22.0, y: 22.0), flying: true),
            ],
            economy: (minerals: 300, supply_used: 20, supply_cap: 30),
        ),
        (game_time: 61.0),
    ],
)
"#;

    #[test]
    fn parses_skirmish() {
        let scenario = ScenarioLoader::parse(SKIRMISH).unwrap();
        assert_eq!(scenario.race, Race::Zerg);
        assert_eq!(scenario.map.expansions.len(), 2);
        assert_eq!(scenario.frames.len(), 2);
        assert_eq!(
            scenario.composition().get(UnitTypeId::Roach).map(|e| e.proportion),
            Some(1.0)
        );

        let frame = &scenario.frames[0];
        let units = frame.units();
        assert_eq!(units[1].health_percentage, 0.2);
        assert!(units[0].weapon_ready);
        assert_eq!(frame.economy.minerals, 300);
        assert_eq!(frame.economy.vespene, 0);

        let hostiles = frame.hostiles();
        assert!(!hostiles[0].is_flying);
        assert!(hostiles[1].is_flying);

        assert!(scenario.frames[1].units.is_empty());
    }

    #[test]
    fn grid_spec_builds_blocked_and_threat_cells() {
        let grid = ScenarioLoader::parse(SKIRMISH).unwrap().cost_grid().unwrap();
        assert_eq!(grid.dimensions(), (100, 100));
        assert!(!grid.is_pathable(Point::new(50.5, 50.5)));
        assert!(!grid.is_safe(Point::new(80.5, 80.5)));
        assert!(grid.is_safe(Point::new(20.5, 20.5)));
    }

    #[test]
    fn frames_must_move_forward() {
        let content = SKIRMISH.replace("(game_time: 61.0)", "(game_time: 59.0)");
        let err = ScenarioLoader::parse(&content).unwrap_err();
        assert!(err.to_string().contains("back in time"));
    }

    #[test]
    fn scenario_without_frames_is_rejected() {
        let content = r#"(race: Terran, map: (player_start: (x: 0.0, y: 0.0), enemy_starts: [], expansions: []), frames: [])"#;
        assert!(ScenarioLoader::parse(content).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SKIRMISH.as_bytes()).unwrap();
        let scenario = ScenarioLoader::load(file.path()).unwrap();
        assert_eq!(scenario.frames[0].game_time, 60.0);
    }

    #[test]
    fn structure_spec_defaults_to_complete_and_idle() {
        let spec: StructureSpec =
            ron::from_str("(tag: 7, unit_type: Nexus, position: (x: 1.0, y: 1.0), energy: 50.0)")
                .unwrap();
        let structure = spec.to_structure();
        assert!(structure.is_complete());
        assert!(structure.is_idle);
        assert_eq!(structure.energy, 50.0);
    }
}
