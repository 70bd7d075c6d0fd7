use std::path::PathBuf;

use game_content::{ContentFactory, ScenarioLoader};
use game_core::{Race, TacticsConfig, UnitTypeId};
use warband_client::ReplayConfig;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn shipped_config_matches_defaults() {
    let config = ContentFactory::new(data_dir()).load_config().unwrap();
    assert_eq!(config, TacticsConfig::default());
}

#[test]
fn shipped_compositions_parse() {
    let factory = ContentFactory::new(data_dir());
    let zerg = factory.load_composition(Race::Zerg).unwrap();
    assert_eq!(zerg.by_priority()[0].0, UnitTypeId::Roach);
    assert_eq!(zerg.len(), 2);

    let protoss = factory.load_composition(Race::Protoss).unwrap();
    assert!(protoss.get(UnitTypeId::Zealot).is_some());

    // No terran file ships, so the race default applies.
    assert_eq!(factory.load_composition(Race::Terran).unwrap().len(), 1);
}

#[test]
fn skirmish_replays_end_to_end() {
    let config = ReplayConfig {
        data_dir: data_dir(),
        config_path: None,
        scenario_path: Some(data_dir().join("scenarios/skirmish.ron")),
    };
    let summary = warband_client::run(&config).unwrap();

    assert_eq!(summary.ticks, 4);
    assert_eq!(summary.gate_opened_at, Some(1));
    assert_eq!(summary.degraded_ticks, 0);
    // Three roaches on ticks two and three, two survivors on tick four.
    assert!(summary.commands >= 8, "{summary:?}");
    assert!(summary.production >= 1);
}

#[test]
fn missing_scenario_is_an_error() {
    let config = ReplayConfig {
        data_dir: data_dir(),
        ..ReplayConfig::default()
    };
    let err = warband_client::run(&config).unwrap_err();
    assert!(err.to_string().contains("WARBAND_SCENARIO"));
}

#[test]
fn skirmish_frames_are_ordered() {
    let scenario = ScenarioLoader::load(&data_dir().join("scenarios/skirmish.ron")).unwrap();
    assert_eq!(scenario.race, Race::Zerg);
    assert!(scenario.composition.is_none());
    assert!(scenario.cost_grid().is_some());
}
