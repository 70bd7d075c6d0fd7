use game_core::{
    AbilityId, EconomySnapshot, GameError, MapInfo, OracleError, OwnStructure, Point,
    ProductionRequest, Race, RoleStore, SetupError, Stance, TacticsConfig, TacticsEnv, Unit,
    UnitAction, UnitRole, UnitTag, UnitTypeId,
};
use runtime::{CommandBuffer, OracleManager, RoleTable, RuntimeError, TacticsSession, TickInput};
use std::sync::{Arc, Mutex};

fn map() -> MapInfo {
    MapInfo::new(
        Point::new(5.0, 5.0),
        vec![Point::new(90.0, 90.0)],
        vec![Point::new(30.0, 80.0), Point::new(80.0, 30.0)],
    )
}

fn session(race: Race) -> TacticsSession {
    TacticsSession::new(TacticsConfig::default(), race, map()).unwrap()
}

fn unit(tag: u64, unit_type: UnitTypeId) -> Unit {
    Unit::new(UnitTag(tag), unit_type, Point::new(10.0, 10.0))
}

fn run(session: &mut TacticsSession, units: &[Unit], iteration: u64) -> runtime::TickReport {
    let mut input = TickInput::new(iteration, 60.0);
    input.units = units.to_vec();
    session.tick(
        &input,
        &OracleManager::default().as_env(),
        &mut CommandBuffer::new(),
    )
}

#[test]
fn missing_expansions_fail_construction() {
    let map = MapInfo::new(Point::ORIGIN, vec![Point::new(1.0, 1.0)], Vec::new());
    let err = TacticsSession::new(TacticsConfig::default(), Race::Zerg, map)
        .err()
        .unwrap();
    assert_eq!(err, RuntimeError::Setup(SetupError::NoExpansionSites));
    assert_eq!(err.error_code(), "SETUP_NO_EXPANSION_SITES");
    assert!(err.severity().is_internal());
}

#[test]
fn invalid_config_fails_construction() {
    let config = TacticsConfig {
        unburrow_at_health: 0.2,
        ..TacticsConfig::default()
    };
    assert!(matches!(
        TacticsSession::new(config, Race::Zerg, map()),
        Err(RuntimeError::Setup(SetupError::InvalidConfig { .. }))
    ));
}

#[test]
fn only_combat_units_get_roles() {
    let mut session = session(Race::Zerg);
    for (tag, unit_type) in [
        (1, UnitTypeId::Drone),
        (2, UnitTypeId::Queen),
        (3, UnitTypeId::Overlord),
        (4, UnitTypeId::Larva),
        (5, UnitTypeId::Roach),
        (6, UnitTypeId::Zergling),
    ] {
        session.on_unit_created(&unit(tag, unit_type));
    }
    assert_eq!(
        session.roles().units_with_role(UnitRole::Attacking),
        vec![UnitTag(5), UnitTag(6)]
    );
}

#[test]
fn role_assignment_is_idempotent() {
    let mut session = session(Race::Terran);
    let marine = unit(1, UnitTypeId::Marine);
    assert_eq!(session.on_unit_created(&marine), Some(UnitRole::Attacking));
    assert_eq!(session.on_unit_created(&marine), None);
    assert_eq!(session.roles().units_with_role(UnitRole::Attacking), vec![UnitTag(1)]);
}

#[test]
fn gate_waits_for_race_threshold() {
    let mut terran = session(Race::Terran);
    let marines: Vec<Unit> = (1..=3).map(|t| unit(t, UnitTypeId::Marine)).collect();
    for m in &marines[..2] {
        terran.on_unit_created(m);
    }
    let report = run(&mut terran, &marines[..2], 1);
    assert!(!report.gate_open);
    assert_eq!(report.army_supply, 2.0);
    assert!(report.maneuvers.is_empty());

    terran.on_unit_created(&marines[2]);
    let report = run(&mut terran, &marines, 2);
    assert!(report.gate_opened);
    assert!(report.maneuvers.is_empty(), "micro starts on the following tick");

    let report = run(&mut terran, &marines, 3);
    assert_eq!(report.maneuvers.len(), 3);

    let mut protoss = session(Race::Protoss);
    let zealots: Vec<Unit> = (1..=2).map(|t| unit(t, UnitTypeId::Zealot)).collect();
    for z in &zealots {
        protoss.on_unit_created(z);
    }
    assert!(!run(&mut protoss, &zealots, 1).gate_open);
}

#[test]
fn gate_never_closes_after_losses() {
    let mut session = session(Race::Zerg);
    let roaches: Vec<Unit> = (1..=3).map(|t| unit(t, UnitTypeId::Roach)).collect();
    for r in &roaches {
        session.on_unit_created(r);
    }
    assert!(run(&mut session, &roaches, 1).gate_opened);

    for r in &roaches[..2] {
        session.on_unit_destroyed(r.tag);
    }
    let survivors = &roaches[2..];
    for iteration in 2..5 {
        let report = run(&mut session, survivors, iteration);
        assert!(report.gate_open);
        assert!(!report.gate_opened);
        assert_eq!(report.army_supply, 2.0);
        assert_eq!(report.maneuvers.len(), 1);
    }
}

#[test]
fn unit_loss_drops_role_and_stance() {
    let mut session = session(Race::Zerg);
    let roaches: Vec<Unit> = (1..=3).map(|t| unit(t, UnitTypeId::Roach)).collect();
    for r in &roaches {
        session.on_unit_created(r);
    }
    run(&mut session, &roaches, 1);

    let mut hurt = roaches.clone();
    hurt[0] = hurt[0].clone().with_health(0.1);
    run(&mut session, &hurt, 2);
    assert_eq!(session.stances().stance_of(UnitTag(1)), Stance::Burrowed);

    session.on_unit_destroyed(UnitTag(1));
    assert_eq!(session.roles().role_of(UnitTag(1)), None);
    assert_eq!(session.stances().stance_of(UnitTag(1)), Stance::Surfaced);
}

/// Role registry shared with the host bot.
#[derive(Clone, Default)]
struct SharedRoles(Arc<Mutex<RoleTable>>);

impl RoleStore for SharedRoles {
    fn assign(&mut self, tag: UnitTag, role: UnitRole) -> Result<(), game_core::RoleError> {
        self.0.lock().unwrap().assign(tag, role)
    }

    fn role_of(&self, tag: UnitTag) -> Option<UnitRole> {
        self.0.lock().unwrap().role_of(tag)
    }

    fn units_with_role(&self, role: UnitRole) -> Vec<UnitTag> {
        self.0.lock().unwrap().units_with_role(role)
    }

    fn release(&mut self, tag: UnitTag) -> Option<UnitRole> {
        self.0.lock().unwrap().release(tag)
    }
}

#[test]
fn external_role_store_is_shared_with_host() {
    let host = SharedRoles::default();
    host.0
        .lock()
        .unwrap()
        .assign(UnitTag(1), UnitRole::Attacking)
        .unwrap();

    let mut session = session(Race::Terran).with_role_store(Box::new(host.clone()));
    let marines: Vec<Unit> = (1..=3).map(|t| unit(t, UnitTypeId::Marine)).collect();
    assert_eq!(session.on_unit_created(&marines[0]), None);
    assert_eq!(session.on_unit_created(&marines[1]), Some(UnitRole::Attacking));
    assert_eq!(session.on_unit_created(&marines[2]), Some(UnitRole::Attacking));
    assert_eq!(
        host.units_with_role(UnitRole::Attacking),
        vec![UnitTag(1), UnitTag(2), UnitTag(3)]
    );

    assert!(run(&mut session, &marines, 1).gate_opened);
    let report = run(&mut session, &marines, 2);
    assert_eq!(report.maneuvers.len(), 3);
    assert!(report.step_of(UnitTag(1)).is_some());

    session.on_unit_destroyed(UnitTag(2));
    assert_eq!(host.role_of(UnitTag(2)), None);
}

#[test]
fn role_holders_missing_from_snapshot_are_skipped() {
    let mut session = session(Race::Terran);
    let marines: Vec<Unit> = (1..=4).map(|t| unit(t, UnitTypeId::Marine)).collect();
    for m in &marines {
        session.on_unit_created(m);
    }
    run(&mut session, &marines, 1);

    let report = run(&mut session, &marines[1..], 2);
    assert_eq!(report.maneuvers.len(), 3);
    assert!(report.step_of(UnitTag(1)).is_none());
}

#[test]
fn missing_collaborator_degrades_tick() {
    let mut session = session(Race::Terran);
    let marines: Vec<Unit> = (1..=3).map(|t| unit(t, UnitTypeId::Marine)).collect();
    for m in &marines {
        session.on_unit_created(m);
    }
    run(&mut session, &marines, 1);

    let mut input = TickInput::new(2, 60.0);
    input.units = marines;
    let mut sink = CommandBuffer::new();
    let report = session.tick(&input, &TacticsEnv::empty(), &mut sink);

    assert_eq!(report.degraded, Some(OracleError::SpatialNotAvailable));
    assert!(report.maneuvers.is_empty());
    assert!(sink.actions().is_empty());
    assert!(report.gate_open);
}

#[test]
fn production_and_macro_run_before_the_gate_opens() {
    let mut session = session(Race::Terran);
    let mut input = TickInput::new(1, 60.0);
    input.economy = EconomySnapshot {
        minerals: 400,
        supply_used: 14,
        supply_cap: 15,
        build_order_complete: true,
        ..Default::default()
    };
    input.structures = vec![OwnStructure::new(
        UnitTag(50),
        UnitTypeId::SupplyDepot,
        Point::new(8.0, 8.0),
    )];

    let mut sink = CommandBuffer::new();
    let report = session.tick(&input, &OracleManager::default().as_env(), &mut sink);

    assert!(!report.gate_open);
    assert_eq!(report.macro_commands, 1);
    assert_eq!(
        sink.actions_for(UnitTag(50)),
        vec![UnitAction::ability(AbilityId::LowerSupplyDepot)]
    );
    assert_eq!(
        sink.production(),
        &[
            ProductionRequest::Supply {
                near: Point::new(5.0, 5.0)
            },
            ProductionRequest::Train {
                unit_type: UnitTypeId::Marine,
                count: 1
            },
        ]
    );
}

#[test]
fn macro_tasks_can_be_disabled() {
    let config = TacticsConfig {
        macro_tasks: false,
        ..TacticsConfig::default()
    };
    let mut session = TacticsSession::new(config, Race::Terran, map()).unwrap();
    let mut input = TickInput::new(1, 60.0);
    input.structures = vec![OwnStructure::new(
        UnitTag(50),
        UnitTypeId::SupplyDepot,
        Point::new(8.0, 8.0),
    )];
    let mut sink = CommandBuffer::new();
    let report = session.tick(&input, &OracleManager::default().as_env(), &mut sink);
    assert_eq!(report.macro_commands, 0);
    assert!(sink.actions().is_empty());
}
