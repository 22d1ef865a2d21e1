//! End-to-end scenarios driven through the public engine API.

use survivor_sim::core::commands::PlayerCommand;
use survivor_sim::core::components::{Enemy, Health};
use survivor_sim::core::constants::DT;
use survivor_sim::core::enums::{EnemyTier, GamePhase};
use survivor_sim::core::events::SimEvent;
use survivor_sim::core::types::Position;
use survivor_sim::{SimConfig, SimulationEngine};

fn tier_hp(engine: &SimulationEngine, tier: EnemyTier) -> Vec<f64> {
    let mut q = engine.world().query::<(&Enemy, &Health)>();
    q.iter()
        .filter(|(_, (enemy, _))| enemy.tier == tier)
        .map(|(_, (_, health))| health.max_hp)
        .collect()
}

#[test]
fn test_auto_fire_kills_stationary_enemy_with_two_shots() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine
        .registry_mut()
        .spawn_enemy(EnemyTier::Normal, Position::new(100.0, 0.0), 12.0, 0.0);

    let mut fired = 0;
    for _ in 0..75 {
        let snap = engine.tick(DT);
        fired += snap
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::BulletFired))
            .count();
    }

    assert_eq!(fired, 2, "Two 10-damage bullets for 12 hp");
    assert_eq!(engine.kills(), 1);
    assert_eq!(engine.registry().enemy_count(), 0);
    assert_eq!(engine.registry().pickup_count(), 1, "One gem per kill");
}

#[test]
fn test_advance_time_fires_each_special_slot_once() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();

    engine.advance_time(600_000).unwrap();
    let snap = engine.tick(DT);
    assert!(snap.events.contains(&SimEvent::BossSpawned));
    assert!(snap.events.contains(&SimEvent::MiniBossSpawned));
    assert_eq!(tier_hp(&engine, EnemyTier::Boss), vec![1000.0 + 10.0 * 400.0]);
    assert_eq!(engine.registry().count_tier(EnemyTier::MiniBoss), 1);

    let snap = engine.tick(DT);
    assert!(
        !snap.events.contains(&SimEvent::BossSpawned),
        "A slot never fires twice"
    );

    engine.advance_time(600_000).unwrap();
    let snap = engine.tick(DT);
    let bosses = snap
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::BossSpawned))
        .count();
    let minis = snap
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::MiniBossSpawned))
        .count();
    assert_eq!((bosses, minis), (1, 1), "Slots at 900 s and 1200 s");
    assert_eq!(engine.stats().bosses_spawned, 2);
    assert_eq!(engine.stats().mini_bosses_spawned, 2);
}

#[test]
fn test_difficulty_reports_current_curve() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    assert_eq!(engine.difficulty().spawn_interval_ms, 1292.0);

    engine.advance_time(20 * 60 * 1000).unwrap();
    let sample = engine.difficulty();
    assert_eq!(sample.spawn_interval_ms, 150.0);
    assert_eq!(sample.elite_chance_pct, 30.0);
}

#[test]
fn test_contact_damage_accumulates_until_game_over() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.player_mut().health = 1.0;
    engine
        .registry_mut()
        .spawn_enemy(EnemyTier::Elite, Position::default(), 1000.0, 0.0);

    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Running);
    assert!((snap.player.health - 0.6).abs() < 1e-9);

    let snap = engine.tick(DT);
    assert!((snap.player.health - 0.2).abs() < 1e-9);

    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.player.health, 0.0);
    assert_eq!(snap.score, 0, "Died inside the first second with no kills");
}

#[test]
fn test_commands_apply_at_tick_boundary() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.queue_commands([
        PlayerCommand::SetMoveInput { x: 0.0, y: 1.0 },
        PlayerCommand::Pause,
    ]);
    assert_eq!(engine.phase(), GamePhase::Running, "Queued, not yet applied");

    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Paused);
    assert_eq!(snap.time.tick, 0);

    engine.queue_command(PlayerCommand::Resume);
    engine.tick(DT);
    assert!(engine.scroll_offset().y > 0.0);
}

#[test]
fn test_rejected_command_leaves_state_unchanged() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.queue_command(PlayerCommand::SelectUpgrade { index: 0 });
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Running);
    assert!(snap.events.is_empty());
}
