#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::Health;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::player::PlayerState;
    use crate::state::GameStateSnapshot;
    use crate::types::{MoveInput, Position, SimTime};

    #[test]
    fn test_enemy_tier_serde() {
        let variants = vec![
            EnemyTier::Normal,
            EnemyTier::Elite,
            EnemyTier::MiniBoss,
            EnemyTier::Boss,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyTier = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_tagged_json() {
        let cmd = PlayerCommand::SelectUpgrade { index: 2 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SelectUpgrade\""), "got {json}");
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"AdvanceTime","ms":60000}"#).unwrap();
        assert_eq!(parsed, PlayerCommand::AdvanceTime { ms: 60_000 });
    }

    #[test]
    fn test_event_tagged_json() {
        let ev = SimEvent::EnemyKilled {
            tier: EnemyTier::Elite,
            position: Position::new(3.0, -4.0),
        };
        let json = serde_json::to_string(&ev).unwrap();
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ev);
    }

    #[test]
    fn test_snapshot_default_round_trip() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Running);
        assert!(back.enemies.is_empty());
    }

    #[test]
    fn test_sim_time_minutes_use_whole_seconds() {
        let mut time = SimTime::default();
        time.advance(89.9);
        assert_eq!(time.tick, 1);
        assert_eq!(time.whole_seconds(), 89);
        assert_eq!(time.whole_minutes(), 1);
        assert!((time.minutes() - 89.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_position_geometry() {
        let p = Position::new(3.0, 4.0);
        assert!((p.range() - 5.0).abs() < 1e-12);

        let ring = Position::on_ring(std::f64::consts::FRAC_PI_2, 650.0);
        assert!(ring.0.x.abs() < 1e-9);
        assert!((ring.0.y - 650.0).abs() < 1e-9);

        let origin = Position::default();
        let angle = origin.angle_to(&Position::new(0.0, 10.0));
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_move_input_is_clamped_but_not_normalized() {
        let input = MoveInput::new(3.0, -1.0);
        assert_eq!(input.x, 1.0);
        assert_eq!(input.y, -1.0);
        // Diagonal keeps length sqrt(2).
        assert!((input.as_vec().length() - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_player_damage_and_heal_are_clamped() {
        let mut player = PlayerState::default();
        player.take_damage(250.0);
        assert_eq!(player.health, 0.0);
        assert!(player.is_dead());

        player.heal(1_000.0);
        assert_eq!(player.health, player.max_health);
    }

    #[test]
    fn test_player_state_partial_override() {
        let player: PlayerState =
            serde_json::from_str(r#"{"max_health":150.0,"weapons":{"sword_count":2}}"#).unwrap();
        assert_eq!(player.max_health, 150.0);
        assert_eq!(player.level, 1);
        assert_eq!(player.weapons.sword_count, 2);
        assert_eq!(player.weapons.bullet_damage, 10.0);
    }

    #[test]
    fn test_health_ratio() {
        let mut h = Health::new(12.0);
        assert_eq!(h.ratio(), 1.0);
        h.hp = 3.0;
        assert!((h.ratio() - 0.25).abs() < 1e-12);
        h.hp = -5.0;
        assert!(h.is_dead());
        assert_eq!(h.ratio(), 0.0);
    }

    #[test]
    fn test_phase_halted() {
        assert!(!GamePhase::Running.is_halted());
        assert!(GamePhase::Paused.is_halted());
        assert!(GamePhase::ChoosingUpgrade.is_halted());
        assert!(GamePhase::GameOver.is_halted());
    }
}
