//! Simulation engine: the clock that drives every system.
//!
//! `SimulationEngine` owns the entity registry, the player record and all
//! per-run state. Commands are queued and applied at the next tick
//! boundary; `tick` then runs the systems in a fixed order and returns a
//! `GameStateSnapshot`. Completely headless, so every run is reproducible
//! from its seed and command stream.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use survivor_balance::curve::DifficultySample;
use survivor_core::commands::PlayerCommand;
use survivor_core::enums::{GamePhase, UpgradeId};
use survivor_core::events::SimEvent;
use survivor_core::player::PlayerState;
use survivor_core::state::GameStateSnapshot;
use survivor_core::types::{MoveInput, SimTime};

use crate::config::SimConfig;
use crate::error::{CommandRejected, ConfigError};
use crate::registry::EntityRegistry;
use crate::stats::RunStats;
use crate::systems;
use crate::systems::camera::Camera;
use crate::systems::combat::CombatContext;
use crate::systems::progression::Progression;
use crate::systems::spawn_director::SpawnDirectorState;

/// The simulation engine. Owns the registry and all run state.
pub struct SimulationEngine {
    config: SimConfig,
    registry: EntityRegistry,
    time: SimTime,
    phase: GamePhase,
    god_mode: bool,
    input: MoveInput,
    player: PlayerState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,

    director: SpawnDirectorState,
    camera: Camera,
    progression: Progression,
    stats: RunStats,
}

impl SimulationEngine {
    /// Create an engine and start the first run. The config is validated
    /// here as well as on load, so values built in code get the same checks.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut engine = Self {
            registry: EntityRegistry::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            god_mode: false,
            input: MoveInput::default(),
            player: config.player,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            director: SpawnDirectorState::new(&config.curve),
            camera: Camera::default(),
            progression: Progression::default(),
            stats: RunStats::default(),
            config,
        };
        engine.sync_swords();
        tracing::info!(seed = engine.config.seed, "simulation created");
        Ok(engine)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. Nothing but command handling happens unless the run is in
    /// the `Running` phase.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            let dt = if dt >= 0.0 {
                dt
            } else {
                tracing::warn!(dt, "negative frame delta clamped to zero");
                0.0
            };
            self.run_systems(dt);
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Snapshot of the current state without consuming pending events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(Vec::new())
    }

    /// Apply a command immediately instead of at the next tick boundary.
    pub fn apply_command(&mut self, command: PlayerCommand) -> Result<(), CommandRejected> {
        let name = command.name();
        let wrong_phase = |phase| CommandRejected::WrongPhase {
            command: name,
            phase,
        };

        match command {
            PlayerCommand::SetMoveInput { x, y } => {
                self.input = MoveInput::new(x, y);
            }
            PlayerCommand::Pause => {
                if self.phase != GamePhase::Running {
                    return Err(wrong_phase(self.phase));
                }
                self.phase = GamePhase::Paused;
                tracing::debug!(elapsed = self.time.elapsed_secs, "paused");
            }
            PlayerCommand::Resume => {
                if self.phase != GamePhase::Paused {
                    return Err(wrong_phase(self.phase));
                }
                self.phase = GamePhase::Running;
                tracing::debug!(elapsed = self.time.elapsed_secs, "resumed");
            }
            PlayerCommand::SelectUpgrade { index } => {
                if self.phase != GamePhase::ChoosingUpgrade {
                    return Err(wrong_phase(self.phase));
                }
                self.progression
                    .select(index, &mut self.player, &mut self.events)?;
                self.sync_swords();
                let still_choosing = self.progression.open_choice(
                    &self.player,
                    &mut self.rng,
                    self.config.upgrade_offer_count,
                );
                if !still_choosing {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::ResetRun => {
                self.reset_run();
            }
            PlayerCommand::ToggleGodMode => {
                self.toggle_god_mode();
            }
            PlayerCommand::AdvanceTime { ms } => {
                if self.phase == GamePhase::GameOver {
                    return Err(wrong_phase(self.phase));
                }
                self.time.elapsed_secs += ms as f64 / 1000.0;
                tracing::info!(ms, elapsed = self.time.elapsed_secs, "clock advanced");
            }
            PlayerCommand::ForceLevelUp => {
                if self.phase != GamePhase::Running {
                    return Err(wrong_phase(self.phase));
                }
                self.progression.pending_experience = self
                    .progression
                    .pending_experience
                    .saturating_add(self.player.experience_to_next_level);
                self.run_progression();
            }
        }
        Ok(())
    }

    pub fn set_move_input(&mut self, x: f64, y: f64) {
        self.input = MoveInput::new(x, y);
    }

    pub fn pause(&mut self) -> Result<(), CommandRejected> {
        self.apply_command(PlayerCommand::Pause)
    }

    pub fn resume(&mut self) -> Result<(), CommandRejected> {
        self.apply_command(PlayerCommand::Resume)
    }

    pub fn select_upgrade(&mut self, index: usize) -> Result<(), CommandRejected> {
        self.apply_command(PlayerCommand::SelectUpgrade { index })
    }

    pub fn toggle_god_mode(&mut self) {
        self.god_mode = !self.god_mode;
        tracing::info!(god_mode = self.god_mode, "god mode toggled");
    }

    pub fn advance_time(&mut self, ms: u64) -> Result<(), CommandRejected> {
        self.apply_command(PlayerCommand::AdvanceTime { ms })
    }

    pub fn force_level_up(&mut self) -> Result<(), CommandRejected> {
        self.apply_command(PlayerCommand::ForceLevelUp)
    }

    /// Discard the current run and start a fresh one with the configured
    /// player. The RNG stream continues rather than restarting.
    pub fn reset_run(&mut self) {
        self.registry.clear();
        self.time = SimTime::default();
        self.phase = GamePhase::Running;
        self.god_mode = false;
        self.player = self.config.player;
        self.director = SpawnDirectorState::new(&self.config.curve);
        self.camera = Camera::default();
        self.progression = Progression::default();
        self.stats = RunStats::default();
        self.events.clear();
        self.sync_swords();
        tracing::info!("run reset");
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn god_mode(&self) -> bool {
        self.god_mode
    }

    pub fn input(&self) -> MoveInput {
        self.input
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable player record, for scripted scenarios and debug tooling.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn kills(&self) -> u32 {
        self.stats.kills
    }

    /// Current score; final once the phase is `GameOver`.
    pub fn score(&self) -> u64 {
        self.stats.score(&self.time)
    }

    pub fn offers(&self) -> &[UpgradeId] {
        &self.progression.offers
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn spawn_director(&self) -> &SpawnDirectorState {
        &self.director
    }

    pub fn scroll_offset(&self) -> DVec2 {
        self.camera.scroll_offset
    }

    /// Difficulty curve evaluated at the current time and level.
    pub fn difficulty(&self) -> DifficultySample {
        self.config
            .curve
            .sample(self.time.elapsed_secs, self.player.level)
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Mutable registry, for scripted scenarios and debug tooling.
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        self.registry.world()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command) {
                tracing::debug!(%err, "command rejected");
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Clock
        self.time.advance(dt);

        // 2. Camera
        let scroll = systems::camera::compute_movement(self.input, self.player.move_speed, dt);
        self.camera.scroll(scroll);

        // 3. Spawn director
        systems::spawn_director::run(
            &mut self.registry,
            &mut self.rng,
            &mut self.director,
            &self.config.curve,
            &self.time,
            self.player.level,
            dt,
            &mut self.stats,
            &mut self.events,
        );

        // 4. Weapons and combat
        systems::weapons::update_swords(self.registry.world_mut(), &self.time);
        systems::weapons::auto_fire(
            &mut self.registry,
            &self.player,
            &mut self.director,
            &self.time,
            &mut self.stats,
            &mut self.events,
        );
        let mut ctx = CombatContext {
            rng: &mut self.rng,
            stats: &mut self.stats,
            events: &mut self.events,
            whole_minutes: self.time.whole_minutes(),
        };
        systems::weapons::strike_lightning(
            &mut self.registry,
            &self.player,
            &mut self.director,
            &self.time,
            &mut ctx,
        );
        let outcome = systems::combat::run(
            &mut self.registry,
            &mut self.player,
            self.god_mode,
            &mut self.progression.pending_experience,
            &mut ctx,
        );

        // 5. Movement and culling
        systems::movement::run(
            self.registry.world_mut(),
            scroll,
            dt,
            self.player.weapons.magnet_radius,
        );
        systems::cleanup::run(self.registry.world_mut(), &mut self.despawn_buffer);

        // 6. Game over or progression
        if outcome.player_died {
            self.enter_game_over();
        } else {
            self.run_progression();
        }
    }

    fn run_progression(&mut self) {
        let choosing = self.progression.run(
            &mut self.player,
            &mut self.rng,
            self.config.level_exp_growth,
            self.config.upgrade_offer_count,
            &mut self.events,
        );
        if choosing {
            self.phase = GamePhase::ChoosingUpgrade;
        }
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        let score = self.score();
        self.events.push(SimEvent::GameOver { score });
        tracing::info!(
            score,
            kills = self.stats.kills,
            level = self.player.level,
            elapsed = self.time.elapsed_secs,
            "game over"
        );
    }

    /// Spawn orbital weapon entities until they match the player's count.
    fn sync_swords(&mut self) {
        let have = self.registry.sword_count() as u32;
        for index in have..self.player.weapons.sword_count {
            self.registry
                .spawn_sword(index, self.player.weapons.sword_damage);
        }
        systems::weapons::update_swords(self.registry.world_mut(), &self.time);
    }

    fn build_snapshot(&self, events: Vec<SimEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            self.registry.world(),
            &self.time,
            self.phase,
            self.god_mode,
            &self.player,
            &self.stats,
            &self.progression.offers,
            self.camera.scroll_offset,
            events,
        )
    }
}
