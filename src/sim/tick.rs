//! Game loop and level controller
//!
//! [`Game`] owns the whole run: both state stores, the input tracker, and
//! the scheduling accumulators. The front end calls [`Game::update`] once
//! per frame with elapsed wall milliseconds; internally that drains the
//! fixed-rate movement and clock schedules, then runs one collision frame
//! check. Within a drained movement tick the order is always input read,
//! integration, clamp, state write; ticks never interleave.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::overlaps;
use super::input::{InputTracker, KeyCode};
use super::movement;
use super::placement::generate_items;
use super::state::{GamePhase, ItemPhase, RunState, SimulationState};
use crate::config::GameConfig;

/// A full game run: state, input, and the tick scheduler
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    /// Run seed; per-level RNG streams are derived from it
    seed: u64,
    sim: SimulationState,
    run: RunState,
    input: InputTracker,
    /// Live items not yet detected as collected
    remaining: u32,
    /// Milliseconds of game time since start; collection deadlines are
    /// measured against this clock, never wall time
    clock_ms: u64,
    move_acc_ms: u64,
    clock_acc_ms: u64,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let border = config.default_border_color;
        Self {
            config,
            seed,
            sim: SimulationState::default(),
            run: RunState::new(border),
            input: InputTracker::new(),
            remaining: 0,
            clock_ms: 0,
            move_acc_ms: 0,
            clock_acc_ms: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// HUD-facing run snapshot
    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    /// Arena snapshot for rendering and collision reads
    pub fn sim_state(&self) -> &SimulationState {
        &self.sim
    }

    /// Direct access to the store's mutation entry points
    /// (scripted scenarios, test harnesses)
    pub fn sim_state_mut(&mut self) -> &mut SimulationState {
        &mut self.sim
    }

    /// Items left before the level is complete
    pub fn remaining_items(&self) -> u32 {
        self.remaining
    }

    pub fn key_down(&mut self, key: KeyCode) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.input.key_up(key);
    }

    /// Replace the board wholesale, resetting the remaining-item counter
    ///
    /// Level transitions go through here; scripted scenarios may too.
    pub fn set_items(&mut self, positions: Vec<Vec2>) {
        self.remaining = positions.len() as u32;
        self.sim.set_items(positions);
    }

    /// Begin (or restart) a run
    ///
    /// Resets clock, score, level, and border color, respawns the player,
    /// and places a fresh item batch.
    pub fn start_game(&mut self) {
        self.run = RunState::new(self.config.default_border_color);
        self.run.phase = GamePhase::Running;
        self.clock_ms = 0;
        self.move_acc_ms = 0;
        self.clock_acc_ms = 0;
        self.input.clear();

        let spawn = self.config.player_spawn;
        self.sim.set_player_position(spawn.x, spawn.y);

        let mut rng = self.level_rng();
        let items = generate_items(self.config.items_per_level, &self.config, &mut rng);
        self.set_items(items);

        log::info!(
            "game started: seed {}, {} items on the board",
            self.seed,
            self.remaining
        );
    }

    /// Tear the run down
    ///
    /// Clears the item set so pending collection deadlines can never fire
    /// against a stopped game.
    pub fn stop(&mut self) {
        if self.run.phase == GamePhase::NotStarted {
            return;
        }
        self.run.phase = GamePhase::NotStarted;
        self.sim.items.clear();
        self.remaining = 0;
        self.input.clear();
        self.move_acc_ms = 0;
        self.clock_acc_ms = 0;
        log::info!("game stopped at level {}", self.run.level);
    }

    /// Advance the simulation by `dt_ms` of frame time
    ///
    /// No-op unless running. Movement ticks and clock ticks fire as many
    /// times as their intervals fit; the collision check runs once per
    /// call, i.e. once per rendered frame.
    pub fn update(&mut self, dt_ms: u64) {
        if self.run.phase != GamePhase::Running {
            return;
        }
        self.clock_ms += dt_ms;

        let move_step = self.config.movement_tick_ms.max(1);
        self.move_acc_ms += dt_ms;
        while self.move_acc_ms >= move_step {
            self.move_acc_ms -= move_step;
            self.movement_tick();
        }

        let clock_step = self.config.clock_tick_ms.max(1);
        self.clock_acc_ms += dt_ms;
        while self.clock_acc_ms >= clock_step {
            self.clock_acc_ms -= clock_step;
            self.run.time_secs += 1;
        }

        self.frame_check();
    }

    /// One fixed movement tick: snapshot input, integrate, write back
    fn movement_tick(&mut self) {
        let snapshot = self.input.snapshot();
        let next = movement::integrate(self.sim.player, &snapshot, &self.config);
        self.sim.set_player_position(next.x, next.y);
    }

    /// Per-frame collision pass
    ///
    /// Detection marks a live item `Collecting` exactly once, no matter how
    /// many frames the overlap persists. Finalization removes items whose
    /// deadline has passed, scores them, and advances the level when the
    /// batch is exhausted.
    fn frame_check(&mut self) {
        let now = self.clock_ms;
        let player = self.sim.player;
        let deadline_ms = now + self.config.collection_delay_ms;

        for item in &mut self.sim.items {
            if item.is_live()
                && overlaps(item.pos, self.config.item_size, player, self.config.player_size)
            {
                item.phase = ItemPhase::Collecting { deadline_ms };
                log::debug!("collecting item at {}", item.pos);
            }
        }

        let before = self.sim.items.len();
        self.sim.items.retain(|item| match item.phase {
            ItemPhase::Live => true,
            ItemPhase::Collecting { deadline_ms } => deadline_ms > now,
        });
        let collected = (before - self.sim.items.len()) as u32;

        if collected > 0 {
            self.remaining = self.remaining.saturating_sub(collected);
            self.run.score += self.config.points_per_item * u64::from(collected);
            if self.remaining == 0 {
                self.advance_level();
            }
        }
    }

    /// Level complete: recolor the border and place the next batch
    ///
    /// Player position, score, and elapsed time carry over; only
    /// `start_game` resets them.
    fn advance_level(&mut self) {
        self.run.level += 1;
        let mut rng = self.level_rng();
        self.run.border_color = rng.random_range(0..0x0100_0000u32);
        let items = generate_items(self.config.items_per_level, &self.config, &mut rng);
        self.set_items(items);
        log::info!(
            "level {} started (border #{:06x}, score {})",
            self.run.level,
            self.run.border_color,
            self.run.score
        );
    }

    /// Per-level RNG stream, reproducible from the run seed
    fn level_rng(&self) -> Pcg32 {
        let level_seed = u64::from(self.run.level)
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed);
        Pcg32::seed_from_u64(level_seed)
    }
}
