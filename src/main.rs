//! Pellet Run entry point
//!
//! Headless demo driver: starts a run and lets a scripted bot steer toward
//! the nearest item for up to a minute of simulated play. Useful for
//! exercising the whole loop from the command line; an actual front end
//! would drive [`pellet_run::Game`] the same way and draw the snapshots.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use pellet_run::sim::KeyCode;
use pellet_run::{Game, GameConfig};

/// Frame budget: one minute at 60 fps
const DEMO_FRAMES: u32 = 3750;

fn main() {
    env_logger::init();

    let config = GameConfig::load(std::path::Path::new("pellet-run.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = Game::new(config, seed);
    game.start_game();

    for _ in 0..DEMO_FRAMES {
        steer(&mut game);
        game.update(16);
        if game.run_state().level > 3 {
            break;
        }
    }

    let run = *game.run_state();
    game.stop();
    println!(
        "demo finished: level {}, score {}, {} s elapsed",
        run.level, run.score, run.time_secs
    );
}

/// Hold whichever keys move the player toward the nearest live item
fn steer(game: &mut Game) {
    let player_center = game.sim_state().player + Vec2::splat(game.config().player_size / 2.0);
    let half_item = game.config().item_size / 2.0;

    let target = game
        .sim_state()
        .live_items()
        .map(|item| item.pos + Vec2::splat(half_item))
        .min_by(|a, b| {
            a.distance_squared(player_center)
                .partial_cmp(&b.distance_squared(player_center))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    for key in [KeyCode::W, KeyCode::A, KeyCode::S, KeyCode::D] {
        game.key_up(key);
    }
    let Some(target) = target else {
        return;
    };

    let delta = target - player_center;
    if delta.y < -1.0 {
        game.key_down(KeyCode::W);
    }
    if delta.y > 1.0 {
        game.key_down(KeyCode::S);
    }
    if delta.x < -1.0 {
        game.key_down(KeyCode::A);
    }
    if delta.x > 1.0 {
        game.key_down(KeyCode::D);
    }
}
