use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::env;

use starstorm::constants::{BACKGROUND_COLOR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use starstorm::rng::GameRng;
use starstorm::{assets, audio, config, hud, session};

/// Build the gameplay RNG, honouring a `STARSTORM_SEED` override so a
/// session can be replayed deterministically.
fn game_rng() -> GameRng {
    match env::var("STARSTORM_SEED").ok().and_then(|s| s.parse().ok()) {
        Some(seed) => {
            println!("✓ RNG seeded from STARSTORM_SEED = {seed}");
            GameRng::seeded(seed)
        }
        None => GameRng::default(),
    }
}

fn main() {
    let (r, g, b) = BACKGROUND_COLOR;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: WindowResolution::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb_u8(r, g, b)))
        .insert_resource(game_rng())
        .add_plugins(session::GamePlugin)
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_game_config,
                assets::load_assets.after(config::load_game_config),
                hud::setup_camera,
                hud::setup_hud.after(assets::load_assets),
                audio::start_music.after(assets::load_assets),
            ),
        )
        .add_systems(
            Update,
            (
                assets::build_masks_system,
                assets::asset_watchdog_system,
                audio::play_sound_system,
                hud::score_display_system,
            ),
        )
        .add_systems(OnEnter(session::GameState::GameOver), hud::setup_game_over)
        .add_systems(
            OnExit(session::GameState::GameOver),
            hud::cleanup_game_over,
        )
        .run();
}
