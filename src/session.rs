//! Session state and the core game plugin.
//!
//! One play-through is a `Playing` session: meteors spawn on a fixed
//! interval, every entity updates by the frame delta, collisions resolve,
//! and the HUD renders. Heart depletion flips the state to `GameOver`,
//! which freezes spawning, updates, and collisions until `R` resets the
//! session. All mutable session state lives in explicit resources — no
//! ambient globals.
//!
//! [`GamePlugin`] wires only the headless-safe core (states, resources,
//! messages, gameplay systems); rendering, audio playback, and asset
//! loading are attached by `main.rs` so integration tests can drive the
//! core with `MinimalPlugins`.

use crate::assets::{MaskAssets, SpriteAssets};
use crate::audio::PlaySound;
use crate::collision::{self, PlayerHit};
use crate::config::GameConfig;
use crate::explosion::{self, ExplosionFrames};
use crate::heart::{self, Hearts};
use crate::laser;
use crate::meteor::{self, MeteorSpawnTimer};
use crate::player;
use crate::rng::GameRng;
use crate::star;
use crate::timing::Pulse;
use bevy::prelude::*;

/// Top-level session state machine.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Live session: spawning, updates, and collisions all run.
    #[default]
    Playing,
    /// Session frozen behind the game-over overlay; waiting for restart.
    GameOver,
}

/// Meteors destroyed this session.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Score(pub u32);

/// Tag on every session-scoped entity (stars, hearts, player, lasers,
/// meteors, explosions). A session reset despawns everything carrying it,
/// so no entity outlives a restart.
#[derive(Component)]
pub struct GameEntity;

/// Core gameplay plugin: state machine, session resources, messages, and
/// the per-frame update/collision pipeline.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameConfig>()
            .init_resource::<GameRng>()
            .init_resource::<Score>()
            .init_resource::<Hearts>()
            .init_resource::<MeteorSpawnTimer>()
            .init_resource::<SpriteAssets>()
            .init_resource::<MaskAssets>()
            .init_resource::<ExplosionFrames>()
            .add_message::<PlaySound>()
            .add_message::<PlayerHit>()
            .add_systems(OnEnter(GameState::Playing), enter_playing)
            .add_systems(
                Update,
                (
                    (
                        player::movement_system,
                        player::fire_system,
                        star::blink_system,
                        heart::pulse_system,
                        laser::move_system,
                        meteor::spawn_system,
                        meteor::update_system,
                        explosion::animate_system,
                    ),
                    collision::resolve_system,
                    heart::damage_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                restart_system.run_if(in_state(GameState::GameOver)),
            )
            .add_systems(Update, quit_system);
    }
}

/// (Re)populate the world for a fresh session: clear every session entity,
/// then spawn the star field, the heart row, and the player.
///
/// Runs on the initial transition into `Playing` at startup and again on
/// every restart, so both paths share one spawn routine.
pub fn enter_playing(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    sprites: Res<SpriteAssets>,
    mut rng: ResMut<GameRng>,
    mut hearts: ResMut<Hearts>,
    mut spawn_timer: ResMut<MeteorSpawnTimer>,
    entities: Query<Entity, With<GameEntity>>,
) {
    for entity in &entities {
        commands.entity(entity).despawn();
    }
    hearts.0.clear();

    let now = time.elapsed_secs();
    spawn_timer.0 = Pulse::new(now, config.meteor_spawn_interval_secs);

    for _ in 0..config.star_count {
        star::spawn(&mut commands, &sprites, &config, &mut rng, now);
    }
    heart::spawn_row(&mut commands, &sprites, &config, &mut hearts, now);
    player::spawn(&mut commands, &sprites);
}

/// Restart the session from the game-over screen on `R`.
pub fn restart_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut score: ResMut<Score>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        score.0 = 0;
        next_state.set(GameState::Playing);
    }
}

/// Quit unconditionally from either state on Escape. Window close is
/// handled by Bevy's default exit behaviour.
pub fn quit_system(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
