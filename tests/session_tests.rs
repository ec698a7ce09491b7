//! Headless tests for the session state machine and life/restart flow.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no audio —
//! so they run fast and deterministically in CI. Time advances by a fixed
//! 16 ms per `update` via [`TimeUpdateStrategy::ManualDuration`], and the
//! RNG is seeded.
//!
//! Covered scenarios:
//! 1. A fresh session spawns the star field, heart row, and player.
//! 2. Three hits deplete the hearts, despawn the player, and enter
//!    `GameOver` with one explosion.
//! 3. Heart removal is idempotent at the empty boundary.
//! 4. `R` in `GameOver` resets score/hearts/stars and returns to `Playing`.
//! 5. `GameOver` suspends meteor spawning.
//! 6. Escape requests app exit from either state.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use starstorm::collision::PlayerHit;
use starstorm::explosion::Explosion;
use starstorm::heart::{Heart, Hearts};
use starstorm::meteor::Meteor;
use starstorm::player::Player;
use starstorm::rng::GameRng;
use starstorm::session::{GamePlugin, GameState, Score};
use starstorm::star::Star;

const FRAME: Duration = Duration::from_millis(16);

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a headless app with the core game plugin, a fixed frame duration,
/// and a seeded RNG. The world is not yet populated — call `update` once to
/// run the initial `OnEnter(Playing)` spawn.
fn game_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.add_plugins(GamePlugin);
    app.insert_resource(GameRng::seeded(7));
    app
}

fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<C>>()
        .iter(app.world())
        .count()
}

fn state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

fn hit_player(app: &mut App) {
    app.world_mut()
        .resource_mut::<Messages<PlayerHit>>()
        .write(PlayerHit);
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release(app: &mut App, key: KeyCode) {
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.release(key);
    input.clear();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// A fresh session starts in `Playing` with the full world populated.
#[test]
fn fresh_session_spawns_world() {
    let mut app = game_app();
    app.update(); // initial OnEnter(Playing) fires

    assert_eq!(state(&app), GameState::Playing);
    assert_eq!(app.world().resource::<Score>().0, 0, "score starts at zero");
    assert_eq!(count::<Star>(&mut app), 40, "star field must be 40 stars");
    assert_eq!(count::<Heart>(&mut app), 3, "three hearts at session start");
    assert_eq!(app.world().resource::<Hearts>().0.len(), 3);
    assert_eq!(count::<Player>(&mut app), 1, "exactly one player ship");
}

/// Three hits across three frames empty the heart rack, despawn the player,
/// spawn one explosion, and transition to `GameOver`.
#[test]
fn three_hits_end_the_session() {
    let mut app = game_app();
    app.update();

    for expected_left in [2usize, 1] {
        hit_player(&mut app);
        app.update();
        assert_eq!(app.world().resource::<Hearts>().0.len(), expected_left);
        assert_eq!(state(&app), GameState::Playing);
    }

    hit_player(&mut app);
    app.update();
    assert_eq!(app.world().resource::<Hearts>().0.len(), 0);
    assert_eq!(count::<Heart>(&mut app), 0, "all heart sprites removed");
    assert_eq!(count::<Player>(&mut app), 0, "player despawns on death");
    assert_eq!(count::<Explosion>(&mut app), 1, "death spawns one explosion");

    // The state transition applies on the next StateTransition pass.
    app.update();
    assert_eq!(state(&app), GameState::GameOver);
}

/// Removing a heart from an empty rack must not underflow and must not
/// fire the game-over effects a second time.
#[test]
fn heart_removal_is_idempotent_at_the_boundary() {
    let mut app = game_app();
    app.update();

    // Burn down to one heart.
    for _ in 0..2 {
        hit_player(&mut app);
        app.update();
    }
    assert_eq!(app.world().resource::<Hearts>().0.len(), 1);

    // Two hits queued in the same frame: the first empties the rack, the
    // second lands on an already-empty rack.
    hit_player(&mut app);
    hit_player(&mut app);
    app.update();

    assert_eq!(app.world().resource::<Hearts>().0.len(), 0);
    assert_eq!(
        count::<Explosion>(&mut app),
        1,
        "game-over effects fire exactly once"
    );

    app.update();
    assert_eq!(state(&app), GameState::GameOver);

    // Hits after game-over are inert: updates are suspended.
    hit_player(&mut app);
    app.update();
    assert_eq!(app.world().resource::<Hearts>().0.len(), 0);
    assert_eq!(count::<Explosion>(&mut app), 1);
}

/// `R` on the game-over screen resets score, hearts, and the star field,
/// and returns to `Playing`.
#[test]
fn restart_resets_the_session() {
    let mut app = game_app();
    app.update();

    // Simulate a played session: score earned, hearts depleted.
    app.world_mut().resource_mut::<Score>().0 = 5;
    for _ in 0..3 {
        hit_player(&mut app);
        app.update();
    }
    app.update();
    assert_eq!(state(&app), GameState::GameOver);

    press(&mut app, KeyCode::KeyR);
    app.update(); // restart system fires, requests Playing
    release(&mut app, KeyCode::KeyR);
    app.update(); // transition applies, OnEnter(Playing) respawns the world

    assert_eq!(state(&app), GameState::Playing);
    assert_eq!(app.world().resource::<Score>().0, 0, "score resets to zero");
    assert_eq!(app.world().resource::<Hearts>().0.len(), 3);
    assert_eq!(count::<Heart>(&mut app), 3);
    assert_eq!(count::<Star>(&mut app), 40, "star field repopulated");
    assert_eq!(count::<Player>(&mut app), 1);
    assert_eq!(count::<Explosion>(&mut app), 0, "no entity survives a reset");
}

/// Meteor spawning runs in `Playing` and freezes in `GameOver`.
#[test]
fn game_over_suspends_meteor_spawning() {
    let mut app = game_app();
    app.update();

    // One second of play: the 300 ms interval must have produced meteors.
    for _ in 0..63 {
        app.update();
    }
    let while_playing = count::<Meteor>(&mut app);
    assert!(
        while_playing >= 3,
        "expected at least 3 meteors after 1 s, got {while_playing}"
    );

    for _ in 0..3 {
        hit_player(&mut app);
        app.update();
    }
    app.update();
    assert_eq!(state(&app), GameState::GameOver);

    let at_game_over = count::<Meteor>(&mut app);
    for _ in 0..63 {
        app.update();
    }
    assert_eq!(
        count::<Meteor>(&mut app),
        at_game_over,
        "no spawning or expiry while frozen"
    );
}

/// Escape requests an app exit regardless of state.
#[test]
fn escape_requests_exit() {
    let mut app = game_app();
    app.update();

    press(&mut app, KeyCode::Escape);
    app.update();

    let exits = app.world().resource::<Messages<AppExit>>();
    assert!(!exits.is_empty(), "Escape must write an AppExit message");
}
