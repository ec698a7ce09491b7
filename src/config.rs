//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`]. At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file. Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read
//! values with `config.player_speed`, `config.meteor_lifetime_secs`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the authoritative default
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::GameError;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset by setting the value in
/// `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Window ───────────────────────────────────────────────────────────────
    pub window_width: f32,
    pub window_height: f32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_speed: f32,
    pub shoot_cooldown_secs: f32,
    pub player_half_height: f32,

    // ── Lasers ───────────────────────────────────────────────────────────────
    pub laser_speed: f32,
    pub laser_half_height: f32,

    // ── Stars ────────────────────────────────────────────────────────────────
    pub star_count: usize,
    pub star_size_min: f32,
    pub star_size_max: f32,
    pub star_blink_min_secs: f32,
    pub star_blink_max_secs: f32,

    // ── Hearts ───────────────────────────────────────────────────────────────
    pub heart_count: usize,
    pub heart_size: f32,
    pub heart_size_expanded: f32,
    pub heart_pulse_secs: f32,
    pub heart_spacing: f32,
    pub heart_top_offset: f32,

    // ── Meteors ──────────────────────────────────────────────────────────────
    pub meteor_spawn_interval_secs: f32,
    pub meteor_spawn_height: f32,
    pub meteor_drift: f32,
    pub meteor_speed_min: f32,
    pub meteor_speed_max: f32,
    pub meteor_lifetime_secs: f32,
    pub meteor_rotation_min: f32,
    pub meteor_rotation_max: f32,

    // ── Explosions ───────────────────────────────────────────────────────────
    pub explosion_frame_rate: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            player_speed: PLAYER_SPEED,
            shoot_cooldown_secs: SHOOT_COOLDOWN_SECS,
            player_half_height: PLAYER_HALF_HEIGHT,
            laser_speed: LASER_SPEED,
            laser_half_height: LASER_HALF_HEIGHT,
            star_count: STAR_COUNT,
            star_size_min: STAR_SIZE_MIN,
            star_size_max: STAR_SIZE_MAX,
            star_blink_min_secs: STAR_BLINK_MIN_SECS,
            star_blink_max_secs: STAR_BLINK_MAX_SECS,
            heart_count: HEART_COUNT,
            heart_size: HEART_SIZE,
            heart_size_expanded: HEART_SIZE_EXPANDED,
            heart_pulse_secs: HEART_PULSE_SECS,
            heart_spacing: HEART_SPACING,
            heart_top_offset: HEART_TOP_OFFSET,
            meteor_spawn_interval_secs: METEOR_SPAWN_INTERVAL_SECS,
            meteor_spawn_height: METEOR_SPAWN_HEIGHT,
            meteor_drift: METEOR_DRIFT,
            meteor_speed_min: METEOR_SPEED_MIN,
            meteor_speed_max: METEOR_SPEED_MAX,
            meteor_lifetime_secs: METEOR_LIFETIME_SECS,
            meteor_rotation_min: METEOR_ROTATION_MIN,
            meteor_rotation_max: METEOR_ROTATION_MAX,
            explosion_frame_rate: EXPLOSION_FRAME_RATE,
        }
    }
}

impl GameConfig {
    /// Half the logical screen width; screen x spans `-half_width()..half_width()`.
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.window_width / 2.0
    }

    /// Half the logical screen height; screen y spans `-half_height()..half_height()`.
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.window_height / 2.0
    }
}

/// Parse a TOML config string, mapping failures onto [`GameError`].
fn parse_config(path: &str, contents: &str) -> Result<GameConfig, GameError> {
    toml::from_str::<GameConfig>(contents).map_err(|e| GameError::ConfigParse {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Startup system: overwrite the default [`GameConfig`] from `assets/game.toml`.
///
/// A missing file is not an error — the compiled defaults are already in
/// place. A file that exists but fails to parse is reported and ignored so a
/// typo cannot change gameplay silently mid-edit.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_config(path, &contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded game config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ {e}; using defaults");
            }
        },
        Err(_) => {
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.player_speed, PLAYER_SPEED);
        assert_eq!(config.shoot_cooldown_secs, SHOOT_COOLDOWN_SECS);
        assert_eq!(config.star_count, STAR_COUNT);
        assert_eq!(config.heart_count, HEART_COUNT);
        assert_eq!(config.meteor_lifetime_secs, METEOR_LIFETIME_SECS);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config = parse_config("test", "player_speed = 120.0\nstar_count = 7\n").unwrap();
        assert_eq!(config.player_speed, 120.0);
        assert_eq!(config.star_count, 7);
        // Unnamed keys keep their compiled defaults.
        assert_eq!(config.laser_speed, LASER_SPEED);
        assert_eq!(config.heart_pulse_secs, HEART_PULSE_SECS);
    }

    #[test]
    fn malformed_toml_reports_path() {
        let err = parse_config("assets/game.toml", "player_speed = ").unwrap_err();
        assert!(err.to_string().contains("assets/game.toml"));
    }
}
