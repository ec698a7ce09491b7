//! Player ship: movement and laser firing.
//!
//! Movement reads the arrow keys into a direction vector each frame,
//! normalising only when the magnitude is non-zero, then moves the ship by
//! `direction * speed * dt`. Firing is edge-triggered on Space and gated by
//! an explicit cooldown state (`can_shoot` + last-shot timestamp) that
//! recovers on every update, firing or not.

use crate::assets::SpriteAssets;
use crate::audio::{PlaySound, SoundKind};
use crate::config::GameConfig;
use crate::laser;
use crate::session::GameEntity;
use bevy::prelude::*;

/// Marker component for the player ship entity.
#[derive(Component)]
pub struct Player;

/// Shoot-cooldown state: a fresh shot is allowed only while `can_shoot`,
/// which resets once the cooldown has elapsed since `shot_at`.
#[derive(Component)]
pub struct ShootState {
    pub can_shoot: bool,
    /// Timestamp of the last shot (seconds since app start).
    pub shot_at: f32,
}

impl Default for ShootState {
    fn default() -> Self {
        Self {
            can_shoot: true,
            shot_at: 0.0,
        }
    }
}

/// Spawn the player ship at the screen centre.
pub fn spawn(commands: &mut Commands, sprites: &SpriteAssets) {
    commands.spawn((
        Player,
        ShootState::default(),
        Sprite::from_image(sprites.player.clone()),
        Transform::from_translation(Vec3::ZERO),
        GameEntity,
    ));
}

/// Move the ship by the held arrow keys.
pub fn movement_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    let mut direction = Vec2::ZERO;
    if keys.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }
    if keys.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        direction.y += 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        direction.y -= 1.0;
    }
    // Normalise only when non-zero to avoid dividing by zero magnitude.
    if direction != Vec2::ZERO {
        direction = direction.normalize();
    }

    let step = direction * config.player_speed * time.delta_secs();
    for mut transform in &mut query {
        transform.translation += step.extend(0.0);
    }
}

/// Fire a laser on a fresh Space press, and recover the cooldown.
///
/// The recovery check runs every update regardless of firing, so the ship
/// re-arms exactly `shoot_cooldown_secs` after the last shot.
pub fn fire_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GameConfig>,
    sprites: Res<SpriteAssets>,
    mut query: Query<(&Transform, &mut ShootState), With<Player>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    let now = time.elapsed_secs();
    for (transform, mut shoot) in &mut query {
        if !shoot.can_shoot && now - shoot.shot_at >= config.shoot_cooldown_secs {
            shoot.can_shoot = true;
        }

        if keys.just_pressed(KeyCode::Space) && shoot.can_shoot {
            let muzzle =
                transform.translation.truncate() + Vec2::new(0.0, config.player_half_height);
            laser::spawn(&mut commands, &sprites, &config, muzzle);
            shoot.can_shoot = false;
            shoot.shot_at = now;
            sounds.write(PlaySound(SoundKind::Laser));
        }
    }
}
