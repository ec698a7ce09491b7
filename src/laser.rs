//! Player lasers: straight upward flight, off-screen despawn.

use crate::assets::SpriteAssets;
use crate::config::GameConfig;
use crate::session::GameEntity;
use bevy::prelude::*;

/// Marker component for a live laser bolt.
#[derive(Component)]
pub struct Laser;

/// Spawn a laser with its bottom edge at `muzzle` (the ship's top-centre).
pub fn spawn(commands: &mut Commands, sprites: &SpriteAssets, config: &GameConfig, muzzle: Vec2) {
    let pos = muzzle + Vec2::new(0.0, config.laser_half_height);
    commands.spawn((
        Laser,
        Sprite::from_image(sprites.laser.clone()),
        Transform::from_translation(pos.extend(0.0)),
        GameEntity,
    ));
}

/// Fly each laser upward; despawn once its bottom edge clears the screen
/// top. Purely position-based — lasers carry no timer.
pub fn move_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut query: Query<(Entity, &mut Transform), With<Laser>>,
) {
    let step = config.laser_speed * time.delta_secs();
    for (entity, mut transform) in &mut query {
        transform.translation.y += step;
        if transform.translation.y - config.laser_half_height > config.half_height() {
            commands.entity(entity).despawn();
        }
    }
}
