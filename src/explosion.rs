//! One-shot explosion animations.

use crate::config::GameConfig;
use crate::session::GameEntity;
use bevy::prelude::*;

/// A playing explosion. The fractional frame index advances at a fixed rate
/// per second of game time, independent of the display frame rate; the
/// entity despawns once the index passes the last frame. Not restartable —
/// one instance is one play-through.
#[derive(Component)]
pub struct Explosion {
    pub index: f32,
}

/// Ordered explosion animation frames, shared by every instance.
#[derive(Resource, Default)]
pub struct ExplosionFrames(pub Vec<Handle<Image>>);

/// Spawn an explosion centred at `pos`, starting on frame zero.
pub fn spawn(commands: &mut Commands, frames: &ExplosionFrames, pos: Vec2) {
    commands.spawn((
        Explosion { index: 0.0 },
        Sprite::from_image(frames.0.first().cloned().unwrap_or_default()),
        // Drawn above meteors and the ship.
        Transform::from_translation(pos.extend(1.0)),
        GameEntity,
    ));
}

/// Advance every explosion's frame index and despawn finished ones.
pub fn animate_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    frames: Res<ExplosionFrames>,
    mut query: Query<(Entity, &mut Explosion, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut explosion, mut sprite) in &mut query {
        explosion.index += config.explosion_frame_rate * dt;
        if explosion.index >= frames.0.len() as f32 {
            commands.entity(entity).despawn();
        } else if let Some(frame) = frames.0.get(explosion.index as usize) {
            sprite.image = frame.clone();
        }
    }
}
