//! Falling meteors: timed spawning, drift, rotation, and lifetime.

use crate::assets::SpriteAssets;
use crate::config::GameConfig;
use crate::constants::METEOR_SPAWN_INTERVAL_SECS;
use crate::rng::GameRng;
use crate::session::GameEntity;
use crate::timing::Pulse;
use bevy::prelude::*;

/// A falling meteor.
#[derive(Component)]
pub struct Meteor {
    /// Velocity in px/s; downward-biased, horizontally drifting.
    pub velocity: Vec2,
    /// Current rotation (degrees, counter-clockwise).
    pub angle: f32,
    /// Rotation rate (degrees/s), fixed per meteor.
    pub rotation_speed: f32,
    /// Spawn timestamp (seconds since app start).
    pub spawned_at: f32,
}

/// The single meteor-spawn timer source. Reset when a session starts so
/// spawn phase is identical after every restart.
#[derive(Resource)]
pub struct MeteorSpawnTimer(pub Pulse);

impl Default for MeteorSpawnTimer {
    fn default() -> Self {
        Self(Pulse::new(0.0, METEOR_SPAWN_INTERVAL_SECS))
    }
}

/// Spawn a meteor above the screen each time the interval elapses.
pub fn spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    sprites: Res<SpriteAssets>,
    mut timer: ResMut<MeteorSpawnTimer>,
    mut rng: ResMut<GameRng>,
) {
    let now = time.elapsed_secs();
    if !timer.0.tick(now) {
        return;
    }

    let pos = Vec2::new(
        rng.range_f32(-config.half_width(), config.half_width()),
        config.half_height() + config.meteor_spawn_height,
    );
    // Unnormalised on purpose: a strong sideways drift slightly lengthens
    // the velocity vector, exactly as the speed tuning expects.
    let direction = Vec2::new(rng.range_f32(-config.meteor_drift, config.meteor_drift), -1.0);
    let speed = rng.range_f32(config.meteor_speed_min, config.meteor_speed_max);
    let rotation_speed = rng.range_f32(config.meteor_rotation_min, config.meteor_rotation_max);

    commands.spawn((
        Meteor {
            velocity: direction * speed,
            angle: 0.0,
            rotation_speed,
            spawned_at: now,
        },
        Sprite::from_image(sprites.meteor.clone()),
        Transform::from_translation(pos.extend(0.0)),
        GameEntity,
    ));
}

/// Move, expire, and rotate every live meteor.
pub fn update_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut query: Query<(Entity, &mut Meteor, &mut Transform)>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();
    for (entity, mut meteor, mut transform) in &mut query {
        transform.translation += (meteor.velocity * dt).extend(0.0);

        // Fixed lifetime regardless of position; a sideways drifter cannot
        // accumulate off-screen forever.
        if now - meteor.spawned_at >= config.meteor_lifetime_secs {
            commands.entity(entity).despawn();
            continue;
        }

        meteor.angle += meteor.rotation_speed * dt;
        transform.rotation = Quat::from_rotation_z(meteor.angle.to_radians());
    }
}
