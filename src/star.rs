//! Blinking background stars.

use crate::assets::SpriteAssets;
use crate::config::GameConfig;
use crate::constants::STAR_DIM_ALPHA;
use crate::rng::GameRng;
use crate::session::GameEntity;
use crate::timing::Pulse;
use bevy::prelude::*;

/// A background star toggling between visible and dim on a randomised
/// period that is re-drawn after every toggle.
#[derive(Component)]
pub struct Star {
    pub visible: bool,
    pub blink: Pulse,
}

/// Spawn one star at a random on-screen position with a random size.
pub fn spawn(
    commands: &mut Commands,
    sprites: &SpriteAssets,
    config: &GameConfig,
    rng: &mut GameRng,
    now: f32,
) {
    let pos = Vec2::new(
        rng.range_f32(-config.half_width(), config.half_width()),
        rng.range_f32(-config.half_height(), config.half_height()),
    );
    let size = rng.range_f32(config.star_size_min, config.star_size_max);
    let period = rng.range_f32(config.star_blink_min_secs, config.star_blink_max_secs);

    commands.spawn((
        Star {
            visible: true,
            blink: Pulse::new(now, period),
        },
        Sprite {
            image: sprites.star.clone(),
            custom_size: Some(Vec2::splat(size)),
            ..Default::default()
        },
        // Stars sit behind everything else.
        Transform::from_translation(pos.extend(-1.0)),
        GameEntity,
    ));
}

/// Toggle visibility whenever a star's blink period elapses, drawing a new
/// random period each time, and apply the matching sprite alpha.
pub fn blink_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut query: Query<(&mut Star, &mut Sprite)>,
) {
    let now = time.elapsed_secs();
    for (mut star, mut sprite) in &mut query {
        if star.blink.tick(now) {
            star.visible = !star.visible;
            star.blink.period =
                rng.range_f32(config.star_blink_min_secs, config.star_blink_max_secs);
        }
        sprite.color = if star.visible {
            Color::WHITE
        } else {
            Color::srgba(1.0, 1.0, 1.0, STAR_DIM_ALPHA)
        };
    }
}
