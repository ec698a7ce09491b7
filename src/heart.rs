//! Life hearts: pulse animation, damage removal, and the game-over trigger.
//!
//! The three hearts double as the life counter. Damage pops the
//! most-recently-added heart; popping the last one ends the session —
//! explosion at the player's position, explosion sound, player despawn,
//! transition to [`GameState::GameOver`]. Popping an already-empty rack is
//! a no-op: no underflow, and game-over fires exactly once.

use crate::assets::SpriteAssets;
use crate::audio::{PlaySound, SoundKind};
use crate::collision::PlayerHit;
use crate::config::GameConfig;
use crate::explosion::{self, ExplosionFrames};
use crate::player::Player;
use crate::session::{GameEntity, GameState};
use crate::timing::Pulse;
use bevy::prelude::*;

/// One pulsing heart sprite.
#[derive(Component)]
pub struct Heart {
    pub expanded: bool,
    pub pulse: Pulse,
}

/// Remaining hearts, oldest first; damage pops from the back.
#[derive(Resource, Default)]
pub struct Hearts(pub Vec<Entity>);

/// Spawn the full heart row, horizontally centred near the top edge.
pub fn spawn_row(
    commands: &mut Commands,
    sprites: &SpriteAssets,
    config: &GameConfig,
    hearts: &mut Hearts,
    now: f32,
) {
    let y = config.half_height() - config.heart_top_offset;
    let centre = (config.heart_count as f32 - 1.0) / 2.0;
    for i in 0..config.heart_count {
        let x = (i as f32 - centre) * config.heart_spacing;
        let entity = commands
            .spawn((
                Heart {
                    expanded: false,
                    pulse: Pulse::new(now, config.heart_pulse_secs),
                },
                Sprite {
                    image: sprites.heart.clone(),
                    custom_size: Some(Vec2::splat(config.heart_size)),
                    ..Default::default()
                },
                Transform::from_translation(Vec3::new(x, y, 0.0)),
                GameEntity,
            ))
            .id();
        hearts.0.push(entity);
    }
}

/// Toggle each heart between its contracted and expanded size on the fixed
/// pulse period. Sprites are centre-anchored, so growth stays symmetric.
pub fn pulse_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut query: Query<(&mut Heart, &mut Sprite)>,
) {
    let now = time.elapsed_secs();
    for (mut heart, mut sprite) in &mut query {
        if heart.pulse.tick(now) {
            heart.expanded = !heart.expanded;
        }
        let size = if heart.expanded {
            config.heart_size_expanded
        } else {
            config.heart_size
        };
        sprite.custom_size = Some(Vec2::splat(size));
    }
}

/// Consume [`PlayerHit`] messages: remove one heart per hit, and end the
/// session when the last heart goes.
pub fn damage_system(
    mut commands: Commands,
    mut hits: MessageReader<PlayerHit>,
    mut hearts: ResMut<Hearts>,
    player: Query<(Entity, &Transform), With<Player>>,
    frames: Res<ExplosionFrames>,
    mut sounds: MessageWriter<PlaySound>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for _hit in hits.read() {
        // Empty rack: nothing to remove, and the game-over transition has
        // already fired. Must not underflow or re-trigger.
        let Some(entity) = hearts.0.pop() else {
            continue;
        };
        commands.entity(entity).despawn();

        if hearts.0.is_empty() {
            if let Ok((player_entity, transform)) = player.single() {
                explosion::spawn(&mut commands, &frames, transform.translation.truncate());
                commands.entity(player_entity).despawn();
            }
            sounds.write(PlaySound(SoundKind::Explosion));
            next_state.set(GameState::GameOver);
        }
    }
}
