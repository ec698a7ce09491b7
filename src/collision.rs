//! Per-frame collision resolution.
//!
//! Two passes over the live entity sets, both mask-accurate:
//!
//! 1. **Laser ↔ meteor** — each laser is tested independently against every
//!    meteor still alive this frame. On a hit the laser despawns along with
//!    *every* meteor it overlapped, an explosion spawns at the laser's
//!    top-centre, and the score rises by exactly one — a laser can never
//!    double-score because it is destroyed on its first hit, but separate
//!    lasers may each score within a single frame.
//! 2. **Player ↔ meteor** — every overlapping meteor despawns, the damage
//!    sound plays, and exactly one [`PlayerHit`] is emitted no matter how
//!    many meteors connected. The asymmetry (many meteors destroyed, one
//!    heart lost) is intentional.

use crate::assets::MaskAssets;
use crate::audio::{PlaySound, SoundKind};
use crate::config::GameConfig;
use crate::explosion::{self, ExplosionFrames};
use crate::laser::Laser;
use crate::mask::masks_overlap;
use crate::meteor::Meteor;
use crate::player::Player;
use crate::session::Score;
use bevy::prelude::*;
use std::collections::HashSet;

/// Emitted at most once per frame when the player overlaps any meteor;
/// consumed by [`crate::heart::damage_system`].
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHit;

/// Resolve all laser↔meteor and player↔meteor overlaps for this frame.
#[allow(clippy::too_many_arguments)]
pub fn resolve_system(
    mut commands: Commands,
    masks: Res<MaskAssets>,
    config: Res<GameConfig>,
    frames: Res<ExplosionFrames>,
    lasers: Query<(Entity, &Transform), With<Laser>>,
    meteors: Query<(Entity, &Transform, &Meteor)>,
    player: Query<&Transform, With<Player>>,
    mut score: ResMut<Score>,
    mut sounds: MessageWriter<PlaySound>,
    mut hits: MessageWriter<PlayerHit>,
) {
    // Masks are built once their source images finish loading; until then
    // nothing can collide.
    let (Some(laser_mask), Some(meteor_mask), Some(player_mask)) = (
        masks.laser.as_ref(),
        masks.meteor.as_ref(),
        masks.player.as_ref(),
    ) else {
        return;
    };

    // Meteors destroyed earlier in this frame must be invisible to later
    // tests; despawn commands only apply after the system ends.
    let mut destroyed: HashSet<Entity> = HashSet::new();

    for (laser_entity, laser_transform) in &lasers {
        let laser_pos = laser_transform.translation.truncate();
        let mut hit_any = false;
        for (meteor_entity, meteor_transform, meteor) in &meteors {
            if destroyed.contains(&meteor_entity) {
                continue;
            }
            let meteor_pos = meteor_transform.translation.truncate();
            if masks_overlap(
                laser_mask,
                laser_pos,
                0.0,
                meteor_mask,
                meteor_pos,
                meteor.angle,
            ) {
                destroyed.insert(meteor_entity);
                commands.entity(meteor_entity).despawn();
                hit_any = true;
            }
        }
        if hit_any {
            commands.entity(laser_entity).despawn();
            let impact = laser_pos + Vec2::new(0.0, config.laser_half_height);
            explosion::spawn(&mut commands, &frames, impact);
            sounds.write(PlaySound(SoundKind::Explosion));
            score.0 += 1;
        }
    }

    if let Ok(player_transform) = player.single() {
        let player_pos = player_transform.translation.truncate();
        let mut any_hit = false;
        for (meteor_entity, meteor_transform, meteor) in &meteors {
            if destroyed.contains(&meteor_entity) {
                continue;
            }
            let meteor_pos = meteor_transform.translation.truncate();
            if masks_overlap(
                player_mask,
                player_pos,
                0.0,
                meteor_mask,
                meteor_pos,
                meteor.angle,
            ) {
                destroyed.insert(meteor_entity);
                commands.entity(meteor_entity).despawn();
                any_hit = true;
            }
        }
        if any_hit {
            sounds.write(PlaySound(SoundKind::Damage));
            hits.write(PlayerHit);
        }
    }
}
