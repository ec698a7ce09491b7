//! Sound playback.
//!
//! Gameplay systems never touch the audio device: they emit [`PlaySound`]
//! messages and this module's sink system spawns the actual one-shot
//! [`AudioPlayer`] entities. Headless tests run the gameplay systems with
//! the messages registered but no sink attached.

use crate::assets::SoundAssets;
use crate::constants::{DAMAGE_VOLUME, EXPLOSION_VOLUME, LASER_VOLUME, MUSIC_VOLUME};
use bevy::audio::{PlaybackSettings, Volume};
use bevy::prelude::*;

/// Which effect to play; volumes are fixed per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Laser,
    Explosion,
    Damage,
}

/// Request to play one sound effect this frame.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySound(pub SoundKind);

/// Spawn a self-despawning audio entity for each queued [`PlaySound`].
pub fn play_sound_system(
    mut commands: Commands,
    mut messages: MessageReader<PlaySound>,
    sounds: Res<SoundAssets>,
) {
    for message in messages.read() {
        let (handle, volume) = match message.0 {
            SoundKind::Laser => (&sounds.laser, LASER_VOLUME),
            SoundKind::Explosion => (&sounds.explosion, EXPLOSION_VOLUME),
            SoundKind::Damage => (&sounds.damage, DAMAGE_VOLUME),
        };
        commands.spawn((
            AudioPlayer(handle.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(volume)),
        ));
    }
}

/// Startup system: begin the looping background track.
pub fn start_music(mut commands: Commands, sounds: Res<SoundAssets>) {
    commands.spawn((
        AudioPlayer(sounds.music.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(MUSIC_VOLUME)),
    ));
}
