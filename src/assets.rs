//! Asset handles, collision-mask construction, and load-failure reporting.
//!
//! Assets are looked up under the Bevy-default `assets/` directory. Every
//! handle is also recorded in [`AssetManifest`] together with its path so
//! the watchdog can name exactly which file failed before the app exits —
//! asset failures are fatal, never silently tolerated.

use crate::constants::EXPLOSION_FRAME_COUNT;
use crate::error::GameError;
use crate::explosion::ExplosionFrames;
use crate::mask::AlphaMask;
use bevy::asset::{LoadState, UntypedHandle};
use bevy::audio::AudioSource;
use bevy::prelude::*;

// ── Handle resources ──────────────────────────────────────────────────────────

/// Sprite image handles for every entity kind.
#[derive(Resource, Default, Clone)]
pub struct SpriteAssets {
    pub player: Handle<Image>,
    pub star: Handle<Image>,
    pub laser: Handle<Image>,
    pub meteor: Handle<Image>,
    pub heart: Handle<Image>,
}

/// Sound effect and music handles.
#[derive(Resource, Default, Clone)]
pub struct SoundAssets {
    pub laser: Handle<AudioSource>,
    pub explosion: Handle<AudioSource>,
    pub damage: Handle<AudioSource>,
    pub music: Handle<AudioSource>,
}

/// The one font used by the HUD and the game-over overlay.
#[derive(Resource, Default, Clone)]
pub struct GameFont(pub Handle<Font>);

/// Collision masks derived from sprite alpha channels once the images have
/// finished loading. `None` until then; the collision resolver skips frames
/// where any mask is still pending.
#[derive(Resource, Default)]
pub struct MaskAssets {
    pub player: Option<AlphaMask>,
    pub laser: Option<AlphaMask>,
    pub meteor: Option<AlphaMask>,
}

impl MaskAssets {
    /// Whether every collision mask has been built.
    pub fn complete(&self) -> bool {
        self.player.is_some() && self.laser.is_some() && self.meteor.is_some()
    }
}

/// Path ↔ handle pairs for every queued asset, polled by the watchdog.
#[derive(Resource, Default)]
pub struct AssetManifest(pub Vec<(String, UntypedHandle)>);

// ── Loading ───────────────────────────────────────────────────────────────────

/// Startup system: queue every game asset and record it in the manifest.
pub fn load_assets(mut commands: Commands, server: Res<AssetServer>) {
    let mut manifest = AssetManifest::default();

    let mut image = |path: &str| -> Handle<Image> {
        let handle = server.load(path.to_string());
        manifest.0.push((path.to_string(), handle.clone().untyped()));
        handle
    };
    let sprites = SpriteAssets {
        player: image("images/player.png"),
        star: image("images/star.png"),
        laser: image("images/laser.png"),
        meteor: image("images/meteor.png"),
        heart: image("images/heart.png"),
    };
    let frames = ExplosionFrames(
        (0..EXPLOSION_FRAME_COUNT)
            .map(|i| image(&format!("images/explosion/{i}.png")))
            .collect(),
    );

    let mut sound = |path: &str| -> Handle<AudioSource> {
        let handle = server.load(path.to_string());
        manifest.0.push((path.to_string(), handle.clone().untyped()));
        handle
    };
    let sounds = SoundAssets {
        laser: sound("audio/laser.wav"),
        explosion: sound("audio/explosion.wav"),
        damage: sound("audio/damage.ogg"),
        music: sound("audio/game_music.wav"),
    };

    let font: Handle<Font> = server.load("fonts/minecraft.ttf");
    manifest
        .0
        .push(("fonts/minecraft.ttf".to_string(), font.clone().untyped()));

    commands.insert_resource(sprites);
    commands.insert_resource(frames);
    commands.insert_resource(sounds);
    commands.insert_resource(GameFont(font));
    commands.insert_resource(manifest);
    println!("✓ Queued {EXPLOSION_FRAME_COUNT} explosion frames and core assets");
}

/// Build each [`AlphaMask`] as soon as its source image carries CPU-side
/// pixel data. Runs every frame but is a no-op once all masks exist.
pub fn build_masks_system(
    sprites: Res<SpriteAssets>,
    images: Res<Assets<Image>>,
    mut masks: ResMut<MaskAssets>,
) {
    if masks.complete() {
        return;
    }
    if masks.player.is_none() {
        if let Some(img) = images.get(&sprites.player) {
            masks.player = AlphaMask::from_image(img);
        }
    }
    if masks.laser.is_none() {
        if let Some(img) = images.get(&sprites.laser) {
            masks.laser = AlphaMask::from_image(img);
        }
    }
    if masks.meteor.is_none() {
        if let Some(img) = images.get(&sprites.meteor) {
            masks.meteor = AlphaMask::from_image(img);
        }
    }
}

/// Abort with a named resource when any queued asset fails to load.
///
/// There is no retry policy — a missing or corrupt file cannot heal itself,
/// so the only useful output is which path to fix.
pub fn asset_watchdog_system(
    manifest: Res<AssetManifest>,
    server: Res<AssetServer>,
    mut exit: MessageWriter<AppExit>,
) {
    for (path, handle) in &manifest.0 {
        if let Some(LoadState::Failed(reason)) = server.get_load_state(handle.id()) {
            let err = GameError::AssetLoad {
                path: path.clone(),
                reason: reason.to_string(),
            };
            eprintln!("✗ {err}");
            exit.write(AppExit::error());
        }
    }
}
