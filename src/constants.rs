//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig`] mirrors every value and can override any
//! subset at startup from `assets/game.toml`.

// ── Window ────────────────────────────────────────────────────────────────────

/// Logical window width in pixels.
pub const WINDOW_WIDTH: f32 = 1280.0;

/// Logical window height in pixels.
pub const WINDOW_HEIGHT: f32 = 720.0;

/// Window caption.
pub const WINDOW_TITLE: &str = "Space Shooter";

/// Background fill colour `#19091C`, as sRGB u8 components.
pub const BACKGROUND_COLOR: (u8, u8, u8) = (0x19, 0x09, 0x1c);

// ── Player ────────────────────────────────────────────────────────────────────

/// Ship movement speed (px/s). Diagonal movement is normalised so the speed
/// is identical on every heading.
pub const PLAYER_SPEED: f32 = 300.0;

/// Minimum seconds between consecutive laser shots.
pub const SHOOT_COOLDOWN_SECS: f32 = 0.4;

/// Half the player sprite's height (px); lasers spawn at the ship's
/// top-centre, this far above its centre.
pub const PLAYER_HALF_HEIGHT: f32 = 38.0;

// ── Lasers ────────────────────────────────────────────────────────────────────

/// Upward laser speed (px/s).
pub const LASER_SPEED: f32 = 400.0;

/// Half the laser sprite's height (px). A laser is despawned once its bottom
/// edge (`y - LASER_HALF_HEIGHT`) passes above the top of the screen.
pub const LASER_HALF_HEIGHT: f32 = 27.0;

// ── Stars ─────────────────────────────────────────────────────────────────────

/// Number of background stars spawned per session.
pub const STAR_COUNT: usize = 40;

/// Star sprite size range (px); each star picks one side length uniformly.
pub const STAR_SIZE_MIN: f32 = 15.0;
pub const STAR_SIZE_MAX: f32 = 20.0;

/// Blink period range (seconds). The period is re-randomised on each toggle
/// so stars fall out of phase with each other.
pub const STAR_BLINK_MIN_SECS: f32 = 0.2;
pub const STAR_BLINK_MAX_SECS: f32 = 1.0;

/// Sprite alpha while a star is dim (visible stars use full alpha).
pub const STAR_DIM_ALPHA: f32 = 100.0 / 255.0;

// ── Hearts ────────────────────────────────────────────────────────────────────

/// Hearts available at the start of a session.
pub const HEART_COUNT: usize = 3;

/// Heart sprite side length (px) in the contracted state.
pub const HEART_SIZE: f32 = 40.0;

/// Heart sprite side length (px) in the expanded state. Sprites stay
/// centre-anchored so the pulse grows symmetrically.
pub const HEART_SIZE_EXPANDED: f32 = 50.0;

/// Fixed pulse toggle period (seconds).
pub const HEART_PULSE_SECS: f32 = 0.5;

/// Horizontal spacing between adjacent hearts (px), centred on the screen.
pub const HEART_SPACING: f32 = 70.0;

/// Vertical distance of the heart row below the top edge (px).
pub const HEART_TOP_OFFSET: f32 = 70.0;

// ── Meteors ───────────────────────────────────────────────────────────────────

/// Seconds between meteor spawn events while the session is live.
pub const METEOR_SPAWN_INTERVAL_SECS: f32 = 0.3;

/// How far above the top edge a meteor spawns (px).
pub const METEOR_SPAWN_HEIGHT: f32 = 50.0;

/// Horizontal drift component range. The velocity direction is
/// `(uniform(-drift..drift), -1)` — deliberately unnormalised, so strongly
/// drifting meteors travel slightly faster along their diagonal.
pub const METEOR_DRIFT: f32 = 0.5;

/// Meteor speed range (px/s); each meteor picks one value uniformly.
pub const METEOR_SPEED_MIN: f32 = 400.0;
pub const METEOR_SPEED_MAX: f32 = 500.0;

/// Seconds after which a meteor self-destructs regardless of position.
/// Bounds off-screen accumulation when a meteor drifts sideways forever.
pub const METEOR_LIFETIME_SECS: f32 = 4.0;

/// Rotation speed range (degrees/s); each meteor picks one value uniformly.
pub const METEOR_ROTATION_MIN: f32 = 40.0;
pub const METEOR_ROTATION_MAX: f32 = 80.0;

// ── Explosions ────────────────────────────────────────────────────────────────

/// Animation frames advanced per second of game time; independent of the
/// actual display frame rate.
pub const EXPLOSION_FRAME_RATE: f32 = 30.0;

/// Number of frames in the explosion sheet (`images/explosion/0.png..`).
pub const EXPLOSION_FRAME_COUNT: usize = 21;

// ── Audio ─────────────────────────────────────────────────────────────────────

/// Laser shot playback volume.
pub const LASER_VOLUME: f32 = 0.4;

/// Explosion playback volume.
pub const EXPLOSION_VOLUME: f32 = 0.4;

/// Player damage playback volume.
pub const DAMAGE_VOLUME: f32 = 0.6;

/// Looping background music volume.
pub const MUSIC_VOLUME: f32 = 0.2;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Score text font size.
pub const SCORE_FONT_SIZE: f32 = 40.0;

/// Game-over title font size.
pub const GAME_OVER_FONT_SIZE: f32 = 80.0;

/// Restart hint font size.
pub const RESTART_HINT_FONT_SIZE: f32 = 20.0;

/// Distance of the score box above the bottom edge (px).
pub const SCORE_BOTTOM_OFFSET: f32 = 50.0;
