//! Starstorm — a 2D arcade space shooter.
//!
//! A player-controlled ship shoots lasers at falling meteors while managing
//! three life hearts, over a field of blinking stars, with timed explosion
//! animations and a restart flow on death. The crate is split so the
//! gameplay core ([`session::GamePlugin`]) runs headless under
//! `MinimalPlugins` for tests, while `main.rs` attaches windowing,
//! rendering, audio, and asset loading.

pub mod assets;
pub mod audio;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod explosion;
pub mod heart;
pub mod hud;
pub mod laser;
pub mod mask;
pub mod meteor;
pub mod player;
pub mod rng;
pub mod session;
pub mod star;
pub mod timing;
