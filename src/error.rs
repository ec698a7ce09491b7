//! Game-specific error types.
//!
//! There is no recovery path for a missing asset or a broken display — every
//! failure here is fatal at startup. What the player (or whoever is staring
//! at the terminal) gets instead of a bare abort is the name of the resource
//! that failed, which is usually all that is needed to fix the install.

use std::fmt;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// An asset file failed to load. The path is relative to `assets/`.
    AssetLoad {
        /// Asset path as passed to the asset server.
        path: String,
        /// Loader-reported failure description.
        reason: String,
    },

    /// `assets/game.toml` exists but could not be parsed.
    ConfigParse {
        /// Path of the config file.
        path: String,
        /// TOML parse error text.
        reason: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AssetLoad { path, reason } => {
                write!(f, "failed to load asset '{path}': {reason}")
            }
            GameError::ConfigParse { path, reason } => {
                write!(f, "failed to parse config '{path}': {reason}")
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_load_display_names_the_resource() {
        let err = GameError::AssetLoad {
            path: "images/meteor.png".to_string(),
            reason: "file not found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("images/meteor.png"));
        assert!(text.contains("file not found"));
    }
}
