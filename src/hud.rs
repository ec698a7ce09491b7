//! HUD and overlays: camera, score box, game-over screen.

use crate::assets::GameFont;
use crate::constants::{
    GAME_OVER_FONT_SIZE, RESTART_HINT_FONT_SIZE, SCORE_BOTTOM_OFFSET, SCORE_FONT_SIZE,
};
use crate::session::Score;
use bevy::prelude::*;

/// Marker for the score value text.
#[derive(Component)]
pub struct ScoreText;

/// Root node of the game-over overlay; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Spawn the 2D camera.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Spawn the permanent score box: an outlined, rounded frame centred near
/// the bottom edge with the current score inside.
pub fn setup_hud(mut commands: Commands, font: Res<GameFont>) {
    commands
        .spawn((Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            bottom: Val::Px(SCORE_BOTTOM_OFFSET),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..Default::default()
        },))
        .with_children(|row| {
            row.spawn((
                Node {
                    padding: UiRect::axes(Val::Px(18.0), Val::Px(4.0)),
                    border: UiRect::all(Val::Px(5.0)),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..Default::default()
                },
                BorderColor::all(Color::WHITE),
                BorderRadius::all(Val::Px(10.0)),
            ))
            .with_children(|frame| {
                frame.spawn((
                    Text::new("0"),
                    TextFont {
                        font: font.0.clone(),
                        font_size: SCORE_FONT_SIZE,
                        ..Default::default()
                    },
                    TextColor(Color::WHITE),
                    ScoreText,
                ));
            });
        });
}

/// Refresh the score text whenever the score changes.
pub fn score_display_system(score: Res<Score>, mut query: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = score.0.to_string();
    }
}

/// Spawn the static game-over overlay: title above centre, restart hint
/// below it.
pub fn setup_game_over(mut commands: Commands, font: Res<GameFont>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(160.0),
                ..Default::default()
            },
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font: font.0.clone(),
                    font_size: GAME_OVER_FONT_SIZE,
                    ..Default::default()
                },
                TextColor(Color::srgb_u8(240, 240, 240)),
            ));
            overlay.spawn((
                Text::new("PRESS R TO RESTART"),
                TextFont {
                    font: font.0.clone(),
                    font_size: RESTART_HINT_FONT_SIZE,
                    ..Default::default()
                },
                TextColor(Color::srgb_u8(240, 240, 240)),
            ));
        });
}

/// Despawn the game-over overlay when the session restarts.
pub fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
