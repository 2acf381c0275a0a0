//! Build the draw list for one frame from the game state

use glam::Vec2;

use super::commands::{DrawCommand, HitboxShape, PillarAnchor, PlayerSprite, Presenter, TextAlign};
use crate::highscores::HighScores;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};
use crate::ui::MenuLayout;

const TITLE: &str = "SPACE RIDERS";
/// Score overlay anchor and size
const SCORE_POS: Vec2 = Vec2::new(20.0, 36.0);
const SCORE_SIZE: f32 = 18.0;

/// Emit the frame's draw commands into `out`, back to front
pub fn build_frame(
    state: &GameState,
    highscores: &HighScores,
    settings: &Settings,
    out: &mut dyn Presenter,
) {
    let frame = if settings.reduced_motion {
        0
    } else {
        state.background.frame
    };
    out.draw(DrawCommand::Background { frame });

    let layout = MenuLayout::for_screen(state.screen);
    match state.phase {
        GamePhase::Start => draw_start_menu(state, &layout, out),
        GamePhase::GameOver => draw_game_over(state, highscores, &layout, out),
        GamePhase::Playing => draw_run(state, settings, out),
    }
}

fn centered_text(state: &GameState, text: impl Into<String>, y: f32, size: f32) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        pos: Vec2::new(state.screen.x / 2.0, y),
        size,
        align: TextAlign::Center,
    }
}

fn draw_start_menu(state: &GameState, layout: &MenuLayout, out: &mut dyn Presenter) {
    out.draw(centered_text(state, TITLE, layout.title_y, 30.0));
    out.draw(DrawCommand::Button {
        rect: layout.start,
        label: "START",
        size: 18.0,
    });
    if !state.fullscreen {
        out.draw(DrawCommand::Button {
            rect: layout.fullscreen,
            label: "FULLSCREEN",
            size: 14.0,
        });
    }
}

fn draw_game_over(
    state: &GameState,
    highscores: &HighScores,
    layout: &MenuLayout,
    out: &mut dyn Presenter,
) {
    out.draw(centered_text(state, "GAME OVER", layout.title_y, 28.0));
    out.draw(centered_text(
        state,
        format!("SCORE {}", state.score),
        layout.score_y,
        18.0,
    ));
    out.draw(centered_text(state, "TOP 3", layout.scores_y, 14.0));

    for (i, score) in highscores.entries().iter().enumerate() {
        out.draw(DrawCommand::Text {
            text: format!("{}. {}", i + 1, score),
            pos: Vec2::new(state.screen.x / 2.0, layout.score_row_y(i)),
            size: 14.0,
            align: TextAlign::Left,
        });
    }

    out.draw(DrawCommand::Button {
        rect: layout.restart,
        label: "RESTART",
        size: 18.0,
    });
}

fn draw_run(state: &GameState, settings: &Settings, out: &mut dyn Presenter) {
    let tuning = &state.tuning;
    let player = &state.player;

    let sprite = if player.boosting {
        PlayerSprite::Boost(state.boost.frame)
    } else {
        PlayerSprite::Idle
    };
    out.draw(DrawCommand::Player {
        pos: player.pos,
        size: player.size,
        rotation: player.rotation(tuning.rotation_per_velocity),
        sprite,
    });

    for obstacle in state.obstacles.iter() {
        out.draw(DrawCommand::Pillar {
            x: obstacle.x,
            width: obstacle.width,
            height: obstacle.top,
            anchor: PillarAnchor::Top,
        });
        out.draw(DrawCommand::Pillar {
            x: obstacle.x,
            width: obstacle.width,
            height: obstacle.bottom,
            anchor: PillarAnchor::Bottom,
        });
    }

    if settings.show_hitboxes {
        out.draw(DrawCommand::Hitbox(HitboxShape::Player(
            player.hitbox(tuning.player_hitbox_ratio),
        )));
        for obstacle in state.obstacles.iter() {
            let hitbox = obstacle.hitbox(state.screen.y, tuning.body_hitbox_scale);
            out.draw(DrawCommand::Hitbox(HitboxShape::Body(hitbox.top_body)));
            out.draw(DrawCommand::Hitbox(HitboxShape::Cap(hitbox.top_cap)));
            out.draw(DrawCommand::Hitbox(HitboxShape::Body(hitbox.bottom_body)));
            out.draw(DrawCommand::Hitbox(HitboxShape::Cap(hitbox.bottom_cap)));
        }
    }

    out.draw(DrawCommand::Score {
        value: state.score,
        pos: SCORE_POS,
        size: SCORE_SIZE,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;

    fn render(state: &GameState, highscores: &HighScores, settings: &Settings) -> Vec<DrawCommand> {
        let mut out: Vec<DrawCommand> = Vec::new();
        build_frame(state, highscores, settings, &mut out);
        out
    }

    fn labels(commands: &[DrawCommand]) -> Vec<&'static str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Button { label, .. } => Some(*label),
                _ => None,
            })
            .collect()
    }

    fn texts(commands: &[DrawCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_menu() {
        let mut state = GameState::new(1);
        let out = render(&state, &HighScores::new(), &Settings::default());
        assert_eq!(out[0], DrawCommand::Background { frame: 0 });
        assert_eq!(texts(&out), vec!["SPACE RIDERS"]);
        assert_eq!(labels(&out), vec!["START", "FULLSCREEN"]);

        state.fullscreen = true;
        let out = render(&state, &HighScores::new(), &Settings::default());
        assert_eq!(labels(&out), vec!["START"]);
    }

    #[test]
    fn test_game_over_lists_highscores() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.score = 7;
        let highscores = HighScores::from_scores([7, 12]);
        let out = render(&state, &highscores, &Settings::default());
        assert_eq!(
            texts(&out),
            vec!["GAME OVER", "SCORE 7", "TOP 3", "1. 12", "2. 7"]
        );
        assert_eq!(labels(&out), vec!["RESTART"]);
    }

    #[test]
    fn test_run_draws_player_pillars_and_score() {
        let mut state = GameState::new(1);
        state.start_run();
        state.score = 3;
        state.player.velocity = 10.0;
        state.obstacles.push(Obstacle {
            x: 200.0,
            width: 60.0,
            top: 150.0,
            bottom: 320.0,
            passed: false,
        });

        let out = render(&state, &HighScores::new(), &Settings::default());
        assert_eq!(out.len(), 5);
        match &out[1] {
            DrawCommand::Player {
                rotation, sprite, ..
            } => {
                assert!((*rotation - 0.35).abs() < 1e-6);
                assert_eq!(*sprite, PlayerSprite::Idle);
            }
            other => panic!("expected player, got {other:?}"),
        }
        assert_eq!(
            out[2],
            DrawCommand::Pillar {
                x: 200.0,
                width: 60.0,
                height: 150.0,
                anchor: PillarAnchor::Top
            }
        );
        assert_eq!(
            out[3],
            DrawCommand::Pillar {
                x: 200.0,
                width: 60.0,
                height: 320.0,
                anchor: PillarAnchor::Bottom
            }
        );
        assert!(matches!(out[4], DrawCommand::Score { value: 3, .. }));
    }

    #[test]
    fn test_boost_sprite_and_hitboxes() {
        let mut state = GameState::new(1);
        state.start_run();
        state.player.boosting = true;
        state.boost.frame = 2;
        state.obstacles.push(Obstacle {
            x: 200.0,
            width: 60.0,
            top: 150.0,
            bottom: 320.0,
            passed: false,
        });
        let settings = Settings {
            show_hitboxes: true,
            ..Settings::default()
        };

        let out = render(&state, &HighScores::new(), &settings);
        assert!(matches!(
            out[1],
            DrawCommand::Player {
                sprite: PlayerSprite::Boost(2),
                ..
            }
        ));
        let hitboxes = out
            .iter()
            .filter(|c| matches!(c, DrawCommand::Hitbox(_)))
            .count();
        assert_eq!(hitboxes, 5);
    }

    #[test]
    fn test_reduced_motion_freezes_background() {
        let mut state = GameState::new(1);
        state.background.frame = 3;
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        let out = render(&state, &HighScores::new(), &settings);
        assert_eq!(out[0], DrawCommand::Background { frame: 0 });
    }
}
