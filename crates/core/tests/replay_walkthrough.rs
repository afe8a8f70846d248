//! Integration test: load a two-snapshot replay, walk it with the
//! navigator, and verify the composed scene and status line at each step.

use hexplay_core::model::Replay;
use hexplay_core::parser::{self, ParseError};
use hexplay_core::scene;
use hexplay_protocol::{RenderCommand, ThemeToken, ViewTransform, Viewport};

fn load_fixture() -> Replay {
    let data = include_bytes!("fixtures/two_state_replay.json");
    parser::parse_replay(data).expect("fixture replay should parse")
}

fn tiles(commands: &[RenderCommand]) -> Vec<&RenderCommand> {
    commands
        .iter()
        .filter(|c| matches!(c, RenderCommand::DrawPolygon { .. }))
        .collect()
}

fn player_circles(commands: &[RenderCommand]) -> Vec<&RenderCommand> {
    commands
        .iter()
        .filter(|c| {
            matches!(
                c,
                RenderCommand::DrawCircle { fill, .. }
                    if *fill == ThemeToken::PlayerAlive || *fill == ThemeToken::PlayerDead
            )
        })
        .collect()
}

#[test]
fn walk_two_snapshot_replay() {
    let mut replay = load_fixture();
    assert_eq!(replay.len(), 2);
    assert!(replay.at_start());
    assert!(!replay.at_end());

    let viewport = Viewport::new(800.0, 600.0);
    let transform = ViewTransform::identity();

    // Snapshot 1: radius-1 disk, danger origin, one living player.
    let commands = scene::render_scene(replay.current(), &transform, &viewport);
    assert_eq!(tiles(&commands).len(), 7, "radius-1 disk is 7 hexes");

    let danger: Vec<_> = tiles(&commands)
        .into_iter()
        .filter(|c| {
            matches!(c, RenderCommand::DrawPolygon { fill, .. } if *fill == ThemeToken::TileDanger)
        })
        .collect();
    assert_eq!(danger.len(), 1);
    assert!(matches!(
        danger[0],
        RenderCommand::DrawPolygon { label: Some(l), .. } if l == "D"
    ));

    let players = player_circles(&commands);
    assert_eq!(players.len(), 1);
    match players[0] {
        RenderCommand::DrawCircle {
            center,
            fill,
            label,
            ..
        } => {
            assert_eq!(*fill, ThemeToken::PlayerAlive);
            assert_eq!(label.as_deref(), Some("5"));
            // Player stands on the origin, which projects to the viewport
            // center under the identity transform.
            assert!((center.x - 400.0).abs() < 1e-9);
            assert!((center.y - 300.0).abs() < 1e-9);
        }
        other => panic!("expected player circle, got {other:?}"),
    }

    assert_eq!(
        scene::status_line(replay.current(), replay.position(), replay.len()),
        "Moves left: 12 | State: 1 / 2"
    );

    // Step forward: the player dies and the forward control disables.
    assert!(replay.next());
    assert!(replay.at_end());

    let commands = scene::render_scene(replay.current(), &transform, &viewport);
    let players = player_circles(&commands);
    assert_eq!(players.len(), 1);
    assert!(matches!(
        players[0],
        RenderCommand::DrawCircle { fill, label: Some(l), .. }
            if *fill == ThemeToken::PlayerDead && l == "3"
    ));
    assert_eq!(
        scene::status_line(replay.current(), replay.position(), replay.len()),
        "Moves left: 11 | State: 2 / 2"
    );

    // Clamped at the end; stepping back returns to the first snapshot.
    assert!(!replay.next());
    assert_eq!(replay.position(), 1);
    assert!(replay.previous());
    assert!(replay.at_start());
}

#[test]
fn bad_documents_are_rejected_without_a_replay() {
    assert!(matches!(
        parser::parse_replay(b"[]"),
        Err(ParseError::Empty)
    ));
    assert!(matches!(
        parser::parse_replay(b"{\"not\": \"an array\"}"),
        Err(ParseError::NotAnArray)
    ));
    assert!(matches!(
        parser::parse_replay(b"garbage"),
        Err(ParseError::Json(_))
    ));
}

#[test]
fn failed_reload_leaves_the_previous_replay_usable() {
    // The pattern every frontend uses: only replace the held replay on Ok.
    let mut held = load_fixture();
    held.next();

    let result = parser::parse_replay(b"[]");
    assert!(result.is_err());

    // The prior replay and its cursor are untouched.
    assert_eq!(held.len(), 2);
    assert_eq!(held.position(), 1);
}

#[test]
fn replay_renders_to_svg() {
    let replay = load_fixture();
    let viewport = Viewport::new(400.0, 400.0);
    let commands = scene::render_scene(replay.current(), &ViewTransform::identity(), &viewport);
    let svg = hexplay_core::svg::render_svg(&commands, viewport.width, viewport.height, false);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polygon"));
    assert!(svg.contains(r#"fill="red""#));
    assert!(svg.contains("limegreen"));
}
