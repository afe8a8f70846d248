//! Scene compositor: one snapshot + one view transform → the ordered draw
//! list. Read-only over the snapshot; list order is draw order, so later
//! layers occlude earlier ones.

use hexplay_protocol::{RenderCommand, ThemeToken, ViewTransform, Viewport};

use crate::geometry::{axial_to_pixel, hex_corners};
use crate::model::{CellKind, Coord, Snapshot};

const TILE_FONT: f64 = 16.0;
const TREASURE_FONT: f64 = 14.0;
const PLAYER_FONT: f64 = 12.0;
/// Labels below this effective size are unreadable clutter and skipped.
const LABEL_MIN_PX: f64 = 6.0;

const TREASURE_RADIUS: f64 = 15.0;
const PLAYER_RADIUS: f64 = 12.0;
const SHIELD_RING_RADIUS: f64 = 15.0;
const SHIELD_RING_WIDTH: f64 = 3.0;
const MISSILE_OUTER_RADIUS: f64 = 8.0;
const MISSILE_INNER_RADIUS: f64 = 4.0;
const TRAIL_WIDTH: f64 = 1.0;

/// Render one snapshot under the given transform.
///
/// Layer order: tiles → treasure → missile trails → players → missiles.
/// The full radius disk is drawn, not just populated cells; cells outside
/// the disk are never looked up, so stray coordinates are ignored.
pub fn render_scene(
    snapshot: &Snapshot,
    transform: &ViewTransform,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let center = viewport.center();
    let scale = transform.effective_scale();
    let map = &snapshot.map;
    let cells = map.cell_index();

    let mut commands = Vec::with_capacity(cells.len() + snapshot.players.len() * 3 + 16);

    commands.push(RenderCommand::BeginGroup { id: "tiles".into() });
    for coord in Coord::disk(map.radius) {
        let pos = axial_to_pixel(coord, transform, center);
        let (fill, label) = match cells.get(&coord) {
            Some(cell) => (tile_fill(&cell.value), scaled_label(&cell.value, TILE_FONT, scale)),
            None => (ThemeToken::TileBlank, None),
        };
        commands.push(RenderCommand::DrawPolygon {
            points: hex_corners(pos, scale).to_vec(),
            fill,
            stroke: Some(ThemeToken::TileBorder),
            label,
            font_size: TILE_FONT * scale,
        });
    }
    commands.push(RenderCommand::EndGroup);

    commands.push(RenderCommand::BeginGroup {
        id: "treasure".into(),
    });
    if map.treasure_appeared {
        let pos = axial_to_pixel(Coord::origin(), transform, center);
        commands.push(RenderCommand::DrawCircle {
            center: pos,
            radius: TREASURE_RADIUS * scale,
            fill: ThemeToken::TreasureFill,
            stroke: Some(ThemeToken::TileBorder),
            label: scaled_label(&map.treasure_value, TREASURE_FONT, scale),
            font_size: TREASURE_FONT * scale,
        });
    }
    commands.push(RenderCommand::EndGroup);

    // Trails go under the entities so player and missile discs occlude them.
    commands.push(RenderCommand::BeginGroup { id: "trails".into() });
    for player in &snapshot.players {
        if player.missiles_fired.is_empty() {
            continue;
        }
        let from = axial_to_pixel(player.coord, transform, center);
        for target in &player.missiles_fired {
            commands.push(RenderCommand::DrawLine {
                from,
                to: axial_to_pixel(*target, transform, center),
                color: ThemeToken::MissileTrail,
                width: TRAIL_WIDTH,
            });
        }
    }
    commands.push(RenderCommand::EndGroup);

    commands.push(RenderCommand::BeginGroup {
        id: "players".into(),
    });
    for player in &snapshot.players {
        let pos = axial_to_pixel(player.coord, transform, center);
        let fill = if player.alive {
            ThemeToken::PlayerAlive
        } else {
            ThemeToken::PlayerDead
        };
        commands.push(RenderCommand::DrawCircle {
            center: pos,
            radius: PLAYER_RADIUS * scale,
            fill,
            stroke: Some(ThemeToken::PlayerBorder),
            label: scaled_label(&player.points.to_string(), PLAYER_FONT, scale),
            font_size: PLAYER_FONT * scale,
        });
        if player.shield {
            commands.push(RenderCommand::DrawRing {
                center: pos,
                radius: SHIELD_RING_RADIUS * scale,
                stroke: ThemeToken::ShieldRing,
                width: SHIELD_RING_WIDTH * scale,
            });
        }
    }
    commands.push(RenderCommand::EndGroup);

    commands.push(RenderCommand::BeginGroup {
        id: "missiles".into(),
    });
    for player in &snapshot.players {
        for target in &player.missiles_fired {
            let pos = axial_to_pixel(*target, transform, center);
            commands.push(RenderCommand::DrawCircle {
                center: pos,
                radius: MISSILE_OUTER_RADIUS * scale,
                fill: ThemeToken::MissileOuter,
                stroke: Some(ThemeToken::MissileBorder),
                label: None,
                font_size: 0.0,
            });
            commands.push(RenderCommand::DrawCircle {
                center: pos,
                radius: MISSILE_INNER_RADIUS * scale,
                fill: ThemeToken::MissileInner,
                stroke: Some(ThemeToken::MissileBorder),
                label: None,
                font_size: 0.0,
            });
        }
    }
    commands.push(RenderCommand::EndGroup);

    commands
}

/// Status readout for the control surface.
pub fn status_line(snapshot: &Snapshot, position: usize, total: usize) -> String {
    format!(
        "Moves left: {} | State: {} / {}",
        snapshot.map.moves_left,
        position + 1,
        total
    )
}

fn tile_fill(value: &str) -> ThemeToken {
    match CellKind::classify(value) {
        CellKind::Danger => ThemeToken::TileDanger,
        CellKind::Shield => ThemeToken::TileShield,
        CellKind::Gold(tier) => ThemeToken::gold(tier),
        CellKind::Plain => ThemeToken::TileBlank,
    }
}

/// A label is only worth emitting when it has text and its effective font
/// size clears the readability threshold.
fn scaled_label(text: &str, base_font: f64, scale: f64) -> Option<String> {
    if text.is_empty() || base_font * scale <= LABEL_MIN_PX {
        None
    } else {
        Some(text.to_string())
    }
}
