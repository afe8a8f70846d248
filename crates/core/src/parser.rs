use serde::Deserialize;
use thiserror::Error;

use crate::model::{Cell, Coord, HexMap, Player, Replay, Snapshot};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("replay must be a JSON array of snapshots")]
    NotAnArray,
    #[error("replay contains no snapshots")]
    Empty,
    #[error("snapshot {index}: {message}")]
    Snapshot { index: usize, message: String },
}

/// Raw wire structs — mapped into the model after deserialization so field
/// renames, defaults, and the number-or-string treasure value stay out of
/// the model types.
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    map: RawMap,
    #[serde(default)]
    players: Vec<RawPlayer>,
}

#[derive(Debug, Deserialize)]
struct RawMap {
    radius: i64,
    #[serde(default)]
    cells: Vec<RawCell>,
    #[serde(default)]
    treasure_appeared: bool,
    #[serde(default)]
    treasure_value: RawTreasureValue,
    #[serde(default)]
    moveleft: i64,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    q: i32,
    r: i32,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    q: i32,
    r: i32,
    #[serde(default)]
    points: i64,
    #[serde(default)]
    shield: bool,
    #[serde(default = "default_alive")]
    alive: bool,
    #[serde(default)]
    missiles: i64,
    #[serde(default)]
    missiles_fired: Vec<RawTarget>,
}

fn default_alive() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    q: i32,
    r: i32,
}

/// Treasure values arrive as either a JSON number or a string; both render
/// as text inside the treasure marker.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTreasureValue {
    Number(serde_json::Number),
    Text(String),
}

impl Default for RawTreasureValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl RawTreasureValue {
    fn into_display(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(t) => t,
        }
    }
}

impl RawSnapshot {
    fn into_snapshot(self) -> Result<Snapshot, String> {
        let radius = u32::try_from(self.map.radius)
            .map_err(|_| format!("map radius must be non-negative, got {}", self.map.radius))?;

        let cells = self
            .map
            .cells
            .into_iter()
            .map(|c| Cell {
                coord: Coord::axial(c.q, c.r),
                value: c.value,
            })
            .collect();

        let players = self
            .players
            .into_iter()
            .map(|p| Player {
                coord: Coord::axial(p.q, p.r),
                points: p.points,
                shield: p.shield,
                alive: p.alive,
                missiles: p.missiles,
                missiles_fired: p
                    .missiles_fired
                    .into_iter()
                    .map(|t| Coord::axial(t.q, t.r))
                    .collect(),
            })
            .collect();

        Ok(Snapshot {
            map: HexMap {
                radius,
                cells,
                treasure_appeared: self.map.treasure_appeared,
                treasure_value: self.map.treasure_value.into_display(),
                moves_left: self.map.moveleft,
            },
            players,
        })
    }
}

/// Parse a replay document: a non-empty JSON array of snapshot objects.
///
/// Loading is all-or-nothing — any malformed snapshot fails the whole
/// parse, so a caller holding a previous replay keeps it intact.
pub fn parse_replay(data: &[u8]) -> Result<Replay, ParseError> {
    let value: serde_json::Value = serde_json::from_slice(data)?;
    let Some(entries) = value.as_array() else {
        return Err(ParseError::NotAnArray);
    };
    if entries.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut snapshots = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let raw: RawSnapshot =
            serde_json::from_value(entry.clone()).map_err(|e| ParseError::Snapshot {
                index,
                message: e.to_string(),
            })?;
        let snapshot = raw
            .into_snapshot()
            .map_err(|message| ParseError::Snapshot { index, message })?;
        snapshots.push(snapshot);
    }

    Replay::new(snapshots).map_err(|_| ParseError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellKind;

    const MINIMAL: &str = r#"[
        {
            "map": {
                "radius": 1,
                "cells": [{"q": 0, "r": 0, "s": 0, "value": "D"}],
                "treasure_appeared": false,
                "treasure_value": 0,
                "moveleft": 10
            },
            "players": [
                {"q": 0, "r": 0, "s": 0, "points": 5, "shield": false,
                 "alive": true, "missiles": 2, "missiles_fired": []}
            ]
        }
    ]"#;

    #[test]
    fn parses_minimal_replay() {
        let replay = match parse_replay(MINIMAL.as_bytes()) {
            Ok(r) => r,
            Err(e) => panic!("parse failed: {e}"),
        };
        assert_eq!(replay.len(), 1);
        let snap = replay.current();
        assert_eq!(snap.map.radius, 1);
        assert_eq!(snap.map.moves_left, 10);
        assert_eq!(snap.players.len(), 1);
        assert_eq!(snap.players[0].points, 5);
        assert_eq!(snap.map.cells[0].coord, Coord::origin());
        assert_eq!(CellKind::classify(&snap.map.cells[0].value), CellKind::Danger);
    }

    #[test]
    fn rejects_non_array() {
        assert!(matches!(
            parse_replay(br#"{"map": {}}"#),
            Err(ParseError::NotAnArray)
        ));
    }

    #[test]
    fn rejects_empty_array() {
        assert!(matches!(parse_replay(b"[]"), Err(ParseError::Empty)));
    }

    #[test]
    fn rejects_unparseable_text() {
        assert!(matches!(parse_replay(b"not json"), Err(ParseError::Json(_))));
    }

    #[test]
    fn rejects_negative_radius_with_context() {
        let doc = br#"[{"map": {"radius": -2, "moveleft": 0}, "players": []}]"#;
        match parse_replay(doc) {
            Err(ParseError::Snapshot { index, message }) => {
                assert_eq!(index, 0);
                assert!(message.contains("radius"));
            }
            other => panic!("expected snapshot error, got {other:?}"),
        }
    }

    #[test]
    fn numeric_treasure_value_becomes_text() {
        let doc = br#"[{
            "map": {"radius": 0, "treasure_appeared": true, "treasure_value": 42, "moveleft": 1},
            "players": []
        }]"#;
        let replay = match parse_replay(doc) {
            Ok(r) => r,
            Err(e) => panic!("parse failed: {e}"),
        };
        assert_eq!(replay.current().map.treasure_value, "42");
    }

    #[test]
    fn missing_optional_player_fields_default() {
        let doc = br#"[{
            "map": {"radius": 0, "moveleft": 0},
            "players": [{"q": 0, "r": 0}]
        }]"#;
        let replay = match parse_replay(doc) {
            Ok(r) => r,
            Err(e) => panic!("parse failed: {e}"),
        };
        let p = &replay.current().players[0];
        assert!(p.alive);
        assert!(!p.shield);
        assert_eq!(p.points, 0);
        assert!(p.missiles_fired.is_empty());
    }

    #[test]
    fn empty_players_is_a_valid_frame() {
        let doc = br#"[{"map": {"radius": 1, "moveleft": 3}, "players": []}]"#;
        assert!(parse_replay(doc).is_ok());
    }
}
