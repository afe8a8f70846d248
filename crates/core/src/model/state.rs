use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Coord;

/// One occupied tile of the map. Coordinates without a cell render blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub coord: Coord,
    /// Raw marker string: `"D"`, `"S"`, a gold count, or anything else.
    /// Drawn verbatim as the tile label.
    pub value: String,
}

/// Classification of a cell's raw value, used to pick the tile fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Danger,
    Shield,
    /// Gold pile; tier is clamped to 1..=6 (brightest to darkest shade).
    Gold(u8),
    /// Anything unrecognized renders on a blank white tile.
    Plain,
}

impl CellKind {
    pub fn classify(value: &str) -> Self {
        match value {
            "D" => Self::Danger,
            "S" => Self::Shield,
            _ => match leading_int(value) {
                Some(n) => Self::Gold(n.clamp(1, 6) as u8),
                None => Self::Plain,
            },
        }
    }
}

/// Leading-integer parse: optional sign followed by digits, trailing junk
/// ignored. Mirrors how gold counts appear in replay data ("4", "12pts").
fn leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// The hex map of one snapshot. Cells are sparse; `radius` bounds the
/// rendered disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexMap {
    pub radius: u32,
    pub cells: Vec<Cell>,
    pub treasure_appeared: bool,
    /// Display text for the treasure marker (source data carries either a
    /// number or a string; normalized at parse time).
    pub treasure_value: String,
    pub moves_left: i64,
}

impl HexMap {
    /// Coordinate → cell lookup. Duplicate coordinates resolve to the last
    /// cell in input order.
    pub fn cell_index(&self) -> HashMap<Coord, &Cell> {
        let mut index = HashMap::with_capacity(self.cells.len());
        for cell in &self.cells {
            index.insert(cell.coord, cell);
        }
        index
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub coord: Coord,
    pub points: i64,
    pub shield: bool,
    pub alive: bool,
    pub missiles: i64,
    /// Target coordinates of missiles in flight this turn.
    pub missiles_fired: Vec<Coord>,
}

/// One immutable frame of the replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub map: HexMap,
    pub players: Vec<Player>,
}
