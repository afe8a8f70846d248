use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::Point;

/// A single, stateless render instruction.
///
/// The scene compositor emits a `Vec<RenderCommand>` per snapshot.
/// Renderers consume the list sequentially — each command carries all the
/// data it needs, and list order is draw order (later commands occlude
/// earlier ones).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a closed polygon from ordered corner points, optionally with a
    /// centered text label.
    DrawPolygon {
        points: Vec<Point>,
        fill: ThemeToken,
        stroke: Option<ThemeToken>,
        label: Option<String>,
        /// Label font size in logical pixels (already zoom-scaled).
        font_size: f64,
    },

    /// Draw a filled circle, optionally with a centered text label.
    DrawCircle {
        center: Point,
        radius: f64,
        fill: ThemeToken,
        stroke: Option<ThemeToken>,
        label: Option<String>,
        font_size: f64,
    },

    /// Draw an unfilled circle outline (shield rings).
    DrawRing {
        center: Point,
        radius: f64,
        stroke: ThemeToken,
        width: f64,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Draw a free-standing text string.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Begin a logical layer (tiles, players, …). Renderers may use this
    /// for batching or layer separation.
    BeginGroup { id: String },

    /// End the current layer.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_serde_roundtrip() {
        let cmds = vec![
            RenderCommand::BeginGroup { id: "tiles".into() },
            RenderCommand::DrawPolygon {
                points: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.5, 1.0)],
                fill: ThemeToken::TileDanger,
                stroke: Some(ThemeToken::TileBorder),
                label: Some("D".into()),
                font_size: 16.0,
            },
            RenderCommand::EndGroup,
        ];
        let json = serde_json::to_string(&cmds).unwrap_or_default();
        let back: Vec<RenderCommand> = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(back.len(), 3);
        assert!(matches!(
            back[1],
            RenderCommand::DrawPolygon { ref label, .. } if label.as_deref() == Some("D")
        ));
    }
}
