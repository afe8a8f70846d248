use egui::{Align2, FontId, Pos2, Stroke};
use hexplay_protocol::{RenderCommand, TextAlign, ThemeToken};

use crate::theme::{self, ThemeMode};

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left pixel position of the rendering area; scene
/// coordinates are relative to it. Commands arrive in draw order, so this
/// is a single forward pass.
pub fn render_commands(
    painter: &egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) {
    let clip = painter.clip_rect();

    for cmd in commands {
        match cmd {
            RenderCommand::DrawPolygon {
                points,
                fill,
                stroke,
                label,
                font_size,
            } => {
                let pts: Vec<Pos2> = points
                    .iter()
                    .map(|p| Pos2::new(p.x as f32 + offset.x, p.y as f32 + offset.y))
                    .collect();

                // Cull polygons fully outside the clip rect
                let bounds = egui::Rect::from_points(&pts);
                if !clip.intersects(bounds) {
                    continue;
                }

                let fill_color = theme::resolve(*fill, mode);
                let stroke = match stroke {
                    Some(token) => Stroke::new(1.0, theme::resolve(*token, mode)),
                    None => Stroke::NONE,
                };
                let center = bounds.center();
                painter.add(egui::Shape::convex_polygon(pts, fill_color, stroke));

                if let Some(text) = label {
                    draw_centered_label(painter, center, text, *font_size, mode);
                }
            }

            RenderCommand::DrawCircle {
                center,
                radius,
                fill,
                stroke,
                label,
                font_size,
            } => {
                let pos = Pos2::new(center.x as f32 + offset.x, center.y as f32 + offset.y);
                let r = *radius as f32;
                if !clip.intersects(egui::Rect::from_center_size(pos, egui::vec2(r, r) * 2.0)) {
                    continue;
                }
                painter.circle_filled(pos, r, theme::resolve(*fill, mode));
                if let Some(token) = stroke {
                    painter.circle_stroke(pos, r, Stroke::new(1.0, theme::resolve(*token, mode)));
                }
                if let Some(text) = label {
                    draw_centered_label(painter, pos, text, *font_size, mode);
                }
            }

            RenderCommand::DrawRing {
                center,
                radius,
                stroke,
                width,
            } => {
                let pos = Pos2::new(center.x as f32 + offset.x, center.y as f32 + offset.y);
                painter.circle_stroke(
                    pos,
                    *radius as f32,
                    Stroke::new(*width as f32, theme::resolve(*stroke, mode)),
                );
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
            } => {
                let p1 = Pos2::new(from.x as f32 + offset.x, from.y as f32 + offset.y);
                let p2 = Pos2::new(to.x as f32 + offset.x, to.y as f32 + offset.y);
                painter.line_segment(
                    [p1, p2],
                    Stroke::new(*width as f32, theme::resolve(*color, mode)),
                );
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let pos = Pos2::new(position.x as f32 + offset.x, position.y as f32 + offset.y);
                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_CENTER,
                    TextAlign::Center => Align2::CENTER_CENTER,
                    TextAlign::Right => Align2::RIGHT_CENTER,
                };
                painter.text(
                    pos,
                    anchor,
                    text,
                    FontId::proportional(*font_size as f32),
                    theme::resolve(*color, mode),
                );
            }

            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {
                // Groups are semantic — no visual effect in egui
            }
        }
    }
}

fn draw_centered_label(
    painter: &egui::Painter,
    pos: Pos2,
    text: &str,
    font_size: f64,
    mode: ThemeMode,
) {
    if font_size < 1.0 {
        return;
    }
    painter.text(
        pos,
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(font_size as f32),
        theme::resolve(ThemeToken::TileLabel, mode),
    );
}
