//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use hexplay_protocol::{RenderCommand, TextAlign, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif;font-weight:bold">"#,
    ));

    let bg = resolve_color(ThemeToken::Background, dark);
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#,
    ));

    for cmd in commands {
        match cmd {
            RenderCommand::DrawPolygon {
                points,
                fill,
                stroke,
                label,
                font_size,
            } => {
                let pts: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
                let fill_color = resolve_color(*fill, dark);
                let stroke_attr = stroke
                    .map(|s| format!(r#" stroke="{}""#, resolve_color(s, dark)))
                    .unwrap_or_default();
                svg.push_str(&format!(
                    r#"<polygon points="{}" fill="{fill_color}"{stroke_attr}/>"#,
                    pts.join(" "),
                ));
                if let Some(label) = label {
                    let cx = points.iter().map(|p| p.x).sum::<f64>() / points.len().max(1) as f64;
                    let cy = points.iter().map(|p| p.y).sum::<f64>() / points.len().max(1) as f64;
                    push_centered_text(&mut svg, cx, cy, label, *font_size, dark);
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
                let fill_color = resolve_color(*fill, dark);
                let stroke_attr = stroke
                    .map(|s| format!(r#" stroke="{}""#, resolve_color(s, dark)))
                    .unwrap_or_default();
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="{fill_color}"{stroke_attr}/>"#,
                    center.x, center.y,
                ));
                if let Some(label) = label {
                    push_centered_text(&mut svg, center.x, center.y, label, *font_size, dark);
                }
            }
            RenderCommand::DrawRing {
                center,
                radius,
                stroke,
                width: ring_width,
            } => {
                let stroke_color = resolve_color(*stroke, dark);
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="none" stroke="{stroke_color}" stroke-width="{ring_width}"/>"#,
                    center.x, center.y,
                ));
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                svg.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}"/>"#,
                    from.x, from.y, to.x, to.y,
                ));
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                ));
            }
            // Groups are semantic — no visual effect in static SVG output
            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }

    svg.push_str("</svg>");
    svg
}

fn push_centered_text(svg: &mut String, x: f64, y: f64, text: &str, font_size: f64, dark: bool) {
    let fill = resolve_color(ThemeToken::TileLabel, dark);
    svg.push_str(&format!(
        r#"<text x="{x}" y="{y}" fill="{fill}" font-size="{font_size}" text-anchor="middle" dominant-baseline="central" style="pointer-events:none">{}</text>"#,
        escape_xml(text),
    ));
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::TileBlank => "#313244",
            ThemeToken::TileDanger => "#f38ba8",
            ThemeToken::TileShield => "#74c7ec",
            ThemeToken::TileGold1 => "#f9e2af",
            ThemeToken::TileGold2 => "#efd49a",
            ThemeToken::TileGold3 => "#e5c685",
            ThemeToken::TileGold4 => "#dbb870",
            ThemeToken::TileGold5 => "#d1aa5b",
            ThemeToken::TileGold6 => "#c79c46",
            ThemeToken::TileBorder | ThemeToken::PlayerBorder | ThemeToken::MissileBorder => {
                "#11111b"
            }
            ThemeToken::TileLabel => "#11111b",
            ThemeToken::TreasureFill => "#f9e2af",
            ThemeToken::TreasureLabel => "#11111b",
            ThemeToken::PlayerAlive => "#a6e3a1",
            ThemeToken::PlayerDead => "#6c7086",
            ThemeToken::PlayerLabel => "#11111b",
            ThemeToken::ShieldRing => "#89b4fa",
            ThemeToken::MissileTrail | ThemeToken::MissileOuter => "#fab387",
            ThemeToken::MissileInner => "#f9e2af",
            ThemeToken::Background => "#11111b",
            ThemeToken::TextPrimary | ThemeToken::ToolbarText => "#cdd6f4",
            ThemeToken::TextMuted => "#a6adc8",
            ThemeToken::ToolbarBackground | ThemeToken::TableHeaderBackground => "#181825",
            ThemeToken::TableRowEven => "#1e1e2e",
            ThemeToken::TableRowOdd => "#181825",
            ThemeToken::TableBorder => "#45475a",
        }
    } else {
        match token {
            ThemeToken::TileBlank => "white",
            ThemeToken::TileDanger => "red",
            ThemeToken::TileShield => "skyblue",
            ThemeToken::TileGold1 => "#FFFF66",
            ThemeToken::TileGold2 => "#FFFF44",
            ThemeToken::TileGold3 => "#FFFF22",
            ThemeToken::TileGold4 => "#FFFF00",
            ThemeToken::TileGold5 => "#FFEE00",
            ThemeToken::TileGold6 => "#FFDD00",
            ThemeToken::TileBorder | ThemeToken::PlayerBorder | ThemeToken::MissileBorder => {
                "black"
            }
            ThemeToken::TileLabel => "black",
            ThemeToken::TreasureFill => "gold",
            ThemeToken::TreasureLabel => "black",
            ThemeToken::PlayerAlive => "limegreen",
            ThemeToken::PlayerDead => "gray",
            ThemeToken::PlayerLabel => "black",
            ThemeToken::ShieldRing => "dodgerblue",
            ThemeToken::MissileTrail | ThemeToken::MissileOuter => "orangered",
            ThemeToken::MissileInner => "yellow",
            ThemeToken::Background => "white",
            ThemeToken::TextPrimary | ThemeToken::ToolbarText => "#1a1a2e",
            ThemeToken::TextMuted => "#666677",
            ThemeToken::ToolbarBackground | ThemeToken::TableHeaderBackground => "#f0f0f5",
            ThemeToken::TableRowEven => "white",
            ThemeToken::TableRowOdd => "#f5f5f8",
            ThemeToken::TableBorder => "#d2d2dc",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
