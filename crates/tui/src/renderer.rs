use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hexplay_core::model::Replay;
use hexplay_core::scene;
use hexplay_core::viewport::ViewportController;
use hexplay_protocol::{RenderCommand, ThemeToken, Viewport};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};

/// Logical pixels represented by one terminal cell. Cells are roughly
/// twice as tall as they are wide, so the vertical step is doubled to keep
/// hexagons from looking squashed.
const COL_PX: f64 = 12.0;
const ROW_PX: f64 = 24.0;

const PAN_STEP_PX: f64 = 36.0;

fn theme_to_color(token: &ThemeToken) -> Color {
    match token {
        ThemeToken::TileBlank => Color::DarkGray,
        ThemeToken::TileDanger => Color::Red,
        ThemeToken::TileShield => Color::Cyan,
        ThemeToken::TileGold1 | ThemeToken::TileGold2 | ThemeToken::TileGold3 => Color::LightYellow,
        ThemeToken::TileGold4 | ThemeToken::TileGold5 | ThemeToken::TileGold6 => Color::Yellow,
        ThemeToken::TileBorder | ThemeToken::PlayerBorder | ThemeToken::MissileBorder => {
            Color::Black
        }
        ThemeToken::TileLabel | ThemeToken::TreasureLabel | ThemeToken::PlayerLabel => Color::White,
        ThemeToken::TreasureFill => Color::Yellow,
        ThemeToken::PlayerAlive => Color::Green,
        ThemeToken::PlayerDead => Color::Gray,
        ThemeToken::ShieldRing => Color::LightBlue,
        ThemeToken::MissileTrail | ThemeToken::MissileOuter => Color::LightRed,
        ThemeToken::MissileInner => Color::LightYellow,
        ThemeToken::Background => Color::Black,
        ThemeToken::TextPrimary | ThemeToken::ToolbarText => Color::White,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::ToolbarBackground | ThemeToken::TableHeaderBackground => Color::DarkGray,
        ThemeToken::TableRowEven => Color::Black,
        ThemeToken::TableRowOdd => Color::Rgb(20, 20, 20),
        ThemeToken::TableBorder => Color::DarkGray,
    }
}

/// Centroid of a command's footprint, if it occupies a point on screen.
fn command_anchor(cmd: &RenderCommand) -> Option<(f64, f64)> {
    match cmd {
        RenderCommand::DrawPolygon { points, .. } => {
            if points.is_empty() {
                return None;
            }
            let n = points.len() as f64;
            let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
            let cy = points.iter().map(|p| p.y).sum::<f64>() / n;
            Some((cx, cy))
        }
        RenderCommand::DrawCircle { center, .. } => Some((center.x, center.y)),
        _ => None,
    }
}

pub fn run(mut replay: Replay) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut viewport_ctl = ViewportController::new();

    loop {
        let term_size = terminal.size()?;
        let content_rows = term_size.height.saturating_sub(1);
        let viewport = Viewport::new(
            f64::from(term_size.width) * COL_PX,
            f64::from(content_rows) * ROW_PX,
        );

        let commands = scene::render_scene(replay.current(), viewport_ctl.transform(), &viewport);
        let status = scene::status_line(replay.current(), replay.position(), replay.len());

        terminal.draw(|frame| {
            let area = frame.area();

            // Header: status line + key help
            let header_area = Rect::new(0, 0, area.width, 1);
            let header = Block::default()
                .title(format!(
                    " hexplay — {status} | ←→ step | wasd pan | +/- zoom | q quit ",
                ))
                .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(header, header_area);

            let content_area = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
            let block = Block::default()
                .borders(Borders::NONE)
                .style(Style::default().bg(Color::Black));
            frame.render_widget(block, content_area);

            for cmd in &commands {
                let Some((px, py)) = command_anchor(cmd) else {
                    continue;
                };
                let col = px / COL_PX;
                let row = py / ROW_PX;
                if col < 0.0 || row < 0.0 {
                    continue;
                }
                let col = col as u16;
                let row = row as u16;
                if row >= content_area.height || col >= content_area.width {
                    continue;
                }

                let (glyph, fg): (String, Color) = match cmd {
                    RenderCommand::DrawPolygon { fill, label, .. } => {
                        let text = match label {
                            Some(l) => l.clone(),
                            None => "·".to_string(),
                        };
                        (text, theme_to_color(fill))
                    }
                    RenderCommand::DrawCircle { fill, label, .. } => {
                        let text = match label {
                            Some(l) => l.clone(),
                            None => "●".to_string(),
                        };
                        (text, theme_to_color(fill))
                    }
                    _ => continue,
                };

                // Center multi-character labels on the anchor cell
                let start = col.saturating_sub(glyph.chars().count() as u16 / 2);
                let buf = frame.buffer_mut();
                for (i, ch) in glyph.chars().enumerate() {
                    let x = content_area.x + start + i as u16;
                    let y = content_area.y + row;
                    if x < content_area.x + content_area.width
                        && y < content_area.y + content_area.height
                    {
                        buf[(x, y)].set_char(ch).set_fg(fg).set_bg(Color::Black);
                    }
                }
            }
        })?;

        // Handle input
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Left | KeyCode::Char('p') => {
                        replay.previous();
                    }
                    KeyCode::Right | KeyCode::Char('n') => {
                        replay.next();
                    }
                    KeyCode::Char('a') => viewport_ctl.pan_by(PAN_STEP_PX, 0.0),
                    KeyCode::Char('d') => viewport_ctl.pan_by(-PAN_STEP_PX, 0.0),
                    KeyCode::Char('w') => viewport_ctl.pan_by(0.0, PAN_STEP_PX),
                    KeyCode::Char('s') => viewport_ctl.pan_by(0.0, -PAN_STEP_PX),
                    KeyCode::Char('+') | KeyCode::Char('=') => viewport_ctl.zoom_in(),
                    KeyCode::Char('-') => viewport_ctl.zoom_out(),
                    KeyCode::Char('0') => viewport_ctl.reset(),
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
