use eframe::egui;
use hexplay_core::model::Replay;
use hexplay_core::parser;
use hexplay_core::scene;
use hexplay_core::viewport::ViewportController;
use hexplay_protocol::{Point, ThemeToken, Viewport};

use crate::renderer;
use crate::theme::{self, ThemeMode};

/// Main application state.
pub struct HexplayApp {
    /// The loaded replay, if any. A failed load never touches this.
    replay: Option<Replay>,
    /// Pan/zoom state. Deliberately survives replay reloads and navigation.
    viewport: ViewportController,
    theme_mode: ThemeMode,
    /// Load error to display in the status bar.
    error: Option<String>,
}

impl HexplayApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(theme::hexplay_dark_visuals());
        Self {
            replay: None,
            viewport: ViewportController::new(),
            theme_mode: ThemeMode::Dark,
            error: None,
        }
    }

    /// Parse and install a replay. On failure the previous replay (and its
    /// cursor) stay as they were; only the error display changes.
    fn load_replay(&mut self, data: &[u8]) {
        match parser::parse_replay(data) {
            Ok(replay) => {
                self.replay = Some(replay);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(format!("Failed to load replay: {e}"));
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Replay", &["json"])
            .pick_file()
        {
            match std::fs::read(&path) {
                Ok(data) => self.load_replay(&data),
                Err(e) => {
                    self.error = Some(format!("Failed to read file: {e}"));
                }
            }
        }
    }

    /// Export the current snapshot as a standalone SVG, under the current
    /// view transform and theme.
    #[cfg(not(target_arch = "wasm32"))]
    fn export_svg(&mut self) {
        let Some(replay) = &self.replay else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .save_file()
        {
            let viewport = Viewport::new(800.0, 600.0);
            let commands =
                scene::render_scene(replay.current(), self.viewport.transform(), &viewport);
            let svg = hexplay_core::svg::render_svg(
                &commands,
                viewport.width,
                viewport.height,
                self.theme_mode == ThemeMode::Dark,
            );
            if let Err(e) = std::fs::write(&path, svg) {
                self.error = Some(format!("Failed to write SVG: {e}"));
            }
        }
    }
}

impl eframe::App for HexplayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard navigation works regardless of pointer focus.
        let (step_back, step_forward, reset_view) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Num0),
            )
        });
        if let Some(replay) = &mut self.replay {
            if step_back {
                replay.previous();
            }
            if step_forward {
                replay.next();
            }
        }
        if reset_view {
            self.viewport.reset();
        }

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("⬡ hexplay");
                ui.separator();

                #[cfg(not(target_arch = "wasm32"))]
                if ui.button("📂 Open").clicked() {
                    self.open_file_dialog();
                }

                #[cfg(not(target_arch = "wasm32"))]
                if self.replay.is_some() && ui.button("💾 SVG").clicked() {
                    self.export_svg();
                }

                if let Some(replay) = &mut self.replay {
                    let at_start = replay.at_start();
                    let at_end = replay.at_end();
                    if ui
                        .add_enabled(!at_start, egui::Button::new("⏴ Prev"))
                        .clicked()
                    {
                        replay.previous();
                    }
                    if ui
                        .add_enabled(!at_end, egui::Button::new("Next ⏵"))
                        .clicked()
                    {
                        replay.next();
                    }
                }

                ui.separator();

                let theme_label = match self.theme_mode {
                    ThemeMode::Dark => "🌙 Dark",
                    ThemeMode::Light => "☀ Light",
                };
                if ui.button(theme_label).clicked() {
                    self.theme_mode = match self.theme_mode {
                        ThemeMode::Dark => {
                            ctx.set_visuals(theme::hexplay_light_visuals());
                            ThemeMode::Light
                        }
                        ThemeMode::Light => {
                            ctx.set_visuals(theme::hexplay_dark_visuals());
                            ThemeMode::Dark
                        }
                    };
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let zoom_pct = self.viewport.transform().scale * 100.0;
                    ui.label(format!("{zoom_pct:.0}%"));
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                } else if let Some(replay) = &self.replay {
                    ui.label(scene::status_line(
                        replay.current(),
                        replay.position(),
                        replay.len(),
                    ));
                } else {
                    ui.label("No replay loaded — click Open or drag & drop a replay JSON");
                }
            });
        });

        // Player table
        if self.replay.is_some() {
            egui::SidePanel::right("players")
                .default_width(180.0)
                .show(ctx, |ui| {
                    ui.heading("Players");
                    ui.separator();
                    let Some(replay) = &self.replay else {
                        return;
                    };
                    let muted = theme::resolve(ThemeToken::TextMuted, self.theme_mode);
                    egui::Grid::new("players_grid")
                        .num_columns(3)
                        .striped(true)
                        .show(ui, |ui| {
                            ui.strong("#");
                            ui.strong("Points");
                            ui.strong("Missiles");
                            ui.end_row();
                            for (index, player) in replay.current().players.iter().enumerate() {
                                if player.alive {
                                    ui.label(format!("{}", index + 1));
                                    ui.label(player.points.to_string());
                                    ui.label(player.missiles.to_string());
                                } else {
                                    ui.colored_label(muted, format!("{}", index + 1));
                                    ui.colored_label(muted, player.points.to_string());
                                    ui.colored_label(muted, player.missiles.to_string());
                                }
                                ui.end_row();
                            }
                        });
                });
        }

        // Central panel: the hex canvas
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.replay.is_none() {
                // Welcome screen
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(ui.available_height() / 3.0);
                        ui.heading("⬡");
                        ui.heading("Drop a replay here or click Open");
                        ui.label("A replay is a JSON array of game state snapshots");
                    });
                });
                return;
            }

            let available = ui.available_rect_before_wrap();
            let response = ui
                .allocate_rect(available, egui::Sense::click_and_drag())
                .on_hover_cursor(egui::CursorIcon::Grab);

            // Pan
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    self.viewport
                        .begin_drag(Point::new(f64::from(pos.x), f64::from(pos.y)));
                }
            }
            if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    self.viewport
                        .drag_to(Point::new(f64::from(pos.x), f64::from(pos.y)));
                }
                ctx.output_mut(|o| o.cursor_icon = egui::CursorIcon::Grabbing);
            }
            if response.drag_stopped() {
                self.viewport.end_drag();
            }

            // Wheel zoom: one fixed step per wheel event, by scroll direction.
            // smooth_scroll_delta is zeroed by egui while ctrl+scroll is being
            // folded into zoom_delta, so the two paths never double-apply.
            if response.hovered() {
                let scroll_y = ui.input(|i| i.smooth_scroll_delta.y);
                if scroll_y > 0.1 {
                    self.viewport.zoom_in();
                } else if scroll_y < -0.1 {
                    self.viewport.zoom_out();
                }

                // Pinch zoom (trackpad / touch) is already delivered as an
                // incremental factor, matching the controller's semantics.
                let zoom_delta = ui.input(|i| i.zoom_delta());
                if (zoom_delta - 1.0).abs() > 0.001 {
                    self.viewport.apply_zoom_factor(f64::from(zoom_delta));
                }
            }

            // Paint the scene
            let painter = ui.painter_at(available);
            painter.rect_filled(
                available,
                egui::CornerRadius::ZERO,
                theme::resolve(ThemeToken::Background, self.theme_mode),
            );

            if let Some(replay) = &self.replay {
                let viewport = Viewport {
                    width: f64::from(available.width()),
                    height: f64::from(available.height()),
                    dpr: f64::from(ctx.pixels_per_point()),
                };
                let commands =
                    scene::render_scene(replay.current(), self.viewport.transform(), &viewport);
                renderer::render_commands(&painter, &commands, available.min, self.theme_mode);
            }
        });

        // Handle file drop: bytes on web, a path on native.
        let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned());
        if let Some(file) = dropped {
            if let Some(bytes) = &file.bytes {
                let data: Vec<u8> = bytes.to_vec();
                self.load_replay(&data);
            } else {
                #[cfg(not(target_arch = "wasm32"))]
                if let Some(path) = &file.path {
                    match std::fs::read(path) {
                        Ok(data) => self.load_replay(&data),
                        Err(e) => {
                            self.error = Some(format!("Failed to read file: {e}"));
                        }
                    }
                }
            }
        }
    }
}
