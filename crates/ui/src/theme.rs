use hexplay_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Catppuccin Mocha base with the gold ramp dimmed to sit on dark tiles
    use ThemeToken::*;
    match token {
        TileBlank => ResolvedColor::rgb(0x31, 0x32, 0x44), // Surface0
        TileDanger => ResolvedColor::rgb(0xf3, 0x8b, 0xa8), // Red
        TileShield => ResolvedColor::rgb(0x74, 0xc7, 0xec), // Sapphire
        TileGold1 => ResolvedColor::rgb(0xf9, 0xe2, 0xaf), // Yellow
        TileGold2 => ResolvedColor::rgb(0xef, 0xd4, 0x9a),
        TileGold3 => ResolvedColor::rgb(0xe5, 0xc6, 0x85),
        TileGold4 => ResolvedColor::rgb(0xdb, 0xb8, 0x70),
        TileGold5 => ResolvedColor::rgb(0xd1, 0xaa, 0x5b),
        TileGold6 => ResolvedColor::rgb(0xc7, 0x9c, 0x46),
        TileBorder => ResolvedColor::rgb(0x11, 0x11, 0x1b), // Crust
        TileLabel => ResolvedColor::rgb(0x11, 0x11, 0x1b),

        TreasureFill => ResolvedColor::rgb(0xf9, 0xe2, 0xaf),
        TreasureLabel => ResolvedColor::rgb(0x11, 0x11, 0x1b),

        PlayerAlive => ResolvedColor::rgb(0xa6, 0xe3, 0xa1), // Green
        PlayerDead => ResolvedColor::rgb(0x6c, 0x70, 0x86),  // Overlay0
        PlayerBorder => ResolvedColor::rgb(0x11, 0x11, 0x1b),
        PlayerLabel => ResolvedColor::rgb(0x11, 0x11, 0x1b),
        ShieldRing => ResolvedColor::rgb(0x89, 0xb4, 0xfa), // Blue

        MissileTrail => ResolvedColor::rgb(0xfa, 0xb3, 0x87), // Peach
        MissileOuter => ResolvedColor::rgb(0xfa, 0xb3, 0x87),
        MissileInner => ResolvedColor::rgb(0xf9, 0xe2, 0xaf),
        MissileBorder => ResolvedColor::rgb(0x11, 0x11, 0x1b),

        Background => ResolvedColor::rgb(0x11, 0x11, 0x1b),
        TextPrimary => ResolvedColor::rgb(0xcd, 0xd6, 0xf4), // Text
        TextMuted => ResolvedColor::rgb(0xa6, 0xad, 0xc8),   // Subtext0

        ToolbarBackground => ResolvedColor::rgb(0x18, 0x18, 0x25), // Mantle
        ToolbarText => ResolvedColor::rgb(0xcd, 0xd6, 0xf4),

        TableRowEven => ResolvedColor::rgb(0x1e, 0x1e, 0x2e), // Base
        TableRowOdd => ResolvedColor::rgb(0x18, 0x18, 0x25),
        TableHeaderBackground => ResolvedColor::rgb(0x31, 0x32, 0x44),
        TableBorder => ResolvedColor::rgb(0x45, 0x47, 0x5a), // Surface1
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    // The original viewer's canvas palette
    use ThemeToken::*;
    match token {
        TileBlank => ResolvedColor::rgb(255, 255, 255),
        TileDanger => ResolvedColor::rgb(255, 0, 0),    // red
        TileShield => ResolvedColor::rgb(135, 206, 235), // skyblue
        TileGold1 => ResolvedColor::rgb(0xFF, 0xFF, 0x66),
        TileGold2 => ResolvedColor::rgb(0xFF, 0xFF, 0x44),
        TileGold3 => ResolvedColor::rgb(0xFF, 0xFF, 0x22),
        TileGold4 => ResolvedColor::rgb(0xFF, 0xFF, 0x00),
        TileGold5 => ResolvedColor::rgb(0xFF, 0xEE, 0x00),
        TileGold6 => ResolvedColor::rgb(0xFF, 0xDD, 0x00),
        TileBorder => ResolvedColor::rgb(0, 0, 0),
        TileLabel => ResolvedColor::rgb(0, 0, 0),

        TreasureFill => ResolvedColor::rgb(255, 215, 0), // gold
        TreasureLabel => ResolvedColor::rgb(0, 0, 0),

        PlayerAlive => ResolvedColor::rgb(50, 205, 50), // limegreen
        PlayerDead => ResolvedColor::rgb(128, 128, 128), // gray
        PlayerBorder => ResolvedColor::rgb(0, 0, 0),
        PlayerLabel => ResolvedColor::rgb(0, 0, 0),
        ShieldRing => ResolvedColor::rgb(30, 144, 255), // dodgerblue

        MissileTrail => ResolvedColor::rgb(255, 69, 0), // orangered
        MissileOuter => ResolvedColor::rgb(255, 69, 0),
        MissileInner => ResolvedColor::rgb(255, 255, 0), // yellow
        MissileBorder => ResolvedColor::rgb(0, 0, 0),

        Background => ResolvedColor::rgb(255, 255, 255),
        TextPrimary => ResolvedColor::rgb(20, 20, 30),
        TextMuted => ResolvedColor::rgb(100, 100, 110),

        ToolbarBackground => ResolvedColor::rgb(248, 248, 250),
        ToolbarText => ResolvedColor::rgb(40, 40, 50),

        TableRowEven => ResolvedColor::rgb(255, 255, 255),
        TableRowOdd => ResolvedColor::rgb(245, 245, 248),
        TableHeaderBackground => ResolvedColor::rgb(235, 235, 240),
        TableBorder => ResolvedColor::rgb(210, 210, 220),
    }
}

/// Dark visuals for egui widgets, matched to the dark token palette.
pub fn hexplay_dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = egui::Color32::from_rgb(0x18, 0x18, 0x25);
    v.window_fill = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.extreme_bg_color = egui::Color32::from_rgb(0x11, 0x11, 0x1b);
    v.widgets.noninteractive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0xba, 0xc2, 0xde));
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(0x45, 0x47, 0x5a);
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(0x58, 0x5b, 0x70);
    v.widgets.active.bg_fill = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0x89, 0xb4, 0xfa, 60);
    v.error_fg_color = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);
    v
}

/// Light visuals matched to the original viewer's white canvas.
pub fn hexplay_light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = egui::Color32::from_rgb(248, 248, 250);
    v.window_fill = egui::Color32::WHITE;
    v.extreme_bg_color = egui::Color32::WHITE;
    v.widgets.active.bg_fill = egui::Color32::from_rgb(30, 144, 255);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(30, 144, 255, 50);
    v.error_fg_color = egui::Color32::from_rgb(211, 47, 47);
    v
}
