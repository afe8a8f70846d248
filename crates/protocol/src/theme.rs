use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    TileBlank,
    TileDanger,
    TileShield,
    TileGold1,
    TileGold2,
    TileGold3,
    TileGold4,
    TileGold5,
    TileGold6,
    TileBorder,
    TileLabel,

    TreasureFill,
    TreasureLabel,

    PlayerAlive,
    PlayerDead,
    PlayerBorder,
    PlayerLabel,
    ShieldRing,

    MissileTrail,
    MissileOuter,
    MissileInner,
    MissileBorder,

    Background,
    TextPrimary,
    TextMuted,

    // Toolbar / status chrome
    ToolbarBackground,
    ToolbarText,

    // Player table
    TableRowEven,
    TableRowOdd,
    TableHeaderBackground,
    TableBorder,
}

impl ThemeToken {
    /// Gold-tier fill, brightest at 1 and darkest at 6. Out-of-range tiers
    /// clamp to the nearest shade.
    pub fn gold(tier: u8) -> Self {
        match tier {
            0 | 1 => Self::TileGold1,
            2 => Self::TileGold2,
            3 => Self::TileGold3,
            4 => Self::TileGold4,
            5 => Self::TileGold5,
            _ => Self::TileGold6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gold_tiers_are_distinct() {
        let shades: Vec<ThemeToken> = (1..=6).map(ThemeToken::gold).collect();
        for (i, a) in shades.iter().enumerate() {
            for b in &shades[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn gold_clamps_out_of_range() {
        assert_eq!(ThemeToken::gold(0), ThemeToken::TileGold1);
        assert_eq!(ThemeToken::gold(9), ThemeToken::TileGold6);
        assert_eq!(ThemeToken::gold(255), ThemeToken::TileGold6);
    }
}
