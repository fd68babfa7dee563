//! Appearance mode and the pixel constants shared by the shell layout.

use serde::{Deserialize, Serialize};

// Mini-app cards
pub const CARD_WIDTH: u32 = 250;
pub const CARD_MARGIN: u32 = 10;
pub const CARD_GAP: u32 = 10;
pub const COLUMN_GUTTER: u32 = 10;

// Side menu
pub const MENU_ENTRY_X: u32 = 5;
pub const MENU_TOP: u32 = 5;
pub const MENU_ENTRY_STEP: u32 = 40;
pub const MENU_PINNED_Y: u32 = 255;

// Pages sit to the right of the side menu
pub const PAGE_X: u32 = 50;
pub const PAGE_Y: u32 = 0;

/// Light or dark icon/color variant set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}
