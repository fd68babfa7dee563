//! Render target capabilities consumed by the shell.
//!
//! The GUI toolkit lives behind these traits. The shell only ever positions,
//! hides, restyles or swaps the icon of an element whose size it already knows.

use crate::theme::Appearance;

/// Style applied to a side-menu entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleToken {
    Active,
    Inactive,
}

/// Glyph shown by an element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconToken {
    /// Switch in the "on" position
    SwitchEnabled,
    /// Switch in the "off" position
    SwitchDisabled,
}

impl IconToken {
    /// Switch glyph for a toggle value
    pub fn switch(enabled: bool) -> Self {
        if enabled {
            IconToken::SwitchEnabled
        } else {
            IconToken::SwitchDisabled
        }
    }

    /// Asset path relative to the resources directory, per appearance variant
    pub fn asset_path(&self, appearance: Appearance) -> String {
        let name = match self {
            IconToken::SwitchEnabled => "switch_enabled",
            IconToken::SwitchDisabled => "switch_disabled",
        };
        format!("icons/{}/{}.png", appearance.as_str(), name)
    }
}

/// An element that can be placed at absolute coordinates inside its parent
pub trait RenderTarget {
    fn place(&mut self, x: u32, y: u32);
    fn hide(&mut self);
}

/// An element whose colors follow a [`StyleToken`]
pub trait Styled {
    fn set_style(&mut self, style: StyleToken);
}

/// An element displaying a swappable glyph
pub trait IconHolder {
    fn set_icon(&mut self, icon: IconToken);
}

/// Side-menu button
pub trait MenuControl: RenderTarget + Styled {}

impl<T: RenderTarget + Styled> MenuControl for T {}

/// Mini-app card with its toggle switch
pub trait CardControl: RenderTarget + IconHolder {}

impl<T: RenderTarget + IconHolder> CardControl for T {}

/// Render target that only logs what it is asked to do.
///
/// Used by the headless binary, where no toolkit is attached.
#[derive(Debug, Clone)]
pub struct HeadlessTarget {
    name: String,
    appearance: Appearance,
}

impl HeadlessTarget {
    pub fn new(name: impl Into<String>, appearance: Appearance) -> Self {
        Self {
            name: name.into(),
            appearance,
        }
    }
}

impl RenderTarget for HeadlessTarget {
    fn place(&mut self, x: u32, y: u32) {
        ::log::debug!("[{}] place at ({}, {})", self.name, x, y);
    }

    fn hide(&mut self) {
        ::log::debug!("[{}] hide", self.name);
    }
}

impl Styled for HeadlessTarget {
    fn set_style(&mut self, style: StyleToken) {
        ::log::debug!("[{}] style {:?}", self.name, style);
    }
}

impl IconHolder for HeadlessTarget {
    fn set_icon(&mut self, icon: IconToken) {
        ::log::debug!("[{}] icon {}", self.name, icon.asset_path(self.appearance));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_icon_paths_follow_appearance() {
        assert_eq!(
            IconToken::switch(true).asset_path(Appearance::Light),
            "icons/light/switch_enabled.png"
        );
        assert_eq!(
            IconToken::switch(false).asset_path(Appearance::Dark),
            "icons/dark/switch_disabled.png"
        );
    }
}
