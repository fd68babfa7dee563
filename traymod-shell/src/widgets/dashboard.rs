//! Dashboard - the Mini-Apps page
//!
//! Holds one card per installed mini-app, stacked in two columns, each with a
//! switch that enables or disables the app in the persisted settings.

use traymod_widgets::{
    AppInfo, Card, CardControl, ColumnStackLayout, IconToken, LayoutMetrics, Placement,
};

use crate::error::{ShellError, ShellResult};
use crate::settings::{SharedSettingsStore, ToggleController};

struct MiniAppCard {
    info: AppInfo,
    control: Box<dyn CardControl>,
    placement: Placement,
}

pub struct Dashboard {
    layout: ColumnStackLayout,
    toggles: ToggleController,
    cards: Vec<MiniAppCard>,
}

impl Dashboard {
    pub fn new(metrics: LayoutMetrics, store: SharedSettingsStore) -> Self {
        Self {
            layout: ColumnStackLayout::new(metrics),
            toggles: ToggleController::new(store),
            cards: Vec::new(),
        }
    }

    /// Add a card for an app, showing its persisted switch state.
    ///
    /// The card is not added when its switch cannot be read.
    pub fn add_card(
        &mut self,
        info: AppInfo,
        mut control: Box<dyn CardControl>,
    ) -> ShellResult<Placement> {
        if self.cards.iter().any(|card| card.info.id == info.id) {
            return Err(ShellError::DuplicateCard(info.id.to_string()));
        }

        let enabled = self.toggles.initialize(info.id)?;
        control.set_icon(IconToken::switch(enabled));

        let placement = self.layout.place_next(&Card::new(info.id, info.card_height));
        control.place(placement.position.x, placement.position.y);

        ::log::info!(
            "Added card '{}' ({}) in column {}",
            info.name,
            info.icon_path(),
            placement.column
        );
        self.cards.push(MiniAppCard {
            info,
            control,
            placement,
        });
        Ok(placement)
    }

    /// Flip an app's switch and swap the switch glyph to match
    pub fn handle_switch_click(&mut self, feature_key: &str) -> ShellResult<bool> {
        let enabled = self.toggles.flip(feature_key)?;
        if let Some(card) = self.cards.iter_mut().find(|card| card.info.id == feature_key) {
            card.control.set_icon(IconToken::switch(enabled));
        }
        Ok(enabled)
    }

    /// Height of the scrollable area holding the cards
    pub fn content_height(&self) -> u32 {
        self.layout.total_height()
    }

    /// Lay every card out again from scratch, in the order they were added
    pub fn rebuild(&mut self) {
        self.layout.reset();
        for card in &mut self.cards {
            card.placement = self
                .layout
                .place_next(&Card::new(card.info.id, card.info.card_height));
            card.control
                .place(card.placement.position.x, card.placement.position.y);
        }
        ::log::debug!("Rebuilt dashboard, content height {}", self.content_height());
    }

    pub fn placement_of(&self, feature_key: &str) -> Option<Placement> {
        self.cards
            .iter()
            .find(|card| card.info.id == feature_key)
            .map(|card| card.placement)
    }

    pub fn is_enabled(&self, feature_key: &str) -> Option<bool> {
        self.toggles.display_state(feature_key)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}
