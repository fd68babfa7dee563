//! Sidebar - side menu entries bound to pages
//!
//! Each entry pairs a menu button with the page it opens. Selecting an entry
//! activates its page and restyles the whole menu so exactly one entry looks
//! active.

use std::collections::BTreeMap;
use std::fmt;

use traymod_widgets::theme::{MENU_ENTRY_STEP, MENU_ENTRY_X, MENU_PINNED_Y, MENU_TOP};
use traymod_widgets::{MenuControl, Position, StyleToken};

use crate::error::{ShellError, ShellResult};
use crate::navigation::{NavigationModel, PageId, PageTransition};

/// Type-safe menu entry identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where menu buttons go
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuMetrics {
    pub x: u32,
    /// Offset of the first stacked entry
    pub top: u32,
    /// Distance between stacked entries
    pub step: u32,
    /// Fixed offset of entries pinned to the bottom
    pub pinned_y: u32,
}

impl Default for MenuMetrics {
    fn default() -> Self {
        Self {
            x: MENU_ENTRY_X,
            top: MENU_TOP,
            step: MENU_ENTRY_STEP,
            pinned_y: MENU_PINNED_Y,
        }
    }
}

struct MenuEntry {
    page: PageId,
    control: Box<dyn MenuControl>,
    style: StyleToken,
}

pub struct MenuSelectionBinding {
    metrics: MenuMetrics,
    // Keyed by id so restyling never depends on registration order
    entries: BTreeMap<EntryId, MenuEntry>,
    stacked_count: u32,
    selection: Option<EntryId>,
}

impl MenuSelectionBinding {
    pub fn new(metrics: MenuMetrics) -> Self {
        Self {
            metrics,
            entries: BTreeMap::new(),
            stacked_count: 0,
            selection: None,
        }
    }

    /// Bind an entry to a page and place its button.
    ///
    /// Stacked entries go below each other in registration order; pinned
    /// entries sit at the fixed bottom offset and leave the stack untouched.
    pub fn register(
        &mut self,
        id: EntryId,
        page: PageId,
        mut control: Box<dyn MenuControl>,
        pinned_to_end: bool,
    ) -> ShellResult<Position> {
        if self.entries.contains_key(&id) {
            return Err(ShellError::DuplicateMenuEntry(id.to_string()));
        }

        let position = if pinned_to_end {
            Position {
                x: self.metrics.x,
                y: self.metrics.pinned_y,
            }
        } else {
            let y = self.metrics.top + self.metrics.step * self.stacked_count;
            self.stacked_count += 1;
            Position {
                x: self.metrics.x,
                y,
            }
        };

        control.place(position.x, position.y);
        control.set_style(StyleToken::Inactive);
        ::log::debug!("Menu entry '{}' -> page '{}' at y={}", id, page, position.y);

        self.entries.insert(
            id,
            MenuEntry {
                page,
                control,
                style: StyleToken::Inactive,
            },
        );
        Ok(position)
    }

    /// Open the entry's page, then mark it as the only active entry.
    ///
    /// Styles are left untouched when the page cannot be activated.
    pub fn select(
        &mut self,
        nav: &mut NavigationModel,
        id: &EntryId,
    ) -> ShellResult<PageTransition> {
        let page = self
            .entries
            .get(id)
            .map(|entry| entry.page.clone())
            .ok_or_else(|| ShellError::UnknownMenuEntry(id.to_string()))?;

        let transition = nav.activate(&page)?;
        self.selection = Some(id.clone());
        self.apply_selection();
        Ok(transition)
    }

    pub fn selected(&self) -> Option<&EntryId> {
        self.selection.as_ref()
    }

    pub fn style_of(&self, id: &EntryId) -> Option<StyleToken> {
        self.entries.get(id).map(|entry| entry.style)
    }

    pub fn page_of(&self, id: &EntryId) -> Option<&PageId> {
        self.entries.get(id).map(|entry| &entry.page)
    }

    fn apply_selection(&mut self) {
        for (id, entry) in self.entries.iter_mut() {
            let style = if Some(id) == self.selection.as_ref() {
                StyleToken::Active
            } else {
                StyleToken::Inactive
            };
            entry.style = style;
            entry.control.set_style(style);
        }
    }
}

impl Default for MenuSelectionBinding {
    fn default() -> Self {
        Self::new(MenuMetrics::default())
    }
}
