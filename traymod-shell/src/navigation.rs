//! Page registry with a single active page.
//!
//! Visibility is derived from one active index, so observers can never see
//! two pages shown at once, or none once the first page has been activated.

use std::fmt;

use crate::error::{ShellError, ShellResult};

/// Type-safe page identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A full-area view shown exclusively of its siblings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub title: String,
}

impl Page {
    pub fn new(id: impl Into<PageId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// What the render layer has to do after an activation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTransition {
    /// Page to hide, `None` on first activation or when re-activating the same page
    pub hidden: Option<PageId>,
    pub shown: PageId,
}

#[derive(Debug, Default)]
pub struct NavigationModel {
    pages: Vec<Page>,
    active: Option<usize>,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, page: Page) -> ShellResult<()> {
        if self.index_of(&page.id).is_some() {
            return Err(ShellError::DuplicatePage(page.id.to_string()));
        }
        ::log::debug!("Registered page '{}' ({})", page.id, page.title);
        self.pages.push(page);
        Ok(())
    }

    /// Make `id` the only visible page
    pub fn activate(&mut self, id: &PageId) -> ShellResult<PageTransition> {
        let index = self
            .index_of(id)
            .ok_or_else(|| ShellError::UnknownPage(id.to_string()))?;

        let previous = self.active.replace(index);
        let hidden = previous
            .filter(|&prev| prev != index)
            .map(|prev| self.pages[prev].id.clone());

        ::log::info!("Switched to page '{}'", id);
        Ok(PageTransition {
            hidden,
            shown: id.clone(),
        })
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.active.map(|index| &self.pages[index])
    }

    pub fn is_visible(&self, id: &PageId) -> bool {
        self.active_page().is_some_and(|page| &page.id == id)
    }

    /// Registered pages in registration order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.index_of(id).map(|index| &self.pages[index])
    }

    fn index_of(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|page| &page.id == id)
    }
}
