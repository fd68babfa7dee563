//! TrayMod Shell - composition root
//!
//! Wires the pieces together:
//! - Pages (Mini-Apps, Themes) registered with the navigation model
//! - Side menu entries bound to those pages
//! - One dashboard card per installed mini-app
//! - Event handling for menu and switch clicks

use std::collections::HashMap;

use traymod_widgets::theme::{PAGE_X, PAGE_Y};
use traymod_widgets::{AppInfo, AppRegistry, CardControl, MenuControl, RenderTarget};

use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::navigation::{NavigationModel, Page, PageId, PageTransition};
use crate::settings::SharedSettingsStore;
use crate::widgets::dashboard::Dashboard;
use crate::widgets::sidebar::{EntryId, MenuSelectionBinding};

// ============================================================================
// PAGE AND MENU IDENTIFIERS
// ============================================================================

pub const MINI_APPS_PAGE: &str = "miniapps";
pub const THEMES_PAGE: &str = "themes";

pub const MINI_APPS_ENTRY: &str = "miniapps";
pub const THEMES_ENTRY: &str = "themes";

/// Input events the shell reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    MenuClicked(EntryId),
    SwitchClicked(String),
}

/// Creates the toolkit elements the shell positions and restyles
pub trait ControlFactory {
    fn page_control(&mut self, page: &Page) -> Box<dyn RenderTarget>;
    fn menu_control(&mut self, entry: &EntryId) -> Box<dyn MenuControl>;
    fn card_control(&mut self, app: &AppInfo) -> Box<dyn CardControl>;
}

/// Registry of every mini-app compiled into this build
pub fn installed_apps() -> AppRegistry {
    #[allow(unused_mut)]
    let mut registry = AppRegistry::new();
    #[cfg(feature = "traymod-bin")]
    {
        use traymod_widgets::MiniApp;
        registry.register(traymod_bin::MiniBinApp::info());
    }
    registry
}

pub struct Shell {
    navigation: NavigationModel,
    menu: MenuSelectionBinding,
    page_controls: HashMap<PageId, Box<dyn RenderTarget>>,
    dashboard: Dashboard,
    app_registry: AppRegistry,
}

impl Shell {
    /// Build the shell with every installed mini-app and open the Mini-Apps page
    pub fn new(
        config: &ShellConfig,
        store: SharedSettingsStore,
        factory: &mut dyn ControlFactory,
    ) -> ShellResult<Self> {
        Self::with_apps(config, store, factory, installed_apps())
    }

    /// Build the shell with an explicit set of mini-apps
    pub fn with_apps(
        config: &ShellConfig,
        store: SharedSettingsStore,
        factory: &mut dyn ControlFactory,
        app_registry: AppRegistry,
    ) -> ShellResult<Self> {
        let mut shell = Self {
            navigation: NavigationModel::new(),
            menu: MenuSelectionBinding::new(config.menu),
            page_controls: HashMap::new(),
            dashboard: Dashboard::new(config.layout, store),
            app_registry,
        };

        shell.add_page(factory, Page::new(MINI_APPS_PAGE, "Mini-Apps"))?;
        shell.add_page(factory, Page::new(THEMES_PAGE, "Themes"))?;

        shell.add_menu_entry(factory, MINI_APPS_ENTRY, MINI_APPS_PAGE, false)?;
        shell.add_menu_entry(factory, THEMES_ENTRY, THEMES_PAGE, true)?;

        for app in shell.app_registry.apps().to_vec() {
            let control = factory.card_control(&app);
            shell.dashboard.add_card(app, control)?;
        }

        shell.select_menu(&EntryId::from(MINI_APPS_ENTRY))?;
        ::log::info!(
            "Shell ready: {} pages, {} mini-apps, content height {}",
            shell.navigation.pages().len(),
            shell.app_registry.len(),
            shell.dashboard.content_height()
        );
        Ok(shell)
    }

    /// Handle one input event.
    ///
    /// Failures are logged and the displayed state stays as it was.
    pub fn handle_event(&mut self, event: ShellEvent) {
        let result = match &event {
            ShellEvent::MenuClicked(entry) => self.select_menu(entry),
            ShellEvent::SwitchClicked(feature) => self.toggle_feature(feature).map(|_| ()),
        };
        if let Err(e) = result {
            ::log::warn!("Ignoring {:?}: {}", event, e);
        }
    }

    /// Open the page behind a menu entry
    pub fn select_menu(&mut self, entry: &EntryId) -> ShellResult<()> {
        let transition = self.menu.select(&mut self.navigation, entry)?;
        self.apply_transition(&transition);
        Ok(())
    }

    /// Flip a mini-app switch, returning the new state
    pub fn toggle_feature(&mut self, feature_key: &str) -> ShellResult<bool> {
        self.dashboard.handle_switch_click(feature_key)
    }

    pub fn navigation(&self) -> &NavigationModel {
        &self.navigation
    }

    pub fn menu(&self) -> &MenuSelectionBinding {
        &self.menu
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Get all registered apps
    pub fn apps(&self) -> &[AppInfo] {
        self.app_registry.apps()
    }

    /// Get app info by ID
    pub fn get_app_info(&self, id: &str) -> Option<&AppInfo> {
        self.app_registry.find_by_id(id)
    }

    fn add_page(&mut self, factory: &mut dyn ControlFactory, page: Page) -> ShellResult<()> {
        let mut control = factory.page_control(&page);
        control.hide();
        let id = page.id.clone();
        self.navigation.register(page)?;
        self.page_controls.insert(id, control);
        Ok(())
    }

    fn add_menu_entry(
        &mut self,
        factory: &mut dyn ControlFactory,
        entry: &str,
        page: &str,
        pinned_to_end: bool,
    ) -> ShellResult<()> {
        let entry = EntryId::from(entry);
        let control = factory.menu_control(&entry);
        self.menu
            .register(entry, PageId::from(page), control, pinned_to_end)?;
        Ok(())
    }

    fn apply_transition(&mut self, transition: &PageTransition) {
        if let Some(hidden) = &transition.hidden {
            if let Some(control) = self.page_controls.get_mut(hidden) {
                control.hide();
            }
        }
        if let Some(control) = self.page_controls.get_mut(&transition.shown) {
            control.place(PAGE_X, PAGE_Y);
        }
    }
}
