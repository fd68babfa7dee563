//! TrayMod - headless shell runner
//!
//! Builds the shell against the real settings file with logging render
//! targets, so the layout and switch states can be inspected from the log.

use anyhow::{Context, Result};
use traymod_shell::settings::{self, SettingsStore};
use traymod_shell::{
    installed_apps, ControlFactory, EntryId, Page, SettingsDocument, Shell, ShellConfig,
    ShellError,
};
use traymod_widgets::{AppInfo, Appearance, CardControl, HeadlessTarget, MenuControl, RenderTarget};

struct HeadlessFactory {
    appearance: Appearance,
}

impl ControlFactory for HeadlessFactory {
    fn page_control(&mut self, page: &Page) -> Box<dyn RenderTarget> {
        Box::new(HeadlessTarget::new(format!("page:{}", page.id), self.appearance))
    }

    fn menu_control(&mut self, entry: &EntryId) -> Box<dyn MenuControl> {
        Box::new(HeadlessTarget::new(format!("menu:{entry}"), self.appearance))
    }

    fn card_control(&mut self, app: &AppInfo) -> Box<dyn CardControl> {
        Box::new(HeadlessTarget::new(format!("card:{}", app.id), self.appearance))
    }
}

/// Load the settings document, writing a default one on first run
fn load_or_seed(store: &SettingsStore) -> Result<SettingsDocument> {
    match store.load() {
        Ok(doc) => Ok(doc),
        Err(ShellError::StoreMissing { path }) => {
            ::log::info!("No settings at {}, writing defaults", path.display());
            let registry = installed_apps();
            let doc = SettingsDocument::seed(registry.apps().iter().map(|app| app.id));
            store.save(&doc).context("Failed to write default settings")?;
            Ok(doc)
        }
        Err(e) => Err(e).context("Failed to load settings"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShellConfig::resolve();
    ::log::info!("Using settings at {}", config.settings_path.display());

    let store = SettingsStore::open(&config.settings_path);
    let doc = load_or_seed(&store)?;

    let mut factory = HeadlessFactory {
        appearance: doc.appearance(),
    };
    let shell = Shell::new(&config, settings::shared(store), &mut factory)
        .context("Failed to build shell")?;

    if let Some(page) = shell.navigation().active_page() {
        ::log::info!("Active page: {}", page.title);
    }
    for app in shell.apps() {
        let state = match shell.dashboard().is_enabled(app.id) {
            Some(true) => "enabled",
            Some(false) => "disabled",
            None => "unknown",
        };
        ::log::info!("{} is {}", app.name, state);
    }

    Ok(())
}
