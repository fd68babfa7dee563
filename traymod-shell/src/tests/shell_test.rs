use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use traymod_widgets::{
    AppInfo, AppRegistry, CardControl, IconHolder, IconToken, MenuControl, Position,
    RenderTarget, StyleToken, Styled,
};

use crate::app::{ControlFactory, Shell, ShellEvent, MINI_APPS_ENTRY, THEMES_ENTRY};
use crate::config::ShellConfig;
use crate::navigation::{Page, PageId};
use crate::settings::{shared, MemoryStorage, SettingsDocument, SettingsStore};
use crate::widgets::sidebar::EntryId;
use crate::ShellError;

const PATH: &str = "settings.json";

#[derive(Debug, Default, Clone)]
struct Element {
    position: Option<Position>,
    visible: bool,
    style: Option<StyleToken>,
    icon: Option<IconToken>,
}

type Screen = Rc<RefCell<HashMap<String, Element>>>;

struct FakeElement {
    name: String,
    screen: Screen,
}

impl FakeElement {
    fn update(&self, f: impl FnOnce(&mut Element)) {
        f(self.screen.borrow_mut().entry(self.name.clone()).or_default());
    }
}

impl RenderTarget for FakeElement {
    fn place(&mut self, x: u32, y: u32) {
        self.update(|e| {
            e.position = Some(Position { x, y });
            e.visible = true;
        });
    }

    fn hide(&mut self) {
        self.update(|e| e.visible = false);
    }
}

impl Styled for FakeElement {
    fn set_style(&mut self, style: StyleToken) {
        self.update(|e| e.style = Some(style));
    }
}

impl IconHolder for FakeElement {
    fn set_icon(&mut self, icon: IconToken) {
        self.update(|e| e.icon = Some(icon));
    }
}

#[derive(Default)]
struct FakeFactory {
    screen: Screen,
}

impl FakeFactory {
    fn element(&self, name: String) -> FakeElement {
        FakeElement {
            name,
            screen: self.screen.clone(),
        }
    }

    fn get(&self, name: &str) -> Element {
        self.screen.borrow().get(name).cloned().unwrap_or_default()
    }
}

impl ControlFactory for FakeFactory {
    fn page_control(&mut self, page: &Page) -> Box<dyn RenderTarget> {
        Box::new(self.element(format!("page:{}", page.id)))
    }

    fn menu_control(&mut self, entry: &EntryId) -> Box<dyn MenuControl> {
        Box::new(self.element(format!("menu:{entry}")))
    }

    fn card_control(&mut self, app: &AppInfo) -> Box<dyn CardControl> {
        Box::new(self.element(format!("card:{}", app.id)))
    }
}

fn app(id: &'static str, card_height: u32) -> AppInfo {
    AppInfo {
        name: id,
        id,
        icon: id,
        card_height,
    }
}

fn registry(apps: &[AppInfo]) -> AppRegistry {
    let mut registry = AppRegistry::new();
    for info in apps {
        registry.register(info.clone());
    }
    registry
}

fn build(doc: &str, apps: &[AppInfo]) -> (Shell, FakeFactory, Arc<MemoryStorage>) {
    let memory = Arc::new(MemoryStorage::with_file(PATH, doc));
    let store = shared(SettingsStore::new(memory.clone(), PATH));
    let mut factory = FakeFactory::default();
    let shell = Shell::with_apps(
        &ShellConfig::with_settings_path(PATH),
        store,
        &mut factory,
        registry(apps),
    )
    .unwrap();
    (shell, factory, memory)
}

fn persisted(memory: &MemoryStorage, key: &str) -> Option<bool> {
    SettingsDocument::parse(&memory.contents(Path::new(PATH))?)
        .ok()?
        .feature_switch(key)
}

const THREE_APPS: &str = r#"{
    "mini_apps": {
        "bin": {"switch_active": true},
        "clock": {"switch_active": false},
        "notes": {"switch_active": true}
    }
}"#;

#[test]
fn test_startup_opens_mini_apps_page() {
    let (shell, factory, _memory) = build(THREE_APPS, &[app("bin", 115)]);

    assert_eq!(
        shell.navigation().active_page().map(|p| p.title.as_str()),
        Some("Mini-Apps")
    );
    assert!(factory.get("page:miniapps").visible);
    assert_eq!(factory.get("page:miniapps").position, Some(Position { x: 50, y: 0 }));
    assert!(!factory.get("page:themes").visible);

    assert_eq!(factory.get("menu:miniapps").position, Some(Position { x: 5, y: 5 }));
    assert_eq!(factory.get("menu:themes").position, Some(Position { x: 5, y: 255 }));
    assert_eq!(factory.get("menu:miniapps").style, Some(StyleToken::Active));
    assert_eq!(factory.get("menu:themes").style, Some(StyleToken::Inactive));
}

#[test]
fn test_menu_clicks_switch_pages_exclusively() {
    let (mut shell, factory, _memory) = build(THREE_APPS, &[app("bin", 115)]);

    shell.handle_event(ShellEvent::MenuClicked(THEMES_ENTRY.into()));
    assert_eq!(
        shell.navigation().active_page().map(|p| p.id.clone()),
        Some(PageId::from("themes"))
    );
    assert!(factory.get("page:themes").visible);
    assert!(!factory.get("page:miniapps").visible);
    assert_eq!(factory.get("menu:themes").style, Some(StyleToken::Active));
    assert_eq!(factory.get("menu:miniapps").style, Some(StyleToken::Inactive));

    shell.handle_event(ShellEvent::MenuClicked(MINI_APPS_ENTRY.into()));
    assert!(factory.get("page:miniapps").visible);
    assert!(!factory.get("page:themes").visible);
    assert_eq!(shell.menu().selected(), Some(&EntryId::from(MINI_APPS_ENTRY)));
}

#[test]
fn test_cards_follow_registration_order() {
    let apps = [app("bin", 115), app("clock", 80), app("notes", 60)];
    let (shell, factory, _memory) = build(THREE_APPS, &apps);

    assert_eq!(factory.get("card:bin").position, Some(Position { x: 0, y: 10 }));
    assert_eq!(factory.get("card:clock").position, Some(Position { x: 260, y: 10 }));
    assert_eq!(factory.get("card:notes").position, Some(Position { x: 0, y: 135 }));
    assert_eq!(shell.dashboard().content_height(), 205);

    assert_eq!(factory.get("card:bin").icon, Some(IconToken::SwitchEnabled));
    assert_eq!(factory.get("card:clock").icon, Some(IconToken::SwitchDisabled));
    assert_eq!(shell.get_app_info("clock").map(|a| a.card_height), Some(80));
}

#[test]
fn test_switch_click_persists_and_swaps_icon() {
    let (mut shell, factory, memory) = build(THREE_APPS, &[app("bin", 115), app("clock", 80)]);

    shell.handle_event(ShellEvent::SwitchClicked("bin".to_string()));
    assert_eq!(persisted(&memory, "bin"), Some(false));
    assert_eq!(shell.dashboard().is_enabled("bin"), Some(false));
    assert_eq!(factory.get("card:bin").icon, Some(IconToken::SwitchDisabled));

    assert!(shell.toggle_feature("clock").unwrap());
    assert_eq!(persisted(&memory, "clock"), Some(true));
    assert_eq!(persisted(&memory, "bin"), Some(false));
    assert_eq!(persisted(&memory, "notes"), Some(true));
}

#[test]
fn test_failed_events_leave_state_unchanged() {
    let (mut shell, factory, memory) = build(THREE_APPS, &[app("bin", 115)]);

    shell.handle_event(ShellEvent::MenuClicked("settings".into()));
    assert_eq!(
        shell.navigation().active_page().map(|p| p.id.as_str()),
        Some("miniapps")
    );
    assert_eq!(factory.get("menu:miniapps").style, Some(StyleToken::Active));

    shell.handle_event(ShellEvent::SwitchClicked("weather".to_string()));
    assert_eq!(persisted(&memory, "bin"), Some(true));
    assert_eq!(shell.dashboard().is_enabled("bin"), Some(true));

    assert!(matches!(
        shell.toggle_feature("weather"),
        Err(ShellError::FeatureUnknown(_))
    ));
}

#[test]
fn test_startup_fails_for_unknown_feature() {
    let memory = Arc::new(MemoryStorage::with_file(PATH, r#"{"mini_apps": {}}"#));
    let store = shared(SettingsStore::new(memory, PATH));
    let mut factory = FakeFactory::default();

    let result = Shell::with_apps(
        &ShellConfig::with_settings_path(PATH),
        store,
        &mut factory,
        registry(&[app("bin", 115)]),
    );
    assert!(matches!(result, Err(ShellError::FeatureUnknown(_))));
}

#[test]
fn test_startup_fails_without_settings() {
    let store = shared(SettingsStore::new(MemoryStorage::new(), PATH));
    let mut factory = FakeFactory::default();

    let result = Shell::with_apps(
        &ShellConfig::with_settings_path(PATH),
        store,
        &mut factory,
        registry(&[app("bin", 115)]),
    );
    assert!(matches!(result, Err(ShellError::StoreMissing { .. })));
}

#[cfg(feature = "traymod-bin")]
#[test]
fn test_installed_apps_include_mini_bin() {
    let memory = Arc::new(MemoryStorage::with_file(
        PATH,
        r#"{"mini_apps": {"bin": {"switch_active": true}}}"#,
    ));
    let mut factory = FakeFactory::default();
    let shell = Shell::new(
        &ShellConfig::with_settings_path(PATH),
        shared(SettingsStore::new(memory, PATH)),
        &mut factory,
    )
    .unwrap();

    assert_eq!(shell.apps().len(), 1);
    assert_eq!(shell.get_app_info("bin").map(|a| a.name), Some("MiniBin"));
    assert_eq!(factory.get("card:bin").position, Some(Position { x: 0, y: 10 }));
    assert_eq!(shell.dashboard().content_height(), 135);
}
