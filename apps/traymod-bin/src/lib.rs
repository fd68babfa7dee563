//! MiniBin - Recycle bin shortcut mini-app

use traymod_widgets::{AppInfo, MiniApp};

/// MiniBin app descriptor
pub struct MiniBinApp;

impl MiniApp for MiniBinApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "MiniBin",
            id: "bin",
            icon: "bin",
            card_height: 115,
        }
    }
}
