use crate::dialogs;
use crate::ui;

use eframe::egui;
use eframe::{App, Frame};
use ml_platform::{AppConfig, Session};

/// The main application struct.
/// It owns the session and turns UI events into session calls.
pub struct MlPlatformApp {
    pub session: Session,
    pub config: AppConfig,
}

impl MlPlatformApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Session::default(),
            config,
        }
    }

    /// Sidebar button handler. Names always come from the catalog.
    pub fn select_algorithm(&mut self, name: &str) {
        if let Err(err) = self.session.select_algorithm(name) {
            self.session.report_error(&err);
        }
    }

    pub fn run_algorithm(&mut self) {
        self.session.run();
    }

    pub fn load_dataset(&mut self) {
        if let Some(path) = dialogs::pick_dataset(&self.config.open_dataset) {
            self.session.load_dataset(&path);
        }
    }

    pub fn save_results(&mut self) {
        let Some(path) = dialogs::pick_save_path(&self.config.save_results) else {
            return;
        };
        if let Err(err) = self.session.save_results(&path) {
            self.session.report_error(&err);
        }
    }
}

impl App for MlPlatformApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Side and top/bottom panels must be laid out before the central one.
        ui::draw_menu_bar(self, ctx);
        ui::draw_status_bar(self, ctx);
        ui::draw_side_panel(self, ctx);
        ui::draw_central_panel(self, ctx);
        ui::draw_notification(self, ctx);
    }
}
