pub mod app;
pub mod app_bar;
pub mod icons;
pub mod onboarding_ui;
pub mod task_list_ui;
pub mod util;

use eframe::egui;

/// A self-contained panel mounted inside the shell body.
pub trait View {
    fn ui(&mut self, ui: &mut egui::Ui);
}
