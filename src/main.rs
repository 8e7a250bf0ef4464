use anyhow::{Context, Result};
use eframe::egui::{self, Vec2};

use taskshell::config::AppConfig;
use taskshell::logging;
use taskshell::preferences::JsonFileStore;
use taskshell::shell::{self, ShellSession};
use taskshell::ui::app::TaskManagerApp;
use taskshell::ui::icons::create_app_icon;

fn main() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    let _log_guard = logging::init(&config);

    let prefs_path = config
        .preferences_path()
        .context("locating the preferences file")?;
    let session = ShellSession::new(JsonFileStore::open(&prefs_path));
    tracing::info!(
        "Starting with {} theme (preferences at {})",
        session.mode(),
        session.store().path().display()
    );

    let default_theme = if session.mode().is_dark() {
        eframe::Theme::Dark
    } else {
        eframe::Theme::Light
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(Vec2::new(config.window_width, config.window_height))
            .with_min_inner_size(Vec2::new(config.min_window_width, config.min_window_height))
            .with_icon(create_app_icon()),
        centered: true,
        default_theme,
        follow_system_theme: false,
        ..Default::default()
    };

    eframe::run_native(
        shell::APP_TITLE,
        options,
        Box::new(move |cc| Box::new(TaskManagerApp::new(cc, session))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}
