use crate::preferences::PreferenceStore;
use crate::shell::ShellSession;
use crate::ui::app_bar::draw_app_bar;
use crate::ui::onboarding_ui::OnboardingGuide;
use crate::ui::task_list_ui::TaskListView;
use crate::ui::View;

use eframe::egui::{self, RichText};

pub struct TaskManagerApp<S: PreferenceStore> {
    pub session: ShellSession<S>,
    pub onboarding: OnboardingGuide,
    pub task_list: TaskListView,
}

impl<S: PreferenceStore> TaskManagerApp<S> {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: ShellSession<S>) -> Self {
        Self::with_session(session)
    }

    pub fn with_session(session: ShellSession<S>) -> Self {
        Self {
            session,
            onboarding: OnboardingGuide::new(),
            task_list: TaskListView::new(),
        }
    }

    /// Draws one frame. Split from `update` so it can run without a window.
    pub fn draw(&mut self, ctx: &egui::Context) {
        ctx.set_visuals(self.session.theme().visuals);

        let width = ctx.screen_rect().width();
        let view = self.session.render(width);

        if draw_app_bar(ctx, &view) {
            self.session.toggle();
            ctx.request_repaint();
        }

        let layout = view.layout;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin {
                        left: layout.content_padding_x,
                        right: layout.content_padding_x,
                        top: layout.content_padding_top,
                        bottom: layout.content_padding_x,
                    })
                    .show(ui, |ui| {
                        if let Some(err) = self.session.last_persist_error() {
                            ui.label(
                                RichText::new("⚠ Theme preference could not be saved")
                                    .color(ui.visuals().warn_fg_color),
                            )
                            .on_hover_text(err);
                            ui.add_space(8.0);
                        }

                        self.onboarding.ui(ui);
                        ui.add_space(16.0);
                        self.task_list.ui(ui);
                    });
            });
        });
    }
}

impl<S: PreferenceStore> eframe::App for TaskManagerApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStore;
    use crate::shell::THEME_KEY;
    use crate::theme::ThemeMode;

    fn run_frame(app: &mut TaskManagerApp<MemoryStore>, ctx: &egui::Context, width: f32) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, 720.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.draw(ctx));
    }

    #[test]
    fn frames_apply_stored_theme() {
        let session = ShellSession::new(MemoryStore::with_entry(THEME_KEY, "dark"));
        let mut app = TaskManagerApp::with_session(session);
        let ctx = egui::Context::default();

        run_frame(&mut app, &ctx, 1024.0);
        assert!(ctx.style().visuals.dark_mode);

        app.session.toggle();
        run_frame(&mut app, &ctx, 480.0);
        assert!(!ctx.style().visuals.dark_mode);
        assert_eq!(app.session.mode(), ThemeMode::Light);
    }

    #[test]
    fn drawing_never_writes_preferences() {
        let session = ShellSession::new(MemoryStore::new());
        let mut app = TaskManagerApp::with_session(session);
        let ctx = egui::Context::default();

        for width in [320.0, 599.0, 600.0, 1440.0] {
            run_frame(&mut app, &ctx, width);
        }
        assert_eq!(app.session.store().write_count(), 0);
        assert!(!app.onboarding.is_dismissed());
        assert!(app.task_list.list().is_empty());
    }
}
