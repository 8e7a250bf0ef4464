use crate::shell::{ShellView, APP_TITLE};
use crate::theme::ON_PRIMARY;
use crate::ui::util::filled_button;
use eframe::egui::{self, Align, Layout, RichText};

const TITLE_SIZE: f32 = 24.0;

/// Draws the header bar. Returns true when the theme button was clicked.
pub fn draw_app_bar(ctx: &egui::Context, view: &ShellView) -> bool {
    let frame = egui::Frame::none()
        .fill(view.header_background)
        .inner_margin(egui::Margin::symmetric(16.0, 8.0));

    let mut toggled = false;

    egui::TopBottomPanel::top("app_bar")
        .frame(frame)
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(view.layout.title_margin_left);
                ui.label(
                    RichText::new(APP_TITLE)
                        .strong()
                        .size(TITLE_SIZE)
                        .color(ON_PRIMARY),
                );

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let text = match view.label {
                        Some(label) => format!("{} {}", view.icon.glyph(), label),
                        None => view.icon.glyph().to_string(),
                    };
                    let response = filled_button(
                        ui,
                        &text,
                        view.button_background,
                        view.button_hover,
                        ON_PRIMARY,
                    );
                    let response = match view.label {
                        Some(_) => response,
                        None => response.on_hover_text(view.action),
                    };
                    toggled = response.clicked();
                });
            });
        });

    toggled
}
