use eframe::egui::{self, Color32, RichText};

/// Button with a fixed fill that switches to `hover` under the pointer.
/// Text is always drawn in `text_color`.
pub fn filled_button(
    ui: &mut egui::Ui,
    text: &str,
    fill: Color32,
    hover: Color32,
    text_color: Color32,
) -> egui::Response {
    ui.scope(|ui| {
        let rounding = egui::Rounding::same(8.0);
        let widgets = &mut ui.visuals_mut().widgets;
        widgets.inactive.weak_bg_fill = fill;
        widgets.inactive.rounding = rounding;
        widgets.hovered.weak_bg_fill = hover;
        widgets.hovered.rounding = rounding;
        widgets.active.weak_bg_fill = hover;
        widgets.active.rounding = rounding;
        ui.spacing_mut().button_padding = egui::vec2(20.0, 10.0);

        ui.add(egui::Button::new(RichText::new(text).color(text_color)))
    })
    .inner
}
