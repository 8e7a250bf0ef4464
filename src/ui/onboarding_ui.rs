use crate::ui::View;
use eframe::egui::{self, RichText};

const STEPS: [&str; 4] = [
    "Type a task in the box below and press Enter or click Add.",
    "Tick the checkbox next to a task once it is done.",
    "Use \"Clear completed\" to tidy up finished tasks.",
    "Switch between light and dark mode from the top bar. Your choice is remembered.",
];

pub struct OnboardingGuide {
    dismissed: bool,
}

impl OnboardingGuide {
    pub fn new() -> Self {
        Self { dismissed: false }
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}

impl Default for OnboardingGuide {
    fn default() -> Self {
        Self::new()
    }
}

impl View for OnboardingGuide {
    fn ui(&mut self, ui: &mut egui::Ui) {
        if self.dismissed {
            if ui.small_button("Show getting started guide").clicked() {
                self.dismissed = false;
            }
            return;
        }

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.heading("Getting started");
            ui.add_space(6.0);

            for (i, step) in STEPS.iter().enumerate() {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(format!("{}.", i + 1)).strong());
                    ui.label(*step);
                });
            }

            ui.add_space(6.0);
            if ui.button("Got it").clicked() {
                tracing::debug!("Onboarding guide dismissed");
                self.dismissed = true;
            }
        });
    }
}
