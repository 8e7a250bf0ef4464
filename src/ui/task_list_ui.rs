use crate::tasks::TaskList;
use crate::ui::View;
use eframe::egui::{self, Layout, RichText};

enum TaskAction {
    ToggleDone(u64),
    Remove(u64),
}

#[derive(Default)]
pub struct TaskListView {
    list: TaskList,
    draft: String,
}

impl TaskListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    fn submit_draft(&mut self) {
        if self.list.add(&self.draft).is_some() {
            self.draft.clear();
        }
    }
}

impl View for TaskListView {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tasks");
        ui.add_space(6.0);

        // --- New task row ---
        ui.horizontal(|ui| {
            let input = ui.add(
                egui::TextEdit::singleline(&mut self.draft)
                    .hint_text("What needs doing?")
                    .desired_width(ui.available_width() - 60.0),
            );
            let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let can_add = !self.draft.trim().is_empty();

            if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() || entered {
                self.submit_draft();
                input.request_focus();
            }
        });

        ui.add_space(8.0);

        if self.list.is_empty() {
            ui.label(RichText::new("No tasks yet.").weak());
            return;
        }

        // --- Task rows ---
        let mut actions = Vec::new();
        for task in self.list.tasks() {
            ui.horizontal(|ui| {
                let mut done = task.done;
                let title = if task.done {
                    RichText::new(&task.title).strikethrough().weak()
                } else {
                    RichText::new(&task.title)
                };
                if ui.checkbox(&mut done, title).changed() {
                    actions.push(TaskAction::ToggleDone(task.id));
                }

                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("🗑").on_hover_text("Delete task").clicked() {
                        actions.push(TaskAction::Remove(task.id));
                    }
                    ui.label(
                        RichText::new(task.created_at.format("%H:%M").to_string())
                            .small()
                            .weak(),
                    );
                });
            });
        }

        for action in actions {
            match action {
                TaskAction::ToggleDone(id) => {
                    self.list.toggle_done(id);
                }
                TaskAction::Remove(id) => {
                    self.list.remove(id);
                }
            }
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(format!("{} remaining", self.list.remaining()));
            let completed = self.list.tasks().len() - self.list.remaining();
            if ui
                .add_enabled(completed > 0, egui::Button::new("Clear completed"))
                .clicked()
            {
                let cleared = self.list.clear_completed();
                tracing::debug!("Cleared {} completed tasks", cleared);
            }
        });
    }
}
