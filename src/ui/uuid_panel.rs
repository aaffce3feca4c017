use crate::config::MAX_UUID_BATCH;
use crate::tools::uuid_gen::{generate, generate_batch};
use crate::ui::{ToolContext, copy_to_clipboard, section_heading};
use egui::{RichText, Ui};

#[derive(Default)]
pub struct UuidPanel {
    single: String,
    batch: String,
}

impl UuidPanel {
    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        let format = &mut cx.settings.uuid_format;
        ui.horizontal(|ui| {
            ui.checkbox(&mut format.uppercase, "Uppercase");
            ui.checkbox(&mut format.hyphens, "Hyphens");
        });

        ui.separator();
        section_heading(ui, "Single");

        ui.horizontal(|ui| {
            if ui.button("Generate").clicked() {
                self.single = cx.settings.uuid_format.apply(&generate());
            }
            if !self.single.is_empty() {
                ui.label(RichText::new(&self.single).monospace().size(16.0));
                if ui.small_button("📋 Copy").clicked() {
                    copy_to_clipboard(ui, cx, &self.single);
                }
            }
        });

        ui.separator();
        section_heading(ui, "Batch");

        ui.horizontal(|ui| {
            ui.label("Count");
            ui.add(
                egui::DragValue::new(&mut cx.settings.uuid_batch_size).range(1..=MAX_UUID_BATCH),
            );
            if ui.button("Generate").clicked() {
                self.batch =
                    generate_batch(cx.settings.uuid_batch_size, cx.settings.uuid_format).join("\n");
            }
            if ui.small_button("📋 Copy all").clicked() {
                copy_to_clipboard(ui, cx, &self.batch);
            }
        });

        egui::ScrollArea::vertical()
            .id_salt("uuid_batch")
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.batch)
                        .code_editor()
                        .interactive(false)
                        .desired_width(f32::INFINITY)
                        .desired_rows(12),
                );
            });
    }
}
