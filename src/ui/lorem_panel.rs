use crate::config::MAX_LOREM_COUNT;
use crate::tools::lorem::{LoremKind, generate};
use crate::ui::{ToolContext, copy_to_clipboard};
use egui::Ui;

#[derive(Default)]
pub struct LoremPanel {
    output: String,
}

impl LoremPanel {
    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        let lorem = &mut cx.settings.lorem;
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("lorem_kind")
                .selected_text(lorem.kind.label())
                .show_ui(ui, |ui| {
                    for kind in LoremKind::ALL {
                        ui.selectable_value(&mut lorem.kind, kind, kind.label());
                    }
                });
            ui.add(egui::DragValue::new(&mut lorem.count).range(1..=MAX_LOREM_COUNT));
            ui.checkbox(&mut lorem.start_with_lorem, "Start with \"Lorem ipsum\"");
        });

        ui.horizontal(|ui| {
            if ui.button("Generate").clicked() {
                let lorem = &cx.settings.lorem;
                self.output = generate(
                    lorem.kind,
                    lorem.count,
                    lorem.start_with_lorem,
                    &mut rand::thread_rng(),
                );
            }
            if ui.small_button("📋 Copy").clicked() {
                copy_to_clipboard(ui, cx, &self.output);
            }
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("lorem_output")
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.output)
                        .interactive(false)
                        .desired_width(f32::INFINITY)
                        .desired_rows(18),
                );
            });
    }
}
