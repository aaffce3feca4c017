use crate::tools::case::{CaseKind, convert_case};
use crate::ui::{ToolContext, copy_to_clipboard};
use egui::Ui;

#[derive(Default)]
pub struct CasePanel {
    input: String,
    output: String,
}

impl CasePanel {
    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        ui.add(
            egui::TextEdit::multiline(&mut self.input)
                .hint_text("Enter text to convert...")
                .desired_width(f32::INFINITY)
                .desired_rows(8),
        );

        ui.horizontal_wrapped(|ui| {
            for kind in CaseKind::ALL {
                if ui.button(kind.label()).clicked() {
                    self.output = convert_case(&self.input, kind);
                }
            }
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Result");
            if ui.small_button("📋 Copy").clicked() {
                copy_to_clipboard(ui, cx, &self.output);
            }
        });
        ui.add(
            egui::TextEdit::multiline(&mut self.output)
                .interactive(false)
                .desired_width(f32::INFINITY)
                .desired_rows(8),
        );
    }
}
