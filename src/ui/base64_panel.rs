use crate::status::StatusMessage;
use crate::tools::codec::{Alphabet, decode, encode};
use crate::ui::{ToolContext, copy_to_clipboard};
use egui::Ui;

#[derive(Default)]
pub struct Base64Panel {
    input: String,
    output: String,
}

impl Base64Panel {
    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        ui.add(
            egui::TextEdit::multiline(&mut self.input)
                .hint_text("Enter text to encode or base64 to decode...")
                .desired_width(f32::INFINITY)
                .desired_rows(8),
        );

        ui.horizontal(|ui| {
            let alphabet = cx.settings.base64_alphabet;
            if ui.button("Encode").clicked() {
                self.output = encode(&self.input, alphabet);
            }
            if ui.button("Decode").clicked() {
                match decode(&self.input, alphabet) {
                    Ok(text) => self.output = text,
                    Err(e) => {
                        self.output.clear();
                        cx.notify(StatusMessage::error(e.to_string()));
                    }
                }
            }
            if ui.button("⇅ Swap").clicked() {
                std::mem::swap(&mut self.input, &mut self.output);
            }
            if ui.button("Clear").clicked() {
                self.input.clear();
                self.output.clear();
            }

            ui.separator();

            for option in [Alphabet::Standard, Alphabet::UrlSafe] {
                ui.radio_value(&mut cx.settings.base64_alphabet, option, option.label());
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
                .code_editor()
                .interactive(false)
                .desired_width(f32::INFINITY)
                .desired_rows(8),
        );
    }
}
