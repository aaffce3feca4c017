use crate::config::MAX_JSON_INDENT;
use crate::status::StatusMessage;
use crate::tools::json::{
    FORMATTED_MESSAGE, FormatOptions, MINIFIED_MESSAGE, VALID_MESSAGE, format_json, minify_json,
    validate_json,
};
use crate::ui::{ToolContext, copy_to_clipboard};
use egui::Ui;

#[derive(Default)]
pub struct JsonPanel {
    input: String,
    output: String,
}

impl JsonPanel {
    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        ui.horizontal(|ui| {
            if ui.button("Format").clicked() {
                let options = FormatOptions {
                    indent: cx.settings.json_indent,
                    sort_keys: cx.settings.json_sort_keys,
                };
                match format_json(&self.input, options) {
                    Ok(formatted) => {
                        self.output = formatted;
                        cx.notify(StatusMessage::success(FORMATTED_MESSAGE));
                    }
                    Err(e) => cx.notify(StatusMessage::error(e.to_string())),
                }
            }
            if ui.button("Minify").clicked() {
                match minify_json(&self.input) {
                    Ok(minified) => {
                        self.output = minified;
                        cx.notify(StatusMessage::success(MINIFIED_MESSAGE));
                    }
                    Err(e) => cx.notify(StatusMessage::error(e.to_string())),
                }
            }
            if ui.button("Validate").clicked() {
                let message = match validate_json(&self.input) {
                    Ok(()) => StatusMessage::success(VALID_MESSAGE),
                    Err(e) => StatusMessage::error(e.invalid_message()),
                };
                cx.notify(message);
            }
            if ui.button("Clear").clicked() {
                self.input.clear();
                self.output.clear();
            }

            ui.separator();

            ui.label("Indent");
            ui.add(egui::DragValue::new(&mut cx.settings.json_indent).range(0..=MAX_JSON_INDENT));
            ui.checkbox(&mut cx.settings.json_sort_keys, "Sort keys");
        });

        ui.columns(2, |columns| {
            columns[0].label("Input");
            columns[0].add(
                egui::TextEdit::multiline(&mut self.input)
                    .code_editor()
                    .hint_text("Paste JSON here...")
                    .desired_width(f32::INFINITY)
                    .desired_rows(22),
            );

            columns[1].horizontal(|ui| {
                ui.label("Output");
                if ui.small_button("📋 Copy").clicked() {
                    copy_to_clipboard(ui, cx, &self.output);
                }
            });
            columns[1].add(
                egui::TextEdit::multiline(&mut self.output)
                    .code_editor()
                    .interactive(false)
                    .desired_width(f32::INFINITY)
                    .desired_rows(22),
            );
        });
    }
}
