use crate::status::StatusMessage;
use crate::tools::color::{ColorError, Rgb};
use crate::ui::{ToolContext, copy_to_clipboard};
use egui::{Color32, CornerRadius, RichText, Sense, Ui, vec2};

const SWATCH_SIZE: f32 = 140.0;

pub struct ColorPanel {
    color: Rgb,
    hex_input: String,
}

impl Default for ColorPanel {
    fn default() -> Self {
        let color = Rgb::new(99, 102, 241);
        Self {
            hex_input: color.to_hex(),
            color,
        }
    }
}

impl ColorPanel {
    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::hover());
            let [r, g, b] = self.color.to_array();
            ui.painter()
                .rect_filled(rect, CornerRadius::same(8), Color32::from_rgb(r, g, b));

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Pick");
                    let mut rgb = self.color.to_array();
                    if ui.color_edit_button_srgb(&mut rgb).changed() {
                        self.color = Rgb::from(rgb);
                        self.hex_input = self.color.to_hex();
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Hex");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.hex_input)
                            .desired_width(100.0)
                            .font(egui::TextStyle::Monospace),
                    );
                    if response.changed() {
                        self.preview_hex();
                    }
                    if response.lost_focus()
                        && let Err(e) = self.commit_hex()
                    {
                        cx.notify(StatusMessage::error(e.to_string()));
                    }
                });
            });
        });

        ui.separator();

        let values = [
            ("HEX", self.color.to_hex()),
            ("RGB", self.color.to_string()),
            ("HSL", self.color.to_hsl().to_string()),
            ("CMYK", self.color.to_cmyk().to_string()),
        ];

        egui::Grid::new("color_values")
            .num_columns(3)
            .spacing(vec2(16.0, 8.0))
            .show(ui, |ui| {
                for (label, value) in &values {
                    ui.label(RichText::new(*label).strong());
                    ui.label(RichText::new(value).monospace());
                    if ui.small_button("📋").on_hover_text("Copy").clicked() {
                        copy_to_clipboard(ui, cx, value);
                    }
                    ui.end_row();
                }
            });
    }

    /// Follow the text field as soon as it holds a complete color.
    fn preview_hex(&mut self) {
        if let Ok(color) = Rgb::from_hex(&self.hex_input) {
            self.color = color;
        }
    }

    /// Normalize the field on commit, or put the last good color back.
    fn commit_hex(&mut self) -> Result<(), ColorError> {
        let parsed = Rgb::from_hex(&self.hex_input);
        if let Ok(color) = &parsed {
            self.color = *color;
        }
        self.hex_input = self.color.to_hex();
        parsed.map(|_| ())
    }
}
