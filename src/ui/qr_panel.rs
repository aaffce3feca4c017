use crate::messages::WorkerMessage;
use crate::status::StatusMessage;
use crate::tools::qr::{ErrorLevel, QrMatrix, SIZE_RANGE, generate};
use crate::ui::ToolContext;
use egui::{Color32, CornerRadius, Rect, Sense, Ui, pos2, vec2};

/// Light border around the code, in modules.
const QUIET_ZONE: usize = 4;

#[derive(Default)]
pub struct QrPanel {
    input: String,
    matrix: Option<QrMatrix>,
}

impl QrPanel {
    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        ui.add(
            egui::TextEdit::multiline(&mut self.input)
                .hint_text("Enter text or URL...")
                .desired_width(f32::INFINITY)
                .desired_rows(4),
        );

        let qr = &mut cx.settings.qr;
        ui.horizontal(|ui| {
            ui.label("Size");
            ui.add(egui::Slider::new(&mut qr.size, SIZE_RANGE).suffix(" px"));
            egui::ComboBox::from_id_salt("qr_error_level")
                .selected_text(qr.error_level.label())
                .show_ui(ui, |ui| {
                    for level in ErrorLevel::ALL {
                        ui.selectable_value(&mut qr.error_level, level, level.label());
                    }
                });
        });

        ui.horizontal(|ui| {
            if ui.button("Generate").clicked() {
                match generate(&self.input, cx.settings.qr.error_level) {
                    Ok(matrix) => self.matrix = Some(matrix),
                    Err(e) => {
                        self.matrix = None;
                        cx.notify(StatusMessage::error(e.to_string()));
                    }
                }
            }
            if let Some(matrix) = &self.matrix {
                let size = cx.settings.qr.size;
                if ui.button("💾 Save PNG").clicked() {
                    match matrix.to_png(size) {
                        Ok(png) => save_image(png, "qrcode.png", "PNG", "png", cx),
                        Err(e) => cx.notify(StatusMessage::error(e.to_string())),
                    }
                }
                if ui.button("💾 Save SVG").clicked() {
                    save_image(matrix.to_svg(size).into_bytes(), "qrcode.svg", "SVG", "svg", cx);
                }
            }
        });

        ui.separator();

        if let Some(matrix) = &self.matrix {
            paint_matrix(ui, matrix, cx.settings.qr.size as f32);
        }
    }
}

fn paint_matrix(ui: &mut Ui, matrix: &QrMatrix, size: f32) {
    let (rect, _) = ui.allocate_exact_size(vec2(size, size), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::ZERO, Color32::WHITE);

    let span = matrix.width() + QUIET_ZONE * 2;
    let module = size / span as f32;

    for y in 0..matrix.width() {
        for x in 0..matrix.width() {
            if !matrix.is_dark(x, y) {
                continue;
            }
            let min = pos2(
                rect.min.x + (x + QUIET_ZONE) as f32 * module,
                rect.min.y + (y + QUIET_ZONE) as f32 * module,
            );
            // Overlap by a hair so adjacent modules don't show seams
            let cell = Rect::from_min_size(min, vec2(module + 0.5, module + 0.5));
            painter.rect_filled(cell, CornerRadius::ZERO, Color32::BLACK);
        }
    }
}

fn save_image(
    contents: Vec<u8>,
    file_name: &'static str,
    filter: &'static str,
    extension: &'static str,
    cx: &mut ToolContext<'_>,
) {
    let sender = cx.worker.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter(filter, &[extension])
            .save_file()
            && let Err(e) = sender.send(WorkerMessage::SaveFile { path, contents })
        {
            tracing::error!("Failed to send save message: {}", e);
        }
    });
}
