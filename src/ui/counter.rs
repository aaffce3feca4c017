use crate::tools::metrics::{TextMetrics, compute_metrics};
use egui::{RichText, Ui};

pub struct CounterPanel {
    input: String,
    metrics: TextMetrics,
}

impl Default for CounterPanel {
    fn default() -> Self {
        Self {
            input: String::new(),
            metrics: compute_metrics(""),
        }
    }
}

impl CounterPanel {
    pub fn show(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            stat(ui, "Characters", self.metrics.chars);
            stat(ui, "Words", self.metrics.words);
            stat(ui, "Lines", self.metrics.lines);
            stat(ui, "Paragraphs", self.metrics.paragraphs);
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("counter_input")
            .show(ui, |ui| {
                let response = ui.add(
                    egui::TextEdit::multiline(&mut self.input)
                        .hint_text("Start typing or paste your text here...")
                        .desired_width(f32::INFINITY)
                        .desired_rows(20),
                );
                if response.changed() {
                    self.metrics = compute_metrics(&self.input);
                }
            });
    }
}

fn stat(ui: &mut Ui, label: &str, value: usize) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(110.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(value.to_string()).size(22.0).strong());
            ui.label(RichText::new(label).small().weak());
        });
    });
}
