use crate::constant::CLOCK_REFRESH_SECS;
use crate::status::StatusMessage;
use crate::tools::timestamp::{
    DateReport, TimestampReport, clock_banner, describe_datetime, describe_timestamp,
};
use crate::ui::{ToolContext, copy_to_clipboard, section_heading};
use chrono::{Local, Utc};
use egui::{RichText, Ui};
use std::time::Duration;

#[derive(Default)]
pub struct TimestampPanel {
    timestamp_input: String,
    timestamp_report: Option<TimestampReport>,
    date_input: String,
    date_report: Option<DateReport>,
}

impl TimestampPanel {
    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        let (now_secs, banner) = clock_banner(&Local::now());
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(now_secs.to_string()).monospace().size(24.0).strong());
            ui.label(RichText::new(banner).weak());
        });
        ui.ctx()
            .request_repaint_after(Duration::from_secs(CLOCK_REFRESH_SECS));

        ui.separator();
        section_heading(ui, "Timestamp to date");

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.timestamp_input)
                    .hint_text("1700000000")
                    .desired_width(200.0),
            );
            if ui.button("Now").clicked() {
                self.timestamp_input = now_secs.to_string();
            }
            if ui.button("Convert").clicked() {
                match describe_timestamp(&self.timestamp_input, &Local, Utc::now()) {
                    Ok(report) => self.timestamp_report = Some(report),
                    Err(e) => {
                        self.timestamp_report = None;
                        cx.notify(StatusMessage::error(e.to_string()));
                    }
                }
            }
        });

        if let Some(report) = &self.timestamp_report {
            results_grid(
                ui,
                cx,
                "timestamp_results",
                &[
                    ("Local", report.local.clone()),
                    ("UTC", report.utc.clone()),
                    ("ISO 8601", report.iso.clone()),
                    ("Relative", report.relative.clone()),
                ],
            );
        }

        ui.separator();
        section_heading(ui, "Date to timestamp");

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.date_input)
                    .hint_text("2023-11-14 22:13:20")
                    .desired_width(200.0),
            );
            if ui.button("Convert").clicked() {
                match describe_datetime(&self.date_input, &Local) {
                    Ok(report) => self.date_report = Some(report),
                    Err(e) => {
                        self.date_report = None;
                        cx.notify(StatusMessage::error(e.to_string()));
                    }
                }
            }
        });

        if let Some(report) = &self.date_report {
            results_grid(
                ui,
                cx,
                "date_results",
                &[
                    ("Unix (s)", report.unix_seconds.to_string()),
                    ("Unix (ms)", report.unix_millis.to_string()),
                    ("ISO 8601", report.iso.clone()),
                    ("UTC", report.utc.clone()),
                ],
            );
        }
    }
}

fn results_grid(ui: &mut Ui, cx: &mut ToolContext<'_>, id: &str, rows: &[(&str, String)]) {
    egui::Grid::new(id)
        .num_columns(3)
        .spacing(egui::vec2(16.0, 6.0))
        .show(ui, |ui| {
            for (label, value) in rows {
                ui.label(RichText::new(*label).strong());
                ui.label(RichText::new(value).monospace());
                if ui.small_button("📋").on_hover_text("Copy").clicked() {
                    copy_to_clipboard(ui, cx, value);
                }
                ui.end_row();
            }
        });
}
