use crate::messages::{DiffPane, WorkerMessage};
use crate::status::StatusMessage;
use crate::tools::diff::{
    DiffEntry, DiffLineType, DiffMode, DiffOutcome, DiffRow, compute_diff, group_into_rows,
    render_rows, summarize, unchanged_row_text,
};
use crate::ui::ToolContext;
use egui::{Color32, FontId, RichText, TextFormat, Ui, Vec2, text::LayoutJob};
use similar::{ChangeTag, TextDiff};
use std::sync::mpsc::Sender;

const REMOVED_LINE_BG: Color32 = Color32::from_rgb(255, 230, 230);
const ADDED_LINE_BG: Color32 = Color32::from_rgb(230, 255, 230);
const REMOVED_WORD_BG: Color32 = Color32::from_rgb(255, 170, 170);
const ADDED_WORD_BG: Color32 = Color32::from_rgb(170, 255, 170);
const REMOVED_TEXT_COLOR: Color32 = Color32::from_rgb(150, 0, 0);
const ADDED_TEXT_COLOR: Color32 = Color32::from_rgb(0, 100, 0);
const LINE_HEIGHT: f32 = 20.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Layout {
    #[default]
    Unified,
    SideBySide,
}

#[derive(Default)]
pub struct DiffPanel {
    original: String,
    modified: String,
    outcome: Option<DiffOutcome>,
    layout: Layout,
}

impl DiffPanel {
    /// Put loaded file content into one side and refresh the result.
    pub fn set_pane(&mut self, pane: DiffPane, content: String, mode: DiffMode) {
        match pane {
            DiffPane::Original => self.original = content,
            DiffPane::Modified => self.modified = content,
        }
        if self.outcome.is_some() || (!self.original.is_empty() && !self.modified.is_empty()) {
            self.compare(mode);
        }
    }

    /// Where a file opened from the recent list should go.
    pub fn next_empty_pane(&self) -> DiffPane {
        if self.original.is_empty() {
            DiffPane::Original
        } else {
            DiffPane::Modified
        }
    }

    fn compare(&mut self, mode: DiffMode) {
        self.outcome = Some(compute_diff(&self.original, &self.modified, mode));
    }

    fn clear(&mut self) {
        self.original.clear();
        self.modified.clear();
        self.outcome = None;
    }

    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        ui.columns(2, |columns| {
            pane_editor(&mut columns[0], "Original", &mut self.original, DiffPane::Original, cx.worker);
            pane_editor(&mut columns[1], "Modified", &mut self.modified, DiffPane::Modified, cx.worker);
        });

        ui.horizontal(|ui| {
            if ui.button("Compare").clicked() {
                self.compare(cx.settings.diff_mode);
            }
            if ui.button("Clear").clicked() {
                self.clear();
            }

            ui.separator();

            let before = cx.settings.diff_mode;
            egui::ComboBox::from_id_salt("diff_mode")
                .selected_text(before.label())
                .show_ui(ui, |ui| {
                    for mode in [DiffMode::Positional, DiffMode::Aligned] {
                        ui.selectable_value(&mut cx.settings.diff_mode, mode, mode.label());
                    }
                });
            if cx.settings.diff_mode != before && self.outcome.is_some() {
                self.compare(cx.settings.diff_mode);
            }

            ui.selectable_value(&mut self.layout, Layout::Unified, "Unified");
            ui.selectable_value(&mut self.layout, Layout::SideBySide, "Side by side");

            if let Some(outcome) = &self.outcome
                && !outcome.entries().is_empty()
                && ui.button("💾 Save result").clicked()
            {
                save_result(outcome.entries(), cx);
            }
        });

        ui.separator();

        let Some(outcome) = &self.outcome else {
            return;
        };

        if let Some(message) = outcome.message() {
            ui.label(RichText::new(message).weak());
            if matches!(outcome, DiffOutcome::NothingToCompare) {
                return;
            }
        } else {
            let summary = summarize(outcome.entries());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("+{} lines", summary.added_lines)).color(ADDED_TEXT_COLOR),
                );
                ui.label(
                    RichText::new(format!("-{} lines", summary.removed_lines))
                        .color(REMOVED_TEXT_COLOR),
                );
                ui.label(
                    RichText::new(format!(
                        "(+{} / -{} chars)",
                        summary.added_chars, summary.removed_chars
                    ))
                    .weak(),
                );
            });
        }

        egui::ScrollArea::vertical()
            .id_salt("diff_result")
            .max_height(420.0)
            .show(ui, |ui| match self.layout {
                Layout::Unified => render_unified(ui, outcome.entries()),
                Layout::SideBySide => render_side_by_side(ui, outcome.entries()),
            });
    }
}

fn pane_editor(
    ui: &mut Ui,
    title: &str,
    text: &mut String,
    pane: DiffPane,
    worker: &Sender<WorkerMessage>,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(title).strong());
        if ui.small_button("📂").on_hover_text("Load file").clicked() {
            let sender = worker.clone();
            // The dialog blocks, keep it off the UI thread
            std::thread::spawn(move || {
                if let Some(path) = rfd::FileDialog::new().pick_file()
                    && let Err(e) = sender.send(WorkerMessage::LoadFile { pane, path })
                {
                    tracing::error!("Failed to send load message: {}", e);
                }
            });
        }
    });
    egui::ScrollArea::vertical()
        .id_salt(title)
        .max_height(220.0)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(text)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(10),
            );
        });
}

fn save_result(entries: &[DiffEntry], cx: &mut ToolContext<'_>) {
    let contents = render_rows(entries)
        .into_iter()
        .map(|row| row.text)
        .collect::<Vec<_>>()
        .join("\n")
        .into_bytes();

    let sender = cx.worker.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("diff.txt")
            .add_filter("Text", &["txt", "diff"])
            .save_file()
            && let Err(e) = sender.send(WorkerMessage::SaveFile { path, contents })
        {
            tracing::error!("Failed to send save message: {}", e);
        }
    });
    cx.notify(StatusMessage::success("Choose where to save the diff"));
}

fn render_unified(ui: &mut Ui, entries: &[DiffEntry]) {
    ui.style_mut().spacing.item_spacing.y = 0.0;
    let font_id = FontId::monospace(14.0);

    for row in render_rows(entries) {
        let (fill, color) = match row.line_type {
            DiffLineType::Unchanged => (Color32::TRANSPARENT, ui.visuals().text_color()),
            DiffLineType::Removed => (REMOVED_LINE_BG, REMOVED_TEXT_COLOR),
            DiffLineType::Added => (ADDED_LINE_BG, ADDED_TEXT_COLOR),
        };

        egui::Frame::default()
            .fill(fill)
            .inner_margin(2.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.add(
                    egui::Label::new(RichText::new(row.text).font(font_id.clone()).color(color))
                        .wrap(),
                );
            });
    }
}

fn render_side_by_side(ui: &mut Ui, entries: &[DiffEntry]) {
    ui.style_mut().spacing.item_spacing.y = 1.0;

    let rows = group_into_rows(entries);
    let col_w = (ui.available_width() / 2.0 - 15.0).max(100.0);

    for (row_idx, row) in rows.iter().enumerate() {
        match row {
            DiffRow::Unchanged(text) => {
                let text = unchanged_row_text(text);
                ui.add(egui::Label::new(RichText::new(text).monospace().size(14.0)).wrap());
            }
            DiffRow::Pair(left_block, right_block) => {
                // Each grid needs its own id
                ui.push_id(row_idx, |ui| {
                    egui::Grid::new("diff_pair_grid")
                        .num_columns(2)
                        .min_col_width(0.0)
                        .spacing(Vec2::new(0.0, 0.0))
                        .show(ui, |ui| {
                            let max = left_block.len().max(right_block.len());
                            for i in 0..max {
                                let left = left_block.get(i).map(|l| l.content.as_str());
                                let right = right_block.get(i).map(|r| r.content.as_str());
                                render_word_highlight(ui, left, right, true, col_w);
                                render_word_highlight(ui, left, right, false, col_w);
                                ui.end_row();
                            }
                        });
                });
            }
        }
    }
}

/// One cell of a changed pair with character-level highlighting.
fn render_word_highlight(
    ui: &mut Ui,
    left: Option<&str>,
    right: Option<&str>,
    is_left: bool,
    width: f32,
) {
    let font_id = FontId::monospace(14.0);
    let (line_bg, prefix, own) = if is_left {
        (REMOVED_LINE_BG, "- ", left)
    } else {
        (ADDED_LINE_BG, "+ ", right)
    };

    egui::Frame::default()
        .fill(if own.is_some() {
            line_bg
        } else {
            Color32::TRANSPARENT
        })
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.set_min_width(width - 12.0);

            let Some(own) = own else {
                ui.label("");
                return;
            };

            let base_text_color = ui.visuals().text_color();
            let plain = TextFormat {
                font_id: font_id.clone(),
                color: base_text_color,
                line_height: Some(LINE_HEIGHT),
                ..Default::default()
            };

            let mut job = LayoutJob::default();
            job.append(
                prefix,
                0.0,
                TextFormat {
                    color: base_text_color.gamma_multiply(0.5),
                    ..plain.clone()
                },
            );

            match (left, right) {
                (Some(l), Some(r)) => {
                    let diff = TextDiff::from_chars(l, r);
                    for change in diff.iter_all_changes() {
                        let text = change.value();
                        match change.tag() {
                            ChangeTag::Equal => job.append(text, 0.0, plain.clone()),
                            ChangeTag::Delete if is_left => job.append(
                                text,
                                0.0,
                                TextFormat {
                                    color: REMOVED_TEXT_COLOR,
                                    background: REMOVED_WORD_BG,
                                    ..plain.clone()
                                },
                            ),
                            ChangeTag::Insert if !is_left => job.append(
                                text,
                                0.0,
                                TextFormat {
                                    color: ADDED_TEXT_COLOR,
                                    background: ADDED_WORD_BG,
                                    ..plain.clone()
                                },
                            ),
                            _ => {}
                        }
                    }
                }
                _ => job.append(own, 0.0, plain.clone()),
            }

            job.wrap.max_width = width - 12.0;
            ui.add(egui::Label::new(job).wrap());
        });
}
