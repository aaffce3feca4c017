use crate::style::ACCENT_COLOR;
use crate::tools::markdown::{Block, Span, parse_markdown, to_html};
use crate::ui::{ToolContext, copy_to_clipboard};
use egui::{Color32, FontId, RichText, Stroke, TextFormat, Ui, text::LayoutJob};

const SAMPLE: &str = "# Markdown Preview\n\nType on the left, the preview updates as you go.\n\n- **bold**, *italic*, ~~struck~~ and `code`\n- [links](https://example.com)\n\n> Quotes work too.\n";
const BODY_SIZE: f32 = 14.0;
const CODE_BG: Color32 = Color32::from_gray(240);

pub struct MarkdownPanel {
    input: String,
    blocks: Vec<Block>,
}

impl Default for MarkdownPanel {
    fn default() -> Self {
        Self {
            input: SAMPLE.to_string(),
            blocks: parse_markdown(SAMPLE),
        }
    }
}

impl MarkdownPanel {
    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        ui.horizontal(|ui| {
            if ui.button("📋 Copy HTML").clicked() {
                copy_to_clipboard(ui, cx, &to_html(&self.input));
            }
            if ui.button("Clear").clicked() {
                self.input.clear();
                self.blocks.clear();
            }
        });

        ui.columns(2, |columns| {
            let response = columns[0].add(
                egui::TextEdit::multiline(&mut self.input)
                    .code_editor()
                    .hint_text("Type markdown here...")
                    .desired_width(f32::INFINITY)
                    .desired_rows(24),
            );
            if response.changed() {
                self.blocks = parse_markdown(&self.input);
            }

            egui::Frame::group(columns[1].style()).show(&mut columns[1], |ui| {
                ui.set_min_width(ui.available_width());
                for (index, block) in self.blocks.iter().enumerate() {
                    render_block(ui, index, block);
                }
            });
        });
    }
}

fn render_block(ui: &mut Ui, index: usize, block: &Block) {
    match block {
        Block::Heading { level, spans } => {
            let size = match level {
                1 => 26.0,
                2 => 22.0,
                3 => 18.0,
                _ => 16.0,
            };
            let text: String = spans.iter().map(|s| s.text.as_str()).collect();
            ui.label(RichText::new(text).size(size).strong());
            if *level <= 2 {
                ui.separator();
            }
        }
        Block::Paragraph { spans, quoted } => {
            if *quoted {
                egui::Frame::default()
                    .stroke(Stroke::new(1.0, ACCENT_COLOR))
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        let job = inline_job(ui, spans);
                        ui.add(egui::Label::new(job).wrap());
                    });
            } else {
                let job = inline_job(ui, spans);
                ui.add(egui::Label::new(job).wrap());
            }
        }
        Block::ListItem {
            depth,
            marker,
            spans,
        } => {
            ui.horizontal_wrapped(|ui| {
                ui.add_space(16.0 * (*depth as f32 + 1.0));
                let marker = if marker.is_empty() { " " } else { marker.as_str() };
                ui.label(RichText::new(marker).strong());
                let job = inline_job(ui, spans);
                ui.add(egui::Label::new(job).wrap());
            });
        }
        Block::CodeBlock { lang, code } => {
            egui::Frame::default()
                .fill(CODE_BG)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    if let Some(lang) = lang {
                        ui.label(RichText::new(lang).small().weak());
                    }
                    ui.label(RichText::new(code).monospace());
                });
        }
        Block::Table { headers, rows } => {
            egui::Grid::new(("markdown_table", index))
                .striped(true)
                .num_columns(headers.len())
                .show(ui, |ui| {
                    for header in headers {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();
                    for row in rows {
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        }
        Block::Rule => {
            ui.separator();
        }
    }
}

fn inline_job(ui: &Ui, spans: &[Span]) -> LayoutJob {
    let text_color = ui.visuals().text_color();
    let mut job = LayoutJob::default();

    for span in spans {
        let style = span.style;
        let mut format = TextFormat {
            font_id: if style.code {
                FontId::monospace(BODY_SIZE)
            } else {
                FontId::proportional(BODY_SIZE)
            },
            color: if style.strong {
                ui.visuals().strong_text_color()
            } else {
                text_color
            },
            italics: style.emphasis,
            ..Default::default()
        };
        if style.code {
            format.background = CODE_BG;
        }
        if style.strikethrough {
            format.strikethrough = Stroke::new(1.0, text_color);
        }
        if style.link {
            format.color = ACCENT_COLOR;
            format.underline = Stroke::new(1.0, ACCENT_COLOR);
        }
        job.append(&span.text, 0.0, format);
    }

    job.wrap.max_width = ui.available_width();
    job
}
