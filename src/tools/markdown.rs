//! Markdown to a flat list of styled blocks for the live preview.
//!
//! Parsing is done by `pulldown-cmark`; this module only folds its event
//! stream into [`Block`]s that a painter can lay out line by line.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub link: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        spans: Vec<Span>,
    },
    Paragraph {
        spans: Vec<Span>,
        quoted: bool,
    },
    /// `marker` is empty for the second and later paragraphs of one item.
    ListItem {
        depth: usize,
        marker: String,
        spans: Vec<Span>,
    },
    CodeBlock {
        lang: Option<String>,
        code: String,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Rule,
}

impl Block {
    /// Text content without styling.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { spans, .. }
            | Block::Paragraph { spans, .. }
            | Block::ListItem { spans, .. } => spans.iter().map(|s| s.text.as_str()).collect(),
            Block::CodeBlock { code, .. } => code.clone(),
            Block::Table { headers, rows } => std::iter::once(headers)
                .chain(rows)
                .map(|row| row.join(" | "))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Rule => String::new(),
        }
    }
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

pub fn parse_markdown(source: &str) -> Vec<Block> {
    let mut builder = Builder::default();

    for event in Parser::new_ext(source, options()) {
        match event {
            Event::Start(tag) => builder.start(tag),
            Event::End(tag) => builder.end(tag),
            Event::Text(text) => builder.text(&text),
            Event::Code(code) => builder.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => builder.text(&html),
            Event::SoftBreak => builder.text(" "),
            Event::HardBreak => builder.text("\n"),
            Event::Rule => {
                builder.flush();
                builder.blocks.push(Block::Rule);
            }
            Event::TaskListMarker(done) => {
                builder.item_marker = Some(if done { "☑" } else { "☐" }.to_string());
            }
            _ => {}
        }
    }

    builder.flush();
    builder.blocks
}

/// HTML for the "Copy HTML" action.
pub fn to_html(source: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(source, options()));
    out
}

#[derive(Default)]
struct TableState {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
    in_head: bool,
}

#[derive(Default)]
struct Builder {
    blocks: Vec<Block>,
    spans: Vec<Span>,
    style: InlineDepth,
    heading: Option<u8>,
    quote_depth: usize,
    /// Next number per open list, `None` for bullets
    lists: Vec<Option<u64>>,
    item_depth: usize,
    item_marker: Option<String>,
    code: Option<(Option<String>, String)>,
    table: Option<TableState>,
}

#[derive(Default)]
struct InlineDepth {
    strong: usize,
    emphasis: usize,
    strikethrough: usize,
    link: usize,
}

impl InlineDepth {
    fn style(&self) -> SpanStyle {
        SpanStyle {
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            strikethrough: self.strikethrough > 0,
            code: false,
            link: self.link > 0,
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

impl Builder {
    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                self.heading = Some(heading_level(level));
            }
            Tag::BlockQuote { .. } => {
                self.flush();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(kind) => {
                self.flush();
                let lang = match kind {
                    CodeBlockKind::Fenced(name) if !name.is_empty() => Some(name.to_string()),
                    _ => None,
                };
                self.code = Some((lang, String::new()));
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                self.item_depth += 1;
                let marker = match self.lists.last_mut() {
                    Some(Some(next)) => {
                        let marker = format!("{}.", next);
                        *next += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                self.item_marker = Some(marker);
            }
            Tag::Table(_) => {
                self.flush();
                self.table = Some(TableState::default());
            }
            Tag::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.in_head = true;
                }
            }
            Tag::Emphasis => self.style.emphasis += 1,
            Tag::Strong => self.style.strong += 1,
            Tag::Strikethrough => self.style.strikethrough += 1,
            Tag::Link { .. } => self.style.link += 1,
            Tag::Image { .. } => self.text("[image: "),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.flush(),
            TagEnd::Heading { .. } => {
                let spans = std::mem::take(&mut self.spans);
                let level = self.heading.take().unwrap_or(1);
                if !spans.is_empty() {
                    self.blocks.push(Block::Heading { level, spans });
                }
            }
            TagEnd::BlockQuote { .. } => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            TagEnd::CodeBlock => {
                if let Some((lang, mut code)) = self.code.take() {
                    if code.ends_with('\n') {
                        code.pop();
                    }
                    self.blocks.push(Block::CodeBlock { lang, code });
                }
            }
            TagEnd::List { .. } => {
                self.flush();
                self.lists.pop();
            }
            TagEnd::Item => {
                self.flush();
                self.item_depth = self.item_depth.saturating_sub(1);
                self.item_marker = None;
            }
            TagEnd::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    let cell = std::mem::take(&mut table.cell);
                    table.row.push(cell.trim().to_string());
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.headers = std::mem::take(&mut table.row);
                    table.in_head = false;
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut()
                    && !table.in_head
                {
                    let row = std::mem::take(&mut table.row);
                    table.rows.push(row);
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.blocks.push(Block::Table {
                        headers: table.headers,
                        rows: table.rows,
                    });
                }
            }
            TagEnd::Emphasis => self.style.emphasis = self.style.emphasis.saturating_sub(1),
            TagEnd::Strong => self.style.strong = self.style.strong.saturating_sub(1),
            TagEnd::Strikethrough => {
                self.style.strikethrough = self.style.strikethrough.saturating_sub(1)
            }
            TagEnd::Link => self.style.link = self.style.link.saturating_sub(1),
            TagEnd::Image => self.text("]"),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some((_, code)) = self.code.as_mut() {
            code.push_str(text);
            return;
        }
        if let Some(table) = self.table.as_mut() {
            table.cell.push_str(text);
            return;
        }
        self.push_span(text, self.style.style());
    }

    fn inline_code(&mut self, code: &str) {
        if let Some(table) = self.table.as_mut() {
            table.cell.push_str(code);
            return;
        }
        let style = SpanStyle {
            code: true,
            ..self.style.style()
        };
        self.push_span(code, style);
    }

    fn push_span(&mut self, text: &str, style: SpanStyle) {
        // Adjacent text events with one style become one span
        if let Some(last) = self.spans.last_mut()
            && last.style == style
        {
            last.text.push_str(text);
            return;
        }
        self.spans.push(Span {
            text: text.to_string(),
            style,
        });
    }

    /// Close the running paragraph or list item text.
    fn flush(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);

        if self.item_depth > 0 {
            self.blocks.push(Block::ListItem {
                depth: self.lists.len().saturating_sub(1),
                marker: self.item_marker.take().unwrap_or_default(),
                spans,
            });
        } else {
            self.blocks.push(Block::Paragraph {
                spans,
                quoted: self.quote_depth > 0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(blocks: &[Block]) -> Vec<String> {
        blocks.iter().map(Block::plain_text).collect()
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(parse_markdown("").is_empty());
        assert!(parse_markdown("\n\n  \n").is_empty());
    }

    #[test]
    fn headings_and_paragraphs() {
        let blocks = parse_markdown("# Title\n\nSome *soft*\nwrapped text.\n\n### Small");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], Block::Heading { level: 1, .. }));
        assert!(matches!(&blocks[2], Block::Heading { level: 3, .. }));
        assert_eq!(
            texts(&blocks),
            vec!["Title", "Some soft wrapped text.", "Small"]
        );
    }

    #[test]
    fn inline_styles_become_spans() {
        let blocks = parse_markdown("plain **bold** _em_ ~~gone~~ `code` [link](https://x.dev)");
        let Block::Paragraph { spans, quoted } = &blocks[0] else {
            panic!("expected a paragraph, got {:?}", blocks[0]);
        };
        assert!(!quoted);

        let styled = |text: &str| spans.iter().find(|s| s.text == text).map(|s| s.style);
        assert!(styled("bold").is_some_and(|s| s.strong && !s.emphasis));
        assert!(styled("em").is_some_and(|s| s.emphasis));
        assert!(styled("gone").is_some_and(|s| s.strikethrough));
        assert!(styled("code").is_some_and(|s| s.code));
        assert!(styled("link").is_some_and(|s| s.link));
        assert_eq!(spans[0].text, "plain ");
        assert_eq!(spans[0].style, SpanStyle::default());
    }

    #[test]
    fn ordered_and_nested_lists() {
        let blocks = parse_markdown("3. three\n4. four\n   - inner\n");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem {
                    depth: 0,
                    marker: "3.".to_string(),
                    spans: vec![Span {
                        text: "three".to_string(),
                        style: SpanStyle::default()
                    }],
                },
                Block::ListItem {
                    depth: 0,
                    marker: "4.".to_string(),
                    spans: vec![Span {
                        text: "four".to_string(),
                        style: SpanStyle::default()
                    }],
                },
                Block::ListItem {
                    depth: 1,
                    marker: "•".to_string(),
                    spans: vec![Span {
                        text: "inner".to_string(),
                        style: SpanStyle::default()
                    }],
                },
            ]
        );
    }

    #[test]
    fn task_list_markers() {
        let blocks = parse_markdown("- [x] done\n- [ ] todo\n");
        let markers: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::ListItem { marker, .. } => Some(marker.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(markers, vec!["☑", "☐"]);
        let texts: Vec<_> = texts(&blocks).iter().map(|t| t.trim().to_string()).collect();
        assert_eq!(texts, vec!["done", "todo"]);
    }

    #[test]
    fn fenced_code_keeps_lines_and_language() {
        let blocks = parse_markdown("```rust\nfn main() {\n    *x\n}\n```\n");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lang: Some("rust".to_string()),
                code: "fn main() {\n    *x\n}".to_string(),
            }]
        );
    }

    #[test]
    fn quotes_and_rules() {
        let blocks = parse_markdown("> quoted\n\n---\n\nafter");
        assert!(matches!(&blocks[0], Block::Paragraph { quoted: true, .. }));
        assert_eq!(blocks[1], Block::Rule);
        assert!(matches!(&blocks[2], Block::Paragraph { quoted: false, .. }));
    }

    #[test]
    fn tables_collect_cells() {
        let blocks = parse_markdown("| a | b |\n|---|---|\n| 1 | `2` |\n| 3 | 4 |\n");
        assert_eq!(
            blocks,
            vec![Block::Table {
                headers: vec!["a".to_string(), "b".to_string()],
                rows: vec![
                    vec!["1".to_string(), "2".to_string()],
                    vec!["3".to_string(), "4".to_string()],
                ],
            }]
        );
    }

    #[test]
    fn images_show_alt_text() {
        let blocks = parse_markdown("![logo](logo.png)");
        assert_eq!(texts(&blocks), vec!["[image: logo]"]);
    }

    #[test]
    fn html_output() {
        assert_eq!(to_html("# Hi\n\n*there*"), "<h1>Hi</h1>\n<p><em>there</em></p>\n");
    }
}
