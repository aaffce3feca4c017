use serde::Serialize;

/// Counts shown by the character counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
    /// UTF-16 code units, matching what a browser `length` reports.
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
    pub paragraphs: usize,
}

/// Compute all four counts from scratch.
///
/// Every string is valid input. An empty string still has one (empty) line.
pub fn compute_metrics(text: &str) -> TextMetrics {
    TextMetrics {
        chars: text.encode_utf16().count(),
        words: text.split_whitespace().count(),
        lines: text.split('\n').count(),
        paragraphs: count_paragraphs(text),
    }
}

/// A paragraph is a run of non-blank lines. Blank lines only separate.
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;

    for line in text.split('\n') {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            count += 1;
            in_paragraph = true;
        }
    }

    count
}
