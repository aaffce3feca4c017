//! Line-granularity comparison of two texts.
//!
//! The default [`DiffMode::Positional`] compares line `i` of one text with line
//! `i` of the other and never re-aligns, so an insertion near the top marks every
//! following line as removed and added. [`DiffMode::Aligned`] runs a Myers
//! alignment through `similar` instead.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// Rendered in place of an unchanged empty line so the row keeps its height.
pub const BLANK_ROW: &str = "\u{a0}";

pub const NOTHING_TO_COMPARE_MESSAGE: &str = "Enter text in both fields to compare.";
pub const NO_DIFFERENCES_MESSAGE: &str = "No differences found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineType {
    Unchanged,
    Removed,
    Added,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub line_type: DiffLineType,
    pub content: String,
    pub position: usize,
}

impl DiffEntry {
    fn new(line_type: DiffLineType, content: &str, position: usize) -> Self {
        Self {
            line_type,
            content: content.to_string(),
            position,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffMode {
    #[default]
    Positional,
    Aligned,
}

impl DiffMode {
    pub fn label(self) -> &'static str {
        match self {
            DiffMode::Positional => "Line by line",
            DiffMode::Aligned => "Aligned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Both inputs were empty.
    NothingToCompare,
    /// Only unchanged entries.
    Identical(Vec<DiffEntry>),
    Changed(Vec<DiffEntry>),
}

impl DiffOutcome {
    pub fn entries(&self) -> &[DiffEntry] {
        match self {
            DiffOutcome::NothingToCompare => &[],
            DiffOutcome::Identical(entries) | DiffOutcome::Changed(entries) => entries,
        }
    }

    /// Guidance text for the states that have no differences to show.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DiffOutcome::NothingToCompare => Some(NOTHING_TO_COMPARE_MESSAGE),
            DiffOutcome::Identical(_) => Some(NO_DIFFERENCES_MESSAGE),
            DiffOutcome::Changed(_) => None,
        }
    }
}

/// Positional line diff.
pub fn compute_line_diff(original: &str, modified: &str) -> DiffOutcome {
    compute_diff(original, modified, DiffMode::Positional)
}

pub fn compute_diff(original: &str, modified: &str, mode: DiffMode) -> DiffOutcome {
    if original.is_empty() && modified.is_empty() {
        return DiffOutcome::NothingToCompare;
    }

    let old_lines: Vec<&str> = original.split('\n').collect();
    let new_lines: Vec<&str> = modified.split('\n').collect();

    let entries = match mode {
        DiffMode::Positional => positional_entries(&old_lines, &new_lines),
        DiffMode::Aligned => aligned_entries(&old_lines, &new_lines),
    };

    if entries
        .iter()
        .any(|entry| entry.line_type != DiffLineType::Unchanged)
    {
        DiffOutcome::Changed(entries)
    } else {
        DiffOutcome::Identical(entries)
    }
}

fn positional_entries(old_lines: &[&str], new_lines: &[&str]) -> Vec<DiffEntry> {
    let max = old_lines.len().max(new_lines.len());
    let mut entries = Vec::with_capacity(max);

    for position in 0..max {
        // A missing line compares equal to an empty one.
        let old = old_lines.get(position).copied();
        let new = new_lines.get(position).copied();

        if old.unwrap_or("") == new.unwrap_or("") {
            entries.push(DiffEntry::new(
                DiffLineType::Unchanged,
                old.unwrap_or(""),
                position,
            ));
            continue;
        }

        if let Some(old) = old {
            entries.push(DiffEntry::new(DiffLineType::Removed, old, position));
        }
        if let Some(new) = new {
            entries.push(DiffEntry::new(DiffLineType::Added, new, position));
        }
    }

    entries
}

fn aligned_entries(old_lines: &[&str], new_lines: &[&str]) -> Vec<DiffEntry> {
    let diff = TextDiff::from_slices(old_lines, new_lines);

    diff.iter_all_changes()
        .map(|change| {
            let (line_type, position) = match change.tag() {
                ChangeTag::Delete => (DiffLineType::Removed, change.old_index()),
                ChangeTag::Insert => (DiffLineType::Added, change.new_index()),
                ChangeTag::Equal => (DiffLineType::Unchanged, change.new_index()),
            };
            DiffEntry::new(line_type, change.value(), position.unwrap_or_default())
        })
        .collect()
}

/// One display row per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub line_type: DiffLineType,
    pub text: String,
}

/// Text shown for an unchanged line; an empty line becomes [`BLANK_ROW`].
pub fn unchanged_row_text(content: &str) -> &str {
    if content.is_empty() { BLANK_ROW } else { content }
}

pub fn render_rows(entries: &[DiffEntry]) -> Vec<DisplayRow> {
    entries
        .iter()
        .map(|entry| {
            let text = match entry.line_type {
                DiffLineType::Unchanged => unchanged_row_text(&entry.content).to_string(),
                DiffLineType::Removed => format!("- {}", entry.content),
                DiffLineType::Added => format!("+ {}", entry.content),
            };
            DisplayRow {
                line_type: entry.line_type,
                text,
            }
        })
        .collect()
}

/// Rows for the side-by-side view: unchanged lines stand alone, and a block of
/// removed lines is paired with the added block that directly follows it.
#[derive(Debug, Clone)]
pub enum DiffRow {
    Unchanged(String),
    Pair(Vec<DiffEntry>, Vec<DiffEntry>),
}

pub fn group_into_rows(entries: &[DiffEntry]) -> Vec<DiffRow> {
    let mut rows = Vec::new();
    let mut i = 0usize;

    while i < entries.len() {
        match entries[i].line_type {
            DiffLineType::Unchanged => {
                rows.push(DiffRow::Unchanged(entries[i].content.clone()));
                i += 1;
            }
            DiffLineType::Removed => {
                let mut removed_block = Vec::new();
                while i < entries.len() && entries[i].line_type == DiffLineType::Removed {
                    removed_block.push(entries[i].clone());
                    i += 1;
                }

                let mut added_block = Vec::new();
                while i < entries.len() && entries[i].line_type == DiffLineType::Added {
                    added_block.push(entries[i].clone());
                    i += 1;
                }

                rows.push(DiffRow::Pair(removed_block, added_block));
            }
            DiffLineType::Added => {
                let mut added_block = Vec::new();
                while i < entries.len() && entries[i].line_type == DiffLineType::Added {
                    added_block.push(entries[i].clone());
                    i += 1;
                }
                rows.push(DiffRow::Pair(Vec::new(), added_block));
            }
        }
    }

    rows
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffSummary {
    pub unchanged_lines: usize,
    pub removed_lines: usize,
    pub added_lines: usize,
    /// Characters removed and added inside changed blocks, by char diff.
    pub removed_chars: usize,
    pub added_chars: usize,
}

pub fn summarize(entries: &[DiffEntry]) -> DiffSummary {
    let mut summary = DiffSummary::default();

    for entry in entries {
        match entry.line_type {
            DiffLineType::Unchanged => summary.unchanged_lines += 1,
            DiffLineType::Removed => summary.removed_lines += 1,
            DiffLineType::Added => summary.added_lines += 1,
        }
    }

    for row in group_into_rows(entries) {
        if let DiffRow::Pair(left, right) = row {
            let left_str = join_block(&left);
            let right_str = join_block(&right);

            let diff = TextDiff::from_chars(&left_str, &right_str);
            for change in diff.iter_all_changes() {
                match change.tag() {
                    ChangeTag::Insert => summary.added_chars += change.value().chars().count(),
                    ChangeTag::Delete => summary.removed_chars += change.value().chars().count(),
                    ChangeTag::Equal => {}
                }
            }
        }
    }

    summary
}

fn join_block(block: &[DiffEntry]) -> String {
    block
        .iter()
        .map(|entry| entry.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use DiffLineType::{Added, Removed, Unchanged};

    fn kinds(outcome: &DiffOutcome) -> Vec<(DiffLineType, &str, usize)> {
        outcome
            .entries()
            .iter()
            .map(|e| (e.line_type, e.content.as_str(), e.position))
            .collect()
    }

    #[test]
    fn both_empty_is_guidance_state() {
        let outcome = compute_line_diff("", "");
        assert_eq!(outcome, DiffOutcome::NothingToCompare);
        assert_eq!(outcome.message(), Some(NOTHING_TO_COMPARE_MESSAGE));
        assert!(outcome.entries().is_empty());
    }

    #[test]
    fn identical_text_is_all_unchanged() {
        let text = "alpha\n\nbeta\ngamma";
        let outcome = compute_line_diff(text, text);
        assert!(matches!(outcome, DiffOutcome::Identical(_)));
        assert_eq!(outcome.message(), Some(NO_DIFFERENCES_MESSAGE));
        assert_eq!(outcome.entries().len(), 4);
        assert!(outcome.entries().iter().all(|e| e.line_type == Unchanged));
    }

    #[test]
    fn changed_line_becomes_removed_then_added() {
        let outcome = compute_line_diff("a\nb", "a\nc");
        assert_eq!(
            kinds(&outcome),
            vec![(Unchanged, "a", 0), (Removed, "b", 1), (Added, "c", 1)]
        );
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn ragged_lengths_only_emit_real_lines() {
        let outcome = compute_line_diff("a", "a\nb");
        assert_eq!(kinds(&outcome), vec![(Unchanged, "a", 0), (Added, "b", 1)]);

        let outcome = compute_line_diff("a\nb", "a");
        assert_eq!(kinds(&outcome), vec![(Unchanged, "a", 0), (Removed, "b", 1)]);
    }

    #[test]
    fn missing_line_equals_empty_line() {
        // "a\n" has a trailing empty line that the other side lacks
        let outcome = compute_line_diff("a\n", "a");
        assert_eq!(kinds(&outcome), vec![(Unchanged, "a", 0), (Unchanged, "", 1)]);
        assert!(matches!(outcome, DiffOutcome::Identical(_)));
    }

    #[test]
    fn empty_real_line_is_reported_as_removed() {
        let outcome = compute_line_diff("", "x");
        assert_eq!(kinds(&outcome), vec![(Removed, "", 0), (Added, "x", 0)]);
    }

    #[test]
    fn insertion_at_top_is_not_realigned() {
        let outcome = compute_line_diff("a\nb\nc", "x\na\nb\nc");
        assert_eq!(
            kinds(&outcome),
            vec![
                (Removed, "a", 0),
                (Added, "x", 0),
                (Removed, "b", 1),
                (Added, "a", 1),
                (Removed, "c", 2),
                (Added, "b", 2),
                (Added, "c", 3),
            ]
        );
    }

    #[test]
    fn aligned_mode_finds_the_single_insertion() {
        let outcome = compute_diff("a\nb\nc", "x\na\nb\nc", DiffMode::Aligned);
        assert_eq!(
            kinds(&outcome),
            vec![
                (Added, "x", 0),
                (Unchanged, "a", 1),
                (Unchanged, "b", 2),
                (Unchanged, "c", 3),
            ]
        );
    }

    #[test]
    fn entries_reconstruct_both_inputs() {
        let original = "one\ntwo\n\nfour";
        let modified = "one\n2\n\nfour\nfive";
        for mode in [DiffMode::Positional, DiffMode::Aligned] {
            let outcome = compute_diff(original, modified, mode);
            let old: Vec<&str> = outcome
                .entries()
                .iter()
                .filter(|e| e.line_type != Added)
                .map(|e| e.content.as_str())
                .collect();
            let new: Vec<&str> = outcome
                .entries()
                .iter()
                .filter(|e| e.line_type != Removed)
                .map(|e| e.content.as_str())
                .collect();
            assert_eq!(old.join("\n"), original, "{:?}", mode);
            assert_eq!(new.join("\n"), modified, "{:?}", mode);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let first = compute_line_diff("a\nb\nc", "a\nB\nc");
        let second = compute_line_diff("a\nb\nc", "a\nB\nc");
        assert_eq!(first, second);
    }

    #[test]
    fn rendering_prefixes_and_blank_rows() {
        let outcome = compute_line_diff("x\n\ny", "x\n\nz");
        let rows = render_rows(outcome.entries());
        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["x", BLANK_ROW, "- y", "+ z"]);
    }

    #[test]
    fn grouping_removed_added_pair() {
        let outcome = compute_line_diff("a\nold\nc", "a\nnew\nc");
        let rows = group_into_rows(outcome.entries());
        assert_eq!(rows.len(), 3);
        match &rows[1] {
            DiffRow::Pair(l, r) => {
                assert_eq!(l.len(), 1);
                assert_eq!(r.len(), 1);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn side_by_side_blank_lines_use_the_blank_row() {
        let outcome = compute_line_diff("a\n\nb", "a\n\nc");
        let rows = group_into_rows(outcome.entries());
        let unchanged: Vec<&str> = rows
            .iter()
            .filter_map(|row| match row {
                DiffRow::Unchanged(text) => Some(unchanged_row_text(text)),
                DiffRow::Pair(..) => None,
            })
            .collect();
        assert_eq!(unchanged, vec!["a", BLANK_ROW]);
        assert_eq!(unchanged_row_text(""), "\u{a0}");
    }

    #[test]
    fn grouping_added_without_removal() {
        let outcome = compute_line_diff("a", "a\nb\nc");
        let rows = group_into_rows(outcome.entries());
        assert_eq!(rows.len(), 2);
        match &rows[1] {
            DiffRow::Pair(l, r) => {
                assert!(l.is_empty());
                assert_eq!(r.len(), 2);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn summary_counts_lines_and_chars() {
        let outcome = compute_line_diff("hello cat\nsame", "hello dog\nsame");
        let summary = summarize(outcome.entries());
        assert_eq!(summary.unchanged_lines, 1);
        assert_eq!(summary.removed_lines, 1);
        assert_eq!(summary.added_lines, 1);
        assert_eq!(summary.removed_chars, 3);
        assert_eq!(summary.added_chars, 3);
    }

    #[test]
    fn summary_counts_cjk_chars() {
        let outcome = compute_line_diff("我爱你", "我不爱你");
        let summary = summarize(outcome.entries());
        assert_eq!(summary.added_chars, 1);
        assert_eq!(summary.removed_chars, 0);
    }
}
