use crate::tools::case::capitalize_first;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "semper", "quis", "lectus",
    "nulla", "at", "volutpat", "diam", "maecenas", "ultricies", "mi", "eget", "mauris",
    "pharetra", "magna", "ac", "placerat", "vestibulum", "lectus", "mauris", "ultrices", "eros",
    "integer", "vitae", "justo", "eget", "arcu", "dictum", "varius", "duis", "convallis",
    "tellus", "elementum", "sagittis",
];

const CLASSIC_WORDS: [&str; 5] = ["Lorem", "ipsum", "dolor", "sit", "amet"];
const CLASSIC_SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
const CLASSIC_PARAGRAPH: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoremKind {
    #[default]
    Paragraphs,
    Sentences,
    Words,
}

impl LoremKind {
    pub const ALL: [LoremKind; 3] = [LoremKind::Paragraphs, LoremKind::Sentences, LoremKind::Words];

    pub fn label(self) -> &'static str {
        match self {
            LoremKind::Paragraphs => "Paragraphs",
            LoremKind::Sentences => "Sentences",
            LoremKind::Words => "Words",
        }
    }
}

/// Placeholder text. With `start_with_lorem` the classic opening counts toward `count`.
pub fn generate<R: Rng + ?Sized>(
    kind: LoremKind,
    count: usize,
    start_with_lorem: bool,
    rng: &mut R,
) -> String {
    match kind {
        LoremKind::Paragraphs => paragraphs(count, start_with_lorem, rng),
        LoremKind::Sentences => sentences(count, start_with_lorem, rng),
        LoremKind::Words => words(count, start_with_lorem, rng),
    }
}

fn random_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    LOREM_WORDS.choose(rng).copied().unwrap_or("lorem")
}

fn sentence<R: Rng + ?Sized>(word_count: usize, rng: &mut R) -> String {
    let mut words: Vec<String> = (0..word_count)
        .map(|_| random_word(rng).to_string())
        .collect();
    if let Some(first) = words.first_mut() {
        *first = capitalize_first(first);
    }
    format!("{}.", words.join(" "))
}

fn words<R: Rng + ?Sized>(count: usize, start_with_lorem: bool, rng: &mut R) -> String {
    let mut words: Vec<&str> = Vec::with_capacity(count.max(CLASSIC_WORDS.len()));
    let mut remaining = count;

    if start_with_lorem {
        words.extend(CLASSIC_WORDS);
        remaining = remaining.saturating_sub(CLASSIC_WORDS.len());
    }
    words.extend((0..remaining).map(|_| random_word(rng)));

    if words.is_empty() {
        return String::new();
    }
    format!("{}.", words.join(" "))
}

fn sentences<R: Rng + ?Sized>(count: usize, start_with_lorem: bool, rng: &mut R) -> String {
    let mut sentences = Vec::with_capacity(count);
    let mut remaining = count;

    if start_with_lorem {
        sentences.push(CLASSIC_SENTENCE.to_string());
        remaining = remaining.saturating_sub(1);
    }
    for _ in 0..remaining {
        let word_count = rng.gen_range(5..15);
        sentences.push(sentence(word_count, rng));
    }

    sentences.join(" ")
}

fn paragraphs<R: Rng + ?Sized>(count: usize, start_with_lorem: bool, rng: &mut R) -> String {
    let mut paragraphs = Vec::with_capacity(count);
    let mut remaining = count;

    if start_with_lorem {
        paragraphs.push(CLASSIC_PARAGRAPH.to_string());
        remaining = remaining.saturating_sub(1);
    }
    for _ in 0..remaining {
        let sentence_count = rng.gen_range(3..7);
        let paragraph: Vec<String> = (0..sentence_count)
            .map(|_| {
                let word_count = rng.gen_range(6..18);
                sentence(word_count, rng)
            })
            .collect();
        paragraphs.push(paragraph.join(" "));
    }

    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::metrics::compute_metrics;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn words_with_classic_opening() {
        let text = generate(LoremKind::Words, 12, true, &mut rng());
        assert!(text.starts_with("Lorem ipsum dolor sit amet "));
        assert!(text.ends_with('.'));
        assert_eq!(compute_metrics(&text).words, 12);
    }

    #[test]
    fn short_word_count_still_gets_the_full_opening() {
        let text = generate(LoremKind::Words, 2, true, &mut rng());
        assert_eq!(text, "Lorem ipsum dolor sit amet.");
    }

    #[test]
    fn random_words_come_from_the_vocabulary() {
        let text = generate(LoremKind::Words, 40, false, &mut rng());
        let body = text.trim_end_matches('.');
        assert_eq!(body.split(' ').count(), 40);
        assert!(body.split(' ').all(|w| LOREM_WORDS.contains(&w)));
    }

    #[test]
    fn zero_words_is_empty() {
        assert_eq!(generate(LoremKind::Words, 0, false, &mut rng()), "");
        assert_eq!(generate(LoremKind::Sentences, 0, false, &mut rng()), "");
        assert_eq!(generate(LoremKind::Paragraphs, 0, false, &mut rng()), "");
    }

    #[test]
    fn sentences_are_capitalized_and_sized() {
        let text = generate(LoremKind::Sentences, 6, false, &mut rng());
        let sentences: Vec<&str> = text.split_inclusive('.').map(str::trim).collect();
        assert_eq!(sentences.len(), 6);
        for s in sentences {
            assert!(s.chars().next().unwrap().is_uppercase(), "{:?}", s);
            let words = s.split_whitespace().count();
            assert!((5..=14).contains(&words), "{} words in {:?}", words, s);
        }
    }

    #[test]
    fn sentences_start_with_classic_line() {
        let text = generate(LoremKind::Sentences, 3, true, &mut rng());
        assert!(text.starts_with(CLASSIC_SENTENCE));
    }

    #[test]
    fn paragraphs_are_separated_by_blank_lines() {
        let text = generate(LoremKind::Paragraphs, 4, true, &mut rng());
        assert!(text.starts_with(CLASSIC_PARAGRAPH));
        assert_eq!(text.split("\n\n").count(), 4);
        assert_eq!(compute_metrics(&text).paragraphs, 4);
    }

    #[test]
    fn same_seed_same_text() {
        let a = generate(LoremKind::Paragraphs, 3, false, &mut rng());
        let b = generate(LoremKind::Paragraphs, 3, false, &mut rng());
        assert_eq!(a, b);
    }
}
