use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("valid word start pattern"));
static SENTENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^\s*\w|[.!?]\s*\w)").expect("valid sentence pattern"));
static SEPARATOR_THEN_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+(.)").expect("valid separator pattern"));
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid separator run pattern"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CaseError {
    #[error("Unknown case conversion: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseKind {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl CaseKind {
    pub const ALL: [CaseKind; 8] = [
        CaseKind::Upper,
        CaseKind::Lower,
        CaseKind::Title,
        CaseKind::Sentence,
        CaseKind::Camel,
        CaseKind::Pascal,
        CaseKind::Snake,
        CaseKind::Kebab,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CaseKind::Upper => "UPPER CASE",
            CaseKind::Lower => "lower case",
            CaseKind::Title => "Title Case",
            CaseKind::Sentence => "Sentence case",
            CaseKind::Camel => "camelCase",
            CaseKind::Pascal => "PascalCase",
            CaseKind::Snake => "snake_case",
            CaseKind::Kebab => "kebab-case",
        }
    }

    fn name(self) -> &'static str {
        match self {
            CaseKind::Upper => "upper",
            CaseKind::Lower => "lower",
            CaseKind::Title => "title",
            CaseKind::Sentence => "sentence",
            CaseKind::Camel => "camel",
            CaseKind::Pascal => "pascal",
            CaseKind::Snake => "snake",
            CaseKind::Kebab => "kebab",
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseKind {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CaseKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| CaseError::Unknown(s.to_string()))
    }
}

pub fn convert_case(text: &str, kind: CaseKind) -> String {
    if text.is_empty() {
        return String::new();
    }

    match kind {
        CaseKind::Upper => text.to_uppercase(),
        CaseKind::Lower => text.to_lowercase(),
        CaseKind::Title => uppercase_matches(&WORD_START, &text.to_lowercase()),
        CaseKind::Sentence => uppercase_matches(&SENTENCE_START, &text.to_lowercase()),
        CaseKind::Camel => camel(text),
        CaseKind::Pascal => capitalize_first(&camel(text)),
        CaseKind::Snake => separated(text, '_'),
        CaseKind::Kebab => separated(text, '-'),
    }
}

fn uppercase_matches(pattern: &Regex, text: &str) -> String {
    pattern
        .replace_all(text, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

fn camel(text: &str) -> String {
    SEPARATOR_THEN_CHAR
        .replace_all(&text.to_lowercase(), |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn separated(text: &str, separator: char) -> String {
    let lowered = text.to_lowercase();
    let mut buf = [0u8; 4];
    let replacement: &str = separator.encode_utf8(&mut buf);
    SEPARATOR_RUN
        .replace_all(&lowered, replacement)
        .trim_matches(separator)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_and_lower() {
        assert_eq!(convert_case("Hello World", CaseKind::Upper), "HELLO WORLD");
        assert_eq!(convert_case("Hello World", CaseKind::Lower), "hello world");
        assert_eq!(convert_case("straße", CaseKind::Upper), "STRASSE");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(
            convert_case("the QUICK brown-fox", CaseKind::Title),
            "The Quick Brown-Fox"
        );
    }

    #[test]
    fn sentence_case_capitalizes_after_terminators() {
        assert_eq!(
            convert_case("  hello THERE. how are you? fine!  ok", CaseKind::Sentence),
            "  Hello there. How are you? Fine!  Ok"
        );
    }

    #[test]
    fn camel_and_pascal() {
        assert_eq!(convert_case("Hello big World", CaseKind::Camel), "helloBigWorld");
        assert_eq!(convert_case("user_id-value", CaseKind::Camel), "userIdValue");
        assert_eq!(convert_case("hello big world", CaseKind::Pascal), "HelloBigWorld");
    }

    #[test]
    fn camel_keeps_trailing_separators() {
        // a separator run needs a following character to be folded away
        assert_eq!(convert_case("hello world ", CaseKind::Camel), "helloWorld ");
    }

    #[test]
    fn snake_and_kebab_trim_separators() {
        assert_eq!(convert_case("  Hello, World!  ", CaseKind::Snake), "hello_world");
        assert_eq!(convert_case("--Hello   World--", CaseKind::Kebab), "hello-world");
        assert_eq!(convert_case("already_snake", CaseKind::Kebab), "already-snake");
    }

    #[test]
    fn empty_input_is_untouched() {
        for kind in CaseKind::ALL {
            assert_eq!(convert_case("", kind), "");
        }
    }

    #[test]
    fn parse_known_and_unknown_names() {
        assert_eq!("Snake".parse::<CaseKind>(), Ok(CaseKind::Snake));
        assert_eq!(" kebab ".parse::<CaseKind>(), Ok(CaseKind::Kebab));
        assert_eq!(
            "shouty".parse::<CaseKind>(),
            Err(CaseError::Unknown("shouty".to_string()))
        );
        for kind in CaseKind::ALL {
            assert_eq!(kind.to_string().parse::<CaseKind>(), Ok(kind));
        }
    }
}
