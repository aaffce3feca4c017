//! Self-contained text and data tools.
//!
//! Each tool takes plain values and returns plain results. Nothing in here
//! touches egui, the filesystem or the clock unless a caller passes one in.

pub mod case;
pub mod codec;
pub mod color;
pub mod diff;
pub mod json;
pub mod lorem;
pub mod markdown;
pub mod metrics;
pub mod password;
pub mod qr;
pub mod timestamp;
pub mod uuid_gen;

use serde::{Deserialize, Serialize};

/// Every tool the window can show, in navigation order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    CharacterCounter,
    DiffChecker,
    CaseConverter,
    MarkdownPreview,
    JsonFormatter,
    Base64,
    ColorPicker,
    UuidGenerator,
    TimestampConverter,
    PasswordHasher,
    LoremIpsum,
    QrCode,
}

impl ToolKind {
    pub const ALL: [ToolKind; 12] = [
        ToolKind::CharacterCounter,
        ToolKind::DiffChecker,
        ToolKind::CaseConverter,
        ToolKind::MarkdownPreview,
        ToolKind::JsonFormatter,
        ToolKind::Base64,
        ToolKind::ColorPicker,
        ToolKind::UuidGenerator,
        ToolKind::TimestampConverter,
        ToolKind::PasswordHasher,
        ToolKind::LoremIpsum,
        ToolKind::QrCode,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ToolKind::CharacterCounter => "Character Counter",
            ToolKind::DiffChecker => "Diff Checker",
            ToolKind::CaseConverter => "Case Converter",
            ToolKind::MarkdownPreview => "Markdown Preview",
            ToolKind::JsonFormatter => "JSON Formatter",
            ToolKind::Base64 => "Base64 Encoder",
            ToolKind::ColorPicker => "Color Picker",
            ToolKind::UuidGenerator => "UUID Generator",
            ToolKind::TimestampConverter => "Timestamp Converter",
            ToolKind::PasswordHasher => "Bcrypt Hasher",
            ToolKind::LoremIpsum => "Lorem Ipsum",
            ToolKind::QrCode => "QR Code",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::CharacterCounter => "🔢",
            ToolKind::DiffChecker => "⇄",
            ToolKind::CaseConverter => "Aa",
            ToolKind::MarkdownPreview => "M↓",
            ToolKind::JsonFormatter => "{}",
            ToolKind::Base64 => "64",
            ToolKind::ColorPicker => "🎨",
            ToolKind::UuidGenerator => "🆔",
            ToolKind::TimestampConverter => "🕑",
            ToolKind::PasswordHasher => "🔒",
            ToolKind::LoremIpsum => "¶",
            ToolKind::QrCode => "▦",
        }
    }
}
