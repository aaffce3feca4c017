use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_BATCH_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidFormat {
    #[serde(default)]
    pub uppercase: bool,
    #[serde(default = "default_hyphens")]
    pub hyphens: bool,
}

fn default_hyphens() -> bool {
    true
}

impl Default for UuidFormat {
    fn default() -> Self {
        Self {
            uppercase: false,
            hyphens: true,
        }
    }
}

impl UuidFormat {
    pub fn apply(self, uuid: &Uuid) -> String {
        let text = if self.hyphens {
            uuid.hyphenated().to_string()
        } else {
            uuid.simple().to_string()
        };

        if self.uppercase {
            text.to_uppercase()
        } else {
            text
        }
    }
}

/// Random (version 4) UUID.
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

pub fn generate_batch(count: usize, format: UuidFormat) -> Vec<String> {
    (0..count).map(|_| format.apply(&generate())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_uuids_are_version_4() {
        let uuid = generate();
        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn default_format_is_lowercase_hyphenated() {
        let text = UuidFormat::default().apply(&generate());
        assert_eq!(text.len(), 36);
        assert_eq!(text.chars().nth(14), Some('4'));
        assert_eq!(text, text.to_lowercase());
    }

    #[test]
    fn compact_uppercase_format() {
        let uuid = Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8);
        let format = UuidFormat {
            uppercase: true,
            hyphens: false,
        };
        assert_eq!(format.apply(&uuid), "67E5504410B1426F9247BB680E5FE0C8");
    }

    #[test]
    fn batch_is_unique() {
        let batch = generate_batch(DEFAULT_BATCH_SIZE, UuidFormat::default());
        assert_eq!(batch.len(), DEFAULT_BATCH_SIZE);
        let unique: HashSet<_> = batch.iter().collect();
        assert_eq!(unique.len(), DEFAULT_BATCH_SIZE);
    }
}
