//! Locale Direction
//!
//! Text direction derived from a BCP 47 language tag.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCALE: &str = "en-US";

// Scripts and languages written right to left
const RTL_SCRIPTS: &[&str] = &[
    "arab", "syrc", "samr", "mand", "thaa", "mend", "nkoo", "adlm", "rohg", "hebr",
];
const RTL_LANGS: &[&str] = &[
    "ae", "ar", "arc", "bcc", "bqi", "ckb", "dv", "fa", "glk", "he", "ku", "mzn", "nqo", "pnb",
    "ps", "sd", "ug", "ur", "yi",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Direction for a language tag such as `ar-EG` or `az-Arab-IR`.
///
/// An explicit script subtag wins over the language.
pub fn direction_for_locale(locale: &str) -> Direction {
    let mut parts = locale.split(['-', '_']);
    let lang = parts.next().unwrap_or_default().to_ascii_lowercase();

    if let Some(script) = parts.find(|part| part.len() == 4 && part.chars().all(char::is_alphabetic)) {
        let script = script.to_ascii_lowercase();
        return if RTL_SCRIPTS.contains(&script.as_str()) {
            Direction::Rtl
        } else {
            Direction::Ltr
        };
    }

    if RTL_LANGS.contains(&lang.as_str()) {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}
