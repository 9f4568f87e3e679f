//! multi-language unit labels

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// label entries keyed by language code (e.g. "en", "de")
///
/// a language may carry several entries; the first one is the preferred
/// label for that language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label {
    entries: BTreeMap<String, Vec<String>>,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    /// append a label entry for the given language
    pub fn add(&mut self, language: impl Into<String>, text: impl Into<String>) {
        self.entries
            .entry(language.into())
            .or_default()
            .push(text.into());
    }

    /// best label for a language: the preferred entry of that language
    /// if present, otherwise the first entry of any language
    pub fn best_match(&self, language: &str) -> Option<&str> {
        if let Some(texts) = self.entries.get(language) {
            if let Some(text) = texts.first() {
                return Some(text);
            }
        }
        self.entries
            .values()
            .flat_map(|texts| texts.first())
            .next()
            .map(String::as_str)
    }

    /// replace every occurrence of `old` with `new` across all languages
    pub fn replace(&mut self, old: &str, new: &str) {
        for texts in self.entries.values_mut() {
            for text in texts.iter_mut() {
                if text == old {
                    *text = new.to_string();
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}
