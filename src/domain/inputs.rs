//! Input declarations and collected values

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Values collected from the user, keyed by input key.
pub type Inputs = BTreeMap<String, String>;

/// Input prompts in declaration order.
///
/// Declaring a key a second time replaces its prompt text but keeps the
/// position of the first declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPrompts {
    entries: Vec<(String, String)>,
}

impl InputPrompts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, key: impl Into<String>, prompt: impl Into<String>) {
        let key = key.into();
        let prompt = prompt.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = prompt,
            None => self.entries.push((key, prompt)),
        }
    }

    /// Iterate `(key, prompt)` pairs in prompting order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Comparison policy for prompt-table answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// Normalize an answer for storage and lookup alike.
    pub fn normalize<'a>(&self, answer: &'a str) -> Cow<'a, str> {
        match self {
            CaseSensitivity::Sensitive => Cow::Borrowed(answer),
            CaseSensitivity::Insensitive => Cow::Owned(answer.to_lowercase()),
        }
    }

    pub fn matches(&self, stored: &str, answer: &str) -> bool {
        self.normalize(stored) == self.normalize(answer)
    }
}
