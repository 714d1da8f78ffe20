//! Atom dictionary
//!
//! Maps atom labels (`A`..`Z`, then synthetic `P27`, `P28`, ...) to natural-language phrases.
//! Entries keep insertion order and labels are unique. The dictionary belongs to the caller:
//! printers and the translator only borrow it for the duration of one call.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Label for the `index`-th extracted clause: a letter while the alphabet lasts, `P<n>` after
pub fn label_for_index(index: usize) -> String {
    match LETTERS.chars().nth(index) {
        Some(letter) => letter.to_string(),
        None => format!("P{}", index + 1),
    }
}

/// Ordered label → phrase mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, phrase)| phrase.as_str())
    }

    /// Phrase to show for `label`; blank entries count as missing
    pub fn phrase(&self, label: &str) -> Option<&str> {
        self.get(label).filter(|phrase| !phrase.trim().is_empty())
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Set the phrase for `label`, keeping its position if it already exists
    pub fn insert(&mut self, label: impl Into<String>, phrase: impl Into<String>) {
        let label = label.into();
        let phrase = phrase.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = phrase,
            None => self.entries.push((label, phrase)),
        }
    }

    pub fn remove(&mut self, label: &str) -> Option<String> {
        let index = self.entries.iter().position(|(l, _)| l == label)?;
        Some(self.entries.remove(index).1)
    }

    /// First letter of the alphabet with no entry yet
    pub fn next_free_letter(&self) -> Option<char> {
        LETTERS.chars().find(|letter| {
            let mut buf = [0u8; 4];
            !self.contains_label(letter.encode_utf8(&mut buf))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, p)| (l.as_str(), p.as_str()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for (label, phrase) in iter {
            dictionary.insert(label, phrase);
        }
        dictionary
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, phrase) in self.iter() {
            writeln!(f, "{}: {}", label, phrase)?;
        }
        Ok(())
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, phrase) in &self.entries {
            map.serialize_entry(label, phrase)?;
        }
        map.end()
    }
}

struct DictionaryVisitor;

impl<'de> Visitor<'de> for DictionaryVisitor {
    type Value = Dictionary;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from atom labels to phrases")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Dictionary, M::Error> {
        let mut dictionary = Dictionary::new();
        while let Some((label, phrase)) = access.next_entry::<String, String>()? {
            dictionary.insert(label, phrase);
        }
        Ok(dictionary)
    }
}

impl<'de> Deserialize<'de> for Dictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DictionaryVisitor)
    }
}
