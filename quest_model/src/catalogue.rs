//! Catalogue - an insertion-ordered, name-keyed collection.
//!
//! Decks and mini-games are both identified by name. Reports must list them in
//! document order, so lookups go through a name index while iteration follows the
//! order entries were added (or appeared in the JSON object).

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue<T> {
    entries: Vec<(String, T)>,

    /// Index: name -> position in `entries`.
    index: HashMap<String, usize>,
}

impl<T> Default for Catalogue<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Catalogue<T> {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    ///
    /// A replaced entry keeps its original position; the previous value is returned.
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        let name = name.into();
        if let Some(&pos) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, value));
        None
    }

    /// Get an entry by name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    /// Get a mutable entry by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        match self.index.get(name) {
            Some(&pos) => Some(&mut self.entries[pos].1),
            None => None,
        }
    }

    /// Check if an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate `(name, value)` pairs in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate names in catalogue order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate values in catalogue order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T, N: Into<String>> FromIterator<(N, T)> for Catalogue<T> {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut catalogue = Catalogue::new();
        for (name, value) in iter {
            catalogue.insert(name, value);
        }
        catalogue
    }
}

impl<T: Serialize> Serialize for Catalogue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct CatalogueVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for CatalogueVisitor<T> {
    type Value = Catalogue<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of uniquely named entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut catalogue = Catalogue::new();
        while let Some((name, value)) = access.next_entry::<String, T>()? {
            if catalogue.contains(&name) {
                return Err(serde::de::Error::custom(format!("duplicate name `{name}`")));
            }
            catalogue.insert(name, value);
        }
        Ok(catalogue)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Catalogue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogueVisitor(PhantomData))
    }
}
