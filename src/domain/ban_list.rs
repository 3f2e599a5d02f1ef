use serde::{Deserialize, Serialize};

/// Attribute values the user does not want to see, in the order they were banned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BanList {
    values: Vec<String>,
}

impl BanList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` unless it is already present. Returns whether the list changed.
    pub fn ban(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Removes every occurrence of `value`. Returns whether the list changed.
    pub fn unban(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|item| item != value);
        self.values.len() != before
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|item| item == value)
    }

    /// The banned values among `attributes`, in the order given.
    pub fn matches<'a>(&self, attributes: &[&'a str]) -> Vec<&'a str> {
        attributes
            .iter()
            .copied()
            .filter(|attribute| self.contains(attribute))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for BanList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = BanList::new();
        for value in iter {
            list.ban(value);
        }
        list
    }
}
