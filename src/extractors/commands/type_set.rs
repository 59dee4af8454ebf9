use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Simple type names treated as Command markers.
///
/// Membership is exact and case-sensitive; no subtype or qualified-name
/// awareness. Built once per analysis run and shared by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTypeSet {
    names: BTreeSet<String>,
}

impl CommandTypeSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, simple_name: &str) -> bool {
        self.names.contains(simple_name)
    }

    pub fn contains_any<I, S>(&self, simple_names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        simple_names.into_iter().any(|name| self.contains(name.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CommandTypeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
