use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::aesthetic::Aesthetic;

/// Where an image came from and who made it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    #[serde(default = "default_unknown")]
    pub author: String,
    #[serde(default = "default_unknown")]
    pub origin: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Attribution {
            author: default_unknown(),
            origin: default_unknown(),
        }
    }
}

fn default_unknown() -> String {
    "Unknown".to_string()
}

/// Non-empty, insertion-ordered set of aesthetics.
///
/// Persisted as a JSON array; an empty array fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Aesthetic>", into = "Vec<Aesthetic>")]
pub struct Aesthetics(IndexSet<Aesthetic>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a pin needs at least one aesthetic")]
pub struct EmptyAesthetics;

impl Aesthetics {
    pub fn single(a: Aesthetic) -> Self {
        let mut set = IndexSet::new();
        set.insert(a);
        Aesthetics(set)
    }

    pub fn contains(&self, a: Aesthetic) -> bool {
        self.0.contains(&a)
    }

    pub fn iter(&self) -> impl Iterator<Item = Aesthetic> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined keys, e.g. `earthy-goddess, black-girl`
    pub fn joined(&self) -> String {
        self.iter().map(Aesthetic::key).collect::<Vec<_>>().join(", ")
    }
}

impl Default for Aesthetics {
    fn default() -> Self {
        Aesthetics::single(Aesthetic::default())
    }
}

impl TryFrom<Vec<Aesthetic>> for Aesthetics {
    type Error = EmptyAesthetics;

    fn try_from(v: Vec<Aesthetic>) -> Result<Self, Self::Error> {
        let set: IndexSet<Aesthetic> = v.into_iter().collect();
        if set.is_empty() {
            Err(EmptyAesthetics)
        } else {
            Ok(Aesthetics(set))
        }
    }
}

impl From<Aesthetics> for Vec<Aesthetic> {
    fn from(a: Aesthetics) -> Self {
        a.0.into_iter().collect()
    }
}

/// One image entry in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub id: String,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub aesthetics: Aesthetics,
    #[serde(default)]
    pub attribution: Attribution,
}

impl Pin {
    pub fn has_aesthetic(&self, a: Aesthetic) -> bool {
        self.aesthetics.contains(a)
    }
}
