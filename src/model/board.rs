use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A named collection of saved pin ids.
///
/// `pins` keeps insertion order for display; it is serialized as a plain
/// array of id strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pins: IndexSet<String>,
}

impl Board {
    pub fn new(id: String, name: String) -> Self {
        Board {
            id,
            name,
            pins: IndexSet::new(),
        }
    }

    pub fn contains(&self, pin_id: &str) -> bool {
        self.pins.contains(pin_id)
    }
}
