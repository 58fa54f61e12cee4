use std::collections::HashSet;
use std::rc::Rc;

use crate::io::repository::{PINS_KEY, Repository, SchemaError};
use crate::io::store::KvStore;
use crate::model::pin::Pin;
use crate::model::seed::seed_pins;
use crate::ops::ids::next_id;
use crate::ops::upload::{UploadForm, normalize};

/// The ordered pin collection, newest first.
///
/// Pins are only ever added. Every append is written back through the
/// repository; a failed write leaves the in-memory catalog authoritative.
pub struct PinCatalog {
    pins: Vec<Pin>,
    revision: u64,
    repo: Repository<Vec<Pin>>,
}

/// Repository for the `pins_v1` document, falling back to the seed catalog
pub fn pin_repository(store: Rc<dyn KvStore>) -> Repository<Vec<Pin>> {
    Repository::new(store, PINS_KEY, seed_pins).with_check(check_pins)
}

#[allow(clippy::ptr_arg)]
fn check_pins(pins: &Vec<Pin>) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for pin in pins {
        if !seen.insert(pin.id.as_str()) {
            return Err(SchemaError::DuplicateId(pin.id.clone()));
        }
    }
    Ok(())
}

impl PinCatalog {
    /// Load persisted pins, or the seed set if there are none usable.
    pub fn initialize(repo: Repository<Vec<Pin>>) -> Self {
        let pins = repo.load();
        PinCatalog {
            pins,
            revision: 0,
            repo,
        }
    }

    pub fn open(store: Rc<dyn KvStore>) -> Self {
        Self::initialize(pin_repository(store))
    }

    /// Normalize the form, give it a fresh id and put it at the front.
    pub fn append(&mut self, form: &UploadForm) -> &Pin {
        let id = next_id("p", self.pins.iter().map(|p| p.id.as_str()));
        let pin = normalize(form).into_pin(id);
        self.pins.insert(0, pin);
        self.revision += 1;
        self.repo.save(&self.pins);
        &self.pins[0]
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn get(&self, id: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Bumped on every mutation; used to key cached query results
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Write the whole catalog, e.g. to materialize the seed on init
    pub fn persist(&self) {
        self.repo.save(&self.pins);
    }
}
