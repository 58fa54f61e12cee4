use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::io::store::{KvStore, StoreError};

/// Storage key of the pin catalog document
pub const PINS_KEY: &str = "pins_v1";
/// Storage key of the board store document
pub const BOARDS_KEY: &str = "boards_v1";

/// A document that parsed but breaks an invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate id '{0}'")]
    DuplicateId(String),
    #[error("board '{0}' has a blank name")]
    BlankBoardName(String),
}

/// One keyed JSON document in a [`KvStore`].
///
/// `load` never fails: an absent, unreadable or invalid document yields the
/// fallback value. `save` is best effort: failures go to the recovery log
/// (with the document that could not be written) and are not returned.
pub struct Repository<T> {
    store: Rc<dyn KvStore>,
    key: &'static str,
    fallback: fn() -> T,
    check: fn(&T) -> Result<(), SchemaError>,
}

impl<T: Serialize + DeserializeOwned> Repository<T> {
    pub fn new(store: Rc<dyn KvStore>, key: &'static str, fallback: fn() -> T) -> Self {
        Repository {
            store,
            key,
            fallback,
            check: |_| Ok(()),
        }
    }

    /// Reject parsed documents that fail `check`
    pub fn with_check(mut self, check: fn(&T) -> Result<(), SchemaError>) -> Self {
        self.check = check;
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn load(&self) -> T {
        let bytes = match self.store.get(self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return (self.fallback)(),
            Err(e) => {
                eprintln!("warning: could not read {}: {}", self.key, e);
                return (self.fallback)();
            }
        };

        let problem = match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => match (self.check)(&value) {
                Ok(()) => return value,
                Err(e) => e.to_string(),
            },
            Err(e) => e.to_string(),
        };

        self.report(
            RecoveryEntry::new(RecoveryCategory::Parser, "unreadable document replaced by default")
                .field("Key", self.key)
                .field("Error", problem)
                .body(String::from_utf8_lossy(&bytes)),
        );
        (self.fallback)()
    }

    pub fn save(&self, value: &T) {
        let bytes = match serde_json::to_vec_pretty(value) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("warning: could not serialize {}: {}", self.key, e);
                return;
            }
        };
        if let Err(e) = self.store.set(self.key, &bytes) {
            self.report_write_failure(&e, &bytes);
        }
    }

    fn report_write_failure(&self, error: &StoreError, bytes: &[u8]) {
        eprintln!("warning: could not save {}: {}", self.key, error);
        self.report(
            RecoveryEntry::new(RecoveryCategory::Write, "save failed")
                .field("Key", self.key)
                .field("Error", error.to_string())
                .body(String::from_utf8_lossy(bytes)),
        );
    }

    fn report(&self, entry: RecoveryEntry) {
        match self.store.recovery_dir() {
            Some(dir) => log_recovery(dir, entry),
            None => eprintln!(
                "warning: {} ({}): {}",
                entry.description,
                self.key,
                entry
                    .fields
                    .iter()
                    .find(|(k, _)| k == "Error")
                    .map(|(_, v)| v.as_str())
                    .unwrap_or("unknown error")
            ),
        }
    }
}
