use std::rc::Rc;

use crate::io::store::KvStore;
use crate::model::aesthetic::Filter;
use crate::model::board::Board;
use crate::model::pin::Pin;
use crate::ops::boards::{BoardStore, SaveOutcome, resolve_pins};
use crate::ops::catalog::PinCatalog;
use crate::ops::query::QueryCache;
use crate::ops::upload::UploadForm;

/// Everything a presentation layer needs: the catalog, the boards, the
/// current filter and query, and one hook per user action.
pub struct Session {
    catalog: PinCatalog,
    boards: BoardStore,
    filter: Filter,
    query: String,
    cache: QueryCache,
}

impl Session {
    /// Load both documents from `store` (each falls back independently).
    pub fn open(store: Rc<dyn KvStore>) -> Self {
        Session::new(PinCatalog::open(store.clone()), BoardStore::open(store))
    }

    pub fn new(catalog: PinCatalog, boards: BoardStore) -> Self {
        Session {
            catalog,
            boards,
            filter: Filter::All,
            query: String::new(),
            cache: QueryCache::new(),
        }
    }

    pub fn catalog(&self) -> &PinCatalog {
        &self.catalog
    }

    pub fn boards(&self) -> &BoardStore {
        &self.boards
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn on_filter_change(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn on_query_change(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn on_upload(&mut self, form: &UploadForm) -> &Pin {
        self.catalog.append(form)
    }

    pub fn on_create_board(&mut self, name: &str) -> Option<&Board> {
        self.boards.create_board(name)
    }

    pub fn on_toggle_save(&mut self, pin_id: &str, board_id: &str) -> Option<SaveOutcome> {
        self.boards.toggle_save(pin_id, board_id)
    }

    /// The filtered, searched view of the catalog for the current inputs
    pub fn visible(&mut self) -> Vec<&Pin> {
        self.cache.view(&self.catalog, self.filter, &self.query)
    }

    /// A board's pins, skipping ids the catalog no longer has
    pub fn board_pins(&self, board_id: &str) -> Option<Vec<&Pin>> {
        self.boards
            .get(board_id)
            .map(|b| resolve_pins(b, &self.catalog))
    }

    /// Boards holding `pin_id`
    pub fn boards_for_pin(&self, pin_id: &str) -> Vec<&Board> {
        self.boards.boards_containing(pin_id).collect()
    }

    /// Write both documents as they are now
    pub fn persist(&self) {
        self.catalog.persist();
        self.boards.persist();
    }
}
