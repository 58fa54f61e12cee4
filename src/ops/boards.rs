use std::collections::HashSet;
use std::rc::Rc;

use crate::io::repository::{BOARDS_KEY, Repository, SchemaError};
use crate::io::store::KvStore;
use crate::model::board::Board;
use crate::model::pin::Pin;
use crate::model::seed::seed_boards;
use crate::ops::catalog::PinCatalog;
use crate::ops::ids::next_id;

/// What a toggle did to a board's membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Removed,
}

/// The ordered board collection.
///
/// Boards are created and their membership toggled; nothing is deleted.
/// Every mutation is written back through the repository.
pub struct BoardStore {
    boards: Vec<Board>,
    repo: Repository<Vec<Board>>,
}

/// Repository for the `boards_v1` document, falling back to one empty
/// "Favorites" board
pub fn board_repository(store: Rc<dyn KvStore>) -> Repository<Vec<Board>> {
    Repository::new(store, BOARDS_KEY, seed_boards).with_check(check_boards)
}

#[allow(clippy::ptr_arg)]
fn check_boards(boards: &Vec<Board>) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for board in boards {
        if !seen.insert(board.id.as_str()) {
            return Err(SchemaError::DuplicateId(board.id.clone()));
        }
        if board.name.trim().is_empty() {
            return Err(SchemaError::BlankBoardName(board.id.clone()));
        }
    }
    Ok(())
}

impl BoardStore {
    pub fn initialize(repo: Repository<Vec<Board>>) -> Self {
        let boards = repo.load();
        BoardStore { boards, repo }
    }

    pub fn open(store: Rc<dyn KvStore>) -> Self {
        Self::initialize(board_repository(store))
    }

    /// Append a new empty board. Blank names are rejected (returns `None`,
    /// nothing changes). Names need not be unique.
    pub fn create_board(&mut self, name: &str) -> Option<&Board> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = next_id("b", self.boards.iter().map(|b| b.id.as_str()));
        self.boards.push(Board::new(id, name.to_string()));
        self.repo.save(&self.boards);
        self.boards.last()
    }

    /// Add `pin_id` to the board if absent, remove it if present.
    /// Unknown boards are ignored (`None`).
    pub fn toggle_save(&mut self, pin_id: &str, board_id: &str) -> Option<SaveOutcome> {
        let board = self.boards.iter_mut().find(|b| b.id == board_id)?;
        let outcome = if board.pins.shift_remove(pin_id) {
            SaveOutcome::Removed
        } else {
            board.pins.insert(pin_id.to_string());
            SaveOutcome::Saved
        };
        self.repo.save(&self.boards);
        Some(outcome)
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn get(&self, board_id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Boards whose membership includes `pin_id`
    pub fn boards_containing<'a>(&'a self, pin_id: &str) -> impl Iterator<Item = &'a Board> {
        self.boards.iter().filter(move |b| b.contains(pin_id))
    }

    pub fn persist(&self) {
        self.repo.save(&self.boards);
    }
}

/// The board's pins in membership order. Ids missing from the catalog are
/// skipped rather than reported.
pub fn resolve_pins<'a>(board: &Board, catalog: &'a PinCatalog) -> Vec<&'a Pin> {
    board.pins.iter().filter_map(|id| catalog.get(id)).collect()
}
