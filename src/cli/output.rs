use serde::Serialize;

use crate::io::recovery::RecoveryEntry;
use crate::model::aesthetic::Filter;
use crate::model::board::Board;
use crate::model::config::DisplayConfig;
use crate::model::pin::Pin;
use crate::util::unicode::{display_width, fit_to_width, single_line};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct PinListJson<'a> {
    pub filter: &'static str,
    pub query: &'a str,
    pub pins: Vec<&'a Pin>,
}

#[derive(Serialize)]
pub struct PinDetailJson<'a> {
    #[serde(flatten)]
    pub pin: &'a Pin,
    pub boards: Vec<BoardMembershipJson<'a>>,
}

#[derive(Serialize)]
pub struct BoardMembershipJson<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub saved: bool,
}

#[derive(Serialize)]
pub struct BoardJson<'a> {
    pub id: &'a str,
    pub name: &'a str,
    /// Every stored id, including ones the catalog no longer has
    pub pin_ids: Vec<&'a str>,
    pub pins: Vec<PinSummaryJson<'a>>,
}

#[derive(Serialize)]
pub struct PinSummaryJson<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub image: &'a str,
}

#[derive(Serialize)]
pub struct SaveJson<'a> {
    pub pin: &'a str,
    pub board: &'a str,
    pub saved: bool,
}

#[derive(Serialize)]
pub struct FilterOptionJson {
    pub key: &'static str,
    pub label: &'static str,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn board_to_json<'a>(board: &'a Board, pins: &[&'a Pin]) -> BoardJson<'a> {
    BoardJson {
        id: &board.id,
        name: &board.name,
        pin_ids: board.pins.iter().map(String::as_str).collect(),
        pins: pins.iter().map(|p| pin_summary(p)).collect(),
    }
}

pub fn pin_summary(pin: &Pin) -> PinSummaryJson<'_> {
    PinSummaryJson {
        id: &pin.id,
        title: &pin.title,
        image: &pin.image,
    }
}

pub fn recovery_to_json(entries: &[RecoveryEntry]) -> serde_json::Value {
    serde_json::Value::Array(entries.iter().map(RecoveryEntry::to_json).collect())
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// First `limit` tags joined with ` · `
pub fn tag_preview(tags: &[String], limit: usize) -> String {
    tags.iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" \u{b7} ")
}

/// One listing row: id, title, tag preview
pub fn format_pin_row(pin: &Pin, id_width: usize, display: &DisplayConfig) -> String {
    let row = format!(
        "{}  {}  {}",
        fit_to_width(&pin.id, id_width),
        fit_to_width(&single_line(&pin.title), display.title_width),
        tag_preview(&pin.tags, display.tag_limit),
    );
    row.trim_end().to_string()
}

/// All rows for a pin listing, ids aligned
pub fn format_pin_listing(pins: &[&Pin], display: &DisplayConfig) -> Vec<String> {
    let id_width = pins.iter().map(|p| display_width(&p.id)).max().unwrap_or(0);
    pins.iter()
        .map(|p| format_pin_row(p, id_width, display))
        .collect()
}

/// Header line for a listing: what was asked and how much matched
pub fn format_listing_header(filter: Filter, query: &str, shown: usize, total: usize) -> String {
    let mut out = format!("{} of {} pins", shown, total);
    if filter != Filter::All {
        out.push_str(&format!(" \u{b7} {}", filter.label()));
    }
    let q = query.trim();
    if !q.is_empty() {
        out.push_str(&format!(" \u{b7} \"{}\"", q));
    }
    out
}

/// The pin detail view, ending with one save marker per board
pub fn format_pin_detail(pin: &Pin, boards: &[Board]) -> Vec<String> {
    let mut lines = vec![
        single_line(&pin.title),
        format!("id: {}", pin.id),
        format!("image: {}", pin.image),
    ];
    if !pin.tags.is_empty() {
        lines.push(format!("tags: {}", tag_preview(&pin.tags, usize::MAX)));
    }
    lines.push(format!("aesthetics: {}", pin.aesthetics.joined()));
    lines.push(format!(
        "by: {} ({})",
        pin.attribution.author, pin.attribution.origin
    ));

    if !boards.is_empty() {
        lines.push(String::new());
        lines.push("Save to board:".to_string());
        let id_width = boards.iter().map(|b| display_width(&b.id)).max().unwrap_or(0);
        for board in boards {
            let mark = if board.contains(&pin.id) { 'x' } else { ' ' };
            lines.push(format!(
                "  [{}] {}  {}",
                mark,
                fit_to_width(&board.id, id_width),
                board.name
            ));
        }
    }
    lines
}

/// Board heading followed by its resolved pins
pub fn format_board(board: &Board, pins: &[&Pin], display: &DisplayConfig) -> Vec<String> {
    let count = pins.len();
    let mut lines = vec![format!(
        "{} ({}) \u{b7} {} {}",
        board.name,
        board.id,
        count,
        if count == 1 { "pin" } else { "pins" }
    )];
    for row in format_pin_listing(pins, display) {
        lines.push(format!("  {}", row));
    }
    lines
}

pub fn format_filter_options() -> Vec<String> {
    let key_width = Filter::options()
        .map(|f| f.key().len())
        .max()
        .unwrap_or(0);
    Filter::options()
        .map(|f| format!("{:<width$}  {}", f.key(), f.label(), width = key_width))
        .collect()
}
